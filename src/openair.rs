//! OpenAIR records and the builder that turns typed instructions into lines.

use std::fmt;

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::geo::LatLon;

const BANNER_RULE: &str = "***************************************************************";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AirspaceClass {
    Restricted,
    Danger,
    Prohibited,
    ClassA,
    ClassB,
    ClassC,
    ClassD,
    ClassE,
    GliderProhibited,
    Ctr,
    WaveWindow,
}

impl From<AirspaceClass> for &str {
    fn from(x: AirspaceClass) -> &'static str {
        match x {
            AirspaceClass::Restricted => "R",
            AirspaceClass::Danger => "Q",
            AirspaceClass::Prohibited => "P",
            AirspaceClass::ClassA => "A",
            AirspaceClass::ClassB => "B",
            AirspaceClass::ClassC => "C",
            AirspaceClass::ClassD => "D",
            AirspaceClass::ClassE => "E",
            AirspaceClass::GliderProhibited => "GP",
            AirspaceClass::Ctr => "CTR",
            AirspaceClass::WaveWindow => "W",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Floor {
    Feet(u32),
    Surface,
}

/// Arc direction for following DA and DB records.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Variable {
    /// `X=`, the center used by DA, DB and DC.
    Center(LatLon),
    /// `D=`, reset to clockwise at the start of every airspace.
    Direction(Direction),
    /// `W=`, airway width in nm.
    Width(f64),
    /// `Z=`, zoom level at which the element becomes visible.
    Zoom(f64),
}

/// Everything a caller can ask the builder to emit.
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    Class(AirspaceClass),
    Name(String),
    /// Feet.
    Ceiling(u32),
    Floor(Floor),
    /// Where a map should place the name label.
    Label(LatLon),
    Point(LatLon),
    /// Radius in nm, angles in degrees about the current center.
    Arc { radius: f64, start: f64, end: f64 },
    /// Arc between two points about the current center.
    ArcBetween(LatLon, LatLon),
    /// Full circle of the given radius (nm) about the current center.
    Circle(f64),
    AirwaySegment(LatLon),
    Var(Variable),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Code {
    AC,
    AN,
    AH,
    AL,
    AT,
    DP,
    DA,
    DB,
    DC,
    DY,
    V,
}

impl From<Code> for &str {
    fn from(x: Code) -> &'static str {
        match x {
            Code::AC => "AC",
            Code::AN => "AN",
            Code::AH => "AH",
            Code::AL => "AL",
            Code::AT => "AT",
            Code::DP => "DP",
            Code::DA => "DA",
            Code::DB => "DB",
            Code::DC => "DC",
            Code::DY => "DY",
            Code::V => "V",
        }
    }
}

/// One built instruction, ready to be written as a single line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    pub code: Code,
    pub payload: String,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", Into::<&str>::into(self.code), self.payload)
    }
}

fn check_angle(angle: f64) -> bool {
    (0.0..=360.0).contains(&angle)
}

pub fn build_instruction(instruction: &Instruction) -> Result<Record> {
    let (code, payload) = match instruction {
        Instruction::Class(class) => (Code::AC, Into::<&str>::into(*class).to_owned()),
        Instruction::Name(name) => (Code::AN, name.to_uppercase()),
        Instruction::Ceiling(feet) => (Code::AH, format!("{} ft", feet)),
        Instruction::Floor(Floor::Feet(feet)) => (Code::AL, format!("{} ft", feet)),
        Instruction::Floor(Floor::Surface) => (Code::AL, "SFC".to_owned()),
        Instruction::Label(p) => (Code::AT, p.to_openair()),
        Instruction::Point(p) => (Code::DP, p.to_openair()),
        Instruction::AirwaySegment(p) => (Code::DY, p.to_openair()),
        Instruction::Circle(radius) => (Code::DC, radius.to_string()),
        Instruction::Arc { radius, start, end } => {
            if !check_angle(*start) || !check_angle(*end) {
                return Err(Error::InvalidAngleRange {
                    start: *start,
                    end: *end,
                });
            }
            (Code::DA, format!("{}, {:.6}, {:.6}", radius, start, end))
        }
        Instruction::ArcBetween(a, b) => {
            (Code::DB, format!("{}, {}", a.to_openair(), b.to_openair()))
        }
        Instruction::Var(var) => {
            let assignment = match var {
                Variable::Center(p) => format!("X={}", p.to_openair()),
                Variable::Direction(Direction::Clockwise) => "D=+".to_owned(),
                Variable::Direction(Direction::CounterClockwise) => "D=-".to_owned(),
                Variable::Width(nm) => format!("W={}", nm),
                Variable::Zoom(level) => format!("Z={}", level),
            };
            (Code::V, assignment)
        }
    };

    Ok(Record { code, payload })
}

/// The four records every airspace starts with.
#[derive(Debug, Builder, Clone, PartialEq)]
#[builder(setter(into))]
pub struct AirspaceHeader {
    pub class: AirspaceClass,
    pub name: String,
    pub ceiling: u32,
    #[builder(default = "Floor::Surface")]
    pub floor: Floor,
}

impl AirspaceHeader {
    pub fn builder() -> AirspaceHeaderBuilder {
        AirspaceHeaderBuilder::default()
    }
}

impl AirspaceHeaderBuilder {
    /// Like `build`, with the error folded into the crate's own.
    pub fn finish(&self) -> Result<AirspaceHeader> {
        self.build()
            .map_err(|reason| Error::IncompleteHeader { reason })
    }
}

/// Serialized lines of a single airspace, in output order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Airspace {
    lines: Vec<String>,
}

impl Airspace {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Airspace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.lines.iter().join("\n"))
    }
}

/// Emits the header records followed by `actions`, keeping their order.
pub fn build_airspace<I>(header: &AirspaceHeader, actions: I) -> Result<Airspace>
where
    I: IntoIterator<Item = Instruction>,
{
    let head = vec![
        Instruction::Class(header.class),
        Instruction::Name(header.name.clone()),
        Instruction::Ceiling(header.ceiling),
        Instruction::Floor(header.floor),
    ];

    let lines = head
        .into_iter()
        .chain(actions)
        .map(|i| build_instruction(&i).map(|r| r.to_string()))
        .collect::<Result<Vec<_>>>()?;

    Ok(Airspace { lines })
}

/// Prefixes every line of `text` with the OpenAIR comment marker.
pub fn comment(text: &str) -> Vec<String> {
    text.split('\n').map(|line| format!("* {}", line)).collect()
}

/// A comment framed by star rules, followed by a blank line.
pub fn banner(text: &str) -> Vec<String> {
    let mut lines = vec![BANNER_RULE.to_owned(), "*".to_owned()];
    lines.extend(comment(text));
    lines.push("*".to_owned());
    lines.push(BANNER_RULE.to_owned());
    lines.push(String::new());
    lines
}
