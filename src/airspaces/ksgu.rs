//! St. George Regional Class E2 surface area and its E4 extensions.

use chrono::{DateTime, SecondsFormat, Utc};

use super::SGU_AIRPORT;
use crate::error::Result;
use crate::geo::{bearing_between, destination_point};
use crate::openair::{
    banner, build_airspace, comment, Airspace, AirspaceClass, AirspaceHeader, Floor, Instruction,
    Variable,
};
use crate::trig::{hypotenuse, side_from_sas, solve_right_angle};
use crate::units::{add_bearing, nautical_miles_to_km, subtract_bearing};

/// E2 radius in nm. The E4 arcs close on the same circle.
pub const RADIUS: f64 = 4.5;

const CEILING: u32 = 17999;

/// One E4 finger sticking out of the E2 circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extension {
    pub label: &'static str,
    /// Degrees true from the airport.
    pub bearing: f64,
    /// Length from the airport, nm.
    pub distance: f64,
    /// Half width, nm.
    pub side: f64,
}

pub const NE_EXTENSION: Extension = Extension {
    label: "NE",
    bearing: 30.0,
    distance: 7.7,
    side: 1.0,
};

pub const SW_EXTENSION: Extension = Extension {
    label: "SW",
    bearing: 203.0,
    distance: 8.5,
    side: 2.0,
};

fn header(name: &str) -> Result<AirspaceHeader> {
    AirspaceHeader::builder()
        .class(AirspaceClass::ClassE)
        .name(name)
        .ceiling(CEILING)
        .floor(Floor::Surface)
        .finish()
}

pub fn class_e2(radius: f64) -> Result<Airspace> {
    build_airspace(
        &header("Saint George Class E2")?,
        vec![
            Instruction::Var(Variable::Center(SGU_AIRPORT)),
            Instruction::Circle(radius),
        ],
    )
}

pub fn class_e4(ext: &Extension) -> Result<Airspace> {
    let Extension {
        bearing,
        distance,
        side,
        ..
    } = *ext;

    // Outer corners of the finger
    let tip = destination_point(SGU_AIRPORT, bearing, nautical_miles_to_km(distance));
    let a = destination_point(tip, subtract_bearing(bearing, 90.0), nautical_miles_to_km(side));
    let b = destination_point(tip, add_bearing(bearing, 90.0), nautical_miles_to_km(side));

    // Walk the long edges back until they meet the E2 circle
    let to_corner = hypotenuse(side, distance);
    let angle = 90.0 - solve_right_angle(distance, side, to_corner)?;
    let back = side_from_sas(RADIUS, to_corner, angle);

    let c = destination_point(a, add_bearing(bearing, 180.0), nautical_miles_to_km(back));
    let d = destination_point(b, add_bearing(bearing, 180.0), nautical_miles_to_km(back));

    build_airspace(
        &header(&format!("Saint George E4 {}", ext.label))?,
        vec![
            Instruction::Point(b),
            Instruction::Point(a),
            Instruction::Var(Variable::Center(SGU_AIRPORT)),
            Instruction::Arc {
                radius: RADIUS,
                start: bearing_between(SGU_AIRPORT, c),
                end: bearing_between(SGU_AIRPORT, d),
            },
        ],
    )
}

pub fn render(generated_at: &DateTime<Utc>) -> Result<Vec<String>> {
    let mut lines = banner(&format!(
        "Last Generated: {}\n\nSt. George Regional Airport, UT controlled airspace.",
        generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));

    let zones = [
        (
            "St. George Regional Airport Class E2 Airspace",
            class_e2(RADIUS)?,
        ),
        (
            "St. George Regional Airport Class E4 Airspace - Northeast Segment",
            class_e4(&NE_EXTENSION)?,
        ),
        (
            "St. George Regional Airport Class E4 Airspace - Southwest Segment",
            class_e4(&SW_EXTENSION)?,
        ),
    ];

    for (note, airspace) in zones.iter() {
        lines.extend(comment(note));
        lines.extend(airspace.lines().iter().cloned());
        lines.push(String::new());
    }

    Ok(lines)
}
