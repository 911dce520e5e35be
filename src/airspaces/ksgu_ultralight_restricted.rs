//! Do not fly zones for ultralight vehicles around St. George Regional.
//!
//! The primary zone is a box 0.75 nm each side of the 024/204 line through
//! the airport. The extensions hang off its east and west edges.

use chrono::{DateTime, SecondsFormat, Utc};

use super::SGU_AIRPORT;
use crate::error::{Error, Result};
use crate::geo::{bearing_between, destination_point, intersection_at_longitude, midpoint, LatLon};
use crate::openair::{
    banner, build_airspace, comment, Airspace, AirspaceClass, AirspaceHeader, Floor, Instruction,
    Variable,
};
use crate::units::{add_bearing, nautical_miles_to_km, subtract_bearing};

pub const BEARING: f64 = 24.0;
pub const SIDE: f64 = 0.75;

const NORTH_DISTANCE: f64 = 3.25;
const SOUTH_DISTANCE: f64 = 2.5;
/// Offset of the second west arc, also the bulge of the arc between R1 and R2.
const WEST_ARC_INSET: f64 = 0.375;

const CEILING: u32 = 17999;
const FLOOR: Floor = Floor::Surface;

/// SR-7 (Southern Pkwy) where it meets the primary zone.
const SR7_LONGITUDE: f64 = -113.485015;

const EAST_SURVEY_POINTS: [LatLon; 3] = [
    LatLon::new(37.023278, -113.485417),
    LatLon::new(37.010389, -113.499861),
    LatLon::new(37.009561, -113.508119),
];

const USAGE: &str = r#"Usage of this file is NOT to be considered a "prior authorization"
to be in the KSGU airspace under FAR 103.17. This file is to be used
by operators with existing "prior authorization" to help communicate
the spaces to be considered restricted to ultralight vehicle operators
with existing prior authorization to be in the airspace.

Operators with prior authorization from the KSGU airport manager
should:
  - Stay below 500ft AGL in the E2 and E4 airspaces.
  - Not enter the airspaces around the airport listed in this file.

Resources:
  - https://www.ecfr.gov/current/title-14/chapter-I/subchapter-F/part-103"#;

const PRIMARY_NOTE: &str = r#"KSGU Ultralight Vehicles Do Not Fly Zone Primary

St. George Regional Airport, UT
Lat. 37°02′11″ N., long. 113°30′37″ W.

Airspace extending upward from the surface within 0.75 miles each
side of the St. George Regional Airport 024° bearing from the airport
3.25 miles northeast of the airport, and within 0.75 miles each side
of the airport 204° bearing from the airport 2.5 miles southwest of
the airport.

This zone will be known as the "primary" do not fly zone.
"#;

const EAST_NOTE: &str = r#"KSGU Ultralight Vehicles Do Not Fly Zone East Ext

Airspace extending to the east of the primary zone (described
above) to include covering the area west of SR-7 (ie Southern Pkwy)
back to the primary zone.
"#;

const WEST_NOTE: &str = r#"KSGU Ultralight Vehicles Do Not Fly Zone West Ext

Airspace extending to the west of the primary zone (described
above) to include covering parts of the "White Dome Nature Preserve"
area towards but not including River Rd, and north to but not including
the area occupied by the Family Dollar Distribution Center and
UPS Customer Center before cutting back to the west mid point of
the primary zone (roughly 037°02′29.26″ N. 113°31′28.41″ W.).
"#;

fn header(name: &str) -> Result<AirspaceHeader> {
    AirspaceHeader::builder()
        .class(AirspaceClass::Restricted)
        .name(name)
        .ceiling(CEILING)
        .floor(FLOOR)
        .finish()
}

/// Far ends of the centerline, north east and south west of the airport.
fn centerline(bearing: f64) -> (LatLon, LatLon) {
    let north = destination_point(SGU_AIRPORT, bearing, nautical_miles_to_km(NORTH_DISTANCE));
    let south = destination_point(
        SGU_AIRPORT,
        add_bearing(bearing, 180.0),
        nautical_miles_to_km(SOUTH_DISTANCE),
    );
    (north, south)
}

pub fn primary(bearing: f64, side: f64) -> Result<Airspace> {
    let (north, south) = centerline(bearing);
    let side = nautical_miles_to_km(side);

    let a = destination_point(north, subtract_bearing(bearing, 90.0), side);
    let b = destination_point(north, add_bearing(bearing, 90.0), side);
    let c = destination_point(south, subtract_bearing(bearing, 180.0 + 90.0), side);
    let d = destination_point(south, add_bearing(bearing, 180.0 + 90.0), side);

    build_airspace(
        &header("KSGU Ultralight Vehicles Restricted Primary")?,
        vec![
            Instruction::Point(a),
            Instruction::Point(b),
            Instruction::Point(c),
            Instruction::Point(d),
        ],
    )
}

pub fn east_extension(bearing: f64, side: f64) -> Result<Airspace> {
    let (north, south) = centerline(bearing);
    let side = nautical_miles_to_km(side);

    // East edge of the primary zone
    let b = destination_point(north, add_bearing(bearing, 90.0), side);
    let c = destination_point(south, subtract_bearing(bearing, 180.0 + 90.0), side);

    let north_point = intersection_at_longitude(b, c, SR7_LONGITUDE).ok_or_else(|| {
        Error::Construction {
            what: "the intersection point for the east extension".to_owned(),
        }
    })?;

    let mut actions = vec![Instruction::Point(north_point)];
    actions.extend(EAST_SURVEY_POINTS.iter().map(|&p| Instruction::Point(p)));

    build_airspace(&header("KSGU Ultralight Vehicles Restricted East Ext")?, actions)
}

pub fn west_extension(bearing: f64, side: f64) -> Result<Airspace> {
    let south_west = add_bearing(bearing, 180.0);

    let (_, south) = centerline(bearing);
    let west = destination_point(
        SGU_AIRPORT,
        subtract_bearing(bearing, 90.0),
        nautical_miles_to_km(side),
    );
    let d = destination_point(south, add_bearing(south_west, 90.0), nautical_miles_to_km(side));

    let r1 = destination_point(
        west,
        add_bearing(south_west, 15.0),
        nautical_miles_to_km(SOUTH_DISTANCE),
    );
    let r2 = destination_point(
        west,
        add_bearing(south_west, 28.0),
        nautical_miles_to_km(SOUTH_DISTANCE - WEST_ARC_INSET),
    );

    // Center for the short arc, pushed off the R1-R2 chord
    let bulge_center = destination_point(
        midpoint(r1, r2),
        add_bearing(bearing_between(r1, r2), 90.0),
        nautical_miles_to_km(WEST_ARC_INSET),
    );

    build_airspace(
        &header("KSGU Ultralight Vehicles Restricted West Ext")?,
        vec![
            Instruction::Point(west),
            Instruction::Point(d),
            Instruction::Var(Variable::Center(west)),
            Instruction::ArcBetween(d, r1),
            Instruction::Var(Variable::Center(bulge_center)),
            Instruction::ArcBetween(r1, r2),
            Instruction::Point(west),
        ],
    )
}

/// The whole file: banner, then each zone under its description.
pub fn render(generated_at: &DateTime<Utc>) -> Result<Vec<String>> {
    let mut lines = banner(&format!(
        "Last Generated: {}\n\n{}",
        generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        USAGE
    ));

    let zones = [
        (PRIMARY_NOTE, primary(BEARING, SIDE)?),
        (EAST_NOTE, east_extension(BEARING, SIDE)?),
        (WEST_NOTE, west_extension(BEARING, SIDE)?),
    ];

    for (note, airspace) in zones.iter() {
        lines.extend(comment(note));
        lines.extend(airspace.lines().iter().cloned());
        lines.push(String::new());
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn primary_zone() {
        let airspace = primary(BEARING, SIDE).unwrap();
        assert_eq!(
            airspace.lines(),
            &[
                "AC R",
                "AN KSGU ULTRALIGHT VEHICLES RESTRICTED PRIMARY",
                "AH 17999 ft",
                "AL SFC",
                "DP 037:05:27.08 N 113:29:49.20 W",
                "DP 037:04:50.54 N 113:28:06.32 W",
                "DP 036:59:35.93 N 113:31:01.88 W",
                "DP 037:00:12.47 N 113:32:44.64 W",
            ]
        );
    }

    #[test]
    fn east_extension_zone() {
        let airspace = east_extension(BEARING, SIDE).unwrap();
        assert_eq!(
            airspace.lines(),
            &[
                "AC R",
                "AN KSGU ULTRALIGHT VEHICLES RESTRICTED EAST EXT",
                "AH 17999 ft",
                "AL SFC",
                "DP 037:03:03.49 N 113:29:06.05 W",
                "DP 037:01:23.80 N 113:29:07.50 W",
                "DP 037:00:37.40 N 113:29:59.50 W",
                "DP 037:00:34.42 N 113:30:29.23 W",
            ]
        );
    }

    #[test]
    fn east_extension_without_crossing() {
        // A hair-thin zone due north never reaches SR-7
        let result = east_extension(0.0, 0.01);
        assert!(matches!(result, Err(Error::Construction { .. })));
    }

    #[test]
    fn west_extension_zone() {
        let airspace = west_extension(BEARING, SIDE).unwrap();
        assert_eq!(
            airspace.lines(),
            &[
                "AC R",
                "AN KSGU ULTRALIGHT VEHICLES RESTRICTED WEST EXT",
                "AH 17999 ft",
                "AL SFC",
                "DP 037:02:29.27 N 113:31:28.41 W",
                "DP 037:00:12.47 N 113:32:44.64 W",
                "V X=037:02:29.27 N 113:31:28.41 W",
                "DB 037:00:12.47 N 113:32:44.64 W, 037:00:32.89 N 113:33:26.41 W",
                "V X=037:00:55.44 N 113:33:02.44 W",
                "DB 037:00:32.89 N 113:33:26.41 W, 037:01:10.89 N 113:33:34.02 W",
                "DP 037:02:29.27 N 113:31:28.41 W",
            ]
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let at = Utc.with_ymd_and_hms(2024, 5, 31, 0, 0, 0).unwrap();
        let first = render(&at).unwrap();
        assert_eq!(first, render(&at).unwrap());
        assert_eq!(first[2], "* Last Generated: 2024-05-31T00:00:00.000Z");
        assert!(first.iter().any(|l| l == "AN KSGU ULTRALIGHT VEHICLES RESTRICTED WEST EXT"));
        assert_eq!(first.last().map(String::as_str), Some(""));
    }
}
