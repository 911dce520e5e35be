//! Unit conversions and the DMS string forms used on the wire.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

pub const KM_PER_NAUTICAL_MILE: f64 = 1.852;

pub fn km_to_nautical_miles(km: f64) -> f64 {
    km / KM_PER_NAUTICAL_MILE
}

pub fn nautical_miles_to_km(nm: f64) -> f64 {
    nm * KM_PER_NAUTICAL_MILE
}

/// Wraps any angle into [0, 360).
pub fn normalize_bearing(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

// Whole turns are dropped from the delta first so they add exactly nothing.

pub fn add_bearing(bearing: f64, delta: f64) -> f64 {
    normalize_bearing(bearing + delta.rem_euclid(360.0))
}

pub fn subtract_bearing(bearing: f64, delta: f64) -> f64 {
    normalize_bearing(bearing - delta.rem_euclid(360.0))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cardinal {
    N,
    S,
    E,
    W,
}

impl Cardinal {
    pub fn of(value: f64, axis: Axis) -> Self {
        match (axis, value < 0.0) {
            (Axis::Latitude, false) => Cardinal::N,
            (Axis::Latitude, true) => Cardinal::S,
            (Axis::Longitude, false) => Cardinal::E,
            (Axis::Longitude, true) => Cardinal::W,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cardinal::N => "N",
            Cardinal::S => "S",
            Cardinal::E => "E",
            Cardinal::W => "W",
        }
    }

    fn sign(self) -> f64 {
        match self {
            Cardinal::N | Cardinal::E => 1.0,
            Cardinal::S | Cardinal::W => -1.0,
        }
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unsigned degrees/minutes/seconds with the hemisphere kept aside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    /// Rounded to hundredths.
    pub seconds: f64,
    pub cardinal: Cardinal,
}

impl Dms {
    pub fn from_decimal(value: f64, axis: Axis) -> Self {
        let absolute = value.abs();
        let mut degrees = absolute.floor();
        let minutes_exact = (absolute - degrees) * 60.0;
        let mut minutes = minutes_exact.floor();
        let mut seconds = ((minutes_exact - minutes) * 60.0 * 100.0).round() / 100.0;

        if seconds >= 60.0 {
            seconds = 0.0;
            minutes += 1.0;
        }
        if minutes >= 60.0 {
            minutes = 0.0;
            degrees += 1.0;
        }

        Dms {
            degrees: degrees as u32,
            minutes: minutes as u32,
            seconds,
            cardinal: Cardinal::of(value, axis),
        }
    }
}

/// Human readable form, e.g. `037°08'20.34"N`.
pub fn decimal_to_dms(value: f64, axis: Axis) -> String {
    let dms = Dms::from_decimal(value, axis);
    format!(
        "{:03}°{:02}'{:05.2}\"{}",
        dms.degrees, dms.minutes, dms.seconds, dms.cardinal
    )
}

/// OpenAIR wire form, e.g. `113:24:42.65 W`.
pub fn decimal_to_openair(value: f64, axis: Axis) -> String {
    let dms = Dms::from_decimal(value, axis);
    format!(
        "{:03}:{:02}:{:05.2} {}",
        dms.degrees, dms.minutes, dms.seconds, dms.cardinal
    )
}

lazy_static! {
    static ref OPENAIR_DMS_REGEX: Regex =
        Regex::new(r"^(\d+):(\d+):(\d+(?:\.\d+)?) ([NSEW])$").unwrap();
    static ref OPENAIR_PAIR_REGEX: Regex =
        Regex::new(r"^(\d+:\d+:[\d.]+ [NS]) (\d+:\d+:[\d.]+ [EW])$").unwrap();
}

/// Inverse of [`decimal_to_openair`], rounded to six decimal places.
pub fn openair_to_decimal(text: &str) -> Result<f64> {
    let invalid = || Error::InvalidCoordinate {
        text: text.to_owned(),
    };

    let cap = OPENAIR_DMS_REGEX.captures(text.trim()).ok_or_else(invalid)?;
    let d: f64 = cap[1].parse().map_err(|_| invalid())?;
    let m: f64 = cap[2].parse().map_err(|_| invalid())?;
    let s: f64 = cap[3].parse().map_err(|_| invalid())?;
    let cardinal = match &cap[4] {
        "N" => Cardinal::N,
        "S" => Cardinal::S,
        "E" => Cardinal::E,
        _ => Cardinal::W,
    };

    let dd = (d + m / 60.0 + s / 3600.0) * cardinal.sign();
    Ok((dd * 1e6).round() / 1e6)
}

/// Splits `<lat> <N|S> <lon> <E|W>` into its two axes.
pub fn split_openair_pair(text: &str) -> Result<(&str, &str)> {
    let text = text.trim();
    let cap = OPENAIR_PAIR_REGEX
        .captures(text)
        .ok_or_else(|| Error::InvalidCoordinate {
            text: text.to_owned(),
        })?;
    // Both groups always participate in a match
    let lat = cap.get(1).map_or("", |m| m.as_str());
    let lon = cap.get(2).map_or("", |m| m.as_str());
    Ok((lat, lon))
}
