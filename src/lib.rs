#![deny(clippy::all)]
#![forbid(unsafe_code)]

// FIXME: When derive_builder supports Rust 2018 syntax switch to a local import
#[macro_use]
extern crate derive_builder;

pub mod airspaces;
pub mod error;
pub mod geo;
pub mod openair;
pub mod trig;
pub mod units;

pub use error::{Error, Result};
pub use geo::LatLon;
pub use openair::{build_airspace, Airspace, AirspaceClass, AirspaceHeader, Floor, Instruction};
