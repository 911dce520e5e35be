//! Named airspace modules that the CLI can render.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{Error, Result};
use crate::geo::LatLon;

pub mod ksgu;
pub mod ksgu_ultralight_restricted;

/// St. George Regional Airport reference point, 37°02'11"N 113°30'37"W.
pub const SGU_AIRPORT: LatLon = LatLon::new(37.036389, -113.510278);

pub type Render = fn(&DateTime<Utc>) -> Result<Vec<String>>;

#[derive(Clone, Copy)]
pub struct Module {
    pub name: &'static str,
    pub description: &'static str,
    render: Render,
}

impl Module {
    /// Every line of the module's output file, in order.
    pub fn render(&self, generated_at: &DateTime<Utc>) -> Result<Vec<String>> {
        debug!(module = self.name, "rendering");
        (self.render)(generated_at)
    }
}

pub static MODULES: &[Module] = &[
    Module {
        name: "ksgu",
        description: "St. George Regional Class E2 and E4 airspace",
        render: ksgu::render,
    },
    Module {
        name: "ksgu-ultralight-restricted",
        description: "St. George Regional ultralight vehicle do not fly zones",
        render: ksgu_ultralight_restricted::render,
    },
];

pub fn find(name: &str) -> Result<&'static Module> {
    MODULES
        .iter()
        .find(|m| m.name == name)
        .ok_or_else(|| Error::UnknownModule {
            name: name.to_owned(),
        })
}
