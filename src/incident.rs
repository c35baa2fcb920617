// src/incident.rs
//
// Incident records before and after cleaning.

use chrono::NaiveDateTime;

use crate::config::consts::{PLACEHOLDER, TIME_FORMAT};

/// The five cells of one incident table, exactly as scraped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawIncidentRow {
    /// "Market Fire:  more info..."
    pub name: String,
    /// "Updated: October 30, 2018 10:18  am"
    pub time: String,
    /// "Tulare County\u{a0}\u{a0}"
    pub county: String,
    /// "Road 208 and Avenue 380, 5 miles north of Woodlake  "
    pub location: String,
    /// "120 acres -  100% contained"
    pub acres_containment: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One cleaned incident. Absent sub-fields are `None`; the legacy
/// single-space placeholder only exists in the exported file.
#[derive(Clone, Debug, PartialEq)]
pub struct IncidentRow {
    pub name: String,
    pub time: NaiveDateTime,
    pub county: Option<String>,
    pub location: Option<String>,
    pub acres: Option<String>,
    pub containment: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl IncidentRow {
    pub const LEGACY_HEADERS: [&'static str; 6] =
        ["Name", "Time", "County", "Location", "Acres", "Containment"];

    pub const FULL_HEADERS: [&'static str; 8] = [
        "Name", "Time", "County", "Location", "Acres", "Containment", "Latitude", "Longitude",
    ];

    /// Export shape: always eight fields, `" "` for absent text, `0` for
    /// unresolved coordinates.
    pub fn to_record(&self) -> [String; 8] {
        let text = |v: &Option<String>| v.clone().unwrap_or_else(|| s!(PLACEHOLDER));
        let (lat, lon) = match self.coordinates {
            Some(c) => (c.lat.to_string(), c.lon.to_string()),
            None => (s!("0"), s!("0")),
        };
        [
            self.name.clone(),
            self.time.format(TIME_FORMAT).to_string(),
            text(&self.county),
            text(&self.location),
            text(&self.acres),
            text(&self.containment),
            lat,
            lon,
        ]
    }
}
