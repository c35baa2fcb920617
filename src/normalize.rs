// src/normalize.rs
//
// Field-by-field cleanup of scraped incident cells.
//
// Name and Time are trusted to always be well formed; failing either is a
// `FieldError`. Every other field degrades to `None`.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::config::options::GeocodeTarget;
use crate::core::sanitize::{non_blank, normalize_ws, trim_end_ws};
use crate::error::FieldError;
use crate::geocode::Geocoder;
use crate::incident::{RawIncidentRow, IncidentRow};

/// Long-form date as the site prints it, after whitespace is collapsed.
const LONG_DATE: &str = "%B %d, %Y %I:%M %p";

// "<label>: <text>"; label has no digits.
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\D+?:\s+(.*\S)").expect("TIME_RE"));

// "120 acres", "1,250 acres", "12.5 acre"
static ACRES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(\d[\d,]*(?:\.\d+)?)\s*acre").expect("ACRES_RE"));

// "- 100% contained"
static CONTAINMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\s*(\d+(?:\.\d+)?)\s*%").expect("CONTAINMENT_RE"));

/// "Market Fire:  more info..." → "Market Fire"
pub fn parse_name(raw: &str) -> Result<String, FieldError> {
    let (name, _) = raw
        .split_once(':')
        .ok_or_else(|| FieldError::Name { raw: s!(raw) })?;
    Ok(normalize_ws(name))
}

/// "Updated: October 30, 2018 10:18  am" → 2018-10-30 10:18
pub fn parse_time(raw: &str) -> Result<NaiveDateTime, FieldError> {
    let caps = TIME_RE
        .captures(raw)
        .ok_or_else(|| FieldError::Time { raw: s!(raw) })?;

    let text = normalize_ws(caps[1].trim_end_matches('"'));
    let upper = text.to_uppercase();
    NaiveDateTime::parse_from_str(&upper, LONG_DATE)
        .map_err(|reason| FieldError::Date { text, reason })
}

/// "Tulare County , CA" → "Tulare County"
pub fn parse_county(raw: &str) -> Option<String> {
    let cleaned = normalize_ws(raw);
    let first = cleaned.split(',').next().unwrap_or_default().trim();
    non_blank(s!(first))
}

pub fn parse_location(raw: &str) -> Option<String> {
    non_blank(s!(trim_end_ws(raw)))
}

/// "120 acres -  100% contained" → "120". Unreported acreage → `None`.
pub fn parse_acres(raw: &str) -> Option<String> {
    ACRES_RE.captures(raw).map(|c| s!(&c[1]))
}

/// "120 acres -  100% contained" → "100". Unassessed containment → `None`.
pub fn parse_containment(raw: &str) -> Option<String> {
    CONTAINMENT_RE.captures(raw).map(|c| s!(&c[1]))
}

/// Clean every field of `raw` and resolve its coordinates.
pub fn normalize_row(
    raw: &RawIncidentRow,
    geocoder: &mut dyn Geocoder,
    target: GeocodeTarget,
) -> Result<IncidentRow, FieldError> {
    let name = parse_name(&raw.name)?;
    let time = parse_time(&raw.time)?;
    let county = parse_county(&raw.county);
    let location = parse_location(&raw.location);
    let acres = parse_acres(&raw.acres_containment);
    let containment = parse_containment(&raw.acres_containment);

    let place = match target {
        GeocodeTarget::County => county.as_deref(),
        GeocodeTarget::Location => location.as_deref().or(county.as_deref()),
    };
    let coordinates = place.and_then(|p| geocoder.locate(p));

    if acres.is_none() || containment.is_none() || coordinates.is_none() {
        tracing::debug!(
            name = %name,
            acres = acres.is_some(),
            containment = containment.is_some(),
            coordinates = coordinates.is_some(),
            "degraded incident row"
        );
    }

    Ok(IncidentRow { name, time, county, location, acres, containment, coordinates })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::NullGeocoder;
    use crate::incident::Coordinates;

    struct Fixed(Vec<String>);

    impl Geocoder for Fixed {
        fn try_locate(&mut self, place: &str) -> crate::Result<Option<Coordinates>> {
            self.0.push(s!(place));
            Ok(Some(Coordinates { lat: 36.2, lon: -118.8 }))
        }
    }

    fn raw() -> RawIncidentRow {
        RawIncidentRow {
            name: s!("Market Fire:  more info..."),
            time: s!("Updated: October 30, 2018 10:18  am"),
            county: s!("Tulare County\u{a0}\u{a0}"),
            location: s!("Road 208 and Avenue 380, 5 miles north of Woodlake  "),
            acres_containment: s!("120 acres -  100% contained  "),
        }
    }

    #[test]
    fn name_stops_at_first_colon() {
        assert_eq!(parse_name("Market Fire:  more info...").unwrap(), "Market Fire");
        assert_eq!(parse_name("  Camp Fire: Butte: more").unwrap(), "Camp Fire");
    }

    #[test]
    fn name_without_colon_is_an_error() {
        assert!(matches!(parse_name("Market Fire"), Err(FieldError::Name { .. })));
    }

    #[test]
    fn time_reformats_long_date() {
        let t = parse_time("Updated: October 30, 2018 10:18  am").unwrap();
        assert_eq!(t.format("%m/%d/%Y %H:%M").to_string(), "10/30/2018 10:18");
    }

    #[test]
    fn time_handles_pm_and_noise() {
        let t = parse_time("Updated:\u{a0}November 8, 2018 6:33 PM\"  ").unwrap();
        assert_eq!(t.format("%m/%d/%Y %H:%M").to_string(), "11/08/2018 18:33");
    }

    #[test]
    fn time_rejects_other_formats() {
        assert!(matches!(parse_time("no label here"), Err(FieldError::Time { .. })));
        assert!(matches!(
            parse_time("Updated: 2018-10-30 10:18"),
            Err(FieldError::Date { .. })
        ));
    }

    #[test]
    fn acres_and_containment_split() {
        assert_eq!(parse_acres("120 acres -  100% contained").as_deref(), Some("120"));
        assert_eq!(parse_containment("120 acres -  100% contained").as_deref(), Some("100"));
        assert_eq!(parse_acres("1,250 acres - 40% contained").as_deref(), Some("1,250"));
    }

    #[test]
    fn acres_and_containment_missing() {
        assert_eq!(parse_acres("TBD"), None);
        assert_eq!(parse_containment("TBD"), None);
        assert_eq!(parse_acres("250 acres").as_deref(), Some("250"));
        assert_eq!(parse_containment("250 acres"), None);
    }

    #[test]
    fn county_keeps_first_segment() {
        assert_eq!(parse_county("Tulare County , CA").as_deref(), Some("Tulare County"));
        assert_eq!(parse_county("\u{a0}Butte County\u{a0} ").as_deref(), Some("Butte County"));
        assert_eq!(parse_county("\u{a0}\u{a0} "), None);
        assert_eq!(parse_county(", CA"), None);
    }

    #[test]
    fn location_trims_or_blanks() {
        assert_eq!(parse_location("Road 208  ").as_deref(), Some("Road 208"));
        assert_eq!(parse_location("  \n"), None);
    }

    #[test]
    fn row_normalizes_and_geocodes_county() {
        let mut geo = Fixed(Vec::new());
        let row = normalize_row(&raw(), &mut geo, GeocodeTarget::County).unwrap();
        assert_eq!(
            row.to_record(),
            [
                "Market Fire",
                "10/30/2018 10:18",
                "Tulare County",
                "Road 208 and Avenue 380, 5 miles north of Woodlake",
                "120",
                "100",
                "36.2",
                "-118.8",
            ]
            .map(String::from)
        );
        assert_eq!(geo.0, vec!["Tulare County"]);
    }

    #[test]
    fn location_target_falls_back_to_county() {
        let mut geo = Fixed(Vec::new());
        let mut r = raw();
        normalize_row(&r, &mut geo, GeocodeTarget::Location).unwrap();
        r.location = s!("   ");
        normalize_row(&r, &mut geo, GeocodeTarget::Location).unwrap();
        assert_eq!(
            geo.0,
            vec!["Road 208 and Avenue 380, 5 miles north of Woodlake", "Tulare County"]
        );
    }

    #[test]
    fn geocode_miss_yields_zero_coordinates() {
        let row = normalize_row(&raw(), &mut NullGeocoder, GeocodeTarget::County).unwrap();
        let rec = row.to_record();
        assert_eq!((rec[6].as_str(), rec[7].as_str()), ("0", "0"));
    }

    #[test]
    fn blank_county_is_never_geocoded() {
        let mut geo = Fixed(Vec::new());
        let mut r = raw();
        r.county = s!("\u{a0}");
        let row = normalize_row(&r, &mut geo, GeocodeTarget::County).unwrap();
        assert!(geo.0.is_empty());
        assert_eq!(row.coordinates, None);
        assert_eq!(row.to_record()[2], " ");
    }
}
