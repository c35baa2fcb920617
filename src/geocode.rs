// src/geocode.rs
//
// Place name → coordinates. A lookup that fails for any reason is a miss
// for that row; the pipeline never sees the error.

use std::collections::HashMap;
use std::thread;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::consts::GEOCODER_USER_AGENT;
use crate::config::options::GeocodeOptions;
use crate::core::net;
use crate::error::{Error, Result};
use crate::incident::Coordinates;

pub trait Geocoder {
    /// One lookup. `Ok(None)` means the service answered with no hit;
    /// `Err` means no answer was obtained at all.
    fn try_locate(&mut self, place: &str) -> Result<Option<Coordinates>>;

    /// Like `try_locate`, with a failed lookup logged and treated as a miss.
    fn locate(&mut self, place: &str) -> Option<Coordinates> {
        self.try_locate(place).unwrap_or_else(|e| {
            warn!(place, error = %e, "geocoder lookup failed");
            None
        })
    }
}

/// Never resolves anything.
pub struct NullGeocoder;

impl Geocoder for NullGeocoder {
    fn try_locate(&mut self, _place: &str) -> Result<Option<Coordinates>> {
        Ok(None)
    }
}

/* ---------------- Nominatim ---------------- */

/// OpenStreetMap Nominatim search. Requests are spaced at least `interval`
/// apart; the public instance allows one per second.
pub struct NominatimGeocoder {
    client: Client,
    endpoint: String,
    interval: Duration,
    last_request: Option<Instant>,
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

impl NominatimGeocoder {
    pub fn new(opts: &GeocodeOptions) -> Result<Self> {
        Ok(Self {
            client: net::client_with_agent(GEOCODER_USER_AGENT)?,
            endpoint: opts.endpoint.clone(),
            interval: opts.interval(),
            last_request: None,
        })
    }

    fn throttle(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                thread::sleep(self.interval - elapsed);
            }
        }
        self.last_request = Some(Instant::now());
    }
}

impl Geocoder for NominatimGeocoder {
    fn try_locate(&mut self, place: &str) -> Result<Option<Coordinates>> {
        let place = place.trim();
        if place.is_empty() {
            return Ok(None);
        }
        self.throttle();

        let query = [("q", place), ("format", "json"), ("limit", "1")];
        let body = net::http_get(&self.client, &self.endpoint, &query)?;
        let found = parse_response(&body)
            .map_err(|source| Error::Decode { url: self.endpoint.clone(), source })?;
        debug!(place, ?found, "geocoded");
        Ok(found)
    }
}

/// First hit of a Nominatim JSON search response. Coordinates come back as
/// strings; an unparsable pair counts as no hit.
pub fn parse_response(body: &str) -> serde_json::Result<Option<Coordinates>> {
    let places: Vec<Place> = serde_json::from_str(body)?;
    Ok(places.into_iter().next().and_then(|p| {
        let lat = p.lat.trim().parse().ok()?;
        let lon = p.lon.trim().parse().ok()?;
        Some(Coordinates { lat, lon })
    }))
}

/* ---------------- Memoization ---------------- */

/// Remembers every answer (hits and misses) per place for the whole run.
/// Failed lookups are not remembered; the next row asks again.
pub struct CachedGeocoder<G> {
    inner: G,
    cache: HashMap<String, Option<Coordinates>>,
    lookups: usize,
}

impl<G: Geocoder> CachedGeocoder<G> {
    pub fn new(inner: G) -> Self {
        Self { inner, cache: HashMap::new(), lookups: 0 }
    }

    /// Calls that actually reached the wrapped geocoder.
    pub fn lookups(&self) -> usize {
        self.lookups
    }
}

impl<G: Geocoder> Geocoder for CachedGeocoder<G> {
    fn try_locate(&mut self, place: &str) -> Result<Option<Coordinates>> {
        if let Some(hit) = self.cache.get(place) {
            return Ok(*hit);
        }
        self.lookups += 1;
        let found = self.inner.try_locate(place)?;
        self.cache.insert(s!(place), found);
        Ok(found)
    }
}

/// Geocoder for a run: Nominatim behind a cache, or nothing at all.
pub fn from_options(opts: &GeocodeOptions) -> Result<Box<dyn Geocoder>> {
    if !opts.enabled {
        return Ok(Box::new(NullGeocoder));
    }
    Ok(Box::new(CachedGeocoder::new(NominatimGeocoder::new(opts)?)))
}
