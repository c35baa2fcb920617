// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use fire_scrape::Error;
use fire_scrape::geocode::Geocoder;
use fire_scrape::incident::Coordinates;
use fire_scrape::scrape::PageSource;

pub const INCIDENTS_PER_PAGE: usize = 5;

/// Listing pages served from memory. Every request is recorded.
pub struct FakeSite {
    pages: HashMap<u32, String>,
    pub requests: Mutex<Vec<u32>>,
}

impl FakeSite {
    /// `last_page` pages, each with a legend table and five incidents.
    pub fn new(last_page: u32) -> Self {
        let pages = (1..=last_page).map(|n| (n, listing_page(n, last_page))).collect();
        Self { pages, requests: Mutex::new(Vec::new()) }
    }

    pub fn with_page(mut self, page: u32, html: String) -> Self {
        self.pages.insert(page, html);
        self
    }

    pub fn without_page(mut self, page: u32) -> Self {
        self.pages.remove(&page);
        self
    }
}

impl PageSource for FakeSite {
    fn fetch_page(&self, page: u32) -> Result<String, Error> {
        self.requests.lock().unwrap().push(page);
        self.pages.get(&page).cloned().ok_or_else(|| Error::Io {
            path: PathBuf::from(format!("page-{page}.html")),
            source: io::Error::new(io::ErrorKind::NotFound, "no such listing page"),
        })
    }

    fn describe(&self) -> String {
        "memory://current_incidents/".into()
    }
}

pub fn pagination(last_page: u32) -> String {
    format!(
        r#"<div class="pagination-container"><ul class="pagination">
            <li class="active"><a>1</a></li>
            <li class="PagedList-skipToLast"><a href="/current_incidents/?page={last_page}">»»</a></li>
        </ul></div>"#
    )
}

pub fn legend() -> &'static str {
    r#"<table class="incident_table"><tr><td>Incident</td><td>Status</td></tr></table>"#
}

pub fn incident_table(name: &str, county: &str, acres: &str) -> String {
    format!(
        r#"<table class="incident_table" title="{name}">
            <tr><td class="header_td">{name}:&nbsp; <a href="/incident">more info...</a></td>
                <td>Updated: October 30, 2018 10:18&nbsp; am</td></tr>
            <tr><td>County:</td><td>{county}&nbsp;&nbsp;</td></tr>
            <tr><td>Location:</td><td>Road 208 and Avenue 380, 5 miles north of Woodlake  </td></tr>
            <tr><td>Acres Burned - Containment:</td><td>{acres}  </td></tr>
        </table>"#
    )
}

pub fn listing_page(page: u32, last_page: u32) -> String {
    let mut body = String::from(legend());
    for i in 1..=INCIDENTS_PER_PAGE {
        let name = format!("Fire P{page}N{i}");
        let (county, acres) = if i % 2 == 0 {
            ("Tulare County , CA", "120 acres -  100% contained")
        } else {
            ("Butte County", "TBD")
        };
        body.push_str(&incident_table(&name, county, acres));
    }
    format!("<html><body>{}{body}</body></html>", pagination(last_page))
}

/// Knows one county.
#[derive(Default)]
pub struct StubGeocoder {
    pub queries: Vec<String>,
}

impl Geocoder for StubGeocoder {
    fn try_locate(&mut self, place: &str) -> Result<Option<Coordinates>, Error> {
        self.queries.push(place.to_string());
        Ok((place == "Tulare County").then_some(Coordinates { lat: 36.25, lon: -118.75 }))
    }
}
