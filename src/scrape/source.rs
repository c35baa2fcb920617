// src/scrape/source.rs
use reqwest::blocking::Client;

use crate::config::consts::PAGE_PARAM;
use crate::core::net;
use crate::error::Result;

/// Where listing pages come from. Shared by the page workers.
pub trait PageSource: Sync {
    /// HTML of listing page `page` (1-based).
    fn fetch_page(&self, page: u32) -> Result<String>;

    /// Human-readable origin for console output.
    fn describe(&self) -> String;
}

/// The live site: `<base_url>?page=N`.
pub struct HttpPageSource {
    client: Client,
    base_url: String,
}

impl HttpPageSource {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self { client: net::client()?, base_url: s!(base_url) })
    }
}

impl PageSource for HttpPageSource {
    fn fetch_page(&self, page: u32) -> Result<String> {
        let n = page.to_string();
        net::http_get(&self.client, &self.base_url, &[(PAGE_PARAM, n.as_str())])
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
