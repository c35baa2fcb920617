// src/core/net.rs

// Blocking HTTP GET (reqwest). No retry: a failed request fails the caller.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub fn client() -> Result<Client> {
    client_with_agent(USER_AGENT)
}

pub fn client_with_agent(agent: &str) -> Result<Client> {
    Client::builder()
        .user_agent(agent)
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .map_err(|source| Error::Http { url: s!("<client>"), source })
}

/// GET `url` with `query` appended and return the body as text.
/// Any non-2xx status is an error.
pub fn http_get(client: &Client, url: &str, query: &[(&str, &str)]) -> Result<String> {
    send_text(client.get(url).query(query), url)
}

fn send_text(req: RequestBuilder, url: &str) -> Result<String> {
    let resp = req
        .send()
        .map_err(|source| Error::Http { url: s!(url), source })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { url: s!(url), status });
    }
    resp.text().map_err(|source| Error::Http { url: s!(url), source })
}
