// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! HTTP fetching
//!
//! The analyzer only talks to the network through [`Fetch`], so tests can
//! substitute canned responses with exact timings.

use crate::config::FetchConfig;
use crate::error::{AiseoError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// A completed HTTP exchange
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    /// Body decoded as UTF-8, invalid sequences replaced
    pub body: String,
    /// Wall-clock time from sending the request to receiving headers,
    /// across any redirects
    pub elapsed: Duration,
    /// URL after redirects
    pub final_url: Url,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Fetch: Send + Sync {
    /// GET `url`, failing with [`AiseoError::Unreachable`] on network-level errors.
    /// Non-2xx responses are returned, not treated as errors.
    async fn fetch(&self, url: &Url, timeout: Duration) -> Result<FetchResponse>;
}

/// reqwest-backed fetcher with default certificate validation
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &Url, timeout: Duration) -> Result<FetchResponse> {
        let unreachable = |e: reqwest::Error| AiseoError::Unreachable {
            url: url.to_string(),
            reason: e.to_string(),
        };

        debug!(%url, ?timeout, "fetching");
        let start = Instant::now();
        let response = self
            .client
            .get(url.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(unreachable)?;
        let elapsed = start.elapsed();

        let status = response.status().as_u16();
        let final_url = response.url().clone();
        let bytes = response.bytes().await.map_err(unreachable)?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        debug!(%url, status, elapsed_ms = elapsed.as_millis() as u64, "fetched");

        Ok(FetchResponse {
            status,
            body,
            elapsed,
            final_url,
        })
    }
}
