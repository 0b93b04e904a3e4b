// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Normalizing user input into the site to analyze

use crate::error::{AiseoError, Result};
use url::Url;

/// The site under analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    domain: String,
    origin: Url,
}

impl Target {
    /// Accepts `example.com`, `https://example.com/`, `http://example.com` and
    /// always analyzes over HTTPS.
    pub fn parse(input: &str) -> Result<Self> {
        let domain = normalize_domain(input)?;
        let origin = Url::parse(&format!("https://{}/", domain))?;
        Ok(Self { domain, origin })
    }

    /// Analyze `domain` but send requests to `origin` instead, e.g. a local
    /// mirror or a test server.
    pub fn with_origin(domain: &str, origin: &str) -> Result<Self> {
        let domain = normalize_domain(domain)?;
        let mut origin = Url::parse(origin)?;
        if !origin.path().ends_with('/') {
            let path = format!("{}/", origin.path());
            origin.set_path(&path);
        }
        Ok(Self { domain, origin })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn homepage(&self) -> &Url {
        &self.origin
    }

    /// URL of a well-known resource such as `/robots.txt`
    pub fn resource(&self, path: &str) -> Result<Url> {
        Ok(self.origin.join(path.trim_start_matches('/'))?)
    }
}

fn normalize_domain(input: &str) -> Result<String> {
    let mut rest = input.trim();
    for scheme in ["https://", "http://"] {
        if rest
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        {
            rest = &rest[scheme.len()..];
            break;
        }
    }
    let domain = rest.trim_end_matches('/');

    if domain.is_empty() || domain.chars().any(char::is_whitespace) {
        return Err(AiseoError::InvalidDomain(input.to_string()));
    }

    Ok(domain.to_string())
}
