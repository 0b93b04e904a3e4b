// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for aiseobot

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AiseoError>;

#[derive(Error, Debug)]
pub enum AiseoError {
    /// The homepage could not be retrieved. Fatal for the whole run.
    #[error("Could not reach {url}: {reason}")]
    Unreachable { url: String, reason: String },

    /// robots.txt or sitemap.xml could not be retrieved. Never fatal.
    #[error("Auxiliary fetch failed for {url}: {reason}")]
    AuxiliaryFetch { url: String, reason: String },

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
