// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! AI search readiness signals
//!
//! Every signal carries a [`Probe`] describing where its evidence comes from:
//!
//! - **Content**: a pure text test over the homepage HTML
//! - **Transport**: connection metadata of the homepage fetch (TLS, latency)
//! - **Resource**: HTTP status of an auxiliary well-known file
//!
//! All three kinds are evaluated through [`SignalDefinition::evaluate`] against
//! one [`EvaluationContext`], so no signal needs overriding after the fact.

pub mod catalog;

pub use catalog::{catalog, total_weight};

use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use tracing::warn;

/// Broad category of a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    /// Decided from the HTML body alone
    Content,
    /// Decided from connection or auxiliary-resource metadata
    Network,
}

/// Connection facts about the homepage fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportCheck {
    Secure,
    Fast,
}

/// How a signal gathers its evidence
#[derive(Clone, Copy)]
pub enum Probe {
    Content(fn(&str) -> bool),
    Transport(TransportCheck),
    /// Path of a well-known resource that must answer `200 OK`
    Resource(&'static str),
}

impl std::fmt::Debug for Probe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Probe::Content(_) => write!(f, "Content(..)"),
            Probe::Transport(check) => write!(f, "Transport({:?})", check),
            Probe::Resource(path) => write!(f, "Resource({})", path),
        }
    }
}

/// A single weighted heuristic
#[derive(Debug, Clone, Copy)]
pub struct SignalDefinition {
    /// Stable identifier
    pub id: &'static str,
    /// Display name, unique within the catalog
    pub name: &'static str,
    /// Why AI engines care about this signal
    pub rationale: &'static str,
    /// Share of the composite score
    pub weight: u32,
    pub probe: Probe,
}

/// Homepage connection metadata
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportInfo {
    pub secure: bool,
    pub fast: bool,
}

/// Outcome of fetching an auxiliary resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceStatus {
    pub path: String,
    /// `None` when the request itself failed
    pub status: Option<u16>,
}

impl ResourceStatus {
    pub fn new(path: &str, status: Option<u16>) -> Self {
        Self {
            path: path.to_string(),
            status,
        }
    }

    pub fn is_present(&self) -> bool {
        self.status == Some(200)
    }
}

/// Everything a signal may look at
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
    pub html: &'a str,
    pub transport: TransportInfo,
    pub resources: &'a [ResourceStatus],
}

impl<'a> EvaluationContext<'a> {
    pub fn new(html: &'a str, transport: TransportInfo, resources: &'a [ResourceStatus]) -> Self {
        Self {
            html,
            transport,
            resources,
        }
    }

    fn resource_present(&self, path: &str) -> bool {
        self.resources
            .iter()
            .find(|r| r.path == path)
            .is_some_and(ResourceStatus::is_present)
    }
}

impl SignalDefinition {
    pub fn kind(&self) -> SignalKind {
        match self.probe {
            Probe::Content(_) => SignalKind::Content,
            Probe::Transport(_) | Probe::Resource(_) => SignalKind::Network,
        }
    }

    /// Decide whether the signal is present. Never panics: a failing content
    /// check counts as "not passed".
    pub fn evaluate(&self, ctx: &EvaluationContext<'_>) -> bool {
        match self.probe {
            Probe::Content(check) => {
                let html = ctx.html;
                match panic::catch_unwind(AssertUnwindSafe(|| check(html))) {
                    Ok(passed) => passed,
                    Err(_) => {
                        warn!(signal = self.name, "content check panicked; treating as not passed");
                        false
                    }
                }
            }
            Probe::Transport(TransportCheck::Secure) => ctx.transport.secure,
            Probe::Transport(TransportCheck::Fast) => ctx.transport.fast,
            Probe::Resource(path) => ctx.resource_present(path),
        }
    }
}
