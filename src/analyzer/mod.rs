// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Site analysis: fetch, evaluate every signal, score

pub mod target;

pub use target::Target;

use crate::config::FetchConfig;
use crate::error::{AiseoError, Result};
use crate::fetcher::Fetch;
use crate::signals::{
    self, catalog::resource_paths, EvaluationContext, ResourceStatus, SignalKind, TransportInfo,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Outcome of one signal for one site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub id: String,
    pub name: String,
    pub kind: SignalKind,
    pub passed: bool,
    pub rationale: String,
    pub weight: u32,
}

/// Homepage facts and the composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub is_reachable: bool,
    pub is_secure: bool,
    /// Rounded to two decimals
    pub response_time_seconds: f64,
    pub is_fast: bool,
    /// 0..=100
    pub score: u32,
}

/// Full result of analyzing one site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub domain: String,
    /// One entry per catalog signal, in catalog order
    pub signals: Vec<SignalResult>,
    pub meta: ReportMeta,
}

impl AnalysisReport {
    /// Look up a signal by name
    pub fn signal(&self, name: &str) -> Option<&SignalResult> {
        self.signals.iter().find(|s| s.name == name)
    }

    pub fn passed(&self) -> Vec<&SignalResult> {
        self.signals.iter().filter(|s| s.passed).collect()
    }

    pub fn failed(&self) -> Vec<&SignalResult> {
        self.signals.iter().filter(|s| !s.passed).collect()
    }

    pub fn total_weight(&self) -> u32 {
        self.signals.iter().map(|s| s.weight).sum()
    }

    pub fn earned_weight(&self) -> u32 {
        self.signals.iter().filter(|s| s.passed).map(|s| s.weight).sum()
    }
}

/// Weighted percentage of passing signals, truncated toward zero
pub fn compute_score(signals: &[SignalResult]) -> u32 {
    let total: u32 = signals.iter().map(|s| s.weight).sum();
    if total == 0 {
        return 0;
    }
    let earned: u32 = signals.iter().filter(|s| s.passed).map(|s| s.weight).sum();
    earned * 100 / total
}

/// Runs the three fetches and scores the site
pub struct SiteAnalyzer<F: Fetch> {
    fetcher: F,
    config: FetchConfig,
}

impl<F: Fetch> SiteAnalyzer<F> {
    pub fn new(fetcher: F, config: FetchConfig) -> Self {
        Self { fetcher, config }
    }

    /// Analyze a domain or URL. Fails only if the homepage is unreachable
    /// or the input is not a domain.
    pub async fn analyze(&self, input: &str) -> Result<AnalysisReport> {
        let target = Target::parse(input)?;
        self.analyze_target(&target).await
    }

    pub async fn analyze_target(&self, target: &Target) -> Result<AnalysisReport> {
        let homepage_url = target.homepage();
        info!(domain = target.domain(), url = %homepage_url, "analyzing");

        let homepage = self
            .fetcher
            .fetch(homepage_url, self.config.homepage_timeout())
            .await?;

        if !homepage.is_success() {
            return Err(AiseoError::Unreachable {
                url: homepage_url.to_string(),
                reason: format!("HTTP status {}", homepage.status),
            });
        }

        let elapsed = homepage.elapsed.as_secs_f64();
        let transport = TransportInfo {
            secure: homepage.final_url.scheme() == "https",
            fast: elapsed < self.config.fast_threshold_secs,
        };

        let mut resources = Vec::new();
        for path in resource_paths() {
            let status = match self.probe_resource(target, path).await {
                Ok(status) => Some(status),
                Err(e) => {
                    warn!(error = %e, "auxiliary resource unavailable");
                    None
                }
            };
            resources.push(ResourceStatus::new(path, status));
        }

        let ctx = EvaluationContext::new(&homepage.body, transport, &resources);
        let results: Vec<SignalResult> = signals::catalog()
            .iter()
            .map(|signal| SignalResult {
                id: signal.id.to_string(),
                name: signal.name.to_string(),
                kind: signal.kind(),
                passed: signal.evaluate(&ctx),
                rationale: signal.rationale.to_string(),
                weight: signal.weight,
            })
            .collect();

        let score = compute_score(&results);
        info!(domain = target.domain(), score, "analysis complete");

        Ok(AnalysisReport {
            domain: target.domain().to_string(),
            signals: results,
            meta: ReportMeta {
                is_reachable: true,
                is_secure: transport.secure,
                response_time_seconds: (elapsed * 100.0).round() / 100.0,
                is_fast: transport.fast,
                score,
            },
        })
    }

    async fn probe_resource(&self, target: &Target, path: &str) -> Result<u16> {
        let url = target.resource(path)?;
        self.fetcher
            .fetch(&url, self.config.auxiliary_timeout())
            .await
            .map(|r| r.status)
            .map_err(|e| AiseoError::AuxiliaryFetch {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}
