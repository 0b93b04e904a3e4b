// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! aiseobot: AI Search Readiness Checker
//!
//! Fetches a site's homepage, `robots.txt` and `sitemap.xml`, checks them
//! against a fixed catalog of weighted signals that AI search engines
//! (ChatGPT, Perplexity, Gemini, Copilot) use when deciding what to cite,
//! and produces a 0-100 readiness score with a letter grade.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod report;
pub mod signals;

pub use analyzer::{compute_score, AnalysisReport, ReportMeta, SignalResult, SiteAnalyzer, Target};
pub use config::Config;
pub use error::{AiseoError, Result};
pub use fetcher::{Fetch, FetchResponse, HttpFetcher};
pub use report::{generate_report, render, render_json, Grade, OutputFormat};
pub use signals::{SignalDefinition, SignalKind};
