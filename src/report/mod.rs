// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Report rendering.
//!
//! Supports two output formats:
//! - Text: the human-readable readiness report
//! - JSON: the structured report plus its letter grade
//!
//! Renderers are pure: the same report always renders to the same bytes.

use crate::analyzer::{AnalysisReport, SignalResult};
use crate::error::Result;
use serde::Serialize;

const CALL_TO_ACTION_URL: &str = "https://aiseoscan.dev";

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Letter grade. Thresholds: A >= 80, B >= 65, C >= 45, otherwise D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn from_score(score: u32) -> Self {
        match score {
            80.. => Grade::A,
            65..=79 => Grade::B,
            45..=64 => Grade::C,
            _ => Grade::D,
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            Grade::A => "Excellent AI SEO readiness",
            Grade::B => "Good — a few improvements will help",
            Grade::C => "Average — AI engines may overlook your content",
            Grade::D => "Poor — significant AI SEO gaps detected",
        }
    }

    /// Severity marker shown next to the grade
    pub fn marker(self) -> &'static str {
        match self {
            Grade::A => "🟢",
            Grade::B => "🟡",
            Grade::C => "🟠",
            Grade::D => "🔴",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        };
        write!(f, "{}", letter)
    }
}

/// "What this means" tier. Its thresholds (75, 50) are a separate table
/// from [`Grade`] and intentionally do not line up with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlook {
    WellPositioned,
    Overlooked,
    Ignored,
}

impl Outlook {
    pub fn from_score(score: u32) -> Self {
        match score {
            75.. => Outlook::WellPositioned,
            50..=74 => Outlook::Overlooked,
            _ => Outlook::Ignored,
        }
    }

    pub fn lines(self) -> [&'static str; 2] {
        match self {
            Outlook::WellPositioned => [
                "Your site is well-positioned to be cited by ChatGPT,",
                "Perplexity, Copilot, and Gemini. Keep it maintained.",
            ],
            Outlook::Overlooked => [
                "AI engines can find your site but may skip it in favor",
                "of better-structured competitors. Fix the ❌ signals above.",
            ],
            Outlook::Ignored => [
                "AI search engines will likely ignore your content entirely.",
                "Your competitors with better structure will be cited instead.",
            ],
        }
    }
}

/// Render a report in the requested format
pub fn generate_report(report: &AnalysisReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Failing signals, highest weight first; equal weights keep catalog order
pub fn remediation_order(report: &AnalysisReport) -> Vec<&SignalResult> {
    let mut failed = report.failed();
    failed.sort_by(|a, b| b.weight.cmp(&a.weight));
    failed
}

/// Human-readable text report
pub fn render(report: &AnalysisReport) -> String {
    let heavy = "=".repeat(62);
    let light = "─".repeat(62);
    let score = report.meta.score;
    let grade = Grade::from_score(score);
    let passed = report.passed();
    let mut output = String::new();

    output.push_str(&format!("\n{}\n", heavy));
    output.push_str("  🤖 AI SEO Readiness Report\n");
    output.push_str(&format!("  Site: {}\n", report.domain));
    // Debug keeps the trailing ".0" on whole seconds
    output.push_str(&format!(
        "  Response time: {:?}s\n",
        report.meta.response_time_seconds
    ));
    output.push_str(&format!("{}\n", heavy));

    output.push_str(&format!(
        "\n  AI READINESS SCORE: {}/100  |  Grade: {}  {}\n",
        score,
        grade,
        grade.marker()
    ));
    output.push_str(&format!("  {}\n", grade.verdict()));

    output.push_str(&format!("\n{}\n", light));
    output.push_str(&format!(
        "  SIGNALS DETECTED  ({}/{} passing)\n",
        passed.len(),
        report.signals.len()
    ));
    output.push_str(&format!("{}\n", light));
    for signal in &passed {
        output.push_str(&format!("  ✅ {}\n", signal.name));
    }

    let failed = remediation_order(report);
    if !failed.is_empty() {
        output.push_str(&format!("\n{}\n", light));
        output.push_str("  MISSING SIGNALS  — AI engines may skip your content\n");
        output.push_str(&format!("{}\n", light));
        for signal in failed {
            output.push_str(&format!(
                "  ❌ {}  (impact: {}pts)\n",
                signal.name, signal.weight
            ));
            output.push_str(&format!("     → {}\n", signal.rationale));
        }
    }

    output.push_str(&format!("\n{}\n", light));
    output.push_str("  WHAT THIS MEANS FOR AI SEARCH\n");
    output.push_str(&format!("{}\n", light));
    for line in Outlook::from_score(score).lines() {
        output.push_str(&format!("  {}\n", line));
    }

    output.push_str(&format!("\n{}\n", heavy));
    output.push_str("  📊 Get your full AI SEO audit:\n");
    output.push_str("  → Schema errors, content structure analysis, AI readiness\n");
    output.push_str("     score breakdown, and competitor comparison\n");
    output.push_str(&format!("  👉  {}\n", CALL_TO_ACTION_URL));
    output.push_str(&format!("{}\n", heavy));

    output
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a AnalysisReport,
    grade: Grade,
}

/// Structured JSON report
pub fn render_json(report: &AnalysisReport) -> Result<String> {
    let json = JsonReport {
        report,
        grade: Grade::from_score(report.meta.score),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}
