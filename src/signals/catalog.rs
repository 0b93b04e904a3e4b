// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! The reference signal catalog.
//!
//! | Signal                       | Kind      | Weight |
//! |------------------------------|-----------|--------|
//! | Schema Markup (JSON-LD)      | content   | 15     |
//! | Author / Expertise signal    | content   | 10     |
//! | FAQ or Q&A content           | content   | 10     |
//! | Heading structure (H1/H2/H3) | content   | 8      |
//! | Meta description             | content   | 8      |
//! | Open Graph tags              | content   | 7      |
//! | Canonical URL tag            | content   | 7      |
//! | HTTPS / Secure connection    | transport | 8      |
//! | robots.txt present           | resource  | 5      |
//! | sitemap.xml present          | resource  | 7      |
//! | Fast response (<2s)          | transport | 8      |
//! | Viewport / Mobile-friendly   | content   | 7      |

use super::{Probe, SignalDefinition, TransportCheck};
use regex::Regex;
use std::sync::LazyLock;

pub const ROBOTS_PATH: &str = "/robots.txt";
pub const SITEMAP_PATH: &str = "/sitemap.xml";

static HEADING_TAG: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)<h[123][^>]*>").ok());

static CATALOG: [SignalDefinition; 12] = [
    SignalDefinition {
        id: "AISEO-001",
        name: "Schema Markup (JSON-LD)",
        rationale: "AI engines use structured data to understand entities and facts",
        weight: 15,
        probe: Probe::Content(has_json_ld),
    },
    SignalDefinition {
        id: "AISEO-002",
        name: "Author / Expertise signal",
        rationale: "E-E-A-T: AI prefers content with identifiable authors",
        weight: 10,
        probe: Probe::Content(has_author),
    },
    SignalDefinition {
        id: "AISEO-003",
        name: "FAQ or Q&A content",
        rationale: "AI engines love extracting Q&A pairs as direct answers",
        weight: 10,
        probe: Probe::Content(has_faq),
    },
    SignalDefinition {
        id: "AISEO-004",
        name: "Heading structure (H1/H2/H3)",
        rationale: "Clear hierarchy helps AI parse and chunk your content",
        weight: 8,
        probe: Probe::Content(has_headings),
    },
    SignalDefinition {
        id: "AISEO-005",
        name: "Meta description",
        rationale: "Used as fallback summary when AI cites your page",
        weight: 8,
        probe: Probe::Content(has_meta_description),
    },
    SignalDefinition {
        id: "AISEO-006",
        name: "Open Graph tags",
        rationale: "Helps AI engines identify canonical title and description",
        weight: 7,
        probe: Probe::Content(has_open_graph),
    },
    SignalDefinition {
        id: "AISEO-007",
        name: "Canonical URL tag",
        rationale: "Prevents AI from citing duplicate/wrong version of your page",
        weight: 7,
        probe: Probe::Content(has_canonical),
    },
    SignalDefinition {
        id: "AISEO-008",
        name: "HTTPS / Secure connection",
        rationale: "AI engines deprioritize non-secure sources",
        weight: 8,
        probe: Probe::Transport(TransportCheck::Secure),
    },
    SignalDefinition {
        id: "AISEO-009",
        name: "robots.txt present",
        rationale: "Signals a technically maintained, crawlable website",
        weight: 5,
        probe: Probe::Resource(ROBOTS_PATH),
    },
    SignalDefinition {
        id: "AISEO-010",
        name: "sitemap.xml present",
        rationale: "Helps AI crawlers discover all your content efficiently",
        weight: 7,
        probe: Probe::Resource(SITEMAP_PATH),
    },
    SignalDefinition {
        id: "AISEO-011",
        name: "Fast response (<2s)",
        rationale: "Slow sites get deprioritized in AI-driven search ranking",
        weight: 8,
        probe: Probe::Transport(TransportCheck::Fast),
    },
    SignalDefinition {
        id: "AISEO-012",
        name: "Viewport / Mobile-friendly",
        rationale: "Mobile-first indexing affects AI crawl priority",
        weight: 7,
        probe: Probe::Content(has_viewport),
    },
];

/// The catalog in declaration order
pub fn catalog() -> &'static [SignalDefinition] {
    &CATALOG
}

pub fn total_weight() -> u32 {
    CATALOG.iter().map(|s| s.weight).sum()
}

/// Paths of every auxiliary resource the catalog asks about, in order
pub fn resource_paths() -> Vec<&'static str> {
    CATALOG
        .iter()
        .filter_map(|s| match s.probe {
            Probe::Resource(path) => Some(path),
            _ => None,
        })
        .collect()
}

fn contains_any_lowercase(html: &str, needles: &[&str]) -> bool {
    let lower = html.to_lowercase();
    needles.iter().any(|n| lower.contains(n))
}

fn has_json_ld(html: &str) -> bool {
    html.contains("application/ld+json")
}

fn has_author(html: &str) -> bool {
    contains_any_lowercase(html, &["author", "byline", "written by"])
}

fn has_faq(html: &str) -> bool {
    contains_any_lowercase(html, &["faqpage", "faq", "frequently asked", "question"])
}

fn has_headings(html: &str) -> bool {
    HEADING_TAG.as_ref().is_some_and(|re| re.is_match(html))
}

fn has_meta_description(html: &str) -> bool {
    contains_any_lowercase(html, &["name=\"description\"", "name='description'"])
}

fn has_open_graph(html: &str) -> bool {
    contains_any_lowercase(html, &["property=\"og:", "property='og:"])
}

fn has_canonical(html: &str) -> bool {
    contains_any_lowercase(html, &["rel=\"canonical\"", "rel='canonical'"])
}

fn has_viewport(html: &str) -> bool {
    contains_any_lowercase(html, &["name=\"viewport\"", "name='viewport'"])
}
