// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Integration tests for the HTTP fetcher and analyzer.
//!
//! All tests use wiremock - no real sites are contacted.

use aiseobot::config::{FetchConfig, DEFAULT_USER_AGENT};
use aiseobot::{AiseoError, Fetch, HttpFetcher, SiteAnalyzer, Target};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOMEPAGE: &str = r#"<!doctype html>
<html>
<head>
  <meta name="description" content="A site">
  <meta name="viewport" content="width=device-width">
  <script type="application/ld+json">{"@type":"Organization"}</script>
</head>
<body><h1>Welcome</h1></body>
</html>"#;

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(&FetchConfig::default()).unwrap()
}

async fn mount(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_sends_identifying_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let url = Url::parse(&server.uri()).unwrap();
    let response = fetcher().fetch(&url, Duration::from_secs(5)).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_fetch_decodes_invalid_utf8_lossily() {
    let server = MockServer::start().await;
    let mut bytes = b"<h1>caf".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe]);
    bytes.extend_from_slice(b"</h1>");
    mount(&server, "/", ResponseTemplate::new(200).set_body_bytes(bytes)).await;

    let url = Url::parse(&server.uri()).unwrap();
    let response = fetcher().fetch(&url, Duration::from_secs(5)).await.unwrap();

    assert!(response.body.starts_with("<h1>caf"));
    assert!(response.body.contains('\u{FFFD}'));
    assert!(response.body.ends_with("</h1>"));
}

#[tokio::test]
async fn test_fetch_returns_error_statuses() {
    let server = MockServer::start().await;
    mount(&server, "/robots.txt", ResponseTemplate::new(404)).await;

    let url = Url::parse(&format!("{}/robots.txt", server.uri())).unwrap();
    let response = fetcher().fetch(&url, Duration::from_secs(5)).await.unwrap();

    assert_eq!(response.status, 404);
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_fetch_times_out() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/",
        ResponseTemplate::new(200).set_delay(Duration::from_secs(3)),
    )
    .await;

    let url = Url::parse(&server.uri()).unwrap();
    let result = fetcher().fetch(&url, Duration::from_millis(200)).await;

    assert!(matches!(result, Err(AiseoError::Unreachable { .. })));
}

#[tokio::test]
async fn test_fetch_follows_redirects() {
    let server = MockServer::start().await;
    let first_hop = Duration::from_millis(300);
    mount(
        &server,
        "/",
        ResponseTemplate::new(301)
            .insert_header("location", "/home")
            .set_delay(first_hop),
    )
    .await;
    mount(&server, "/home", ResponseTemplate::new(200).set_body_string("home")).await;

    let url = Url::parse(&server.uri()).unwrap();
    let response = fetcher().fetch(&url, Duration::from_secs(5)).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "home");
    assert_eq!(response.final_url.path(), "/home");
    // Elapsed covers the whole redirect chain, not just the last hop.
    assert!(response.elapsed >= first_hop);
}

#[tokio::test]
async fn test_analyze_against_mock_site() {
    let server = MockServer::start().await;
    mount(&server, "/", ResponseTemplate::new(200).set_body_string(HOMEPAGE)).await;
    mount(
        &server,
        "/robots.txt",
        ResponseTemplate::new(200).set_body_string("User-agent: *\nAllow: /\n"),
    )
    .await;
    mount(&server, "/sitemap.xml", ResponseTemplate::new(404)).await;

    let target = Target::with_origin("https://example.com/", &server.uri()).unwrap();
    let analyzer = SiteAnalyzer::new(fetcher(), FetchConfig::default());
    let report = analyzer.analyze_target(&target).await.unwrap();

    assert_eq!(report.domain, "example.com");
    assert!(report.meta.is_reachable);
    // The mock server speaks plain HTTP
    assert!(!report.meta.is_secure);
    assert!(report.meta.is_fast);

    let passed = |name: &str| report.signal(name).unwrap().passed;
    assert!(passed("Schema Markup (JSON-LD)"));
    assert!(passed("Heading structure (H1/H2/H3)"));
    assert!(passed("Meta description"));
    assert!(passed("Viewport / Mobile-friendly"));
    assert!(passed("robots.txt present"));
    assert!(passed("Fast response (<2s)"));
    assert!(!passed("sitemap.xml present"));
    assert!(!passed("HTTPS / Secure connection"));
    assert!(!passed("Open Graph tags"));

    // 15 + 8 + 8 + 7 + 5 + 8
    assert_eq!(report.meta.score, 51);
}

#[tokio::test]
async fn test_analyze_homepage_server_error_is_unreachable() {
    let server = MockServer::start().await;
    mount(&server, "/", ResponseTemplate::new(500)).await;

    let target = Target::with_origin("example.com", &server.uri()).unwrap();
    let analyzer = SiteAnalyzer::new(fetcher(), FetchConfig::default());
    let result = analyzer.analyze_target(&target).await;

    match result {
        Err(AiseoError::Unreachable { reason, .. }) => assert!(reason.contains("500")),
        other => panic!("expected Unreachable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_analyze_connection_refused_is_unreachable() {
    let target = Target::with_origin("example.com", "http://127.0.0.1:1").unwrap();
    let analyzer = SiteAnalyzer::new(fetcher(), FetchConfig::default());
    let result = analyzer.analyze_target(&target).await;

    assert!(matches!(result, Err(AiseoError::Unreachable { .. })));
}
