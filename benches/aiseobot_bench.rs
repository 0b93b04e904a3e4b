// SPDX-License-Identifier: PMPL-1.0-or-later
//! Benchmarks for signal evaluation and report rendering

use aiseobot::analyzer::{compute_score, AnalysisReport, ReportMeta, SignalResult};
use aiseobot::report::render;
use aiseobot::signals::{catalog, EvaluationContext, ResourceStatus, TransportInfo};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_page() -> String {
    let mut html = String::from(
        "<html><head><meta name=\"description\" content=\"x\">\
         <script type=\"application/ld+json\">{}</script></head><body>",
    );
    for i in 0..500 {
        html.push_str(&format!("<section><h2 class=\"s\">Part {}</h2><p>Lorem ipsum.</p></section>", i));
    }
    html.push_str("</body></html>");
    html
}

fn evaluate_all(ctx: &EvaluationContext<'_>) -> Vec<SignalResult> {
    catalog()
        .iter()
        .map(|s| SignalResult {
            id: s.id.to_string(),
            name: s.name.to_string(),
            kind: s.kind(),
            passed: s.evaluate(ctx),
            rationale: s.rationale.to_string(),
            weight: s.weight,
        })
        .collect()
}

fn bench_catalog_evaluation(c: &mut Criterion) {
    let html = sample_page();
    let resources = [
        ResourceStatus::new("/robots.txt", Some(200)),
        ResourceStatus::new("/sitemap.xml", Some(404)),
    ];
    let transport = TransportInfo {
        secure: true,
        fast: true,
    };

    c.bench_function("catalog_evaluation", |b| {
        b.iter(|| {
            let ctx = EvaluationContext::new(black_box(&html), transport, &resources);
            compute_score(&evaluate_all(&ctx))
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let html = sample_page();
    let ctx = EvaluationContext::new(&html, TransportInfo::default(), &[]);
    let signals = evaluate_all(&ctx);
    let report = AnalysisReport {
        domain: "example.com".to_string(),
        meta: ReportMeta {
            is_reachable: true,
            is_secure: false,
            response_time_seconds: 0.42,
            is_fast: false,
            score: compute_score(&signals),
        },
        signals,
    };

    c.bench_function("render_text", |b| b.iter(|| render(black_box(&report))));
}

criterion_group!(benches, bench_catalog_evaluation, bench_render);
criterion_main!(benches);
