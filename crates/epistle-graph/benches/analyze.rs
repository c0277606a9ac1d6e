//! Criterion benchmarks for the analysis pipeline on a synthetic archive.

use criterion::{Criterion, criterion_group, criterion_main};

use epistle_core::Mention;
use epistle_core::expand::Role;
use epistle_graph::{AnalyzerConfig, EdgeFilter, analyze, build_cooccurrence};

/// Synthetic archive: `documents` letters over a rotating cast, so
/// neighboring persons co-occur repeatedly and clear the threshold.
fn synthetic_mentions(documents: usize, persons: usize) -> Vec<Mention> {
    let mut mentions = Vec::with_capacity(documents * 3);
    for d in 0..documents {
        let document_id = format!("doc-{d:04}");
        for offset in 0..3 {
            let p = (d + offset * 7) % persons;
            mentions.push(Mention {
                document_id: document_id.clone(),
                person: format!("person-{p:03}"),
                role: Role::Reference,
            });
        }
    }
    mentions
}

fn bench_pipeline(c: &mut Criterion) {
    let mentions = synthetic_mentions(500, 60);

    c.bench_function("cooccurrence_500_docs", |b| {
        b.iter(|| build_cooccurrence(std::hint::black_box(&mentions)));
    });

    let co = build_cooccurrence(&mentions);
    let filter = EdgeFilter::new(3, "u");

    c.bench_function("edge_filter_60_persons", |b| {
        b.iter(|| filter.filter(std::hint::black_box(&co)));
    });

    let edges = filter.filter(&co);
    let config = AnalyzerConfig::default();

    c.bench_function("analyze_filtered_network", |b| {
        b.iter(|| analyze(std::hint::black_box(&edges), &config));
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
