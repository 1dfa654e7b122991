use criterion::{criterion_group, criterion_main, Criterion};

use quadrant_core::config::RetrievalConfig;
use quadrant_core::models::ExampleOrigin;
use quadrant_core::quadrant::QuadrantId;
use quadrant_core::traits::IEmbeddingProvider;
use quadrant_corpus::CorpusStore;
use quadrant_embeddings::providers::HashedNgramProvider;
use quadrant_retrieval::RetrievalEngine;

/// Build a corpus of ~500 synthetic task titles with embeddings warmed.
fn build_corpus(provider: &HashedNgramProvider) -> CorpusStore {
    let verbs = ["fix", "plan", "review", "delete", "prepare", "schedule", "clean", "ship"];
    let objects = ["report", "bug", "meeting", "cache", "release", "emails", "backlog", "files"];

    let corpus = CorpusStore::new();
    for i in 0..500 {
        let text = format!(
            "{} the {} {}",
            verbs[i % verbs.len()],
            objects[(i / 8) % objects.len()],
            i
        );
        let example = corpus.add_example(text, QuadrantId::ALL[i % 4], ExampleOrigin::Seed);
        // Warm the lazy embedding so the bench measures the scan, not
        // first-touch embedding cost.
        example.embedding_with(provider).unwrap();
    }
    corpus
}

fn bench_brute_force_scan(c: &mut Criterion) {
    let provider = HashedNgramProvider::new(384);
    let corpus = build_corpus(&provider);
    let engine = RetrievalEngine::new(RetrievalConfig::default());
    let query = provider.embed("fix the urgent report").unwrap();

    c.bench_function("find_similar_500_examples", |b| {
        b.iter(|| {
            engine.find_similar(&query, &corpus, &provider).unwrap();
        });
    });
}

fn bench_cold_corpus_scan(c: &mut Criterion) {
    let provider = HashedNgramProvider::new(384);
    let engine = RetrievalEngine::new(RetrievalConfig::default());
    let query = provider.embed("fix the urgent report").unwrap();

    c.bench_function("find_similar_100_cold_examples", |b| {
        b.iter_with_setup(
            || {
                let corpus = CorpusStore::new();
                for i in 0..100 {
                    corpus.add_example(
                        format!("task number {i}"),
                        QuadrantId::ALL[i % 4],
                        ExampleOrigin::Seed,
                    );
                }
                corpus
            },
            |corpus| {
                engine.find_similar(&query, &corpus, &provider).unwrap();
            },
        );
    });
}

criterion_group!(benches, bench_brute_force_scan, bench_cold_corpus_scan);
criterion_main!(benches);
