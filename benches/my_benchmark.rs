use criterion::{black_box, criterion_group, criterion_main, Criterion};
use overlap_measures::{jaccard_similarity_chars, rank_terms};

fn benchmark_jaccard_similarity(c: &mut Criterion) {
    c.bench_function("jaccard_similarity_chars", |b| {
        b.iter(|| jaccard_similarity_chars(black_box("mississippi"), black_box("missouri")))
    });
}

fn benchmark_rank_terms(c: &mut Criterion) {
    let candidates = vec![
        "night".to_string(),
        "nacht".to_string(),
        "nicht".to_string(),
        "natt".to_string(),
        "noch".to_string(),
        "noc".to_string(),
        "tag".to_string(),
        "dag".to_string(),
    ];

    c.bench_function("rank_terms", |b| {
        b.iter(|| rank_terms(black_box("night"), black_box(&candidates)))
    });
}

criterion_group!(benches, benchmark_jaccard_similarity, benchmark_rank_terms);
criterion_main!(benches);
