use criterion::{criterion_group, criterion_main, Criterion};
use sentiq_explain::{score_tokens, Lexicon};
use std::hint::black_box;

fn bench_score_long_review(c: &mut Criterion) {
    let lexicon = Lexicon::default();
    let review = "the film was not great but absolutely entertaining and never boring "
        .repeat(20);

    c.bench_function("score_long_review", |b| {
        b.iter(|| score_tokens(black_box(&review), &lexicon));
    });
}

criterion_group!(benches, bench_score_long_review);
criterion_main!(benches);
