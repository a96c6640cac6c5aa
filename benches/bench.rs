// Criterion benchmarks for SkillSwap Match

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use skillswap_match::core::{categorize, suggest_level, FixedJitter, Recommender};
use skillswap_match::models::{Candidate, ScoringWeights};
use std::sync::Arc;

const SKILL_POOL: &[&str] = &[
    "React", "Node.js", "Python", "Docker", "Kubernetes", "Figma", "SEO", "Flutter",
    "TensorFlow", "Rust", "Go", "Product Management", "Cybersecurity", "AWS", "Swift",
];

fn create_candidate(id: usize) -> Candidate {
    let skills = (0..1 + id % 6)
        .map(|offset| SKILL_POOL[(id + offset * 7) % SKILL_POOL.len()].to_string())
        .collect();

    Candidate {
        id: id.to_string(),
        name: format!("User {}", id),
        skills,
    }
}

fn requester_skills() -> Vec<String> {
    vec![
        "React Development".to_string(),
        "JavaScript".to_string(),
        "UI/UX Design".to_string(),
    ]
}

fn bench_categorize(c: &mut Criterion) {
    c.bench_function("categorize", |b| {
        b.iter(|| {
            for skill in SKILL_POOL {
                black_box(categorize(black_box(skill)));
            }
        });
    });
}

fn bench_suggest_level(c: &mut Criterion) {
    let description = "Comprehensive Node.js backend development expertise including scalable API design, \
        microservices architecture, and advanced database optimization. Expert in Express.js, middleware \
        development, authentication/authorization systems, and performance optimization.";

    c.bench_function("suggest_level", |b| {
        b.iter(|| suggest_level(black_box(description)));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::new(ScoringWeights::default(), Arc::new(FixedJitter::new(0.5)));
    let requester = requester_skills();

    let mut group = c.benchmark_group("recommend");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Candidate> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("recommend", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| recommender.recommend(black_box(&requester), black_box(&candidates)));
            },
        );
    }

    group.finish();
}

fn bench_random_jitter(c: &mut Criterion) {
    let recommender = Recommender::with_default_weights();
    let requester = requester_skills();
    let candidates: Vec<Candidate> = (0..100).map(create_candidate).collect();

    c.bench_function("recommend_100_candidates_thread_rng", |b| {
        b.iter(|| recommender.recommend(black_box(&requester), black_box(&candidates)));
    });
}

criterion_group!(
    benches,
    bench_categorize,
    bench_suggest_level,
    bench_recommend,
    bench_random_jitter
);

criterion_main!(benches);
