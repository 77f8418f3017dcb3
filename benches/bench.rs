// Criterion benchmarks for GymBuddy Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gymbuddy_match::core::{calculate_match_score, filter_partners, Matcher};
use gymbuddy_match::models::{
    FitnessLevel, FitnessProfile, GymLocation, MatchPreference, PartnerRecord, QueryState,
    ScoringWeights,
};

const GYMS: &[&str] = &["Downtown Gym", "FitLife Center", "PowerHouse Gym"];
const TYPES: &[&str] = &["Strength Training", "CrossFit", "Cardio", "HIIT", "Yoga", "Powerlifting"];

fn make_record(id: usize) -> PartnerRecord {
    PartnerRecord {
        user_id: format!("user-{}", id),
        name: format!("Partner {}", id),
        age: 22 + (id % 20) as u8,
        location: GYMS[id % GYMS.len()].to_string(),
        workout_types: vec![
            TYPES[id % TYPES.len()].to_string(),
            TYPES[(id + 1) % TYPES.len()].to_string(),
        ],
        schedule: "Mornings (6-8 AM)".to_string(),
        match_score: (100 - (id % 100)) as u8,
        image_url: None,
    }
}

fn make_profile(id: usize) -> FitnessProfile {
    FitnessProfile {
        user_id: format!("user-{}", id),
        name: format!("Partner {}", id),
        age: 22 + (id % 20) as u8,
        gender: None,
        workout_types: vec![TYPES[id % TYPES.len()].to_string()],
        goals: vec!["Build Muscle".to_string(), "Stay Consistent".to_string()],
        preferred_schedule: "Mornings (6-8 AM)".to_string(),
        preferred_days: vec!["mon".to_string(), "wed".to_string(), "fri".to_string()],
        fitness_level: FitnessLevel::Intermediate,
        preferred_gym: Some(GymLocation {
            gym_id: format!("gym-{}", id % GYMS.len()),
            name: GYMS[id % GYMS.len()].to_string(),
            latitude: 47.6062 + (id % GYMS.len()) as f64 * 0.01,
            longitude: -122.3321,
        }),
        image_url: None,
        is_active: true,
    }
}

fn bench_filter_partners(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_partners");

    // The filter runs per keystroke; keep it comfortable into the thousands
    for feed_size in [10, 100, 1000, 5000].iter() {
        let feed: Vec<PartnerRecord> = (0..*feed_size).map(make_record).collect();
        let state = QueryState::new("HIIT", "gym");

        group.bench_with_input(
            BenchmarkId::new("category_and_search", feed_size),
            feed_size,
            |b, _| {
                b.iter(|| filter_partners(black_box(&feed), black_box(&state)));
            },
        );
    }

    group.finish();
}

fn bench_identity_query(c: &mut Criterion) {
    let feed: Vec<PartnerRecord> = (0..1000).map(make_record).collect();
    let state = QueryState::default();

    c.bench_function("filter_partners_identity_1000", |b| {
        b.iter(|| filter_partners(black_box(&feed), black_box(&state)));
    });
}

fn bench_match_score(c: &mut Criterion) {
    let a = make_profile(0);
    let b_profile = make_profile(1);
    let weights = ScoringWeights::default();

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| {
            calculate_match_score(black_box(&a), black_box(&b_profile), black_box(&weights))
        });
    });
}

fn bench_recommend(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let viewer = make_profile(0);
    let preferences = MatchPreference::default();

    let mut group = c.benchmark_group("recommend");

    for candidate_count in [10, 100, 1000].iter() {
        let candidates: Vec<FitnessProfile> = (1..=*candidate_count).map(make_profile).collect();

        group.bench_with_input(
            BenchmarkId::new("pipeline", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.recommend(
                        black_box(&viewer),
                        black_box(&preferences),
                        black_box(&candidates),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_filter_partners,
    bench_identity_query,
    bench_match_score,
    bench_recommend
);

criterion_main!(benches);
