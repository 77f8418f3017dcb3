use std::collections::HashSet;

use crate::core::distance::haversine_distance;
use crate::models::{FitnessProfile, ScoreBreakdown, ScoringWeights};

/// Distance at which gym proximity bottoms out at zero
const MAX_PROXIMITY_KM: f64 = 50.0;

/// Calculate a compatibility score (0-100) between two fitness profiles
///
/// Scoring formula:
/// ```text
/// score = (
///     goal_alignment * 0.30 +      # shared goals and workout types
///     schedule_score * 0.30 +      # same time window, shared days
///     level_score    * 0.20 +      # adjacent fitness levels
///     location_score * 0.20        # same gym or nearby gyms
/// ) * 100
/// ```
///
/// The score is symmetric; components round to one decimal in the breakdown.
pub fn calculate_match_score(
    a: &FitnessProfile,
    b: &FitnessProfile,
    weights: &ScoringWeights,
) -> (f64, ScoreBreakdown) {
    let goal_score = goal_alignment(a, b);
    let schedule_score = schedule_compatibility(a, b);
    let level_score = fitness_level_compatibility(a, b);
    let location_score = location_proximity(a, b);

    let overall = (goal_score * weights.goals
        + schedule_score * weights.schedule
        + level_score * weights.level
        + location_score * weights.location)
        * 100.0;

    let breakdown = ScoreBreakdown {
        goals: round1(goal_score * 100.0),
        schedule: round1(schedule_score * 100.0),
        level: round1(level_score * 100.0),
        location: round1(location_score * 100.0),
    };

    (round1(overall.clamp(0.0, 100.0)), breakdown)
}

/// Score (0-1) for shared fitness goals and workout types
///
/// Jaccard overlap of goals weighted 0.6 and of workout types weighted 0.4.
/// No goals on either side means no basis for alignment.
pub fn goal_alignment(a: &FitnessProfile, b: &FitnessProfile) -> f64 {
    if a.goals.is_empty() || b.goals.is_empty() {
        return 0.0;
    }

    let goals_score = jaccard(&a.goals, &b.goals);

    let types_score = if a.workout_types.is_empty() || b.workout_types.is_empty() {
        0.0
    } else {
        jaccard(&a.workout_types, &b.workout_types)
    };

    goals_score * 0.6 + types_score * 0.4
}

/// Score (0-1) for schedule compatibility
///
/// Exact time-window label match is half the score; overlap of preferred
/// days is the other half.
pub fn schedule_compatibility(a: &FitnessProfile, b: &FitnessProfile) -> f64 {
    let window_score = if a.preferred_schedule == b.preferred_schedule {
        1.0
    } else {
        0.0
    };

    let days_score = if a.preferred_days.is_empty() || b.preferred_days.is_empty() {
        0.0
    } else {
        jaccard(&a.preferred_days, &b.preferred_days)
    };

    window_score * 0.5 + days_score * 0.5
}

/// Score (0-1) for fitness level closeness
///
/// Same level scores 1.0, adjacent levels 0.5, two levels apart 0.0.
pub fn fitness_level_compatibility(a: &FitnessProfile, b: &FitnessProfile) -> f64 {
    match a.fitness_level.rank().abs_diff(b.fitness_level.rank()) {
        0 => 1.0,
        1 => 0.5,
        _ => 0.0,
    }
}

/// Score (0-1) for gym proximity
///
/// Same preferred gym scores 1.0; otherwise the score decays linearly with
/// the distance between the two gyms, reaching 0.0 at 50 km. Missing gym
/// coordinates on either side score 0.0.
pub fn location_proximity(a: &FitnessProfile, b: &FitnessProfile) -> f64 {
    let (gym_a, gym_b) = match (&a.preferred_gym, &b.preferred_gym) {
        (Some(ga), Some(gb)) => (ga, gb),
        _ => return 0.0,
    };

    if gym_a.gym_id == gym_b.gym_id {
        return 1.0;
    }

    let dist = haversine_distance(
        gym_a.latitude,
        gym_a.longitude,
        gym_b.latitude,
        gym_b.longitude,
    );

    ((MAX_PROXIMITY_KM - dist) / MAX_PROXIMITY_KM).max(0.0)
}

fn jaccard(a: &[String], b: &[String]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }

    set_a.intersection(&set_b).count() as f64 / union as f64
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
