use crate::core::{filters::matches_preferences, scoring::calculate_match_score};
use crate::models::{
    FitnessProfile, MatchPreference, PartnerRecord, ScoreBreakdown, ScoringWeights,
};

/// Result of the recommendation pipeline
#[derive(Debug)]
pub struct MatchResult {
    pub partners: Vec<PartnerRecord>,
    pub total_candidates: usize,
}

/// Recommendation pipeline: preference filter, score, rank, materialize
///
/// # Pipeline stages
/// 1. Hard preference filtering (active, gender, age)
/// 2. Compatibility scoring against the viewer
/// 3. Minimum-score threshold
/// 4. Ranking and truncation
///
/// Output records are sorted descending by score with name as the
/// deterministic tie-break, so downstream consumers can rely on feed order.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    min_score: f64,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, min_score: f64) -> Self {
        Self { weights, min_score }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            min_score: 20.0,
        }
    }

    /// Score a single candidate against the viewer
    pub fn score(&self, viewer: &FitnessProfile, candidate: &FitnessProfile) -> (f64, ScoreBreakdown) {
        calculate_match_score(viewer, candidate, &self.weights)
    }

    /// Produce ranked partner recommendations for a viewer
    ///
    /// # Arguments
    /// * `viewer` - The requesting user's fitness profile
    /// * `preferences` - The viewer's hard matching preferences
    /// * `candidates` - All candidate profiles from the data source
    /// * `limit` - Maximum number of records to return
    pub fn recommend(
        &self,
        viewer: &FitnessProfile,
        preferences: &MatchPreference,
        candidates: &[FitnessProfile],
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut scored: Vec<(f64, PartnerRecord)> = candidates
            .iter()
            .filter(|candidate| candidate.user_id != viewer.user_id)
            .filter(|candidate| matches_preferences(candidate, preferences))
            .filter_map(|candidate| {
                let (score, _breakdown) = self.score(viewer, candidate);
                if score > self.min_score {
                    Some((score, Self::materialize(candidate, score)))
                } else {
                    None
                }
            })
            .collect();

        scored.sort_by(|(score_a, rec_a), (score_b, rec_b)| {
            score_b
                .partial_cmp(score_a)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| rec_a.name.cmp(&rec_b.name))
        });

        scored.truncate(limit);

        MatchResult {
            partners: scored.into_iter().map(|(_, record)| record).collect(),
            total_candidates,
        }
    }

    /// Turn a scored candidate into a display record
    fn materialize(candidate: &FitnessProfile, score: f64) -> PartnerRecord {
        PartnerRecord {
            user_id: candidate.user_id.clone(),
            name: candidate.name.clone(),
            age: candidate.age,
            location: candidate.location_label(),
            workout_types: candidate.workout_types.clone(),
            schedule: candidate.preferred_schedule.clone(),
            match_score: score.round().clamp(0.0, 100.0) as u8,
            image_url: candidate.image_url.clone(),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FitnessLevel, GymLocation};

    fn gym(id: &str) -> GymLocation {
        GymLocation {
            gym_id: id.to_string(),
            name: format!("{} Gym", id),
            latitude: 47.6062,
            longitude: -122.3321,
        }
    }

    fn profile(id: &str, age: u8, goals: &[&str], schedule: &str) -> FitnessProfile {
        FitnessProfile {
            user_id: id.to_string(),
            name: format!("User {}", id),
            age,
            gender: None,
            workout_types: vec!["Strength Training".to_string(), "HIIT".to_string()],
            goals: goals.iter().map(|g| g.to_string()).collect(),
            preferred_schedule: schedule.to_string(),
            preferred_days: vec!["mon".to_string(), "wed".to_string()],
            fitness_level: FitnessLevel::Intermediate,
            preferred_gym: Some(gym("downtown")),
            image_url: None,
            is_active: true,
        }
    }

    fn viewer() -> FitnessProfile {
        profile(
            "viewer",
            28,
            &["Build Muscle", "Stay Consistent"],
            "Mornings (6-8 AM)",
        )
    }

    #[test]
    fn test_recommend_excludes_self() {
        let matcher = Matcher::with_default_weights();
        let viewer = viewer();
        let candidates = vec![viewer.clone()];

        let result = matcher.recommend(&viewer, &MatchPreference::default(), &candidates, 10);

        assert!(result.partners.is_empty());
        assert_eq!(result.total_candidates, 1);
    }

    #[test]
    fn test_recommend_applies_preferences() {
        let matcher = Matcher::with_default_weights();
        let viewer = viewer();
        let prefs = MatchPreference {
            gender_preference: "any".to_string(),
            min_age: 21,
            max_age: 30,
        };

        let candidates = vec![
            profile("young", 24, &["Build Muscle"], "Mornings (6-8 AM)"),
            profile("old", 45, &["Build Muscle"], "Mornings (6-8 AM)"),
        ];

        let result = matcher.recommend(&viewer, &prefs, &candidates, 10);

        assert_eq!(result.partners.len(), 1);
        assert_eq!(result.partners[0].user_id, "young");
    }

    #[test]
    fn test_recommend_sorted_descending() {
        let matcher = Matcher::with_default_weights();
        let viewer = viewer();

        let candidates = vec![
            // Weaker match: disjoint goals, different window
            profile("weak", 30, &["Run a Marathon"], "Evenings (6-8 PM)"),
            // Strong match: same goals and window
            profile("strong", 27, &["Build Muscle", "Stay Consistent"], "Mornings (6-8 AM)"),
        ];

        let result = matcher.recommend(&viewer, &MatchPreference::default(), &candidates, 10);

        assert!(!result.partners.is_empty());
        assert_eq!(result.partners[0].user_id, "strong");
        for pair in result.partners.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_recommend_respects_limit() {
        let matcher = Matcher::with_default_weights();
        let viewer = viewer();

        let candidates: Vec<FitnessProfile> = (0..20)
            .map(|i| {
                profile(
                    &format!("c{}", i),
                    22 + (i % 10) as u8,
                    &["Build Muscle"],
                    "Mornings (6-8 AM)",
                )
            })
            .collect();

        let result = matcher.recommend(&viewer, &MatchPreference::default(), &candidates, 5);

        assert_eq!(result.partners.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_threshold_drops_weak_candidates() {
        let matcher = Matcher::new(ScoringWeights::default(), 20.0);
        let viewer = viewer();

        // Disjoint on every component except level
        let weak = FitnessProfile {
            goals: vec!["Swim the Channel".to_string()],
            workout_types: vec!["Swimming".to_string()],
            preferred_schedule: "Nights (10-12 PM)".to_string(),
            preferred_days: vec!["sun".to_string()],
            preferred_gym: None,
            ..profile("weak", 30, &[], "x")
        };

        let result = matcher.recommend(&viewer, &MatchPreference::default(), &[weak], 10);

        // level-only contribution = 0.2 * 100 = 20, not above the threshold
        assert!(result.partners.is_empty());
    }

    #[test]
    fn test_equal_scores_tie_break_by_name() {
        let matcher = Matcher::with_default_weights();
        let viewer = viewer();

        let mut b = profile("b", 27, &["Build Muscle", "Stay Consistent"], "Mornings (6-8 AM)");
        let mut a = b.clone();
        a.user_id = "a".to_string();
        a.name = "Anna".to_string();
        b.name = "Zoe".to_string();

        let result = matcher.recommend(
            &viewer,
            &MatchPreference::default(),
            &[b.clone(), a.clone()],
            10,
        );

        assert_eq!(result.partners.len(), 2);
        assert_eq!(result.partners[0].name, "Anna");
        assert_eq!(result.partners[1].name, "Zoe");
    }
}
