use crate::models::{FitnessProfile, MatchPreference};

/// Check if a candidate passes the viewer's hard preferences
///
/// Applied before scoring: inactive candidates never surface, and gender and
/// age are hard gates rather than score components.
#[inline]
pub fn matches_preferences(candidate: &FitnessProfile, preferences: &MatchPreference) -> bool {
    if !candidate.is_active {
        return false;
    }

    // Gender preference, with "any" as the pass-through sentinel
    if preferences.gender_preference != "any" {
        match &candidate.gender {
            Some(gender) if gender == &preferences.gender_preference => {}
            Some(_) => return false,
            // Unset gender is not filtered, mirroring the upstream behavior
            None => {}
        }
    }

    // Age range
    if candidate.age < preferences.min_age || candidate.age > preferences.max_age {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FitnessLevel;

    fn candidate(age: u8, gender: Option<&str>, is_active: bool) -> FitnessProfile {
        FitnessProfile {
            user_id: "candidate".to_string(),
            name: "Candidate".to_string(),
            age,
            gender: gender.map(|g| g.to_string()),
            workout_types: vec!["HIIT".to_string()],
            goals: vec!["Stay Consistent".to_string()],
            preferred_schedule: "Mornings (6-8 AM)".to_string(),
            preferred_days: vec!["mon".to_string()],
            fitness_level: FitnessLevel::Intermediate,
            preferred_gym: None,
            image_url: None,
            is_active,
        }
    }

    #[test]
    fn test_active_in_range_passes() {
        let prefs = MatchPreference {
            gender_preference: "any".to_string(),
            min_age: 21,
            max_age: 35,
        };

        assert!(matches_preferences(&candidate(28, None, true), &prefs));
    }

    #[test]
    fn test_inactive_filtered() {
        let prefs = MatchPreference::default();
        assert!(!matches_preferences(&candidate(28, None, false), &prefs));
    }

    #[test]
    fn test_age_gate() {
        let prefs = MatchPreference {
            gender_preference: "any".to_string(),
            min_age: 21,
            max_age: 35,
        };

        assert!(!matches_preferences(&candidate(40, None, true), &prefs));
        assert!(!matches_preferences(&candidate(18, None, true), &prefs));
    }

    #[test]
    fn test_gender_gate() {
        let prefs = MatchPreference {
            gender_preference: "female".to_string(),
            min_age: 18,
            max_age: 99,
        };

        assert!(matches_preferences(&candidate(28, Some("female"), true), &prefs));
        assert!(!matches_preferences(&candidate(28, Some("male"), true), &prefs));
        // Unset gender passes through
        assert!(matches_preferences(&candidate(28, None, true), &prefs));
    }
}
