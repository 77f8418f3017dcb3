use serde::{Deserialize, Serialize};

/// A candidate partner as shown in the discovery feed
///
/// `match_score` is supplied by the recommendation pipeline before the record
/// enters the feed; the query engine treats it as an opaque display attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerRecord {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub age: u8,
    pub location: String,
    #[serde(rename = "workoutTypes")]
    pub workout_types: Vec<String>,
    pub schedule: String,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

/// The user's current discovery filter state
///
/// Owned by the caller, rebuilt per request; the sentinel category "All"
/// disables category filtering and an empty search text disables search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    #[serde(rename = "selectedCategory")]
    pub selected_category: String,
    #[serde(rename = "searchText")]
    pub search_text: String,
}

impl QueryState {
    pub fn new(selected_category: impl Into<String>, search_text: impl Into<String>) -> Self {
        Self {
            selected_category: selected_category.into(),
            search_text: search_text.into(),
        }
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            selected_category: crate::core::query::ALL_CATEGORIES.to_string(),
            search_text: String::new(),
        }
    }
}

/// Self-reported fitness level, closed vocabulary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    /// Numeric rank used for level-distance scoring
    pub fn rank(&self) -> u8 {
        match self {
            FitnessLevel::Beginner => 1,
            FitnessLevel::Intermediate => 2,
            FitnessLevel::Advanced => 3,
        }
    }
}

/// A gym with coordinates for proximity scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GymLocation {
    #[serde(rename = "gymId")]
    pub gym_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Scoring-side view of a user: everything the compatibility scorer reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub age: u8,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(rename = "workoutTypes", default)]
    pub workout_types: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    /// Free-text time-window label, compared exactly and shown verbatim
    #[serde(rename = "preferredSchedule")]
    pub preferred_schedule: String,
    #[serde(rename = "preferredDays", default)]
    pub preferred_days: Vec<String>,
    #[serde(rename = "fitnessLevel", default)]
    pub fitness_level: FitnessLevel,
    #[serde(rename = "preferredGym", default)]
    pub preferred_gym: Option<GymLocation>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
}

impl FitnessProfile {
    /// Gym label shown as the record's location; empty when no gym is set
    pub fn location_label(&self) -> String {
        self.preferred_gym
            .as_ref()
            .map(|g| g.name.clone())
            .unwrap_or_default()
    }
}

fn default_true() -> bool {
    true
}

/// Hard matching preferences applied before scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchPreference {
    /// "any" disables gender filtering
    #[serde(rename = "genderPreference", default = "default_gender_preference")]
    pub gender_preference: String,
    #[serde(rename = "minAge")]
    pub min_age: u8,
    #[serde(rename = "maxAge")]
    pub max_age: u8,
}

fn default_gender_preference() -> String {
    "any".to_string()
}

impl Default for MatchPreference {
    fn default() -> Self {
        Self {
            gender_preference: default_gender_preference(),
            min_age: 18,
            max_age: 99,
        }
    }
}

/// Lifecycle of a match request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Accepted,
    Rejected,
}

impl MatchStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "pending" => Some(MatchStatus::Pending),
            "accepted" => Some(MatchStatus::Accepted),
            "rejected" => Some(MatchStatus::Rejected),
            _ => None,
        }
    }
}

/// A match between the viewer and a partner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    #[serde(rename = "matchId")]
    pub match_id: String,
    #[serde(rename = "partnerId")]
    pub partner_id: String,
    #[serde(rename = "partnerName")]
    pub partner_name: String,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "workoutTypes")]
    pub workout_types: Vec<String>,
    pub status: MatchStatus,
    #[serde(rename = "lastMessage", default)]
    pub last_message: Option<String>,
    #[serde(rename = "lastActive", default)]
    pub last_active: Option<String>,
    #[serde(default)]
    pub unread: u32,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Profile-page statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(rename = "workoutsCompleted")]
    pub workouts_completed: u32,
    #[serde(rename = "partnersMatched")]
    pub partners_matched: u32,
    #[serde(rename = "activeStreak")]
    pub active_streak: u32,
}

/// The viewer's own account as rendered on the profile page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub age: u8,
    pub location: String,
    pub bio: String,
    #[serde(rename = "workoutTypes")]
    pub workout_types: Vec<String>,
    pub schedule: String,
    pub goals: Vec<String>,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    pub stats: UserStats,
}

/// Per-component contribution to the overall score, 0-100 each
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub goals: f64,
    pub schedule: f64,
    pub level: f64,
    pub location: f64,
}

/// Weights for the compatibility score components
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub goals: f64,
    pub schedule: f64,
    pub level: f64,
    pub location: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            goals: 0.30,
            schedule: 0.30,
            level: 0.20,
            location: 0.20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_state_defaults() {
        let state = QueryState::default();
        assert_eq!(state.selected_category, "All");
        assert_eq!(state.search_text, "");
    }

    #[test]
    fn test_fitness_level_rank() {
        assert_eq!(FitnessLevel::Beginner.rank(), 1);
        assert_eq!(FitnessLevel::Intermediate.rank(), 2);
        assert_eq!(FitnessLevel::Advanced.rank(), 3);
    }

    #[test]
    fn test_match_status_parse() {
        assert_eq!(MatchStatus::parse("Pending"), Some(MatchStatus::Pending));
        assert_eq!(MatchStatus::parse("accepted"), Some(MatchStatus::Accepted));
        assert_eq!(MatchStatus::parse("unknown"), None);
    }

    #[test]
    fn test_partner_record_wire_names() {
        let record = PartnerRecord {
            user_id: "u1".to_string(),
            name: "Alex Chen".to_string(),
            age: 28,
            location: "Downtown Gym".to_string(),
            workout_types: vec!["HIIT".to_string()],
            schedule: "Mornings (6-8 AM)".to_string(),
            match_score: 95,
            image_url: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["matchScore"], 95);
        assert_eq!(json["workoutTypes"][0], "HIIT");
    }
}
