use chrono::{Duration, Utc};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::core::Matcher;
use crate::models::{
    FitnessLevel, FitnessProfile, GymLocation, MatchEntry, MatchPreference, MatchStatus,
    PartnerRecord, UserAccount, UserStats,
};

/// Errors that can occur in the partner catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Seed file error: {0}")]
    SeedFile(#[from] std::io::Error),

    #[error("Seed parse error: {0}")]
    SeedParse(#[from] serde_json::Error),

    #[error("Partner not found: {0}")]
    PartnerNotFound(String),

    #[error("Match not found: {0}")]
    MatchNotFound(String),

    #[error("Cannot match with yourself")]
    SelfMatch,

    #[error("Match already exists with partner: {0}")]
    DuplicateMatch(String),

    #[error("Match is not pending: {0}")]
    NotPending(String),
}

/// Seed-file shape for a match entry; id and timestamp are assigned at load
#[derive(Debug, Clone, Deserialize)]
pub struct MatchSeed {
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
}

/// Everything the catalog needs to start serving
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSeed {
    pub viewer: FitnessProfile,
    pub account: UserAccount,
    #[serde(default)]
    pub preferences: MatchPreference,
    pub partners: Vec<FitnessProfile>,
    #[serde(default)]
    pub matches: Vec<MatchSeed>,
}

/// In-memory partner data source
///
/// Owns the viewer's account, the candidate profiles and the match list.
/// The discovery feed is scored and sorted once at load; the query engine
/// relies on that order and never re-sorts.
pub struct PartnerCatalog {
    viewer: FitnessProfile,
    account: UserAccount,
    preferences: MatchPreference,
    candidates: Vec<FitnessProfile>,
    feed: Vec<PartnerRecord>,
    matches: RwLock<Vec<MatchEntry>>,
}

impl PartnerCatalog {
    /// Build a catalog from a seed, scoring the feed with the given matcher
    pub fn from_seed(seed: CatalogSeed, matcher: &Matcher) -> Self {
        let result = matcher.recommend(
            &seed.viewer,
            &seed.preferences,
            &seed.partners,
            seed.partners.len(),
        );

        tracing::info!(
            "Catalog loaded: {} partners, {} in feed, {} seeded matches",
            seed.partners.len(),
            result.partners.len(),
            seed.matches.len()
        );

        let now = Utc::now();
        let matches = seed
            .matches
            .into_iter()
            .enumerate()
            .map(|(i, m)| MatchEntry {
                match_id: uuid::Uuid::new_v4().to_string(),
                partner_id: m.partner_id,
                partner_name: m.partner_name,
                match_score: m.match_score,
                workout_types: m.workout_types,
                status: m.status,
                last_message: m.last_message,
                last_active: m.last_active,
                unread: m.unread,
                // Stagger timestamps so seeded entries keep their order
                created_at: now - Duration::minutes(i as i64),
            })
            .collect();

        Self {
            viewer: seed.viewer,
            account: seed.account,
            preferences: seed.preferences,
            candidates: seed.partners,
            feed: result.partners,
            matches: RwLock::new(matches),
        }
    }

    /// Load the catalog from a JSON seed file, or fall back to the built-in seed
    pub fn load(seed_path: Option<&str>, matcher: &Matcher) -> Result<Self, CatalogError> {
        let seed = match seed_path {
            Some(path) => {
                tracing::info!("Loading catalog seed from {}", path);
                let contents = std::fs::read_to_string(path)?;
                serde_json::from_str(&contents)?
            }
            None => builtin_seed(),
        };

        Ok(Self::from_seed(seed, matcher))
    }

    /// The pre-scored, pre-sorted discovery feed
    pub fn partners(&self) -> &[PartnerRecord] {
        &self.feed
    }

    /// All candidate profiles, unscored
    pub fn candidate_profiles(&self) -> &[FitnessProfile] {
        &self.candidates
    }

    pub fn viewer(&self) -> &FitnessProfile {
        &self.viewer
    }

    pub fn preferences(&self) -> &MatchPreference {
        &self.preferences
    }

    pub fn account(&self) -> &UserAccount {
        &self.account
    }

    /// Find a candidate profile by id
    pub fn find_candidate(&self, partner_id: &str) -> Option<&FitnessProfile> {
        self.candidates.iter().find(|c| c.user_id == partner_id)
    }

    /// List matches, optionally filtered by status, newest first
    pub async fn list_matches(&self, status: Option<MatchStatus>) -> Vec<MatchEntry> {
        let matches = self.matches.read().await;
        let mut result: Vec<MatchEntry> = matches
            .iter()
            .filter(|m| status.map_or(true, |s| m.status == s))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        result
    }

    /// Create a pending match request towards a partner
    ///
    /// Rejects self-matches and duplicates in either direction; the score is
    /// computed by the caller so the catalog stays scoring-agnostic.
    pub async fn create_match_request(
        &self,
        partner_id: &str,
        match_score: u8,
        message: Option<String>,
    ) -> Result<MatchEntry, CatalogError> {
        if partner_id == self.viewer.user_id {
            return Err(CatalogError::SelfMatch);
        }

        let partner = self
            .find_candidate(partner_id)
            .ok_or_else(|| CatalogError::PartnerNotFound(partner_id.to_string()))?;

        let mut matches = self.matches.write().await;
        if matches.iter().any(|m| m.partner_id == partner_id) {
            return Err(CatalogError::DuplicateMatch(partner_id.to_string()));
        }

        let entry = MatchEntry {
            match_id: uuid::Uuid::new_v4().to_string(),
            partner_id: partner.user_id.clone(),
            partner_name: partner.name.clone(),
            match_score,
            workout_types: partner.workout_types.clone(),
            status: MatchStatus::Pending,
            last_message: message,
            last_active: None,
            unread: 0,
            created_at: Utc::now(),
        };

        matches.push(entry.clone());
        tracing::debug!("Match request created: {} -> {}", entry.match_id, partner_id);
        Ok(entry)
    }

    /// Accept a pending match
    pub async fn accept_match(&self, match_id: &str) -> Result<MatchEntry, CatalogError> {
        self.transition(match_id, MatchStatus::Accepted).await
    }

    /// Reject a pending match
    pub async fn reject_match(&self, match_id: &str) -> Result<MatchEntry, CatalogError> {
        self.transition(match_id, MatchStatus::Rejected).await
    }

    async fn transition(
        &self,
        match_id: &str,
        to: MatchStatus,
    ) -> Result<MatchEntry, CatalogError> {
        let mut matches = self.matches.write().await;
        let entry = matches
            .iter_mut()
            .find(|m| m.match_id == match_id)
            .ok_or_else(|| CatalogError::MatchNotFound(match_id.to_string()))?;

        if entry.status != MatchStatus::Pending {
            return Err(CatalogError::NotPending(match_id.to_string()));
        }

        entry.status = to;
        tracing::debug!("Match {} transitioned to {:?}", match_id, to);
        Ok(entry.clone())
    }
}

/// The built-in seed, reproducing the product's demo data
pub fn builtin_seed() -> CatalogSeed {
    let downtown = GymLocation {
        gym_id: "downtown-gym".to_string(),
        name: "Downtown Gym".to_string(),
        latitude: 47.6062,
        longitude: -122.3321,
    };
    let fitlife = GymLocation {
        gym_id: "fitlife-center".to_string(),
        name: "FitLife Center".to_string(),
        latitude: 47.6152,
        longitude: -122.3447,
    };
    let powerhouse = GymLocation {
        gym_id: "powerhouse-gym".to_string(),
        name: "PowerHouse Gym".to_string(),
        latitude: 47.6740,
        longitude: -122.1215,
    };

    let viewer = FitnessProfile {
        user_id: "john-smith".to_string(),
        name: "John Smith".to_string(),
        age: 28,
        gender: None,
        workout_types: strings(&["Strength Training", "HIIT", "Cardio"]),
        goals: strings(&["Build Muscle", "Increase Strength", "Stay Consistent"]),
        preferred_schedule: "Mornings (6-8 AM)".to_string(),
        preferred_days: strings(&["mon", "tue", "wed", "thu", "fri"]),
        fitness_level: FitnessLevel::Intermediate,
        preferred_gym: Some(downtown.clone()),
        image_url: None,
        is_active: true,
    };

    let account = UserAccount {
        user_id: viewer.user_id.clone(),
        name: viewer.name.clone(),
        email: "john@example.com".to_string(),
        age: viewer.age,
        location: downtown.name.clone(),
        bio: "Fitness enthusiast looking for motivated workout partners. Love strength \
              training and HIIT. Let's crush it together! 💪"
            .to_string(),
        workout_types: viewer.workout_types.clone(),
        schedule: viewer.preferred_schedule.clone(),
        goals: viewer.goals.clone(),
        is_verified: true,
        stats: UserStats {
            workouts_completed: 127,
            partners_matched: 8,
            active_streak: 14,
        },
    };

    let partners = vec![
        FitnessProfile {
            user_id: "alex-chen".to_string(),
            name: "Alex Chen".to_string(),
            age: 28,
            gender: None,
            workout_types: strings(&["Strength Training", "HIIT"]),
            goals: strings(&["Build Muscle", "Increase Strength"]),
            preferred_schedule: "Mornings (6-8 AM)".to_string(),
            preferred_days: strings(&["mon", "wed", "fri"]),
            fitness_level: FitnessLevel::Intermediate,
            preferred_gym: Some(downtown.clone()),
            image_url: None,
            is_active: true,
        },
        FitnessProfile {
            user_id: "sarah-miller".to_string(),
            name: "Sarah Miller".to_string(),
            age: 25,
            gender: None,
            workout_types: strings(&["CrossFit", "Cardio"]),
            goals: strings(&["Stay Consistent", "Improve Endurance"]),
            preferred_schedule: "Evenings (6-8 PM)".to_string(),
            preferred_days: strings(&["tue", "thu", "sat"]),
            fitness_level: FitnessLevel::Advanced,
            preferred_gym: Some(fitlife.clone()),
            image_url: None,
            is_active: true,
        },
        FitnessProfile {
            user_id: "marcus-johnson".to_string(),
            name: "Marcus Johnson".to_string(),
            age: 32,
            gender: None,
            workout_types: strings(&["Powerlifting", "Bodybuilding"]),
            goals: strings(&["Increase Strength", "Build Muscle"]),
            preferred_schedule: "Afternoons (2-5 PM)".to_string(),
            preferred_days: strings(&["mon", "tue", "thu"]),
            fitness_level: FitnessLevel::Advanced,
            preferred_gym: Some(powerhouse.clone()),
            image_url: None,
            is_active: true,
        },
        FitnessProfile {
            user_id: "emily-rodriguez".to_string(),
            name: "Emily Rodriguez".to_string(),
            age: 27,
            gender: None,
            workout_types: strings(&["Yoga", "Pilates", "Cardio"]),
            goals: strings(&["Stay Consistent", "Improve Flexibility"]),
            preferred_schedule: "Mornings (7-9 AM)".to_string(),
            preferred_days: strings(&["mon", "wed", "sat"]),
            fitness_level: FitnessLevel::Beginner,
            preferred_gym: Some(downtown.clone()),
            image_url: None,
            is_active: true,
        },
        FitnessProfile {
            user_id: "jake-thompson".to_string(),
            name: "Jake Thompson".to_string(),
            age: 30,
            gender: None,
            workout_types: strings(&["Functional Training", "Boxing"]),
            goals: strings(&["Improve Endurance", "Lose Weight"]),
            preferred_schedule: "Evenings (7-9 PM)".to_string(),
            preferred_days: strings(&["tue", "thu", "fri"]),
            fitness_level: FitnessLevel::Intermediate,
            preferred_gym: Some(fitlife),
            image_url: None,
            is_active: true,
        },
        FitnessProfile {
            user_id: "priya-patel".to_string(),
            name: "Priya Patel".to_string(),
            age: 24,
            gender: None,
            workout_types: strings(&["Strength Training", "Swimming"]),
            goals: strings(&["Build Muscle", "Stay Consistent"]),
            preferred_schedule: "Mornings (5-7 AM)".to_string(),
            preferred_days: strings(&["mon", "tue", "wed", "thu"]),
            fitness_level: FitnessLevel::Beginner,
            preferred_gym: Some(powerhouse),
            image_url: None,
            is_active: true,
        },
    ];

    // Seeded match list; scores here are historical, not recomputed
    let matches = vec![
        MatchSeed {
            partner_id: "alex-chen".to_string(),
            partner_name: "Alex Chen".to_string(),
            match_score: 95,
            workout_types: strings(&["Strength Training", "HIIT"]),
            status: MatchStatus::Accepted,
            last_message: Some("Ready for tomorrow morning?".to_string()),
            last_active: Some("2 min ago".to_string()),
            unread: 2,
        },
        MatchSeed {
            partner_id: "sarah-miller".to_string(),
            partner_name: "Sarah Miller".to_string(),
            match_score: 88,
            workout_types: strings(&["CrossFit", "Cardio"]),
            status: MatchStatus::Accepted,
            last_message: Some("Great workout today! 💪".to_string()),
            last_active: Some("1 hour ago".to_string()),
            unread: 0,
        },
        MatchSeed {
            partner_id: "marcus-johnson".to_string(),
            partner_name: "Marcus Johnson".to_string(),
            match_score: 82,
            workout_types: strings(&["Powerlifting"]),
            status: MatchStatus::Accepted,
            last_message: Some("Let me know when you want to hit legs".to_string()),
            last_active: Some("Yesterday".to_string()),
            unread: 0,
        },
        MatchSeed {
            partner_id: "emily-rodriguez".to_string(),
            partner_name: "Emily Rodriguez".to_string(),
            match_score: 79,
            workout_types: strings(&["Yoga", "Pilates"]),
            status: MatchStatus::Pending,
            last_message: None,
            last_active: None,
            unread: 0,
        },
        MatchSeed {
            partner_id: "jake-thompson".to_string(),
            partner_name: "Jake Thompson".to_string(),
            match_score: 75,
            workout_types: strings(&["Boxing", "Functional"]),
            status: MatchStatus::Pending,
            last_message: None,
            last_active: None,
            unread: 0,
        },
    ];

    CatalogSeed {
        viewer,
        account,
        preferences: MatchPreference::default(),
        partners,
        matches,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
