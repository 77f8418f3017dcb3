use serde::{Deserialize, Serialize};

use crate::models::domain::{MatchEntry, PartnerRecord, ScoreBreakdown, UserAccount};

/// Response for the discovery endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverResponse {
    pub partners: Vec<PartnerRecord>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    pub category: String,
    pub search: String,
}

/// Response for the category vocabulary endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// A single scored recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub partners: Vec<PartnerRecord>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the match list endpoint, split the way the matches page
/// renders it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchListResponse {
    pub active: Vec<MatchEntry>,
    pub pending: Vec<MatchEntry>,
    pub total: usize,
}

/// Response after creating a match request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequestResponse {
    pub message: String,
    #[serde(rename = "matchId")]
    pub match_id: String,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    pub breakdown: ScoreBreakdown,
}

/// Response after an accept/reject transition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchActionResponse {
    pub message: String,
    #[serde(rename = "matchId")]
    pub match_id: String,
}

/// Response for the profile endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: UserAccount,
}

/// Root endpoint body, kept parseable for the frontend's API service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub status: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
