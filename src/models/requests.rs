use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the discovery endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiscoverQuery {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1))]
    pub limit: u16,
}

fn default_category() -> String {
    "All".to_string()
}

fn default_limit() -> u16 {
    20
}

/// Query parameters for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationsQuery {
    #[serde(default = "default_limit")]
    #[validate(range(min = 1))]
    pub limit: u16,
}

/// Query parameters for listing matches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMatchesQuery {
    /// Optional status filter: pending, accepted or rejected
    #[serde(default)]
    pub status: Option<String>,
}

/// Optional body for a match request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchRequestCreate {
    #[validate(length(max = 280))]
    #[serde(default)]
    pub message: Option<String>,
}
