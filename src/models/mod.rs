// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    FitnessLevel, FitnessProfile, GymLocation, MatchEntry, MatchPreference, MatchStatus,
    PartnerRecord, QueryState, ScoreBreakdown, ScoringWeights, UserAccount, UserStats,
};
pub use requests::{DiscoverQuery, ListMatchesQuery, MatchRequestCreate, RecommendationsQuery};
pub use responses::{
    CategoriesResponse, DiscoverResponse, ErrorResponse, HealthResponse, MatchActionResponse,
    MatchListResponse, MatchRequestResponse, ProfileResponse, RecommendationsResponse,
    RootResponse,
};
