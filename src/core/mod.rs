// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;
pub mod query;
pub mod scoring;

pub use distance::haversine_distance;
pub use filters::matches_preferences;
pub use matcher::{MatchResult, Matcher};
pub use query::{filter_partners, matches_category, matches_search, ALL_CATEGORIES, CATEGORY_FILTERS};
pub use scoring::calculate_match_score;
