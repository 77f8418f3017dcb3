use crate::models::{PartnerRecord, QueryState};

/// Sentinel category that disables category filtering
pub const ALL_CATEGORIES: &str = "All";

/// Category pills offered by the discovery page, in display order
pub const CATEGORY_FILTERS: &[&str] = &[
    ALL_CATEGORIES,
    "Strength Training",
    "CrossFit",
    "Cardio",
    "HIIT",
    "Yoga",
    "Powerlifting",
];

/// Check a record against the category filter
///
/// Categories come from a controlled vocabulary, so membership is an exact,
/// case-sensitive string match. An unknown category simply matches nothing.
#[inline]
pub fn matches_category(record: &PartnerRecord, selected_category: &str) -> bool {
    selected_category == ALL_CATEGORIES
        || record
            .workout_types
            .iter()
            .any(|t| t == selected_category)
}

/// Check a record against the free-text search
///
/// Case-insensitive substring match over the partner name and gym label;
/// empty search text matches everything.
#[inline]
pub fn matches_search(record: &PartnerRecord, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }

    let needle = search_text.to_lowercase();
    record.name.to_lowercase().contains(&needle)
        || record.location.to_lowercase().contains(&needle)
}

/// Compute the visible partner set for the current filter state
///
/// A record survives only if both predicates hold. The filter is stable:
/// relative input order is preserved, so a feed pre-sorted by match score
/// stays sorted. Pure and allocation-light, cheap enough to run on every
/// keystroke for feeds in the low thousands.
pub fn filter_partners(records: &[PartnerRecord], state: &QueryState) -> Vec<PartnerRecord> {
    records
        .iter()
        .filter(|record| {
            matches_category(record, &state.selected_category)
                && matches_search(record, &state.search_text)
        })
        .cloned()
        .collect()
}
