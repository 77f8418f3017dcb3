use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::query::{filter_partners, CATEGORY_FILTERS};
use crate::models::{
    CategoriesResponse, DiscoverQuery, DiscoverResponse, ErrorResponse, QueryState,
};
use crate::routes::AppState;
use crate::services::CacheKey;

/// Configure partner discovery routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/partners/discover", web::get().to(discover))
        .route("/partners/categories", web::get().to(categories));
}

/// Discovery endpoint
///
/// GET /api/v1/partners/discover?category=HIIT&search=alex&limit=20
///
/// Runs the query engine over the pre-sorted feed. `category` is matched
/// exactly against the workout-type vocabulary, `search` case-insensitively
/// against partner names and gym labels.
async fn discover(state: web::Data<AppState>, query: web::Query<DiscoverQuery>) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for discover request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = query.limit.min(state.max_limit) as usize;
    let cache_key = CacheKey::discover(&query.category, &query.search, limit);

    if let Ok(cached) = state.cache.get::<DiscoverResponse>(&cache_key).await {
        return HttpResponse::Ok().json(cached);
    }

    let filter = QueryState::new(query.category.clone(), query.search.clone());
    let matching = filter_partners(state.catalog.partners(), &filter);

    let total_results = matching.len();
    let partners = matching.into_iter().take(limit).collect();

    let response = DiscoverResponse {
        partners,
        total_results,
        category: filter.selected_category,
        search: filter.search_text,
    };

    tracing::debug!(
        "Discover: category={}, search={:?}, {} of {} shown",
        response.category,
        response.search,
        response.partners.len(),
        response.total_results
    );

    if let Err(e) = state.cache.set(&cache_key, &response).await {
        tracing::warn!("Failed to cache discover response: {}", e);
    }

    HttpResponse::Ok().json(response)
}

/// Category vocabulary endpoint, in the order the filter pills render
async fn categories() -> impl Responder {
    HttpResponse::Ok().json(CategoriesResponse {
        categories: CATEGORY_FILTERS.iter().map(|c| c.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_query_defaults() {
        let query: DiscoverQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.category, "All");
        assert_eq!(query.search, "");
        assert_eq!(query.limit, 20);
    }

    #[test]
    fn test_zero_limit_fails_validation() {
        let query = DiscoverQuery {
            category: "All".to_string(),
            search: String::new(),
            limit: 0,
        };
        assert!(query.validate().is_err());
    }
}
