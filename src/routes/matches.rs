use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    ErrorResponse, ListMatchesQuery, MatchActionResponse, MatchListResponse, MatchRequestCreate,
    MatchRequestResponse, MatchStatus, RecommendationsQuery, RecommendationsResponse,
};
use crate::routes::AppState;
use crate::services::{CacheKey, CatalogError};

/// Configure match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/matches", web::get().to(list_matches))
        .route("/matches/recommendations", web::get().to(recommendations))
        .route("/matches/{partner_id}/request", web::post().to(send_match_request))
        .route("/matches/{match_id}/accept", web::post().to(accept_match))
        .route("/matches/{match_id}/reject", web::post().to(reject_match));
}

/// List matches, split the way the matches page renders them
///
/// GET /api/v1/matches?status=pending
async fn list_matches(
    state: web::Data<AppState>,
    query: web::Query<ListMatchesQuery>,
) -> impl Responder {
    let status = match query.status.as_deref() {
        None => None,
        Some(raw) => match MatchStatus::parse(raw) {
            Some(parsed) => Some(parsed),
            None => {
                return HttpResponse::BadRequest().json(ErrorResponse {
                    error: "Invalid status".to_string(),
                    message: "Status must be one of: pending, accepted, rejected".to_string(),
                    status_code: 400,
                });
            }
        },
    };

    let entries = state.catalog.list_matches(status).await;
    let total = entries.len();

    let mut active = Vec::new();
    let mut pending = Vec::new();
    for entry in entries {
        match entry.status {
            MatchStatus::Accepted => active.push(entry),
            MatchStatus::Pending => pending.push(entry),
            MatchStatus::Rejected => {}
        }
    }

    HttpResponse::Ok().json(MatchListResponse {
        active,
        pending,
        total,
    })
}

/// Ranked partner recommendations for the viewer
///
/// GET /api/v1/matches/recommendations?limit=10
async fn recommendations(
    state: web::Data<AppState>,
    query: web::Query<RecommendationsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = query.limit.min(state.max_limit) as usize;
    let viewer = state.catalog.viewer();
    let cache_key = CacheKey::recommendations(&viewer.user_id, limit);

    if let Ok(cached) = state.cache.get::<RecommendationsResponse>(&cache_key).await {
        return HttpResponse::Ok().json(cached);
    }

    let result = state.matcher.recommend(
        viewer,
        state.catalog.preferences(),
        state.catalog.candidate_profiles(),
        limit,
    );

    tracing::info!(
        "Returning {} recommendations for {} (from {} candidates)",
        result.partners.len(),
        viewer.user_id,
        result.total_candidates
    );

    let response = RecommendationsResponse {
        partners: result.partners,
        total_candidates: result.total_candidates,
    };

    if let Err(e) = state.cache.set(&cache_key, &response).await {
        tracing::warn!("Failed to cache recommendations: {}", e);
    }

    HttpResponse::Ok().json(response)
}

/// Send a match request to a partner
///
/// POST /api/v1/matches/{partner_id}/request
///
/// Request body (optional):
/// ```json
/// { "message": "string" }
/// ```
async fn send_match_request(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: Option<web::Json<MatchRequestCreate>>,
) -> impl Responder {
    let partner_id = path.into_inner();
    let request = body.map(|b| b.into_inner()).unwrap_or_default();

    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let candidate = match state.catalog.find_candidate(&partner_id) {
        Some(candidate) => candidate,
        None => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Partner not found".to_string(),
                message: format!("No partner with id: {}", partner_id),
                status_code: 404,
            });
        }
    };

    let (score, breakdown) = state.matcher.score(state.catalog.viewer(), candidate);
    let match_score = score.round().clamp(0.0, 100.0) as u8;

    match state
        .catalog
        .create_match_request(&partner_id, match_score, request.message)
        .await
    {
        Ok(entry) => {
            tracing::info!("Match request sent to {} (score {})", partner_id, match_score);
            HttpResponse::Created().json(MatchRequestResponse {
                message: "Match request sent".to_string(),
                match_id: entry.match_id,
                match_score,
                breakdown,
            })
        }
        Err(e) => catalog_error_response(e),
    }
}

/// Accept a pending match request
///
/// POST /api/v1/matches/{match_id}/accept
async fn accept_match(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let match_id = path.into_inner();

    match state.catalog.accept_match(&match_id).await {
        Ok(entry) => HttpResponse::Ok().json(MatchActionResponse {
            message: "Match accepted".to_string(),
            match_id: entry.match_id,
        }),
        Err(e) => catalog_error_response(e),
    }
}

/// Reject a pending match request
///
/// POST /api/v1/matches/{match_id}/reject
async fn reject_match(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let match_id = path.into_inner();

    match state.catalog.reject_match(&match_id).await {
        Ok(entry) => HttpResponse::Ok().json(MatchActionResponse {
            message: "Match rejected".to_string(),
            match_id: entry.match_id,
        }),
        Err(e) => catalog_error_response(e),
    }
}

/// Map catalog errors to HTTP responses
fn catalog_error_response(err: CatalogError) -> HttpResponse {
    let (status, error) = match &err {
        CatalogError::PartnerNotFound(_) => (404, "Partner not found"),
        CatalogError::MatchNotFound(_) => (404, "Match not found"),
        CatalogError::SelfMatch | CatalogError::DuplicateMatch(_) | CatalogError::NotPending(_) => {
            (400, "Invalid match request")
        }
        CatalogError::SeedFile(_) | CatalogError::SeedParse(_) => (500, "Catalog error"),
    };

    tracing::info!("Match operation failed: {}", err);

    let body = ErrorResponse {
        error: error.to_string(),
        message: err.to_string(),
        status_code: status,
    };

    match status {
        404 => HttpResponse::NotFound().json(body),
        400 => HttpResponse::BadRequest().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}
