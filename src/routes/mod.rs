// Route exports
pub mod matches;
pub mod partners;
pub mod profile;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::Matcher;
use crate::models::{HealthResponse, RootResponse};
use crate::services::{CacheManager, PartnerCatalog};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PartnerCatalog>,
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
    pub max_limit: u16,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .configure(partners::configure)
                .configure(matches::configure)
                .configure(profile::configure),
        );
}

/// Root endpoint, kept as a plain JSON body for the web client
async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: "Welcome to GymBuddy API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "healthy".to_string(),
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // The catalog is in-memory; an empty feed is the only degraded state
    let status = if state.catalog.partners().is_empty() {
        "degraded"
    } else {
        "ok"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
