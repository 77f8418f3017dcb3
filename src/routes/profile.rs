use actix_web::{web, HttpResponse, Responder};

use crate::models::ProfileResponse;
use crate::routes::AppState;

/// Configure profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profile", web::get().to(get_profile));
}

/// The viewer's own profile as shown on the profile page
///
/// GET /api/v1/profile
async fn get_profile(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ProfileResponse {
        user: state.catalog.account().clone(),
    })
}
