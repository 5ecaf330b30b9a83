// Route exports
pub mod matches;

use actix_web::{web, HttpResponse};

use crate::models::ErrorResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").configure(matches::configure))
        .default_service(web::to(not_found));
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("not_found", "No such route", 404))
}
