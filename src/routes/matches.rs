use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::Matcher;
use crate::models::{ErrorResponse, FindMatchesRequest, HealthResponse};
use crate::services::DogStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DogStore>,
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/owners/{owner_id}/dogs/{dog_id}/matches", web::get().to(get_dog_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "dogId": "uuid",
///   "ownerId": "uuid"
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> HttpResponse {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Validation failed",
            errors.to_string(),
            400,
        ));
    }

    rank_matches(&state, req.dog_id, req.owner_id).await
}

/// GET /api/v1/owners/{owner_id}/dogs/{dog_id}/matches
async fn get_dog_matches(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, Uuid)>,
) -> HttpResponse {
    let (owner_id, dog_id) = path.into_inner();
    rank_matches(&state, dog_id, owner_id).await
}

async fn rank_matches(state: &AppState, dog_id: Uuid, owner_id: Uuid) -> HttpResponse {
    tracing::info!("Finding matches for dog {} (owner {})", dog_id, owner_id);

    let dog = match state.store.get_dog(dog_id, owner_id).await {
        Ok(Some(dog)) => dog,
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorResponse::new(
                "Dog not found",
                format!("No dog {} for owner {}", dog_id, owner_id),
                404,
            ));
        }
        Err(e) => {
            tracing::error!("Failed to fetch dog {}: {}", dog_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Failed to fetch dog",
                e.to_string(),
                500,
            ));
        }
    };

    // The pool is only needed when the primary profile can be ranked
    let candidates = if crate::core::is_complete(&dog) {
        match state.store.get_candidate_pool(dog_id).await {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::error!("Failed to load candidates for {}: {}", dog_id, e);
                return HttpResponse::InternalServerError().json(ErrorResponse::new(
                    "Failed to load candidates",
                    e.to_string(),
                    500,
                ));
            }
        }
    } else {
        tracing::debug!(
            "Dog {} is missing {:?}",
            dog_id,
            crate::core::missing_fields(&dog)
        );
        Vec::new()
    };

    let today = chrono::Utc::now().date_naive();
    let result = state.matcher.rank(&dog, candidates, today);

    tracing::info!(
        "Returning {} matches for dog {} (completed profile: {})",
        result.matches.len(),
        dog_id,
        result.completed_profile
    );

    HttpResponse::Ok().json(result)
}
