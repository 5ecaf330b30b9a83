// HTTP route tests against an in-memory dog store

use actix_web::{test, web, App};
use async_trait::async_trait;
use chrono::NaiveDate;
use pawmatch::core::{is_complete, Matcher};
use pawmatch::models::{Biography, DogRecord, Gender, RawTemperament};
use pawmatch::routes::{configure_routes, matches::AppState};
use pawmatch::services::{DogStore, StoreError};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

struct InMemoryDogStore {
    dogs: Vec<DogRecord>,
    healthy: bool,
}

#[async_trait]
impl DogStore for InMemoryDogStore {
    async fn get_dog(&self, dog_id: Uuid, owner_id: Uuid) -> Result<Option<DogRecord>, StoreError> {
        Ok(self
            .dogs
            .iter()
            .find(|d| d.id == dog_id && d.owner_id == owner_id)
            .cloned())
    }

    async fn get_candidate_pool(&self, exclude_dog_id: Uuid) -> Result<Vec<DogRecord>, StoreError> {
        Ok(self
            .dogs
            .iter()
            .filter(|d| d.id != exclude_dog_id && is_complete(d))
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        if self.healthy {
            Ok(true)
        } else {
            Err(StoreError::InvalidRow("store offline".to_string()))
        }
    }
}

fn create_dog(id: u128, owner: u128, breed: &str, rating: u8) -> DogRecord {
    DogRecord {
        id: Uuid::from_u128(id),
        name: format!("Dog {}", id),
        owner_id: Uuid::from_u128(owner),
        owner_name: format!("Owner {}", owner),
        breed: Some(breed.to_string()),
        weight_lbs: Some(40.0),
        gender: Some(Gender::Male),
        birthday: NaiveDate::from_ymd_opt(2021, 5, 20),
        profile_image: Some(format!("images/{}.jpg", id)),
        colors: vec!["black".to_string()],
        biography: Some(Biography {
            about: Some("Ready to play".to_string()),
        }),
        temperament: Some(RawTemperament::uniform(rating)),
    }
}

fn state_with(dogs: Vec<DogRecord>, healthy: bool) -> AppState {
    AppState {
        store: Arc::new(InMemoryDogStore { dogs, healthy }),
        matcher: Matcher::new(),
    }
}

fn sample_dogs() -> Vec<DogRecord> {
    let mut unfinished = create_dog(4, 900, "Husky", 5);
    unfinished.temperament = None;

    vec![
        create_dog(1, 900, "Husky", 5),
        create_dog(2, 901, "Husky", 5),
        create_dog(3, 902, "Boxer", 5),
        unfinished,
    ]
}

#[actix_web::test]
async fn test_get_matches_for_owned_dog() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_with(sample_dogs(), true)))
            .configure(configure_routes),
    )
    .await;

    let uri = format!(
        "/api/v1/owners/{}/dogs/{}/matches",
        Uuid::from_u128(900),
        Uuid::from_u128(1)
    );
    let req = test::TestRequest::get().uri(&uri).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["completedProfile"], true);
    let matches = body["matches"].as_array().unwrap();
    // Dog 4 is incomplete and never enters the pool
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["dogId"], json!(Uuid::from_u128(2)));
    assert_eq!(matches[0]["matchCount"], 21);
    assert_eq!(matches[1]["matchCount"], 16);
}

#[actix_web::test]
async fn test_find_matches_incomplete_profile() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_with(sample_dogs(), true)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({
            "dogId": Uuid::from_u128(4),
            "ownerId": Uuid::from_u128(900),
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["completedProfile"], false);
    assert!(body["matches"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_dog_owned_by_someone_else_is_not_found() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_with(sample_dogs(), true)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({
            "dogId": Uuid::from_u128(1),
            "ownerId": Uuid::from_u128(901),
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_nil_ids_fail_validation() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_with(sample_dogs(), true)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/find")
        .set_json(json!({
            "dogId": Uuid::nil(),
            "ownerId": Uuid::from_u128(900),
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_health_reports_degraded_store() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_with(vec![], false)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "degraded");
}

#[actix_web::test]
async fn test_unknown_route_returns_json_404() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state_with(vec![], true)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
}
