//! Integration tests for the Track admin resource
//!
//! Exercises the schema-driven forms end to end: create with optional blanks,
//! validation failures with field-level messages, update, and delete.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sea_orm::EntityTrait;
use tower::util::ServiceExt;

use trackdays::db::entities::track;
use trackdays::handlers;
use trackdays::state::AppState;
use trackdays::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    Router::new()
        .nest("/api", handlers::api_routes())
        .nest("/admin", handlers::admin_routes())
        .with_state(state.clone())
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[tokio::test]
async fn test_create_track_with_optional_fields_blank() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request(
            "/admin/tracks",
            "name=Spa-Francorchamps&country=Belgium&city=Stavelot&latitude=50.4372&longitude=5.9714&website=&noise_limit=",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let tracks = track::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].name, "Spa-Francorchamps");
    assert_eq!(tracks[0].latitude, 50.4372);
    assert_eq!(tracks[0].website, None);
    assert_eq!(tracks[0].noise_limit, None);
}

#[tokio::test]
async fn test_create_track_with_all_fields() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request(
            "/admin/tracks",
            "name=Silverstone%20Circuit&country=UK&city=Silverstone&latitude=52.0733&longitude=-1.0147&website=https%3A%2F%2Fwww.silverstone.co.uk&noise_limit=105",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let tracks = track::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(tracks[0].name, "Silverstone Circuit");
    assert_eq!(
        tracks[0].website.as_deref(),
        Some("https://www.silverstone.co.uk")
    );
    assert_eq!(tracks[0].noise_limit, Some(105));
}

#[tokio::test]
async fn test_create_track_missing_required_fields() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request("/admin/tracks", "name=Lonely%20Track"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_string(response).await;
    assert!(html.contains("Country is required."));
    assert!(html.contains("Latitude is required."));
    // Submitted value is echoed back into the form
    assert!(html.contains("Lonely Track"));

    let tracks = track::Entity::find().all(&state.db).await.unwrap();
    assert!(tracks.is_empty());
}

#[tokio::test]
async fn test_create_track_latitude_out_of_range() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request(
            "/admin/tracks",
            "name=Nowhere&country=Atlantis&city=Sunken&latitude=91.0&longitude=0.0",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_string(response).await;
    assert!(html.contains("Latitude must be between -90 and 90."));
}

#[tokio::test]
async fn test_create_track_noise_limit_out_of_range() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request(
            "/admin/tracks",
            "name=Loud%20Ring&country=Germany&city=Nurburg&latitude=50.3356&longitude=6.9475&noise_limit=130",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_string(response).await;
    assert!(html.contains("Noise limit (dB) must be between 0 and 120."));
}

#[tokio::test]
async fn test_update_track() {
    let state = setup_test_app_state().await;
    let existing = create_test_track(&state.db, "Oulton Park", "Tarporley", "UK").await;

    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request(
            &format!("/admin/tracks/{}", existing.id),
            "name=Oulton%20Park&country=UK&city=Tarporley&latitude=53.1800&longitude=-2.6130&website=&noise_limit=92",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let updated = track::Entity::find_by_id(existing.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.noise_limit, Some(92));
    assert_eq!(updated.latitude, 53.18);
}

#[tokio::test]
async fn test_update_missing_track_is_not_found() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request(
            "/admin/tracks/999",
            "name=Ghost&country=Nowhere&city=Nowhere&latitude=0.0&longitude=0.0",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_track_removes_it_from_listing() {
    let state = setup_test_app_state().await;
    let keep = create_test_track(&state.db, "Knockhill", "Dunfermline", "UK").await;
    let doomed = create_test_track(&state.db, "Rockingham", "Corby", "UK").await;

    let app = create_test_router(&state);

    let response = app
        .clone()
        .oneshot(form_request(
            &format!("/admin/tracks/{}/delete", doomed.id),
            "",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/tracks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let listing: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let names: Vec<&str> = listing
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec![keep.name.as_str()]);
}

#[tokio::test]
async fn test_admin_index_lists_tracks() {
    let state = setup_test_app_state().await;
    create_test_track(&state.db, "Donington Park", "Castle Donington", "UK").await;

    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/admin/tracks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Donington Park"));
}
