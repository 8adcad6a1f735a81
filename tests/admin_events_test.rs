//! Integration tests for the Organizer and Event admin resources
//!
//! Covers relation-aware selectors, referential validation, date ordering,
//! and round-tripping of persisted values.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use sea_orm::EntityTrait;
use tower::util::ServiceExt;

use trackdays::db::entities::{event, organizer};
use trackdays::handlers;
use trackdays::state::AppState;
use trackdays::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    Router::new()
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
async fn test_create_event_round_trips_values() {
    let state = setup_test_app_state().await;
    let circuit = create_test_track(&state.db, "Silverstone Circuit", "Silverstone", "UK").await;
    let club = create_test_organizer(&state.db, "Trackday Club").await;

    let app = create_test_router(&state);

    let body = format!(
        "track_id={}&organizer_id={}&title=Advanced%20Track%20Day&description=High-performance%20day&start_date=2025-10-15&end_date=2025-10-16&website=https%3A%2F%2Fwww.trackday.com%2Fadvanced",
        circuit.id, club.id
    );
    let response = app
        .oneshot(form_request("/admin/events", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let events = event::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(events.len(), 1);
    let created = &events[0];
    assert_eq!(created.track_id, circuit.id);
    assert_eq!(created.organizer_id, club.id);
    assert_eq!(created.title, "Advanced Track Day");
    assert_eq!(created.description.as_deref(), Some("High-performance day"));
    assert_eq!(
        created.start_date,
        NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()
    );
    assert_eq!(
        created.end_date,
        NaiveDate::from_ymd_opt(2025, 10, 16).unwrap()
    );
    assert_eq!(
        created.website.as_deref(),
        Some("https://www.trackday.com/advanced")
    );
}

#[tokio::test]
async fn test_create_event_with_missing_track_reference() {
    let state = setup_test_app_state().await;
    let club = create_test_organizer(&state.db, "Trackday Club").await;

    let app = create_test_router(&state);

    let body = format!(
        "track_id=999&organizer_id={}&title=Orphan%20Event&start_date=2025-06-01&end_date=2025-06-01",
        club.id
    );
    let response = app
        .oneshot(form_request("/admin/events", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_string(response).await;
    assert!(html.contains("Selected track does not exist."));

    let events = event::Entity::find().all(&state.db).await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_create_event_end_date_before_start_date() {
    let state = setup_test_app_state().await;
    let circuit = create_test_track(&state.db, "Mugello", "Scarperia", "Italy").await;
    let club = create_test_organizer(&state.db, "Curva Club").await;

    let app = create_test_router(&state);

    let body = format!(
        "track_id={}&organizer_id={}&title=Backwards%20Event&start_date=2025-06-02&end_date=2025-06-01",
        circuit.id, club.id
    );
    let response = app
        .oneshot(form_request("/admin/events", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_string(response).await;
    assert!(html.contains("End date must be on or after start date."));
}

#[tokio::test]
async fn test_event_form_offers_relation_choices() {
    let state = setup_test_app_state().await;
    create_test_track(&state.db, "Cadwell Park", "Louth", "UK").await;
    create_test_organizer(&state.db, "Lincs Motorsport").await;

    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/admin/events/new")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("Cadwell Park"));
    assert!(html.contains("Lincs Motorsport"));
}

#[tokio::test]
async fn test_update_event_dates() {
    let state = setup_test_app_state().await;
    let circuit = create_test_track(&state.db, "Zolder", "Heusden-Zolder", "Belgium").await;
    let club = create_test_organizer(&state.db, "Belgian Drivers").await;

    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let existing =
        create_test_event(&state.db, circuit.id, club.id, "Summer Session", date, date).await;

    let app = create_test_router(&state);

    let body = format!(
        "track_id={}&organizer_id={}&title=Summer%20Session&start_date=2025-07-01&end_date=2025-07-02",
        circuit.id, club.id
    );
    let response = app
        .oneshot(form_request(&format!("/admin/events/{}", existing.id), &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let updated = event::Entity::find_by_id(existing.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        updated.start_date,
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    );
    assert_eq!(
        updated.end_date,
        NaiveDate::from_ymd_opt(2025, 7, 2).unwrap()
    );
}

#[tokio::test]
async fn test_create_organizer_with_optional_fields_blank() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request(
            "/admin/organizers",
            "name=Trackday%20Club&email=&website=&logo_url=",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let organizers = organizer::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(organizers.len(), 1);
    assert_eq!(organizers[0].name, "Trackday Club");
    assert_eq!(organizers[0].email, None);
    assert_eq!(organizers[0].website, None);
}

#[tokio::test]
async fn test_create_organizer_with_invalid_email() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request(
            "/admin/organizers",
            "name=Trackday%20Club&email=not-an-email",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_string(response).await;
    assert!(html.contains("Email address must be a valid email address."));
}

#[tokio::test]
async fn test_admin_events_index_shows_related_names() {
    let state = setup_test_app_state().await;
    let circuit = create_test_track(&state.db, "Brands Hatch", "West Kingsdown", "UK").await;
    let club = create_test_organizer(&state.db, "Kent Circuit Club").await;

    let date = NaiveDate::from_ymd_opt(2025, 8, 10).unwrap();
    create_test_event(&state.db, circuit.id, club.id, "August Evening", date, date).await;

    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/admin/events")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains("August Evening"));
    assert!(html.contains("Brands Hatch"));
    assert!(html.contains("Kent Circuit Club"));
}
