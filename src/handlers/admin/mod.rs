pub mod events;
pub mod organizers;
pub mod tracks;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // Track resource (list / create / edit / delete)
        .route("/tracks", get(tracks::index).post(tracks::create))
        .route("/tracks/new", get(tracks::new_form))
        .route("/tracks/:id/edit", get(tracks::edit_form))
        .route("/tracks/:id", post(tracks::update))
        .route("/tracks/:id/delete", post(tracks::delete))
        // Organizer resource (no delete surface)
        .route("/organizers", get(organizers::index).post(organizers::create))
        .route("/organizers/new", get(organizers::new_form))
        .route("/organizers/:id/edit", get(organizers::edit_form))
        .route("/organizers/:id", post(organizers::update))
        // Event resource (no delete surface)
        .route("/events", get(events::index).post(events::create))
        .route("/events/new", get(events::new_form))
        .route("/events/:id/edit", get(events::edit_form))
        .route("/events/:id", post(events::update))
}
