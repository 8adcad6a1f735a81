pub mod admin;
pub mod health;
pub mod html;
pub mod tracks;

use axum::{routing::get, Router};

use crate::state::AppState;

pub use admin::admin_routes;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Track listing (JSON)
        .route("/tracks", get(tracks::list_tracks))
}

pub fn html_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(html::tracks_index))
        .route("/tracks", get(html::tracks_index))
}
