use axum::{extract::State, response::Html};

use crate::{error::Result, state::AppState, templates::tracks_index_page};

use super::tracks::fetch_track_summaries;

/// Public tracks listing page. Ships the full ordered track list; filtering
/// happens client-side.
pub async fn tracks_index(State(state): State<AppState>) -> Result<Html<String>> {
    let tracks = fetch_track_summaries(&state.db).await?;
    Ok(Html(tracks_index_page(tracks).into_string()))
}
