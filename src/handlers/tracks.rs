use axum::{
    extract::{Query, State},
    Json,
};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};
use serde::Deserialize;

use crate::{
    db::entities::track,
    error::Result,
    services::track_filter::{filter_tracks, TrackSummary},
    state::AppState,
};

#[derive(Deserialize)]
pub struct ListTracksQuery {
    pub search: Option<String>,
}

/// All tracks ordered by name, projected to the listing columns.
pub async fn fetch_track_summaries(db: &DatabaseConnection) -> Result<Vec<TrackSummary>> {
    let tracks = track::Entity::find()
        .select_only()
        .column(track::Column::Id)
        .column(track::Column::Name)
        .column(track::Column::Country)
        .column(track::Column::City)
        .column(track::Column::Website)
        .column(track::Column::NoiseLimit)
        .order_by_asc(track::Column::Name)
        .into_model::<TrackSummary>()
        .all(db)
        .await?;

    Ok(tracks)
}

/// JSON listing of all tracks. The optional `search` parameter applies the
/// same substring rule the listing page runs client-side.
pub async fn list_tracks(
    State(state): State<AppState>,
    Query(query): Query<ListTracksQuery>,
) -> Result<Json<Vec<TrackSummary>>> {
    let tracks = fetch_track_summaries(&state.db).await?;

    let tracks = match &query.search {
        Some(search) => filter_tracks(tracks, search),
        None => tracks,
    };

    Ok(Json(tracks))
}
