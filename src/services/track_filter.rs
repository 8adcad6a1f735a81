//! Track listing projection and the substring filter used by the listing UI.
//!
//! The filter rule is deliberately tiny: a track matches when the lowercased
//! query is a substring of the lowercased name, city, or country. The listing
//! page embeds the same rule as inline script so keystrokes never round-trip
//! to the server; this module is the canonical definition and backs the
//! `search` parameter of the JSON tracks API.

use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// Column subset the public listing ships to the page.
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize, Deserialize)]
pub struct TrackSummary {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub city: String,
    pub website: Option<String>,
    pub noise_limit: Option<i32>,
}

/// Case-insensitive substring match over name, city, and country.
pub fn matches_query(track: &TrackSummary, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }

    track.name.to_lowercase().contains(&q)
        || track.city.to_lowercase().contains(&q)
        || track.country.to_lowercase().contains(&q)
}

/// Filter a fetched track list, preserving the input order.
///
/// An empty or whitespace-only query is the identity.
pub fn filter_tracks(tracks: Vec<TrackSummary>, query: &str) -> Vec<TrackSummary> {
    if query.trim().is_empty() {
        return tracks;
    }

    tracks
        .into_iter()
        .filter(|t| matches_query(t, query))
        .collect()
}
