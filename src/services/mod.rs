pub mod track_filter;

pub use track_filter::{filter_tracks, matches_query, TrackSummary};
