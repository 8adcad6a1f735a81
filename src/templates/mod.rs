pub mod components;
pub mod layout;
pub mod pages;

pub use components::{schema_form, track_card, EventRowData, SelectOptions};
pub use pages::{
    admin_events_page, admin_form_page, admin_organizers_page, admin_tracks_page,
    tracks_index_page,
};
