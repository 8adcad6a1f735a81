use std::collections::HashMap;

use maud::{html, Markup, PreEscaped};

use crate::admin::schema::ResourceSchema;
use crate::admin::validate::FieldError;
use crate::db::entities::{organizer, track};
use crate::services::track_filter::TrackSummary;

use super::components::{
    delete_button, schema_form, track_card, track_search_input, EventRowData, SelectOptions,
};
use super::layout::base_layout;

/// Client-side filter over the already-rendered cards. Mirrors
/// `services::track_filter::matches_query`: lowercase substring over
/// name, city, country; empty query shows everything.
const TRACK_FILTER_SCRIPT: &str = r#"
(function () {
    var input = document.getElementById('track-search');
    if (!input) return;
    input.addEventListener('input', function () {
        var q = input.value.trim().toLowerCase();
        var visible = 0;
        document.querySelectorAll('[data-track-card]').forEach(function (card) {
            var haystack = [card.dataset.name, card.dataset.city, card.dataset.country];
            var show = !q || haystack.some(function (v) {
                return (v || '').toLowerCase().indexOf(q) !== -1;
            });
            card.classList.toggle('hidden', !show);
            if (show) visible++;
        });
        var empty = document.getElementById('no-results');
        if (empty) empty.classList.toggle('hidden', visible !== 0);
    });
})();
"#;

pub fn tracks_index_page(tracks: Vec<TrackSummary>) -> Markup {
    let is_empty = tracks.is_empty();

    base_layout(
        "Tracks",
        html! {
            div class="flex items-center justify-between gap-4 mb-6" {
                h1 class="text-xl font-semibold" { "Tracks" }
                (track_search_input())
            }

            div id="track-grid" class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4" {
                @for track in &tracks {
                    (track_card(track))
                }
            }

            div id="no-results"
                class=(if is_empty { "empty-state" } else { "empty-state hidden" }) {
                "No tracks found."
            }

            script { (PreEscaped(TRACK_FILTER_SCRIPT)) }
        },
    )
}

// ---------------------------------------------------------------------------
// Admin pages
// ---------------------------------------------------------------------------

fn admin_header(title: &str, new_href: &str, new_label: &str) -> Markup {
    html! {
        div class="flex items-center justify-between mb-6" {
            h1 class="text-xl font-semibold" { (title) }
            a href=(new_href)
              class="px-4 py-2 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
                (new_label)
            }
        }
    }
}

pub fn admin_tracks_page(tracks: Vec<track::Model>) -> Markup {
    base_layout(
        "Admin - Tracks",
        html! {
            (admin_header("Tracks", "/admin/tracks/new", "New track"))

            table class="admin-table w-full bg-white rounded-lg shadow-sm" {
                thead {
                    tr {
                        th { "Name" }
                        th { "Country" }
                        th { "City" }
                        th { "Noise limit" }
                        th { "" }
                    }
                }
                tbody {
                    @for track in &tracks {
                        tr {
                            td { (track.name) }
                            td { (track.country) }
                            td { (track.city) }
                            td {
                                @if let Some(limit) = track.noise_limit {
                                    (limit) " dB"
                                } @else {
                                    "—"
                                }
                            }
                            td class="text-right" {
                                a href=(format!("/admin/tracks/{}/edit", track.id))
                                  class="text-primary underline text-sm" {
                                    "Edit"
                                }
                            }
                        }
                    }
                    @if tracks.is_empty() {
                        tr {
                            td colspan="5" class="empty-state" { "No tracks yet." }
                        }
                    }
                }
            }
        },
    )
}

pub fn admin_organizers_page(organizers: Vec<organizer::Model>) -> Markup {
    base_layout(
        "Admin - Organizers",
        html! {
            (admin_header("Organizers", "/admin/organizers/new", "New organizer"))

            table class="admin-table w-full bg-white rounded-lg shadow-sm" {
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Website" }
                        th { "" }
                    }
                }
                tbody {
                    @for organizer in &organizers {
                        tr {
                            td { (organizer.name) }
                            td { (organizer.email.as_deref().unwrap_or("—")) }
                            td { (organizer.website.as_deref().unwrap_or("—")) }
                            td class="text-right" {
                                a href=(format!("/admin/organizers/{}/edit", organizer.id))
                                  class="text-primary underline text-sm" {
                                    "Edit"
                                }
                            }
                        }
                    }
                    @if organizers.is_empty() {
                        tr {
                            td colspan="4" class="empty-state" { "No organizers yet." }
                        }
                    }
                }
            }
        },
    )
}

pub fn admin_events_page(events: Vec<EventRowData>) -> Markup {
    base_layout(
        "Admin - Events",
        html! {
            (admin_header("Events", "/admin/events/new", "New event"))

            table class="admin-table w-full bg-white rounded-lg shadow-sm" {
                thead {
                    tr {
                        th { "Title" }
                        th { "Track" }
                        th { "Organizer" }
                        th { "Dates" }
                        th { "" }
                    }
                }
                tbody {
                    @for event in &events {
                        tr {
                            td { (event.title) }
                            td { (event.track_name) }
                            td { (event.organizer_name) }
                            td { (event.start_date) " – " (event.end_date) }
                            td class="text-right" {
                                a href=(format!("/admin/events/{}/edit", event.id))
                                  class="text-primary underline text-sm" {
                                    "Edit"
                                }
                            }
                        }
                    }
                    @if events.is_empty() {
                        tr {
                            td colspan="5" class="empty-state" { "No events yet." }
                        }
                    }
                }
            }
        },
    )
}

/// Shared create/edit form page. `delete_action` adds a delete button for the
/// resources that expose one (currently only tracks).
pub fn admin_form_page(
    schema: &ResourceSchema,
    title: &str,
    action: &str,
    values: &HashMap<String, String>,
    errors: &[FieldError],
    options: &SelectOptions,
    delete_action: Option<&str>,
) -> Markup {
    base_layout(
        title,
        html! {
            div class="flex items-center justify-between mb-6" {
                h1 class="text-xl font-semibold" { (title) }
                @if let Some(delete_action) = delete_action {
                    (delete_button(delete_action, "Delete"))
                }
            }

            @if !errors.is_empty() {
                div class="form-errors mb-4" {
                    p { "Please correct the errors below." }
                }
            }

            div class="bg-white rounded-lg shadow-sm p-6" {
                (schema_form(schema, action, values, errors, options))
            }

            div class="mt-4" {
                a href=(format!("/admin/{}", schema.resource)) class="text-gray-600 underline text-sm" {
                    "Back to " (schema.resource)
                }
            }
        },
    )
}
