use std::collections::HashMap;

use maud::{html, Markup};

use crate::admin::schema::{InputKind, ResourceSchema};
use crate::admin::validate::FieldError;
use crate::services::track_filter::TrackSummary;

/// Rows for relation selectors, keyed by field name.
pub type SelectOptions = HashMap<&'static str, Vec<(i32, String)>>;

/// Row shape for the admin events table; the handler resolves the related
/// track and organizer names up front.
pub struct EventRowData {
    pub id: i32,
    pub title: String,
    pub track_name: String,
    pub organizer_name: String,
    pub start_date: String,
    pub end_date: String,
}

pub fn track_card(track: &TrackSummary) -> Markup {
    let location = format!("{}, {}", track.city, track.country);

    html! {
        div
            class="track-card bg-white rounded-lg shadow-md p-4"
            data-track-card
            data-name=(track.name)
            data-city=(track.city)
            data-country=(track.country) {

            h3 class="font-semibold text-gray-900 truncate" title=(track.name) {
                (track.name)
            }
            p class="text-sm text-gray-600" { (location) }

            div class="flex items-center justify-between mt-2 text-sm" {
                span class="text-gray-500" { "Noise limit" }
                span {
                    @if let Some(limit) = track.noise_limit {
                        (limit) " dB"
                    } @else {
                        "—"
                    }
                }
            }

            @if let Some(website) = &track.website {
                a href=(website) target="_blank" rel="noreferrer"
                  class="text-primary underline text-sm mt-2 inline-block" {
                    "Website"
                }
            }
        }
    }
}

pub fn track_search_input() -> Markup {
    html! {
        input
            type="text"
            id="track-search"
            placeholder="Search by name, city, country"
            class="w-64 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
    }
}

/// Render a form from a resource schema declaration.
///
/// `values` echoes the raw submitted strings back into the inputs so a
/// rejected form keeps what the user typed; `errors` attaches field-level
/// messages underneath the offending inputs.
pub fn schema_form(
    schema: &ResourceSchema,
    action: &str,
    values: &HashMap<String, String>,
    errors: &[FieldError],
    options: &SelectOptions,
) -> Markup {
    html! {
        form method="post" action=(action) class="space-y-4 max-w-lg" {
            @for field in &schema.fields {
                @let error = errors.iter().find(|e| e.field == field.name);
                @let value = values.get(field.name).map(String::as_str).unwrap_or("");

                div {
                    label for=(field.name) class="block text-sm font-medium text-gray-700 mb-1" {
                        (field.label)
                        @if field.required {
                            span class="text-red-600" { " *" }
                        }
                    }

                    (field_input(field.name, &field.kind, value, options))

                    @if let Some(error) = error {
                        p class="text-sm text-red-600 mt-1" { (error.message) }
                    }
                }
            }

            div class="pt-2" {
                button type="submit"
                    class="px-4 py-2 bg-primary hover:bg-green-600 text-white font-semibold rounded-md" {
                    "Save"
                }
            }
        }
    }
}

fn field_input(name: &str, kind: &InputKind, value: &str, options: &SelectOptions) -> Markup {
    let input_class = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";

    match kind {
        InputKind::Text { .. } => html! {
            input type="text" id=(name) name=(name) value=(value) class=(input_class);
        },
        InputKind::Textarea { max_len } => html! {
            textarea id=(name) name=(name) rows="4" maxlength=(max_len) class=(input_class) {
                (value)
            }
        },
        InputKind::Email => html! {
            input type="email" id=(name) name=(name) value=(value) class=(input_class);
        },
        InputKind::Url => html! {
            input type="url" id=(name) name=(name) value=(value) class=(input_class);
        },
        InputKind::Decimal { min, max } => html! {
            input type="number" step="any" min=(min) max=(max)
                id=(name) name=(name) value=(value) class=(input_class);
        },
        InputKind::Integer { min, max } => html! {
            input type="number" step="1" min=(min) max=(max)
                id=(name) name=(name) value=(value) class=(input_class);
        },
        InputKind::Date => html! {
            input type="date" id=(name) name=(name) value=(value) class=(input_class);
        },
        InputKind::Select { .. } => {
            let rows = options.get(name).map(Vec::as_slice).unwrap_or(&[]);
            html! {
                select id=(name) name=(name) class=(input_class) {
                    option value="" { "— select —" }
                    @for (id, label) in rows {
                        option value=(id) selected[value == id.to_string()] {
                            (label)
                        }
                    }
                }
            }
        }
    }
}

pub fn delete_button(action: &str, label: &str) -> Markup {
    html! {
        form method="post" action=(action) class="inline" {
            button type="submit"
                class="px-3 py-1 bg-red-600 hover:bg-red-700 text-white text-sm rounded-md" {
                (label)
            }
        }
    }
}
