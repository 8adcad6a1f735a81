//! Declarative admin resource schemas.
//!
//! Each entity managed through the admin panel declares a flat table of
//! fields (name, label, input kind, required flag) plus any record-level
//! rules. The form renderer and the validation engine both consume these
//! declarations, so the field list here is the single source of truth for
//! what the admin panel accepts.

/// How a field is entered and which format check applies to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputKind {
    /// Free text, optionally capped at a maximum length.
    Text { max_len: Option<usize> },
    /// Multi-line text with a hard length cap.
    Textarea { max_len: usize },
    Email,
    Url,
    /// Floating-point input constrained to an inclusive range.
    Decimal { min: f64, max: f64 },
    /// Integer input constrained to an inclusive range.
    Integer { min: i64, max: i64 },
    /// Calendar date in ISO `YYYY-MM-DD` form.
    Date,
    /// Relation selector; the value must resolve to an existing row of the
    /// named resource.
    Select { resource: &'static str },
}

#[derive(Clone, Copy, Debug)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
}

/// Rules that span more than one field.
#[derive(Clone, Copy, Debug)]
pub enum RecordRule {
    /// `later` must be on or after `earlier` when both parse as dates.
    DateOnOrAfter {
        earlier: &'static str,
        later: &'static str,
    },
}

pub struct ResourceSchema {
    /// Plural route segment, e.g. `tracks`.
    pub resource: &'static str,
    /// Human-readable singular name, e.g. `Track`.
    pub singular: &'static str,
    pub fields: Vec<FieldDef>,
    pub rules: Vec<RecordRule>,
}

impl ResourceSchema {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

pub fn track_schema() -> ResourceSchema {
    ResourceSchema {
        resource: "tracks",
        singular: "Track",
        fields: vec![
            FieldDef {
                name: "name",
                label: "Name",
                kind: InputKind::Text { max_len: Some(255) },
                required: true,
            },
            FieldDef {
                name: "country",
                label: "Country",
                kind: InputKind::Text { max_len: Some(255) },
                required: true,
            },
            FieldDef {
                name: "city",
                label: "City",
                kind: InputKind::Text { max_len: Some(255) },
                required: true,
            },
            FieldDef {
                name: "latitude",
                label: "Latitude",
                kind: InputKind::Decimal {
                    min: -90.0,
                    max: 90.0,
                },
                required: true,
            },
            FieldDef {
                name: "longitude",
                label: "Longitude",
                kind: InputKind::Decimal {
                    min: -180.0,
                    max: 180.0,
                },
                required: true,
            },
            FieldDef {
                name: "website",
                label: "Website",
                kind: InputKind::Url,
                required: false,
            },
            FieldDef {
                name: "noise_limit",
                label: "Noise limit (dB)",
                kind: InputKind::Integer { min: 0, max: 120 },
                required: false,
            },
        ],
        rules: vec![],
    }
}

pub fn organizer_schema() -> ResourceSchema {
    ResourceSchema {
        resource: "organizers",
        singular: "Organizer",
        fields: vec![
            FieldDef {
                name: "name",
                label: "Name",
                kind: InputKind::Text { max_len: Some(255) },
                required: true,
            },
            FieldDef {
                name: "email",
                label: "Email address",
                kind: InputKind::Email,
                required: false,
            },
            FieldDef {
                name: "website",
                label: "Website",
                kind: InputKind::Url,
                required: false,
            },
            FieldDef {
                name: "logo_url",
                label: "Logo URL",
                kind: InputKind::Url,
                required: false,
            },
        ],
        rules: vec![],
    }
}

pub fn event_schema() -> ResourceSchema {
    ResourceSchema {
        resource: "events",
        singular: "Event",
        fields: vec![
            FieldDef {
                name: "track_id",
                label: "Track",
                kind: InputKind::Select { resource: "tracks" },
                required: true,
            },
            FieldDef {
                name: "organizer_id",
                label: "Organizer",
                kind: InputKind::Select {
                    resource: "organizers",
                },
                required: true,
            },
            FieldDef {
                name: "title",
                label: "Title",
                kind: InputKind::Text { max_len: Some(255) },
                required: true,
            },
            FieldDef {
                name: "description",
                label: "Description",
                kind: InputKind::Textarea { max_len: 1000 },
                required: false,
            },
            FieldDef {
                name: "start_date",
                label: "Start date",
                kind: InputKind::Date,
                required: true,
            },
            FieldDef {
                name: "end_date",
                label: "End date",
                kind: InputKind::Date,
                required: true,
            },
            FieldDef {
                name: "website",
                label: "Website",
                kind: InputKind::Url,
                required: false,
            },
        ],
        rules: vec![RecordRule::DateOnOrAfter {
            earlier: "start_date",
            later: "end_date",
        }],
    }
}
