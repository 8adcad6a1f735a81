//! Admin-panel resource definitions: declarative field schemas plus the
//! validation engine that enforces them at submission time.

pub mod schema;
pub mod validate;

pub use schema::{event_schema, organizer_schema, track_schema, FieldDef, InputKind, ResourceSchema};
pub use validate::{validate, FieldError, ValidatedInput};
