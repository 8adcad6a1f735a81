//! Schema-driven form validation.
//!
//! Takes the raw urlencoded form body (a flat string map) and a
//! [`ResourceSchema`], and produces either a map of typed field values or a
//! list of field-level errors. Validation is total: every field is checked
//! and all errors are collected before the form is handed back to the user.
//!
//! Referential checks for `Select` fields happen in the handlers, which hold
//! the database connection; here a selection only has to parse as an id.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use super::schema::{InputKind, RecordRule, ResourceSchema};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Decimal(f64),
    Integer(i64),
    Date(NaiveDate),
    /// Primary key chosen through a relation selector.
    Reference(i32),
    /// Optional field left blank.
    Null,
}

/// Typed values produced by a successful validation pass.
#[derive(Debug, Clone, Default)]
pub struct ValidatedInput(HashMap<String, FieldValue>);

impl ValidatedInput {
    pub fn text(&self, field: &str) -> Option<String> {
        match self.0.get(field) {
            Some(FieldValue::Text(s)) => Some(s.clone()),
            _ => None,
        }
    }

    pub fn decimal(&self, field: &str) -> Option<f64> {
        match self.0.get(field) {
            Some(FieldValue::Decimal(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn integer(&self, field: &str) -> Option<i64> {
        match self.0.get(field) {
            Some(FieldValue::Integer(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn date(&self, field: &str) -> Option<NaiveDate> {
        match self.0.get(field) {
            Some(FieldValue::Date(d)) => Some(*d),
            _ => None,
        }
    }

    pub fn reference(&self, field: &str) -> Option<i32> {
        match self.0.get(field) {
            Some(FieldValue::Reference(id)) => Some(*id),
            _ => None,
        }
    }
}

/// Validate a submitted form against a resource schema.
///
/// Blank strings count as absent: required fields reject them, optional
/// fields map them to [`FieldValue::Null`].
pub fn validate(
    schema: &ResourceSchema,
    input: &HashMap<String, String>,
) -> Result<ValidatedInput, Vec<FieldError>> {
    let mut values = HashMap::new();
    let mut errors = Vec::new();

    for field in &schema.fields {
        let raw = input
            .get(field.name)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty());

        let raw = match raw {
            Some(raw) => raw,
            None => {
                if field.required {
                    errors.push(FieldError::new(
                        field.name,
                        format!("{} is required.", field.label),
                    ));
                } else {
                    values.insert(field.name.to_string(), FieldValue::Null);
                }
                continue;
            }
        };

        match check_field(field.name, &field.kind, field.label, raw) {
            Ok(value) => {
                values.insert(field.name.to_string(), value);
            }
            Err(error) => errors.push(error),
        }
    }

    for rule in &schema.rules {
        match *rule {
            RecordRule::DateOnOrAfter { earlier, later } => {
                if let (Some(FieldValue::Date(start)), Some(FieldValue::Date(end))) =
                    (values.get(earlier), values.get(later))
                {
                    if end < start {
                        let label = schema
                            .field(later)
                            .map(|f| f.label)
                            .unwrap_or(later);
                        let earlier_label = schema
                            .field(earlier)
                            .map(|f| f.label)
                            .unwrap_or(earlier);
                        errors.push(FieldError::new(
                            later,
                            format!("{} must be on or after {}.", label, earlier_label.to_lowercase()),
                        ));
                    }
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(ValidatedInput(values))
    } else {
        Err(errors)
    }
}

fn check_field(
    name: &str,
    kind: &InputKind,
    label: &str,
    raw: &str,
) -> Result<FieldValue, FieldError> {
    match kind {
        InputKind::Text { max_len } => {
            if let Some(max) = max_len {
                if raw.chars().count() > *max {
                    return Err(FieldError::new(
                        name,
                        format!("{} must be at most {} characters.", label, max),
                    ));
                }
            }
            Ok(FieldValue::Text(raw.to_string()))
        }
        InputKind::Textarea { max_len } => {
            if raw.chars().count() > *max_len {
                return Err(FieldError::new(
                    name,
                    format!("{} must be at most {} characters.", label, max_len),
                ));
            }
            Ok(FieldValue::Text(raw.to_string()))
        }
        InputKind::Email => {
            if EMAIL_RE.is_match(raw) {
                Ok(FieldValue::Text(raw.to_string()))
            } else {
                Err(FieldError::new(
                    name,
                    format!("{} must be a valid email address.", label),
                ))
            }
        }
        InputKind::Url => {
            if URL_RE.is_match(raw) {
                Ok(FieldValue::Text(raw.to_string()))
            } else {
                Err(FieldError::new(
                    name,
                    format!("{} must be a valid URL.", label),
                ))
            }
        }
        InputKind::Decimal { min, max } => match raw.parse::<f64>() {
            Ok(value) if value >= *min && value <= *max => Ok(FieldValue::Decimal(value)),
            Ok(_) => Err(FieldError::new(
                name,
                format!("{} must be between {} and {}.", label, min, max),
            )),
            Err(_) => Err(FieldError::new(
                name,
                format!("{} must be a number.", label),
            )),
        },
        InputKind::Integer { min, max } => match raw.parse::<i64>() {
            Ok(value) if value >= *min && value <= *max => Ok(FieldValue::Integer(value)),
            Ok(_) => Err(FieldError::new(
                name,
                format!("{} must be between {} and {}.", label, min, max),
            )),
            Err(_) => Err(FieldError::new(
                name,
                format!("{} must be a whole number.", label),
            )),
        },
        InputKind::Date => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Ok(FieldValue::Date(date)),
            Err(_) => Err(FieldError::new(
                name,
                format!("{} must be a date in YYYY-MM-DD form.", label),
            )),
        },
        InputKind::Select { .. } => match raw.parse::<i32>() {
            Ok(id) if id > 0 => Ok(FieldValue::Reference(id)),
            _ => Err(FieldError::new(
                name,
                format!("{} must be selected.", label),
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::schema::{event_schema, organizer_schema, track_schema};
    use pretty_assertions::assert_eq;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn accepts_full_track_submission() {
        let input = form(&[
            ("name", "Silverstone Circuit"),
            ("country", "UK"),
            ("city", "Silverstone"),
            ("latitude", "52.0733"),
            ("longitude", "-1.0147"),
            ("website", "https://www.silverstone.co.uk"),
            ("noise_limit", "105"),
        ]);

        let values = validate(&track_schema(), &input).unwrap();
        assert_eq!(values.text("name").unwrap(), "Silverstone Circuit");
        assert_eq!(values.decimal("latitude").unwrap(), 52.0733);
        assert_eq!(values.integer("noise_limit").unwrap(), 105);
    }

    #[test]
    fn optional_blanks_become_null() {
        let input = form(&[
            ("name", "Spa-Francorchamps"),
            ("country", "Belgium"),
            ("city", "Stavelot"),
            ("latitude", "50.4372"),
            ("longitude", "5.9714"),
            ("website", ""),
            ("noise_limit", ""),
        ]);

        let values = validate(&track_schema(), &input).unwrap();
        assert_eq!(values.text("website"), None);
        assert_eq!(values.integer("noise_limit"), None);
    }

    #[test]
    fn missing_required_fields_are_reported() {
        let errors = validate(&track_schema(), &form(&[])).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["name", "country", "city", "latitude", "longitude"]
        );
    }

    #[test]
    fn latitude_out_of_range_is_rejected() {
        let input = form(&[
            ("name", "Nowhere"),
            ("country", "Atlantis"),
            ("city", "Sunken City"),
            ("latitude", "91.0"),
            ("longitude", "0.0"),
        ]);

        let errors = validate(&track_schema(), &input).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "latitude");
        assert!(errors[0].message.contains("between -90 and 90"));
    }

    #[test]
    fn noise_limit_out_of_range_is_rejected() {
        let input = form(&[
            ("name", "Loud Ring"),
            ("country", "Germany"),
            ("city", "Nurburg"),
            ("latitude", "50.3356"),
            ("longitude", "6.9475"),
            ("noise_limit", "130"),
        ]);

        let errors = validate(&track_schema(), &input).unwrap_err();
        assert_eq!(errors[0].field, "noise_limit");
    }

    #[test]
    fn invalid_email_is_rejected() {
        let input = form(&[("name", "Trackday Club"), ("email", "not-an-email")]);
        let errors = validate(&organizer_schema(), &input).unwrap_err();
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn invalid_url_is_rejected() {
        let input = form(&[("name", "Trackday Club"), ("website", "ftp://example.com")]);
        let errors = validate(&organizer_schema(), &input).unwrap_err();
        assert_eq!(errors[0].field, "website");
    }

    #[test]
    fn end_date_before_start_date_is_rejected() {
        let input = form(&[
            ("track_id", "1"),
            ("organizer_id", "1"),
            ("title", "Spring Open Day"),
            ("start_date", "2025-06-02"),
            ("end_date", "2025-06-01"),
        ]);

        let errors = validate(&event_schema(), &input).unwrap_err();
        assert_eq!(errors[0].field, "end_date");
        assert!(errors[0].message.contains("on or after"));
    }

    #[test]
    fn equal_start_and_end_dates_are_accepted() {
        let input = form(&[
            ("track_id", "1"),
            ("organizer_id", "2"),
            ("title", "One Day Event"),
            ("start_date", "2025-06-01"),
            ("end_date", "2025-06-01"),
        ]);

        let values = validate(&event_schema(), &input).unwrap();
        assert_eq!(values.reference("track_id").unwrap(), 1);
        assert_eq!(values.reference("organizer_id").unwrap(), 2);
        assert_eq!(values.date("start_date"), values.date("end_date"));
    }

    #[test]
    fn overlong_title_is_rejected() {
        let input = form(&[
            ("track_id", "1"),
            ("organizer_id", "1"),
            ("title", &"x".repeat(256)),
            ("start_date", "2025-06-01"),
            ("end_date", "2025-06-02"),
        ]);

        let errors = validate(&event_schema(), &input).unwrap_err();
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn non_numeric_selection_is_rejected() {
        let input = form(&[
            ("track_id", "abc"),
            ("organizer_id", "1"),
            ("title", "Bad Selector"),
            ("start_date", "2025-06-01"),
            ("end_date", "2025-06-02"),
        ]);

        let errors = validate(&event_schema(), &input).unwrap_err();
        assert_eq!(errors[0].field, "track_id");
    }
}
