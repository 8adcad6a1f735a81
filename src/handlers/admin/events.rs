use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
};

use crate::{
    admin::{event_schema, validate, FieldError, ValidatedInput},
    db::entities::{event, organizer, track},
    error::{AppError, Result},
    state::AppState,
    templates::{admin_events_page, admin_form_page, EventRowData, SelectOptions},
};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let events = event::Entity::find()
        .order_by_asc(event::Column::StartDate)
        .find_also_related(track::Entity)
        .all(&state.db)
        .await?;

    // Small table; resolve organizer names in one fetch.
    let organizer_names: HashMap<i32, String> = organizer::Entity::find()
        .all(&state.db)
        .await?
        .into_iter()
        .map(|o| (o.id, o.name))
        .collect();

    let rows: Vec<EventRowData> = events
        .into_iter()
        .map(|(event, track)| EventRowData {
            id: event.id,
            title: event.title,
            track_name: track.map(|t| t.name).unwrap_or_else(|| "—".to_string()),
            organizer_name: organizer_names
                .get(&event.organizer_id)
                .cloned()
                .unwrap_or_else(|| "—".to_string()),
            start_date: event.start_date.to_string(),
            end_date: event.end_date.to_string(),
        })
        .collect();

    Ok(Html(admin_events_page(rows).into_string()))
}

pub async fn new_form(State(state): State<AppState>) -> Result<Html<String>> {
    let schema = event_schema();
    let options = select_options(&state.db).await?;
    let markup = admin_form_page(
        &schema,
        "New Event",
        "/admin/events",
        &HashMap::new(),
        &[],
        &options,
        None,
    );

    Ok(Html(markup.into_string()))
}

pub async fn create(
    State(state): State<AppState>,
    Form(input): Form<HashMap<String, String>>,
) -> Result<Response> {
    let schema = event_schema();
    let options = select_options(&state.db).await?;

    let values = match validate(&schema, &input) {
        Ok(values) => values,
        Err(errors) => {
            let markup =
                admin_form_page(&schema, "New Event", "/admin/events", &input, &errors, &options, None);
            return Ok(
                (StatusCode::UNPROCESSABLE_ENTITY, Html(markup.into_string())).into_response(),
            );
        }
    };

    let errors = check_references(&state.db, &values).await?;
    if !errors.is_empty() {
        let markup =
            admin_form_page(&schema, "New Event", "/admin/events", &input, &errors, &options, None);
        return Ok(
            (StatusCode::UNPROCESSABLE_ENTITY, Html(markup.into_string())).into_response(),
        );
    }

    let now = Utc::now().into();
    let new_event = event::ActiveModel {
        track_id: Set(values.reference("track_id").unwrap_or_default()),
        organizer_id: Set(values.reference("organizer_id").unwrap_or_default()),
        title: Set(values.text("title").unwrap_or_default()),
        description: Set(values.text("description")),
        start_date: Set(values.date("start_date").unwrap_or_default()),
        end_date: Set(values.date("end_date").unwrap_or_default()),
        website: Set(values.text("website")),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    new_event.insert(&state.db).await?;

    Ok(Redirect::to("/admin/events").into_response())
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let existing = event::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    let schema = event_schema();
    let options = select_options(&state.db).await?;
    let markup = admin_form_page(
        &schema,
        "Edit Event",
        &format!("/admin/events/{}", id),
        &form_values(&existing),
        &[],
        &options,
        None,
    );

    Ok(Html(markup.into_string()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(input): Form<HashMap<String, String>>,
) -> Result<Response> {
    let existing = event::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    let schema = event_schema();
    let options = select_options(&state.db).await?;
    let action = format!("/admin/events/{}", id);

    let values = match validate(&schema, &input) {
        Ok(values) => values,
        Err(errors) => {
            let markup =
                admin_form_page(&schema, "Edit Event", &action, &input, &errors, &options, None);
            return Ok(
                (StatusCode::UNPROCESSABLE_ENTITY, Html(markup.into_string())).into_response(),
            );
        }
    };

    let errors = check_references(&state.db, &values).await?;
    if !errors.is_empty() {
        let markup =
            admin_form_page(&schema, "Edit Event", &action, &input, &errors, &options, None);
        return Ok(
            (StatusCode::UNPROCESSABLE_ENTITY, Html(markup.into_string())).into_response(),
        );
    }

    let mut active: event::ActiveModel = existing.into();
    active.track_id = Set(values.reference("track_id").unwrap_or_default());
    active.organizer_id = Set(values.reference("organizer_id").unwrap_or_default());
    active.title = Set(values.text("title").unwrap_or_default());
    active.description = Set(values.text("description"));
    active.start_date = Set(values.date("start_date").unwrap_or_default());
    active.end_date = Set(values.date("end_date").unwrap_or_default());
    active.website = Set(values.text("website"));
    active.updated_at = Set(Utc::now().into());
    active.update(&state.db).await?;

    Ok(Redirect::to("/admin/events").into_response())
}

/// Track and organizer choices for the relation selectors, ordered by name.
async fn select_options(db: &DatabaseConnection) -> Result<SelectOptions> {
    let tracks: Vec<(i32, String)> = track::Entity::find()
        .select_only()
        .column(track::Column::Id)
        .column(track::Column::Name)
        .order_by_asc(track::Column::Name)
        .into_tuple()
        .all(db)
        .await?;

    let organizers: Vec<(i32, String)> = organizer::Entity::find()
        .select_only()
        .column(organizer::Column::Id)
        .column(organizer::Column::Name)
        .order_by_asc(organizer::Column::Name)
        .into_tuple()
        .all(db)
        .await?;

    let mut options = SelectOptions::new();
    options.insert("track_id", tracks);
    options.insert("organizer_id", organizers);
    Ok(options)
}

/// Relation selectors must resolve to live rows.
async fn check_references(
    db: &DatabaseConnection,
    values: &ValidatedInput,
) -> Result<Vec<FieldError>> {
    let mut errors = Vec::new();

    let track_id = values.reference("track_id").unwrap_or_default();
    if track::Entity::find_by_id(track_id).one(db).await?.is_none() {
        errors.push(FieldError {
            field: "track_id".to_string(),
            message: "Selected track does not exist.".to_string(),
        });
    }

    let organizer_id = values.reference("organizer_id").unwrap_or_default();
    if organizer::Entity::find_by_id(organizer_id)
        .one(db)
        .await?
        .is_none()
    {
        errors.push(FieldError {
            field: "organizer_id".to_string(),
            message: "Selected organizer does not exist.".to_string(),
        });
    }

    Ok(errors)
}

fn form_values(event: &event::Model) -> HashMap<String, String> {
    let mut values = HashMap::new();
    values.insert("track_id".to_string(), event.track_id.to_string());
    values.insert("organizer_id".to_string(), event.organizer_id.to_string());
    values.insert("title".to_string(), event.title.clone());
    if let Some(description) = &event.description {
        values.insert("description".to_string(), description.clone());
    }
    values.insert("start_date".to_string(), event.start_date.to_string());
    values.insert("end_date".to_string(), event.end_date.to_string());
    if let Some(website) = &event.website {
        values.insert("website".to_string(), website.clone());
    }
    values
}
