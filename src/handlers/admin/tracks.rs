use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};

use crate::{
    admin::{track_schema, validate},
    db::entities::track,
    error::{AppError, Result},
    state::AppState,
    templates::{admin_form_page, admin_tracks_page, SelectOptions},
};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let tracks = track::Entity::find()
        .order_by_asc(track::Column::Name)
        .all(&state.db)
        .await?;

    Ok(Html(admin_tracks_page(tracks).into_string()))
}

pub async fn new_form() -> Html<String> {
    let schema = track_schema();
    let markup = admin_form_page(
        &schema,
        "New Track",
        "/admin/tracks",
        &HashMap::new(),
        &[],
        &SelectOptions::new(),
        None,
    );

    Html(markup.into_string())
}

pub async fn create(
    State(state): State<AppState>,
    Form(input): Form<HashMap<String, String>>,
) -> Result<Response> {
    let schema = track_schema();

    let values = match validate(&schema, &input) {
        Ok(values) => values,
        Err(errors) => {
            let markup = admin_form_page(
                &schema,
                "New Track",
                "/admin/tracks",
                &input,
                &errors,
                &SelectOptions::new(),
                None,
            );
            return Ok(
                (StatusCode::UNPROCESSABLE_ENTITY, Html(markup.into_string())).into_response(),
            );
        }
    };

    let now = Utc::now().into();
    let new_track = track::ActiveModel {
        name: Set(values.text("name").unwrap_or_default()),
        country: Set(values.text("country").unwrap_or_default()),
        city: Set(values.text("city").unwrap_or_default()),
        latitude: Set(values.decimal("latitude").unwrap_or_default()),
        longitude: Set(values.decimal("longitude").unwrap_or_default()),
        website: Set(values.text("website")),
        noise_limit: Set(values.integer("noise_limit").map(|v| v as i32)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    new_track.insert(&state.db).await?;

    Ok(Redirect::to("/admin/tracks").into_response())
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let existing = track::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Track not found".to_string()))?;

    let schema = track_schema();
    let markup = admin_form_page(
        &schema,
        "Edit Track",
        &format!("/admin/tracks/{}", id),
        &form_values(&existing),
        &[],
        &SelectOptions::new(),
        Some(&format!("/admin/tracks/{}/delete", id)),
    );

    Ok(Html(markup.into_string()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(input): Form<HashMap<String, String>>,
) -> Result<Response> {
    let existing = track::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Track not found".to_string()))?;

    let schema = track_schema();

    let values = match validate(&schema, &input) {
        Ok(values) => values,
        Err(errors) => {
            let markup = admin_form_page(
                &schema,
                "Edit Track",
                &format!("/admin/tracks/{}", id),
                &input,
                &errors,
                &SelectOptions::new(),
                Some(&format!("/admin/tracks/{}/delete", id)),
            );
            return Ok(
                (StatusCode::UNPROCESSABLE_ENTITY, Html(markup.into_string())).into_response(),
            );
        }
    };

    let mut active: track::ActiveModel = existing.into();
    active.name = Set(values.text("name").unwrap_or_default());
    active.country = Set(values.text("country").unwrap_or_default());
    active.city = Set(values.text("city").unwrap_or_default());
    active.latitude = Set(values.decimal("latitude").unwrap_or_default());
    active.longitude = Set(values.decimal("longitude").unwrap_or_default());
    active.website = Set(values.text("website"));
    active.noise_limit = Set(values.integer("noise_limit").map(|v| v as i32));
    active.updated_at = Set(Utc::now().into());
    active.update(&state.db).await?;

    Ok(Redirect::to("/admin/tracks").into_response())
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Response> {
    let existing = track::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Track not found".to_string()))?;

    existing.delete(&state.db).await?;

    Ok(Redirect::to("/admin/tracks").into_response())
}

fn form_values(track: &track::Model) -> HashMap<String, String> {
    let mut values = HashMap::new();
    values.insert("name".to_string(), track.name.clone());
    values.insert("country".to_string(), track.country.clone());
    values.insert("city".to_string(), track.city.clone());
    values.insert("latitude".to_string(), track.latitude.to_string());
    values.insert("longitude".to_string(), track.longitude.to_string());
    if let Some(website) = &track.website {
        values.insert("website".to_string(), website.clone());
    }
    if let Some(limit) = track.noise_limit {
        values.insert("noise_limit".to_string(), limit.to_string());
    }
    values
}
