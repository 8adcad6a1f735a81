use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::{
    admin::{organizer_schema, validate},
    db::entities::organizer,
    error::{AppError, Result},
    state::AppState,
    templates::{admin_form_page, admin_organizers_page, SelectOptions},
};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let organizers = organizer::Entity::find()
        .order_by_asc(organizer::Column::Name)
        .all(&state.db)
        .await?;

    Ok(Html(admin_organizers_page(organizers).into_string()))
}

pub async fn new_form() -> Html<String> {
    let schema = organizer_schema();
    let markup = admin_form_page(
        &schema,
        "New Organizer",
        "/admin/organizers",
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
    let schema = organizer_schema();

    let values = match validate(&schema, &input) {
        Ok(values) => values,
        Err(errors) => {
            let markup = admin_form_page(
                &schema,
                "New Organizer",
                "/admin/organizers",
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
    let new_organizer = organizer::ActiveModel {
        name: Set(values.text("name").unwrap_or_default()),
        email: Set(values.text("email")),
        website: Set(values.text("website")),
        logo_url: Set(values.text("logo_url")),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    new_organizer.insert(&state.db).await?;

    Ok(Redirect::to("/admin/organizers").into_response())
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let existing = organizer::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Organizer not found".to_string()))?;

    let schema = organizer_schema();
    let markup = admin_form_page(
        &schema,
        "Edit Organizer",
        &format!("/admin/organizers/{}", id),
        &form_values(&existing),
        &[],
        &SelectOptions::new(),
        None,
    );

    Ok(Html(markup.into_string()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(input): Form<HashMap<String, String>>,
) -> Result<Response> {
    let existing = organizer::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Organizer not found".to_string()))?;

    let schema = organizer_schema();

    let values = match validate(&schema, &input) {
        Ok(values) => values,
        Err(errors) => {
            let markup = admin_form_page(
                &schema,
                "Edit Organizer",
                &format!("/admin/organizers/{}", id),
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

    let mut active: organizer::ActiveModel = existing.into();
    active.name = Set(values.text("name").unwrap_or_default());
    active.email = Set(values.text("email"));
    active.website = Set(values.text("website"));
    active.logo_url = Set(values.text("logo_url"));
    active.updated_at = Set(Utc::now().into());
    active.update(&state.db).await?;

    Ok(Redirect::to("/admin/organizers").into_response())
}

fn form_values(organizer: &organizer::Model) -> HashMap<String, String> {
    let mut values = HashMap::new();
    values.insert("name".to_string(), organizer.name.clone());
    if let Some(email) = &organizer.email {
        values.insert("email".to_string(), email.clone());
    }
    if let Some(website) = &organizer.website {
        values.insert("website".to_string(), website.clone());
    }
    if let Some(logo_url) = &organizer.logo_url {
        values.insert("logo_url".to_string(), logo_url.clone());
    }
    values
}
