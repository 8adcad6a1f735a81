//! Test utilities for Trackdays
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Test data generators

use chrono::{NaiveDate, Utc};
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use crate::{
    config::Config,
    db::entities::{event, organizer, track},
    state::AppState,
};

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database perfect for parallel testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // Run all migrations
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    AppState::new(db, test_config())
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Create a test track in the database
pub async fn create_test_track(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    country: &str,
) -> track::Model {
    let now = Utc::now().into();
    let new_track = track::ActiveModel {
        name: Set(name.to_string()),
        country: Set(country.to_string()),
        city: Set(city.to_string()),
        latitude: Set(52.0),
        longitude: Set(-1.0),
        website: Set(None),
        noise_limit: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    new_track.insert(db).await.expect("Failed to insert test track")
}

/// Create a test organizer in the database
pub async fn create_test_organizer(db: &DatabaseConnection, name: &str) -> organizer::Model {
    let now = Utc::now().into();
    let new_organizer = organizer::ActiveModel {
        name: Set(name.to_string()),
        email: Set(None),
        website: Set(None),
        logo_url: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    new_organizer
        .insert(db)
        .await
        .expect("Failed to insert test organizer")
}

/// Create a test event in the database
pub async fn create_test_event(
    db: &DatabaseConnection,
    track_id: i32,
    organizer_id: i32,
    title: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> event::Model {
    let now = Utc::now().into();
    let new_event = event::ActiveModel {
        track_id: Set(track_id),
        organizer_id: Set(organizer_id),
        title: Set(title.to_string()),
        description: Set(None),
        start_date: Set(start_date),
        end_date: Set(end_date),
        website: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    new_event.insert(db).await.expect("Failed to insert test event")
}
