use std::time::Duration;

use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::domain::common::{
    PickyJoyConfig, entities::app_errors::CoreError, services::Service,
};
use crate::infrastructure::{
    auth::supabase_session_verifier::SupabaseSessionVerifier,
    child_profile::repositories::child_profile_repository::PostgresChildProfileRepository,
    conversation::repositories::message_repository::PostgresMessageRepository,
    db::postgres::{Postgres, PostgresConfig},
    health::repositories::PostgresHealthCheckRepository,
    llm::gemini_client::GeminiLLMClient,
    recipe::repositories::{
        rating_repository::PostgresRatingRepository, recipe_repository::PostgresRecipeRepository,
    },
    user_settings::repositories::user_settings_repository::PostgresUserSettingsRepository,
};

pub type PickyJoyService = Service<
    SupabaseSessionVerifier,
    PostgresUserSettingsRepository,
    PostgresChildProfileRepository,
    PostgresMessageRepository,
    PostgresRecipeRepository,
    PostgresRatingRepository,
    GeminiLLMClient,
    PostgresHealthCheckRepository,
>;

/// Wires the production adapters. Missing credentials do not fail startup:
/// the affected requests answer with a configuration error instead.
pub async fn create_service(config: PickyJoyConfig) -> Result<PickyJoyService, CoreError> {
    let missing_settings = config.missing_settings();
    if !missing_settings.is_empty() {
        warn!(
            "Starting with missing configuration: {}",
            missing_settings.join(", ")
        );
    }

    let db = match &config.database.url {
        Some(url) => {
            let postgres = Postgres::new(PostgresConfig {
                database_url: url.clone(),
            })
            .await?;

            if config.database.run_migrations {
                postgres.migrate().await?;
            }

            postgres.get_db()
        }
        None => DatabaseConnection::default(),
    };

    let timeout = Duration::from_secs(config.llm.timeout_secs);

    let service = Service::new(
        SupabaseSessionVerifier::new(&config.auth, timeout)?,
        PostgresUserSettingsRepository::new(db.clone()),
        PostgresChildProfileRepository::new(db.clone()),
        PostgresMessageRepository::new(db.clone()),
        PostgresRecipeRepository::new(db.clone()),
        PostgresRatingRepository::new(db.clone()),
        GeminiLLMClient::new(config.llm.gemini_api_key, config.llm.gemini_model, timeout)?,
        PostgresHealthCheckRepository::new(db),
        config.chat,
        missing_settings,
    );

    info!("service initialized");
    Ok(service)
}
