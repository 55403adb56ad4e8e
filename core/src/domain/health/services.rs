use crate::domain::{
    authentication::ports::SessionVerifier,
    child_profile::ports::ChildProfileRepository,
    common::{entities::app_errors::CoreError, services::Service},
    conversation::ports::{LLMClient, MessageRepository},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    recipe::ports::{RatingRepository, RecipeRepository},
    user_settings::ports::UserSettingsRepository,
};

impl<SV, US, CP, M, RC, RT, LLM, HC> HealthCheckService for Service<SV, US, CP, M, RC, RT, LLM, HC>
where
    SV: SessionVerifier,
    US: UserSettingsRepository,
    CP: ChildProfileRepository,
    M: MessageRepository,
    RC: RecipeRepository,
    RT: RatingRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}
