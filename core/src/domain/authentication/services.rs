use tracing::debug;

use crate::domain::{
    authentication::{
        ports::{AuthService, SessionVerifier},
        value_objects::Identity,
    },
    child_profile::ports::ChildProfileRepository,
    common::{entities::app_errors::CoreError, services::Service},
    conversation::ports::{LLMClient, MessageRepository},
    health::ports::HealthCheckRepository,
    recipe::ports::{RatingRepository, RecipeRepository},
    user_settings::ports::UserSettingsRepository,
};

impl<SV, US, CP, M, RC, RT, LLM, HC> AuthService for Service<SV, US, CP, M, RC, RT, LLM, HC>
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
    async fn authenticate(&self, token: String) -> Result<Identity, CoreError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(CoreError::MissingToken);
        }

        let identity = self.session_verifier.verify(token.to_string()).await?;
        debug!("authenticated user {}", identity.user_id);

        Ok(identity)
    }
}
