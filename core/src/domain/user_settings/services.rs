use crate::domain::{
    authentication::{ports::SessionVerifier, value_objects::Identity},
    child_profile::ports::ChildProfileRepository,
    common::{entities::app_errors::CoreError, services::Service},
    conversation::ports::{LLMClient, MessageRepository},
    health::ports::HealthCheckRepository,
    recipe::ports::{RatingRepository, RecipeRepository},
    user_settings::{
        entities::{SystemPromptView, UserSettings},
        ports::{UserSettingsRepository, UserSettingsService},
    },
};

impl<SV, US, CP, M, RC, RT, LLM, HC> UserSettingsService for Service<SV, US, CP, M, RC, RT, LLM, HC>
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
    async fn get_system_prompt(&self, identity: Identity) -> Result<SystemPromptView, CoreError> {
        let settings = self
            .user_settings_repository
            .get_by_user(identity.id())
            .await?;

        let view = match settings {
            Some(settings) if !settings.system_prompt.trim().is_empty() => SystemPromptView {
                system_prompt: settings.system_prompt,
                is_custom: true,
            },
            _ => self.default_prompt_view(),
        };

        Ok(view)
    }

    async fn update_system_prompt(
        &self,
        identity: Identity,
        system_prompt: String,
    ) -> Result<SystemPromptView, CoreError> {
        if system_prompt.trim().is_empty() {
            return Err(CoreError::Invalid("system_prompt is required".to_string()));
        }

        let saved = self
            .user_settings_repository
            .upsert(UserSettings::new(identity.id(), system_prompt))
            .await?;

        Ok(SystemPromptView {
            system_prompt: saved.system_prompt,
            is_custom: true,
        })
    }

    async fn reset_system_prompt(&self, identity: Identity) -> Result<SystemPromptView, CoreError> {
        self.user_settings_repository
            .delete_by_user(identity.id())
            .await?;

        Ok(self.default_prompt_view())
    }
}

impl<SV, US, CP, M, RC, RT, LLM, HC> Service<SV, US, CP, M, RC, RT, LLM, HC> {
    fn default_prompt_view(&self) -> SystemPromptView {
        SystemPromptView {
            system_prompt: self.chat_config.base_instruction.clone(),
            is_custom: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_support::TestServiceBuilder;

    #[tokio::test]
    async fn test_default_prompt_when_no_override() {
        let harness = TestServiceBuilder::new().build();

        let view = harness
            .service
            .get_system_prompt(harness.identity.clone())
            .await
            .unwrap();

        assert!(!view.is_custom);
        assert_eq!(view.system_prompt, harness.service.chat_config().base_instruction);
    }

    #[tokio::test]
    async fn test_update_then_reset_prompt() {
        let harness = TestServiceBuilder::new().build();

        let updated = harness
            .service
            .update_system_prompt(harness.identity.clone(), "Be brief.".to_string())
            .await
            .unwrap();
        assert!(updated.is_custom);

        let view = harness
            .service
            .get_system_prompt(harness.identity.clone())
            .await
            .unwrap();
        assert_eq!(view.system_prompt, "Be brief.");

        let reset = harness
            .service
            .reset_system_prompt(harness.identity.clone())
            .await
            .unwrap();
        assert!(!reset.is_custom);
        assert!(harness.user_settings.get(harness.identity.user_id).is_none());
    }

    #[tokio::test]
    async fn test_blank_prompt_is_rejected() {
        let harness = TestServiceBuilder::new().build();

        let result = harness
            .service
            .update_system_prompt(harness.identity.clone(), "  \n ".to_string())
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }
}
