use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::SessionVerifier, value_objects::Identity},
    child_profile::{entities::ChildProfile, ports::ChildProfileRepository},
    common::{entities::app_errors::CoreError, services::Service},
    conversation::{
        assembler::{PromptContext, assemble_turns},
        entities::{Role, StoredMessage, Turn},
        history::{HISTORY_PAGE_LIMIT, build_export, filter_messages},
        ports::{ConversationService, LLMClient, MessageRepository},
        value_objects::{
            GetHistoryInput, HistoryExport, Lookup, SendMessageInput, SendMessageOutput,
        },
    },
    health::ports::HealthCheckRepository,
    recipe::ports::{RatingRepository, RecipeRepository},
    user_settings::ports::UserSettingsRepository,
};

impl<SV, US, CP, M, RC, RT, LLM, HC> ConversationService for Service<SV, US, CP, M, RC, RT, LLM, HC>
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
    async fn send_message(
        &self,
        identity: Identity,
        input: SendMessageInput,
    ) -> Result<SendMessageOutput, CoreError> {
        // 1. Validate body
        let message = input
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or_else(|| CoreError::Invalid("Message is required".to_string()))?
            .to_string();

        // 2. Required credentials
        self.ensure_configured()?;

        let user_id = identity.id();

        // 3. Read stored state, degrading on failure
        let context = PromptContext {
            user_override: self.lookup_override(user_id).await.logged("system prompt"),
            profile: self
                .lookup_profile(user_id, input.selected_profile_id)
                .await
                .logged("child profile"),
            history: self.lookup_history(user_id).await.logged("history"),
        };

        // 4. Assemble prompt
        let turns = assemble_turns(&self.chat_config.base_instruction, context, &message);

        // 5. Record the user turn before inference
        if let Err(e) = self
            .message_repository
            .create_message(StoredMessage::new(user_id, Role::User, message))
            .await
        {
            error!("Failed to save user message for {}: {}", user_id, e);
        }

        // 6. Call the inference oracle
        let reply = self
            .llm_client
            .complete(turns, self.chat_config.completion_options())
            .await?;

        // 7. Record the assistant turn
        if let Err(e) = self
            .message_repository
            .create_message(StoredMessage::new(user_id, Role::Assistant, reply.clone()))
            .await
        {
            error!("Failed to save assistant message for {}: {}", user_id, e);
        }

        info!("answered chat message for {}", user_id);

        Ok(SendMessageOutput { message: reply })
    }

    async fn get_history(
        &self,
        identity: Identity,
        input: GetHistoryInput,
    ) -> Result<Vec<StoredMessage>, CoreError> {
        let limit = input
            .limit
            .unwrap_or(HISTORY_PAGE_LIMIT)
            .clamp(1, HISTORY_PAGE_LIMIT);

        let messages = self
            .message_repository
            .fetch_recent(identity.id(), limit)
            .await?;

        Ok(filter_messages(messages, &input))
    }

    async fn export_history(
        &self,
        identity: Identity,
        input: GetHistoryInput,
    ) -> Result<HistoryExport, CoreError> {
        let messages = self.get_history(identity, input).await?;

        Ok(build_export(&messages, Utc::now()))
    }
}

impl<SV, US, CP, M, RC, RT, LLM, HC> Service<SV, US, CP, M, RC, RT, LLM, HC>
where
    US: UserSettingsRepository,
    CP: ChildProfileRepository,
    M: MessageRepository,
{
    fn ensure_configured(&self) -> Result<(), CoreError> {
        if self.missing_settings.is_empty() {
            return Ok(());
        }

        warn!("Chat request refused, missing settings: {:?}", self.missing_settings);
        Err(CoreError::Configuration(self.missing_settings.clone()))
    }

    async fn lookup_override(&self, user_id: Uuid) -> Lookup<String> {
        Lookup::from(self.user_settings_repository.get_by_user(user_id).await)
            .map(|settings| settings.system_prompt)
    }

    async fn lookup_profile(&self, user_id: Uuid, profile_id: Option<Uuid>) -> Lookup<ChildProfile> {
        match profile_id {
            Some(profile_id) => Lookup::from(
                self.child_profile_repository
                    .get_by_id(profile_id, user_id)
                    .await,
            ),
            None => Lookup::NotFound,
        }
    }

    async fn lookup_history(&self, user_id: Uuid) -> Lookup<Vec<Turn>> {
        Lookup::from(
            self.message_repository
                .fetch_recent(user_id, self.chat_config.history_window)
                .await,
        )
        .map(|messages| messages.iter().rev().map(Turn::from).collect())
    }
}
