use std::sync::Arc;

use crate::domain::common::ChatConfig;

/// Application service. Each domain implements its service trait on this
/// struct, bounded on the ports it needs.
pub struct Service<SV, US, CP, M, RC, RT, LLM, HC> {
    pub(crate) session_verifier: Arc<SV>,
    pub(crate) user_settings_repository: Arc<US>,
    pub(crate) child_profile_repository: Arc<CP>,
    pub(crate) message_repository: Arc<M>,
    pub(crate) recipe_repository: Arc<RC>,
    pub(crate) rating_repository: Arc<RT>,
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) health_check_repository: Arc<HC>,
    pub(crate) chat_config: ChatConfig,
    pub(crate) missing_settings: Vec<String>,
}

impl<SV, US, CP, M, RC, RT, LLM, HC> Service<SV, US, CP, M, RC, RT, LLM, HC> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        session_verifier: SV,
        user_settings_repository: US,
        child_profile_repository: CP,
        message_repository: M,
        recipe_repository: RC,
        rating_repository: RT,
        llm_client: LLM,
        health_check_repository: HC,
        chat_config: ChatConfig,
        missing_settings: Vec<String>,
    ) -> Self {
        Self {
            session_verifier: Arc::new(session_verifier),
            user_settings_repository: Arc::new(user_settings_repository),
            child_profile_repository: Arc::new(child_profile_repository),
            message_repository: Arc::new(message_repository),
            recipe_repository: Arc::new(recipe_repository),
            rating_repository: Arc::new(rating_repository),
            llm_client: Arc::new(llm_client),
            health_check_repository: Arc::new(health_check_repository),
            chat_config,
            missing_settings,
        }
    }

    pub fn chat_config(&self) -> &ChatConfig {
        &self.chat_config
    }

    pub fn missing_settings(&self) -> &[String] {
        &self.missing_settings
    }
}

impl<SV, US, CP, M, RC, RT, LLM, HC> Clone for Service<SV, US, CP, M, RC, RT, LLM, HC> {
    fn clone(&self) -> Self {
        Self {
            session_verifier: Arc::clone(&self.session_verifier),
            user_settings_repository: Arc::clone(&self.user_settings_repository),
            child_profile_repository: Arc::clone(&self.child_profile_repository),
            message_repository: Arc::clone(&self.message_repository),
            recipe_repository: Arc::clone(&self.recipe_repository),
            rating_repository: Arc::clone(&self.rating_repository),
            llm_client: Arc::clone(&self.llm_client),
            health_check_repository: Arc::clone(&self.health_check_repository),
            chat_config: self.chat_config.clone(),
            missing_settings: self.missing_settings.clone(),
        }
    }
}
