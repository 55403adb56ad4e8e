use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    user_settings::entities::{SystemPromptView, UserSettings},
};

#[cfg_attr(test, mockall::automock)]
pub trait UserSettingsRepository: Send + Sync {
    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserSettings>, CoreError>> + Send;

    fn upsert(
        &self,
        settings: UserSettings,
    ) -> impl Future<Output = Result<UserSettings, CoreError>> + Send;

    fn delete_by_user(&self, user_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserSettingsService: Send + Sync {
    fn get_system_prompt(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<SystemPromptView, CoreError>> + Send;

    fn update_system_prompt(
        &self,
        identity: Identity,
        system_prompt: String,
    ) -> impl Future<Output = Result<SystemPromptView, CoreError>> + Send;

    fn reset_system_prompt(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<SystemPromptView, CoreError>> + Send;
}
