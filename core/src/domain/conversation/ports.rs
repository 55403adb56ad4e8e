use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    conversation::{
        entities::{StoredMessage, Turn},
        value_objects::{
            CompletionOptions, GetHistoryInput, HistoryExport, SendMessageInput, SendMessageOutput,
        },
    },
};

/// Repository trait for persisted chat messages.
#[cfg_attr(test, mockall::automock)]
pub trait MessageRepository: Send + Sync {
    fn create_message(
        &self,
        message: StoredMessage,
    ) -> impl Future<Output = Result<StoredMessage, CoreError>> + Send;

    /// Most recent messages of a user, newest first.
    fn fetch_recent(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<StoredMessage>, CoreError>> + Send;
}

/// Inference oracle: turns in, one generated text out.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn complete(
        &self,
        turns: Vec<Turn>,
        options: CompletionOptions,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ConversationService: Send + Sync {
    fn send_message(
        &self,
        identity: Identity,
        input: SendMessageInput,
    ) -> impl Future<Output = Result<SendMessageOutput, CoreError>> + Send;

    fn get_history(
        &self,
        identity: Identity,
        input: GetHistoryInput,
    ) -> impl Future<Output = Result<Vec<StoredMessage>, CoreError>> + Send;

    fn export_history(
        &self,
        identity: Identity,
        input: GetHistoryInput,
    ) -> impl Future<Output = Result<HistoryExport, CoreError>> + Send;
}
