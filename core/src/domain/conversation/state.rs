//! Client-side view of one conversation, owned by whichever front-end drives
//! the `/chat` endpoint.

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    conversation::{
        entities::{Role, StoredMessage},
        value_objects::SendMessageInput,
    },
    recipe::{entities::ExtractedRecipe, extractor::extract_recipe},
};

pub const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("message is empty")]
    EmptyInput,
    #[error("a message is already being answered")]
    RequestInFlight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewTurn {
    pub role: Role,
    pub content: String,
    /// Only ever set on assistant turns.
    pub recipe: Option<ExtractedRecipe>,
    pub created_at: DateTime<Utc>,
}

impl ViewTurn {
    fn new(role: Role, content: String, created_at: DateTime<Utc>) -> Self {
        let recipe = match role {
            Role::Assistant => extract_recipe(&content),
            Role::User | Role::System => None,
        };

        Self {
            role,
            content,
            recipe,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    turns: Vec<ViewTurn>,
    pending: bool,
    selected_profile_id: Option<Uuid>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the view from stored history, given newest first.
    pub fn with_history(mut self, messages: &[StoredMessage]) -> Self {
        self.turns = messages
            .iter()
            .rev()
            .filter(|m| m.role != Role::System)
            .map(|m| ViewTurn::new(m.role, m.content.clone(), m.created_at))
            .collect();
        self
    }

    pub fn turns(&self) -> &[ViewTurn] {
        &self.turns
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn selected_profile_id(&self) -> Option<Uuid> {
        self.selected_profile_id
    }

    pub fn select_profile(&mut self, profile_id: Option<Uuid>) {
        self.selected_profile_id = profile_id;
    }

    /// Records the user turn and returns the request to post. Refuses while
    /// a previous submission is unanswered.
    pub fn begin_submission(&mut self, text: &str) -> Result<SendMessageInput, SubmitError> {
        if self.pending {
            return Err(SubmitError::RequestInFlight);
        }

        let text = text.trim();
        if text.is_empty() {
            return Err(SubmitError::EmptyInput);
        }

        self.turns
            .push(ViewTurn::new(Role::User, text.to_string(), Utc::now()));
        self.pending = true;

        Ok(SendMessageInput {
            message: Some(text.to_string()),
            selected_profile_id: self.selected_profile_id,
        })
    }

    pub fn complete_submission(&mut self, reply: String) -> &ViewTurn {
        self.push_assistant(reply)
    }

    pub fn fail_submission(&mut self) -> &ViewTurn {
        self.push_assistant(ERROR_REPLY.to_string())
    }

    /// Most recent recipe offered by the assistant.
    pub fn latest_recipe(&self) -> Option<&ExtractedRecipe> {
        self.latest_recipe_turn().and_then(|t| t.recipe.as_ref())
    }

    pub fn latest_recipe_turn(&self) -> Option<&ViewTurn> {
        self.turns.iter().rev().find(|t| t.recipe.is_some())
    }

    pub fn clear(&mut self) {
        self.turns.clear();
        self.pending = false;
    }

    fn push_assistant(&mut self, content: String) -> &ViewTurn {
        self.pending = false;
        self.turns
            .push(ViewTurn::new(Role::Assistant, content, Utc::now()));
        &self.turns[self.turns.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOAST: &str =
        "**Recipe Name**: Toast\n**Ingredients**: - Bread\n- Butter\n**Instructions**: Toast it";

    #[test]
    fn test_overlapping_submission_is_refused() {
        let mut state = ConversationState::new();

        state.begin_submission("first").unwrap();
        let second = state.begin_submission("second");

        assert_eq!(second, Err(SubmitError::RequestInFlight));
        assert_eq!(state.turns().len(), 1);
    }

    #[test]
    fn test_blank_submission_is_refused() {
        let mut state = ConversationState::new();

        assert_eq!(state.begin_submission("   "), Err(SubmitError::EmptyInput));
        assert!(!state.is_pending());
        assert!(state.turns().is_empty());
    }

    #[test]
    fn test_submission_carries_selected_profile() {
        let mut state = ConversationState::new();
        let profile_id = Uuid::new_v4();
        state.select_profile(Some(profile_id));

        let input = state.begin_submission(" hi ").unwrap();

        assert_eq!(input.message.as_deref(), Some("hi"));
        assert_eq!(input.selected_profile_id, Some(profile_id));
    }

    #[test]
    fn test_recipe_is_attached_to_assistant_turns_only() {
        let mut state = ConversationState::new();

        state.begin_submission(TOAST).unwrap();
        state.complete_submission(TOAST.to_string());

        assert!(state.turns()[0].recipe.is_none());
        assert_eq!(state.turns()[1].recipe.as_ref().unwrap().title, "Toast");
        assert_eq!(state.latest_recipe().unwrap().ingredients, vec!["Bread", "Butter"]);
        assert_eq!(state.latest_recipe_turn().unwrap().content, TOAST);
    }

    #[test]
    fn test_failure_appends_error_reply_and_unlocks() {
        let mut state = ConversationState::new();
        state.begin_submission("hello").unwrap();

        let turn = state.fail_submission();

        assert_eq!(turn.content, ERROR_REPLY);
        assert!(!state.is_pending());
        assert!(state.begin_submission("again").is_ok());
    }

    #[test]
    fn test_history_is_shown_oldest_first() {
        let user_id = Uuid::new_v4();
        let history = vec![
            StoredMessage::new(user_id, Role::Assistant, TOAST.to_string()),
            StoredMessage::new(user_id, Role::User, "a toast recipe?".to_string()),
        ];

        let state = ConversationState::new().with_history(&history);

        assert_eq!(state.turns()[0].role, Role::User);
        assert!(state.turns()[1].recipe.is_some());
    }
}
