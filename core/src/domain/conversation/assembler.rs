//! Builds the turn list sent to the inference oracle.
//!
//! The effective system prompt is the base instruction, replaced wholesale by
//! a non-empty user override, then optionally extended with a child profile
//! block. Every input arrives as a [`Lookup`] so that failed lookups collapse
//! to their default here instead of failing the request.

use crate::domain::{
    child_profile::entities::ChildProfile,
    conversation::{entities::Turn, value_objects::Lookup},
};

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are Picky Joy, a friendly and knowledgeable AI nutrition assistant specializing in helping parents with picky eaters. You provide personalized recipe suggestions, nutritional advice, and meal planning tips.

Key Guidelines:
- Always be encouraging and positive
- Suggest recipes that are kid-friendly and nutritious
- Consider common picky eater preferences (simple flavors, familiar textures)
- Provide practical cooking tips
- Include nutritional benefits when relevant
- Be creative but realistic about what kids will actually eat
- Keep responses concise but helpful
- Ask follow-up questions to better understand the child's preferences

When suggesting recipes, format them like this:
**Recipe Name**: [Name]
**Ingredients**: [List]
**Instructions**: [Steps]
**Tips**: [Helpful hints for picky eaters]

Remember: You're helping stressed parents, so be supportive and practical!";

pub const PROFILE_INSTRUCTION: &str = "Please tailor your suggestions to these preferences and never include ingredients from the allergy list.";

/// Everything read from the store for one request.
#[derive(Debug, Clone)]
pub struct PromptContext {
    pub user_override: Lookup<String>,
    pub profile: Lookup<ChildProfile>,
    /// Prior turns, oldest first.
    pub history: Lookup<Vec<Turn>>,
}

impl Default for PromptContext {
    fn default() -> Self {
        Self {
            user_override: Lookup::NotFound,
            profile: Lookup::NotFound,
            history: Lookup::NotFound,
        }
    }
}

pub fn enrichment_block(profile: &ChildProfile) -> String {
    let mut lines = Vec::with_capacity(4);

    let mut header = format!("Child profile: {}", profile.name);
    if let Some(age) = profile.age {
        header.push_str(&format!(" ({age} years old)"));
    }
    lines.push(header);

    if !profile.preferences.is_empty() {
        lines.push(format!("Likes: {}", profile.preferences.join(", ")));
    }
    if !profile.allergies.is_empty() {
        lines.push(format!("Allergies: {}", profile.allergies.join(", ")));
    }

    lines.push(PROFILE_INSTRUCTION.to_string());
    lines.join("\n")
}

pub fn effective_system_prompt(
    base_instruction: &str,
    user_override: &Lookup<String>,
    profile: &Lookup<ChildProfile>,
) -> String {
    let mut prompt = match user_override.as_found() {
        Some(text) if !text.trim().is_empty() => text.clone(),
        _ => base_instruction.to_string(),
    };

    if let Some(profile) = profile.as_found() {
        prompt.push_str("\n\n");
        prompt.push_str(&enrichment_block(profile));
    }

    prompt
}

/// `[system] ++ history ++ [user]`.
pub fn assemble_turns(
    base_instruction: &str,
    context: PromptContext,
    new_user_text: &str,
) -> Vec<Turn> {
    let system = effective_system_prompt(base_instruction, &context.user_override, &context.profile);
    let history = context.history.found().unwrap_or_default();

    let mut turns = Vec::with_capacity(history.len() + 2);
    turns.push(Turn::system(system));
    turns.extend(history);
    turns.push(Turn::user(new_user_text));
    turns
}
