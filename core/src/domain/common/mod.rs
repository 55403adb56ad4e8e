use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

use crate::domain::conversation::{assembler::DEFAULT_SYSTEM_PROMPT, value_objects::CompletionOptions};

pub mod entities;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

#[derive(Clone, Debug)]
pub struct PickyJoyConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub llm: LLMConfig,
    pub chat: ChatConfig,
}

#[derive(Clone, Debug, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub run_migrations: bool,
}

/// Either a Supabase project URL plus service key (tokens are checked against
/// `/auth/v1/user`) or the project's JWT secret (tokens are checked locally).
#[derive(Clone, Debug, Default)]
pub struct AuthConfig {
    pub supabase_url: Option<String>,
    pub supabase_service_key: Option<String>,
    pub jwt_secret: Option<String>,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct ChatConfig {
    pub base_instruction: String,
    pub history_window: u64,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: "gemini-2.0-flash".to_string(),
            timeout_secs: 60,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_instruction: DEFAULT_SYSTEM_PROMPT.to_string(),
            history_window: 10,
            max_output_tokens: 1000,
            temperature: 0.7,
        }
    }
}

impl ChatConfig {
    pub fn completion_options(&self) -> CompletionOptions {
        CompletionOptions {
            max_output_tokens: self.max_output_tokens,
            temperature: self.temperature,
        }
    }
}

impl PickyJoyConfig {
    /// Names of the required external settings that are absent.
    pub fn missing_settings(&self) -> Vec<String> {
        let mut missing = Vec::new();

        if self.database.url.is_none() {
            missing.push("DATABASE_URL".to_string());
        }

        if self.auth.jwt_secret.is_none() {
            if self.auth.supabase_url.is_none() {
                missing.push("SUPABASE_URL".to_string());
            }
            if self.auth.supabase_service_key.is_none() {
                missing.push("SUPABASE_SERVICE_KEY".to_string());
            }
        }

        if self.llm.gemini_api_key.is_none() {
            missing.push("GEMINI_API_KEY".to_string());
        }

        missing
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_config() -> PickyJoyConfig {
        PickyJoyConfig {
            database: DatabaseConfig {
                url: Some("postgres://localhost/pickyjoy".to_string()),
                run_migrations: false,
            },
            auth: AuthConfig {
                supabase_url: Some("https://project.supabase.co".to_string()),
                supabase_service_key: Some("service-key".to_string()),
                jwt_secret: None,
            },
            llm: LLMConfig {
                gemini_api_key: Some("key".to_string()),
                ..Default::default()
            },
            chat: ChatConfig::default(),
        }
    }

    #[test]
    fn test_complete_config_has_no_missing_settings() {
        assert!(complete_config().missing_settings().is_empty());
    }

    #[test]
    fn test_missing_settings_are_named() {
        let mut config = complete_config();
        config.database.url = None;
        config.llm.gemini_api_key = None;

        assert_eq!(
            config.missing_settings(),
            vec!["DATABASE_URL".to_string(), "GEMINI_API_KEY".to_string()]
        );
    }

    #[test]
    fn test_jwt_secret_replaces_remote_auth_settings() {
        let mut config = complete_config();
        config.auth = AuthConfig {
            supabase_url: None,
            supabase_service_key: None,
            jwt_secret: Some("secret".to_string()),
        };

        assert!(config.missing_settings().is_empty());
    }

    #[test]
    fn test_remote_auth_requires_both_settings() {
        let mut config = complete_config();
        config.auth.supabase_service_key = None;

        assert_eq!(config.missing_settings(), vec!["SUPABASE_SERVICE_KEY".to_string()]);
    }
}
