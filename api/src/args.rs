use clap::Parser;
use pickyjoy_core::domain::common::{
    AuthConfig, ChatConfig, DatabaseConfig, LLMConfig, PickyJoyConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "pickyjoy-api", version, about = "Picky Joy chat backend")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub supabase: SupabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(long = "metrics-enabled", env = "METRICS_ENABLED", default_value_t = false)]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(id = "database_url", long = "database-url", env = "DATABASE_URL")]
    pub url: Option<String>,

    #[arg(long = "run-migrations", env = "RUN_MIGRATIONS", default_value_t = false)]
    pub run_migrations: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SupabaseArgs {
    #[arg(id = "supabase_url", long = "supabase-url", env = "SUPABASE_URL")]
    pub url: Option<String>,

    #[arg(long = "supabase-service-key", env = "SUPABASE_SERVICE_KEY")]
    pub service_key: Option<String>,

    /// When set, tokens are verified locally instead of calling Supabase.
    #[arg(long = "supabase-jwt-secret", env = "SUPABASE_JWT_SECRET")]
    pub jwt_secret: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY")]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,

    #[arg(long = "max-output-tokens", env = "MAX_OUTPUT_TOKENS", default_value_t = 1000)]
    pub max_output_tokens: u32,

    #[arg(long = "temperature", env = "LLM_TEMPERATURE", default_value_t = 0.7)]
    pub temperature: f32,

    #[arg(long = "history-window", env = "HISTORY_WINDOW", default_value_t = 10)]
    pub history_window: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl LogArgs {
    pub fn format(&self) -> LogFormat {
        if self.json {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Blank environment variables count as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<Args> for PickyJoyConfig {
    fn from(args: Args) -> Self {
        PickyJoyConfig {
            database: DatabaseConfig {
                url: non_empty(args.database.url),
                run_migrations: args.database.run_migrations,
            },
            auth: AuthConfig {
                supabase_url: non_empty(args.supabase.url),
                supabase_service_key: non_empty(args.supabase.service_key),
                jwt_secret: non_empty(args.supabase.jwt_secret),
            },
            llm: LLMConfig {
                gemini_api_key: non_empty(args.llm.gemini_api_key),
                gemini_model: args.llm.gemini_model,
                timeout_secs: args.llm.timeout_secs,
            },
            chat: ChatConfig {
                history_window: args.llm.history_window,
                max_output_tokens: args.llm.max_output_tokens,
                temperature: args.llm.temperature,
                ..ChatConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_without_environment() {
        let args = Args::parse_from(["pickyjoy-api", "--gemini-api-key", "key"]);

        assert_eq!(args.server.root_path, "");
        assert_eq!(args.llm.history_window, 10);
        assert_eq!(args.log.format(), LogFormat::Text);
    }

    #[test]
    fn test_blank_credentials_become_missing_settings() {
        let args = Args::parse_from([
            "pickyjoy-api",
            "--database-url",
            "postgres://localhost/pickyjoy",
            "--supabase-jwt-secret",
            "secret",
            "--gemini-api-key",
            "  ",
        ]);

        let config = PickyJoyConfig::from(args);

        assert_eq!(config.llm.gemini_api_key, None);
        assert_eq!(config.missing_settings(), vec!["GEMINI_API_KEY".to_string()]);
    }
}
