//! Terminal client for the Picky Joy chat backend.
//!
//! ```bash
//! PICKY_JOY_TOKEN=<supabase access token> picky-joy-chat --base-url http://localhost:3333
//! ```
//!
//! Lines are sent to `/chat`. Commands: `/profile [id|none]`, `/save`,
//! `/rate <recipe id> <1-5> [comment]`, `/top`, `/clear`, `/quit`.

use std::time::Duration;

use anyhow::{Context, anyhow};
use clap::Parser;
use pickyjoy_core::domain::{
    child_profile::entities::ChildProfile,
    conversation::{
        entities::{Role, StoredMessage},
        state::{ConversationState, ViewTurn},
        value_objects::{SendMessageInput, SendMessageOutput},
    },
    recipe::entities::Recipe,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "picky-joy-chat", about = "Chat with Picky Joy from the terminal")]
struct Cli {
    #[arg(long, env = "PICKY_JOY_URL", default_value = "http://localhost:3333")]
    base_url: String,

    /// Supabase access token of the signed-in parent.
    #[arg(long, env = "PICKY_JOY_TOKEN")]
    token: String,

    /// Child profile to tailor answers for.
    #[arg(long)]
    profile: Option<Uuid>,

    #[arg(long, default_value_t = 50)]
    history: u32,

    #[arg(long, default_value_t = 90)]
    timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    #[serde(default)]
    details: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequest {
    message: Option<String>,
    selected_profile_id: Option<Uuid>,
}

impl From<SendMessageInput> for ChatRequest {
    fn from(input: SendMessageInput) -> Self {
        Self {
            message: input.message,
            selected_profile_id: input.selected_profile_id,
        }
    }
}

struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    fn new(cli: &Cli) -> Result<Self, anyhow::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cli.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: cli.base_url.trim_end_matches('/').to_string(),
            token: cli.token.clone(),
        })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, anyhow::Error> {
        let response = request.bearer_auth(&self.token).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.ok();
            return Err(match body {
                Some(ErrorBody {
                    error,
                    details: Some(details),
                }) => anyhow!("{status}: {error} ({details})"),
                Some(ErrorBody { error, .. }) => anyhow!("{status}: {error}"),
                None => anyhow!("request failed with {status}"),
            });
        }

        Ok(response.json::<T>().await?)
    }

    async fn history(&self, limit: u32) -> Result<Vec<StoredMessage>, anyhow::Error> {
        let request = self
            .http
            .get(format!("{}/messages", self.base_url))
            .query(&[("limit", limit)]);
        let envelope: DataEnvelope<Vec<StoredMessage>> = self.send(request).await?;
        Ok(envelope.data)
    }

    async fn chat(&self, input: SendMessageInput) -> Result<String, anyhow::Error> {
        let request = self
            .http
            .post(format!("{}/chat", self.base_url))
            .json(&ChatRequest::from(input));
        let output: SendMessageOutput = self.send(request).await?;
        Ok(output.message)
    }

    async fn profiles(&self) -> Result<Vec<ChildProfile>, anyhow::Error> {
        let request = self.http.get(format!("{}/child-profiles", self.base_url));
        let envelope: DataEnvelope<Vec<ChildProfile>> = self.send(request).await?;
        Ok(envelope.data)
    }

    async fn save_recipe(&self, content: &str) -> Result<Recipe, anyhow::Error> {
        let request = self
            .http
            .post(format!("{}/recipes", self.base_url))
            .json(&json!({ "content": content }));
        let envelope: DataEnvelope<Recipe> = self.send(request).await?;
        Ok(envelope.data)
    }

    async fn rate_recipe(
        &self,
        recipe_id: Uuid,
        rating: i32,
        comment: Option<String>,
    ) -> Result<Recipe, anyhow::Error> {
        let request = self
            .http
            .post(format!("{}/recipes/{}/ratings", self.base_url, recipe_id))
            .json(&json!({ "rating": rating, "comment": comment }));
        let envelope: DataEnvelope<Recipe> = self.send(request).await?;
        Ok(envelope.data)
    }

    async fn top_recipes(&self) -> Result<Vec<Recipe>, anyhow::Error> {
        let request = self.http.get(format!("{}/recipes/top", self.base_url));
        let envelope: DataEnvelope<Vec<Recipe>> = self.send(request).await?;
        Ok(envelope.data)
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Say(String),
    Profile(Option<String>),
    Save,
    Rate {
        recipe_id: String,
        rating: String,
        comment: Option<String>,
    },
    Top,
    Clear,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Say(line.to_string());
    };

    let mut parts = rest.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let args = parts.next().map(str::trim).filter(|a| !a.is_empty());

    match name {
        "profile" => Command::Profile(args.map(str::to_string)),
        "save" => Command::Save,
        "rate" => {
            let mut fields = args.unwrap_or_default().splitn(3, char::is_whitespace);
            Command::Rate {
                recipe_id: fields.next().unwrap_or_default().to_string(),
                rating: fields.next().unwrap_or_default().to_string(),
                comment: fields.next().map(|c| c.trim().to_string()),
            }
        }
        "top" => Command::Top,
        "clear" => Command::Clear,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

fn print_turn(turn: &ViewTurn) {
    let speaker = match turn.role {
        Role::User => "You",
        Role::Assistant | Role::System => "Picky Joy",
    };
    println!("{speaker}: {}\n", turn.content);

    if let Some(recipe) = &turn.recipe {
        println!(
            "  [recipe detected: {} ({} ingredients), /save to keep it]\n",
            recipe.title,
            recipe.ingredients.len()
        );
    }
}

fn print_recipe(recipe: &Recipe) {
    let rating = match recipe.rating_avg {
        Some(avg) => format!("{avg:.1} from {} ratings", recipe.rating_count),
        None => "not rated".to_string(),
    };
    println!("  {} {} ({})", recipe.id, recipe.title, rating);
}

async fn handle(
    client: &ApiClient,
    state: &mut ConversationState,
    command: Command,
) -> Result<bool, anyhow::Error> {
    match command {
        Command::Say(text) => {
            let input = match state.begin_submission(&text) {
                Ok(input) => input,
                Err(e) => {
                    debug!("submission refused: {}", e);
                    return Ok(true);
                }
            };

            let turn = match client.chat(input).await {
                Ok(reply) => state.complete_submission(reply),
                Err(e) => {
                    warn!("chat request failed: {}", e);
                    state.fail_submission()
                }
            };
            print_turn(turn);
        }
        Command::Profile(None) => {
            let profiles = client.profiles().await?;
            if profiles.is_empty() {
                println!("No child profiles yet.");
            }
            for profile in profiles {
                let marker = if state.selected_profile_id() == Some(profile.id) {
                    "*"
                } else {
                    " "
                };
                println!("{marker} {} {}", profile.id, profile.name);
            }
        }
        Command::Profile(Some(arg)) => {
            if arg == "none" {
                state.select_profile(None);
                println!("Profile cleared.");
            } else {
                let profile_id = Uuid::parse_str(&arg).context("profile id must be a UUID")?;
                state.select_profile(Some(profile_id));
                println!("Profile {profile_id} selected.");
            }
        }
        Command::Save => {
            let Some(turn) = state.latest_recipe_turn() else {
                println!("No recipe in this conversation yet.");
                return Ok(true);
            };
            let recipe = client.save_recipe(&turn.content).await?;
            println!("Saved:");
            print_recipe(&recipe);
        }
        Command::Rate {
            recipe_id,
            rating,
            comment,
        } => {
            let recipe_id = Uuid::parse_str(&recipe_id).context("usage: /rate <id> <1-5>")?;
            let rating = rating.parse::<i32>().context("usage: /rate <id> <1-5>")?;
            let recipe = client.rate_recipe(recipe_id, rating, comment).await?;
            print_recipe(&recipe);
        }
        Command::Top => {
            let recipes = client.top_recipes().await?;
            if recipes.is_empty() {
                println!("No recipes rated 4 stars or more yet.");
            }
            recipes.iter().for_each(print_recipe);
        }
        Command::Clear => {
            state.clear();
            println!("Conversation view cleared.");
        }
        Command::Quit => return Ok(false),
        Command::Unknown(name) => println!("Unknown command /{name}"),
    }

    Ok(true)
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let client = ApiClient::new(&cli)?;

    let mut state = ConversationState::new();
    state.select_profile(cli.profile);

    match client.history(cli.history).await {
        Ok(messages) => state = state.with_history(&messages),
        Err(e) => warn!("could not load history: {}", e),
    }
    state.turns().iter().for_each(print_turn);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match handle(&client, &mut state, parse_command(&line)).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => println!("Error: {e:#}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_chat_message() {
        assert_eq!(
            parse_command("  dinner ideas?  "),
            Command::Say("dinner ideas?".to_string())
        );
    }

    #[test]
    fn test_rate_keeps_comment_whitespace_inside() {
        let id = Uuid::new_v4().to_string();

        assert_eq!(
            parse_command(&format!("/rate {id} 5 loved it, ate twice")),
            Command::Rate {
                recipe_id: id,
                rating: "5".to_string(),
                comment: Some("loved it, ate twice".to_string()),
            }
        );
    }

    #[test]
    fn test_profile_without_argument_lists() {
        assert_eq!(parse_command("/profile"), Command::Profile(None));
        assert_eq!(parse_command("/nope"), Command::Unknown("nope".to_string()));
    }
}
