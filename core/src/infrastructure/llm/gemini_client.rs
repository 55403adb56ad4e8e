use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    conversation::{
        entities::{Role, Turn},
        ports::LLMClient,
        value_objects::CompletionOptions,
    },
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: Option<String>,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: Option<String>,
}

/// System turns become the system instruction, assistant turns are sent with
/// Gemini's `model` role.
fn build_request(turns: Vec<Turn>, options: CompletionOptions) -> GeminiRequest {
    let mut system_parts = Vec::new();
    let mut contents = Vec::with_capacity(turns.len());

    for turn in turns {
        let text = turn.content().to_string();
        match turn.role() {
            Role::System => system_parts.push(Part { text }),
            Role::User => contents.push(Content {
                role: Some("user"),
                parts: vec![Part { text }],
            }),
            Role::Assistant => contents.push(Content {
                role: Some("model"),
                parts: vec![Part { text }],
            }),
        }
    }

    GeminiRequest {
        system_instruction: (!system_parts.is_empty()).then_some(Content {
            role: None,
            parts: system_parts,
        }),
        contents,
        generation_config: GenerationConfig {
            temperature: options.temperature,
            max_output_tokens: options.max_output_tokens,
        },
    }
}

fn response_text(response: GeminiResponse) -> Option<String> {
    let text = response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect::<String>();

    (!text.trim().is_empty()).then_some(text)
}

impl GeminiLLMClient {
    pub fn new(
        api_key: Option<String>,
        model_name: String,
        timeout: Duration,
    ) -> Result<Self, CoreError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            tracing::error!("Failed to build Gemini HTTP client: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            api_key,
            model_name,
            client,
        })
    }

    async fn call_gemini_api(&self, api_key: &str, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model_name, api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {}",
                status
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        response_text(gemini_response)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn complete(
        &self,
        turns: Vec<Turn>,
        options: CompletionOptions,
    ) -> Result<String, CoreError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CoreError::Configuration(vec!["GEMINI_API_KEY".to_string()]))?;

        self.call_gemini_api(api_key, build_request(turns, options))
            .await
    }
}
