use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::SessionVerifier, value_objects::Identity},
    common::{AuthConfig, entities::app_errors::CoreError},
};

pub const SUPABASE_AUDIENCE: &str = "authenticated";

#[derive(Debug, Clone)]
enum VerifierMode {
    /// HS256 tokens checked locally against the project secret.
    Jwt { secret: String },
    /// Tokens checked by the hosted auth service.
    Remote { base_url: String, service_key: String },
    Unconfigured,
}

#[derive(Debug, Clone)]
pub struct SupabaseSessionVerifier {
    mode: VerifierMode,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SupabaseClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SupabaseUser {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
}

impl SupabaseSessionVerifier {
    pub fn new(config: &AuthConfig, timeout: Duration) -> Result<Self, CoreError> {
        let mode = match (&config.jwt_secret, &config.supabase_url, &config.supabase_service_key) {
            (Some(secret), _, _) => VerifierMode::Jwt {
                secret: secret.clone(),
            },
            (None, Some(base_url), Some(service_key)) => VerifierMode::Remote {
                base_url: base_url.trim_end_matches('/').to_string(),
                service_key: service_key.clone(),
            },
            _ => VerifierMode::Unconfigured,
        };

        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            error!("Failed to build auth HTTP client: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self { mode, client })
    }

    fn verify_jwt(secret: &str, token: &str) -> Result<Identity, CoreError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[SUPABASE_AUDIENCE]);

        let data = decode::<SupabaseClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )
        .map_err(|e| {
            debug!("Rejected session token: {}", e);
            CoreError::InvalidToken
        })?;

        let user_id = Uuid::parse_str(&data.claims.sub).map_err(|_| CoreError::InvalidToken)?;

        Ok(Identity::new(user_id, data.claims.email))
    }

    async fn verify_remote(
        &self,
        base_url: &str,
        service_key: &str,
        token: &str,
    ) -> Result<Identity, CoreError> {
        let response = self
            .client
            .get(format!("{}/auth/v1/user", base_url))
            .header("apikey", service_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                error!("Auth service request failed: {}", e);
                CoreError::ExternalServiceError(format!("Auth service error: {}", e))
            })?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(CoreError::InvalidToken);
            }
            status if !status.is_success() => {
                error!("Auth service returned {}", status);
                return Err(CoreError::ExternalServiceError(format!(
                    "Auth service returned {}",
                    status
                )));
            }
            _ => {}
        }

        let user: SupabaseUser = response.json().await.map_err(|e| {
            error!("Failed to parse auth service response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse auth response: {}", e))
        })?;

        Ok(Identity::new(user.id, user.email))
    }
}

impl SessionVerifier for SupabaseSessionVerifier {
    async fn verify(&self, token: String) -> Result<Identity, CoreError> {
        match &self.mode {
            VerifierMode::Jwt { secret } => Self::verify_jwt(secret, &token),
            VerifierMode::Remote {
                base_url,
                service_key,
            } => self.verify_remote(base_url, service_key, &token).await,
            VerifierMode::Unconfigured => Err(CoreError::Configuration(vec![
                "SUPABASE_URL".to_string(),
                "SUPABASE_SERVICE_KEY".to_string(),
            ])),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde::Serialize;

    const SECRET: &str = "super-secret-jwt-token-with-at-least-32-characters";

    #[derive(Serialize)]
    struct Claims<'a> {
        sub: &'a str,
        aud: &'a str,
        exp: usize,
        email: &'a str,
    }

    fn token(sub: &str, aud: &str, secret: &str) -> String {
        let exp = (chrono::Utc::now().timestamp() + 3600) as usize;
        encode(
            &Header::new(Algorithm::HS256),
            &Claims {
                sub,
                aud,
                exp,
                email: "parent@example.com",
            },
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn jwt_verifier() -> SupabaseSessionVerifier {
        SupabaseSessionVerifier::new(
            &AuthConfig {
                jwt_secret: Some(SECRET.to_string()),
                ..Default::default()
            },
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_valid_jwt_resolves_identity() {
        let user_id = Uuid::new_v4();

        let identity = jwt_verifier()
            .verify(token(&user_id.to_string(), SUPABASE_AUDIENCE, SECRET))
            .await
            .unwrap();

        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.email.as_deref(), Some("parent@example.com"));
    }

    #[tokio::test]
    async fn test_jwt_with_wrong_secret_is_invalid() {
        let user_id = Uuid::new_v4().to_string();

        let result = jwt_verifier()
            .verify(token(&user_id, SUPABASE_AUDIENCE, "another-secret-of-sufficient-length!!"))
            .await;

        assert_eq!(result, Err(CoreError::InvalidToken));
    }

    #[tokio::test]
    async fn test_jwt_with_wrong_audience_is_invalid() {
        let user_id = Uuid::new_v4().to_string();

        let result = jwt_verifier().verify(token(&user_id, "anon", SECRET)).await;

        assert_eq!(result, Err(CoreError::InvalidToken));
    }

    #[tokio::test]
    async fn test_non_uuid_subject_is_invalid() {
        let result = jwt_verifier()
            .verify(token("not-a-uuid", SUPABASE_AUDIENCE, SECRET))
            .await;

        assert_eq!(result, Err(CoreError::InvalidToken));
    }

    #[tokio::test]
    async fn test_unconfigured_verifier_reports_configuration() {
        let verifier =
            SupabaseSessionVerifier::new(&AuthConfig::default(), Duration::from_secs(5)).unwrap();

        let result = verifier.verify("anything".to_string()).await;

        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }
}
