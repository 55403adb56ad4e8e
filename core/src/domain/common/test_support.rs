//! In-memory implementations of every port, shared by the service tests.

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use uuid::Uuid;

use crate::domain::{
    authentication::{ports::SessionVerifier, value_objects::Identity},
    child_profile::{
        entities::{ChildProfile, ChildProfileConfig},
        ports::ChildProfileRepository,
    },
    common::{ChatConfig, entities::app_errors::CoreError, services::Service},
    conversation::{
        entities::{StoredMessage, Turn},
        ports::{LLMClient, MessageRepository},
        value_objects::CompletionOptions,
    },
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    recipe::{
        entities::{Rating, Recipe},
        ports::{RatingRepository, RecipeRepository},
    },
    user_settings::{entities::UserSettings, ports::UserSettingsRepository},
};

pub(crate) type TestService = Service<
    FakeSessionVerifier,
    FakeUserSettings,
    FakeChildProfiles,
    FakeMessages,
    FakeRecipes,
    FakeRatings,
    ScriptedLLM,
    FakeHealth,
>;

#[derive(Clone)]
pub(crate) struct FakeSessionVerifier {
    token: String,
    identity: Identity,
    calls: Arc<AtomicUsize>,
}

impl FakeSessionVerifier {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SessionVerifier for FakeSessionVerifier {
    async fn verify(&self, token: String) -> Result<Identity, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if token == self.token {
            Ok(self.identity.clone())
        } else {
            Err(CoreError::InvalidToken)
        }
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakeUserSettings {
    rows: Arc<Mutex<HashMap<Uuid, UserSettings>>>,
}

impl FakeUserSettings {
    pub fn get(&self, user_id: Uuid) -> Option<UserSettings> {
        self.rows.lock().unwrap().get(&user_id).cloned()
    }

    pub fn insert(&self, user_id: Uuid, system_prompt: &str) {
        self.rows
            .lock()
            .unwrap()
            .insert(user_id, UserSettings::new(user_id, system_prompt.to_string()));
    }
}

impl UserSettingsRepository for FakeUserSettings {
    async fn get_by_user(&self, user_id: Uuid) -> Result<Option<UserSettings>, CoreError> {
        Ok(self.get(user_id))
    }

    async fn upsert(&self, settings: UserSettings) -> Result<UserSettings, CoreError> {
        self.rows
            .lock()
            .unwrap()
            .insert(settings.user_id, settings.clone());
        Ok(settings)
    }

    async fn delete_by_user(&self, user_id: Uuid) -> Result<(), CoreError> {
        self.rows.lock().unwrap().remove(&user_id);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakeChildProfiles {
    rows: Arc<Mutex<Vec<ChildProfile>>>,
}

impl FakeChildProfiles {
    pub fn insert(&self, config: ChildProfileConfig) -> ChildProfile {
        let profile = ChildProfile::new(config);
        self.rows.lock().unwrap().push(profile.clone());
        profile
    }
}

impl ChildProfileRepository for FakeChildProfiles {
    async fn create_profile(&self, profile: ChildProfile) -> Result<ChildProfile, CoreError> {
        self.rows.lock().unwrap().push(profile.clone());
        Ok(profile)
    }

    async fn get_by_id(
        &self,
        profile_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ChildProfile>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == profile_id && p.user_id == user_id)
            .cloned())
    }

    async fn fetch_by_user(&self, user_id: Uuid) -> Result<Vec<ChildProfile>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_profile(&self, profile: ChildProfile) -> Result<ChildProfile, CoreError> {
        let mut rows = self.rows.lock().unwrap();
        let existing = rows
            .iter_mut()
            .find(|p| p.id == profile.id && p.user_id == profile.user_id)
            .ok_or(CoreError::NotFound)?;
        *existing = profile.clone();
        Ok(profile)
    }

    async fn delete_profile(&self, profile_id: Uuid, user_id: Uuid) -> Result<(), CoreError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| !(p.id == profile_id && p.user_id == user_id));
        if rows.len() == before {
            return Err(CoreError::NotFound);
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakeMessages {
    rows: Arc<Mutex<Vec<StoredMessage>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl FakeMessages {
    pub fn seed(&self, message: StoredMessage) {
        self.rows.lock().unwrap().push(message);
    }

    /// Every stored message, oldest first.
    pub fn all(&self) -> Vec<StoredMessage> {
        self.rows.lock().unwrap().clone()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl MessageRepository for FakeMessages {
    async fn create_message(&self, message: StoredMessage) -> Result<StoredMessage, CoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CoreError::InternalServerError);
        }
        self.rows.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn fetch_recent(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<StoredMessage>, CoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CoreError::InternalServerError);
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|m| m.user_id == user_id)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakeRecipes {
    rows: Arc<Mutex<Vec<Recipe>>>,
}

impl FakeRecipes {
    pub fn get(&self, recipe_id: Uuid) -> Option<Recipe> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == recipe_id)
            .cloned()
    }
}

impl RecipeRepository for FakeRecipes {
    async fn create_recipe(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        self.rows.lock().unwrap().push(recipe.clone());
        Ok(recipe)
    }

    async fn get_by_id(&self, recipe_id: Uuid, user_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        Ok(self.get(recipe_id).filter(|r| r.user_id == user_id))
    }

    async fn update_recipe_rating(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let mut rows = self.rows.lock().unwrap();
        let existing = rows
            .iter_mut()
            .find(|r| r.id == recipe.id)
            .ok_or(CoreError::NotFound)?;
        existing.rating_avg = recipe.rating_avg;
        existing.rating_count = recipe.rating_count;
        Ok(existing.clone())
    }

    async fn fetch_top_rated(
        &self,
        user_id: Uuid,
        min_avg: f64,
        limit: u64,
    ) -> Result<Vec<Recipe>, CoreError> {
        let mut top: Vec<Recipe> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id && r.rating_avg.is_some_and(|avg| avg >= min_avg))
            .cloned()
            .collect();
        top.sort_by(|a, b| {
            b.rating_avg
                .partial_cmp(&a.rating_avg)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.rating_count.cmp(&a.rating_count))
        });
        top.truncate(limit as usize);
        Ok(top)
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakeRatings {
    rows: Arc<Mutex<Vec<Rating>>>,
}

impl FakeRatings {
    pub fn all(&self) -> Vec<Rating> {
        self.rows.lock().unwrap().clone()
    }
}

impl RatingRepository for FakeRatings {
    async fn create_rating(&self, rating: Rating) -> Result<Rating, CoreError> {
        self.rows.lock().unwrap().push(rating.clone());
        Ok(rating)
    }

    async fn fetch_scores_by_recipe(&self, recipe_id: Uuid) -> Result<Vec<i32>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.recipe_id == recipe_id)
            .map(|r| r.rating)
            .collect())
    }
}

/// Records every completion request and answers with a fixed reply.
#[derive(Clone)]
pub(crate) struct ScriptedLLM {
    reply: String,
    fail: bool,
    calls: Arc<Mutex<Vec<(Vec<Turn>, CompletionOptions)>>>,
}

impl ScriptedLLM {
    pub fn reply(&self) -> String {
        self.reply.clone()
    }

    pub fn calls(&self) -> Vec<Vec<Turn>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(turns, _)| turns.clone())
            .collect()
    }

    pub fn options(&self) -> Vec<CompletionOptions> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, options)| *options)
            .collect()
    }
}

impl LLMClient for ScriptedLLM {
    async fn complete(
        &self,
        turns: Vec<Turn>,
        options: CompletionOptions,
    ) -> Result<String, CoreError> {
        self.calls.lock().unwrap().push((turns, options));
        if self.fail {
            return Err(CoreError::ExternalServiceError(
                "inference unavailable".to_string(),
            ));
        }
        Ok(self.reply.clone())
    }
}

#[derive(Clone, Default)]
pub(crate) struct FakeHealth;

impl HealthCheckRepository for FakeHealth {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        Ok(DatabaseHealthStatus {
            healthy: true,
            latency_ms: 1,
        })
    }
}

pub(crate) struct TestHarness {
    pub service: TestService,
    pub identity: Identity,
    pub token: String,
    pub session_verifier: FakeSessionVerifier,
    pub user_settings: FakeUserSettings,
    pub child_profiles: FakeChildProfiles,
    pub messages: FakeMessages,
    pub recipes: FakeRecipes,
    pub ratings: FakeRatings,
    pub llm: ScriptedLLM,
}

pub(crate) struct TestServiceBuilder {
    reply: String,
    llm_fails: bool,
    missing_settings: Vec<String>,
}

impl TestServiceBuilder {
    pub fn new() -> Self {
        Self {
            reply: "Here is an idea!".to_string(),
            llm_fails: false,
            missing_settings: Vec::new(),
        }
    }

    pub fn with_reply(mut self, reply: &str) -> Self {
        self.reply = reply.to_string();
        self
    }

    pub fn with_failing_llm(mut self) -> Self {
        self.llm_fails = true;
        self
    }

    pub fn with_missing_settings(mut self, missing: Vec<String>) -> Self {
        self.missing_settings = missing;
        self
    }

    pub fn build(self) -> TestHarness {
        let identity = Identity::new(Uuid::new_v4(), Some("parent@example.com".to_string()));
        let token = "valid-session-token".to_string();

        let session_verifier = FakeSessionVerifier {
            token: token.clone(),
            identity: identity.clone(),
            calls: Arc::new(AtomicUsize::new(0)),
        };
        let user_settings = FakeUserSettings::default();
        let child_profiles = FakeChildProfiles::default();
        let messages = FakeMessages::default();
        let recipes = FakeRecipes::default();
        let ratings = FakeRatings::default();
        let llm = ScriptedLLM {
            reply: self.reply,
            fail: self.llm_fails,
            calls: Arc::new(Mutex::new(Vec::new())),
        };

        let service = Service::new(
            session_verifier.clone(),
            user_settings.clone(),
            child_profiles.clone(),
            messages.clone(),
            recipes.clone(),
            ratings.clone(),
            llm.clone(),
            FakeHealth,
            ChatConfig::default(),
            self.missing_settings,
        );

        TestHarness {
            service,
            identity,
            token,
            session_verifier,
            user_settings,
            child_profiles,
            messages,
            recipes,
            ratings,
            llm,
        }
    }
}
