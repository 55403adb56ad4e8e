use crate::domain::{
    authentication::{ports::SessionVerifier, value_objects::Identity},
    child_profile::{
        entities::{ChildProfile, ChildProfileConfig},
        ports::{ChildProfileRepository, ChildProfileService},
        value_objects::{
            CreateChildProfileInput, DeleteChildProfileInput, UpdateChildProfileInput,
        },
    },
    common::{entities::app_errors::CoreError, services::Service},
    conversation::ports::{LLMClient, MessageRepository},
    health::ports::HealthCheckRepository,
    recipe::ports::{RatingRepository, RecipeRepository},
    user_settings::ports::UserSettingsRepository,
};

pub const MIN_CHILD_AGE: i32 = 1;
pub const MAX_CHILD_AGE: i32 = 18;

/// Trims every entry and drops the empty ones, keeping order.
pub fn normalize_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Splits a comma separated form value ("pasta, chicken") into a list.
pub fn parse_comma_list(value: &str) -> Vec<String> {
    normalize_list(value.split(',').map(str::to_string).collect())
}

fn normalize_name(name: &str) -> Result<String, CoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::Invalid("name is required".to_string()));
    }
    Ok(name.to_string())
}

fn validate_age(age: Option<i32>) -> Result<Option<i32>, CoreError> {
    match age {
        Some(age) if !(MIN_CHILD_AGE..=MAX_CHILD_AGE).contains(&age) => Err(CoreError::Invalid(
            format!("age must be between {MIN_CHILD_AGE} and {MAX_CHILD_AGE}"),
        )),
        age => Ok(age),
    }
}

impl<SV, US, CP, M, RC, RT, LLM, HC> ChildProfileService for Service<SV, US, CP, M, RC, RT, LLM, HC>
where
    SV: SessionVerifier,
    US: UserSettingsRepository,
    CP: ChildProfileRepository,
    M: MessageRepository,
    RC: RecipeRepository,
    RT: RatingRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn get_profiles(&self, identity: Identity) -> Result<Vec<ChildProfile>, CoreError> {
        self.child_profile_repository
            .fetch_by_user(identity.id())
            .await
    }

    async fn create_profile(
        &self,
        identity: Identity,
        input: CreateChildProfileInput,
    ) -> Result<ChildProfile, CoreError> {
        let profile = ChildProfile::new(ChildProfileConfig {
            user_id: identity.id(),
            name: normalize_name(&input.name)?,
            age: validate_age(input.age)?,
            preferences: normalize_list(input.preferences),
            allergies: normalize_list(input.allergies),
        });

        self.child_profile_repository.create_profile(profile).await
    }

    async fn update_profile(
        &self,
        identity: Identity,
        input: UpdateChildProfileInput,
    ) -> Result<ChildProfile, CoreError> {
        let name = normalize_name(&input.name)?;
        let age = validate_age(input.age)?;

        let mut profile = self
            .child_profile_repository
            .get_by_id(input.profile_id, identity.id())
            .await?
            .ok_or(CoreError::NotFound)?;

        profile.update(
            name,
            age,
            normalize_list(input.preferences),
            normalize_list(input.allergies),
        );

        self.child_profile_repository.update_profile(profile).await
    }

    async fn delete_profile(
        &self,
        identity: Identity,
        input: DeleteChildProfileInput,
    ) -> Result<(), CoreError> {
        self.child_profile_repository
            .delete_profile(input.profile_id, identity.id())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_support::TestServiceBuilder;
    use uuid::Uuid;

    fn create_input(name: &str) -> CreateChildProfileInput {
        CreateChildProfileInput {
            name: name.to_string(),
            age: Some(6),
            preferences: vec![" pasta ".to_string(), "".to_string(), "chicken".to_string()],
            allergies: vec!["nuts".to_string()],
        }
    }

    #[test]
    fn test_parse_comma_list_trims_and_drops_blanks() {
        assert_eq!(
            parse_comma_list("pasta, chicken , ,smooth textures"),
            vec!["pasta", "chicken", "smooth textures"]
        );
        assert!(parse_comma_list("   ").is_empty());
    }

    #[tokio::test]
    async fn test_create_profile_normalizes_fields() {
        let harness = TestServiceBuilder::new().build();

        let profile = harness
            .service
            .create_profile(harness.identity.clone(), create_input("  Emma "))
            .await
            .unwrap();

        assert_eq!(profile.name, "Emma");
        assert_eq!(profile.user_id, harness.identity.user_id);
        assert_eq!(profile.preferences, vec!["pasta", "chicken"]);
        assert_eq!(profile.allergies, vec!["nuts"]);
    }

    #[tokio::test]
    async fn test_long_profile_name_is_kept_whole() {
        let harness = TestServiceBuilder::new().build();
        let name = "Emma ".repeat(80);

        let profile = harness
            .service
            .create_profile(harness.identity.clone(), create_input(&name))
            .await
            .unwrap();

        assert_eq!(profile.name, name.trim());
        assert!(profile.name.len() > 255);
    }

    #[tokio::test]
    async fn test_create_profile_requires_name() {
        let harness = TestServiceBuilder::new().build();

        let result = harness
            .service
            .create_profile(harness.identity.clone(), create_input("   "))
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_create_profile_rejects_out_of_range_age() {
        let harness = TestServiceBuilder::new().build();
        let mut input = create_input("Leo");
        input.age = Some(42);

        let result = harness
            .service
            .create_profile(harness.identity.clone(), input)
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_update_profile_of_another_user_is_not_found() {
        let harness = TestServiceBuilder::new().build();
        let profile = harness
            .service
            .create_profile(harness.identity.clone(), create_input("Emma"))
            .await
            .unwrap();

        let stranger = Identity::new(Uuid::new_v4(), None);
        let result = harness
            .service
            .update_profile(
                stranger,
                UpdateChildProfileInput {
                    profile_id: profile.id,
                    name: "Mallory".to_string(),
                    age: None,
                    preferences: vec![],
                    allergies: vec![],
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_update_then_delete_profile() {
        let harness = TestServiceBuilder::new().build();
        let profile = harness
            .service
            .create_profile(harness.identity.clone(), create_input("Emma"))
            .await
            .unwrap();

        let updated = harness
            .service
            .update_profile(
                harness.identity.clone(),
                UpdateChildProfileInput {
                    profile_id: profile.id,
                    name: "Emma".to_string(),
                    age: None,
                    preferences: vec!["rice".to_string()],
                    allergies: vec![],
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.age, None);
        assert_eq!(updated.preferences, vec!["rice"]);

        harness
            .service
            .delete_profile(
                harness.identity.clone(),
                DeleteChildProfileInput {
                    profile_id: profile.id,
                },
            )
            .await
            .unwrap();

        let profiles = harness
            .service
            .get_profiles(harness.identity.clone())
            .await
            .unwrap();
        assert!(profiles.is_empty());
    }
}
