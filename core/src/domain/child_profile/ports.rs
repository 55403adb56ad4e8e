use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    child_profile::{
        entities::ChildProfile,
        value_objects::{
            CreateChildProfileInput, DeleteChildProfileInput, UpdateChildProfileInput,
        },
    },
    common::entities::app_errors::CoreError,
};

/// Repository trait for child profiles. Every lookup is scoped to the owner.
#[cfg_attr(test, mockall::automock)]
pub trait ChildProfileRepository: Send + Sync {
    fn create_profile(
        &self,
        profile: ChildProfile,
    ) -> impl Future<Output = Result<ChildProfile, CoreError>> + Send;

    fn get_by_id(
        &self,
        profile_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<ChildProfile>, CoreError>> + Send;

    fn fetch_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ChildProfile>, CoreError>> + Send;

    fn update_profile(
        &self,
        profile: ChildProfile,
    ) -> impl Future<Output = Result<ChildProfile, CoreError>> + Send;

    fn delete_profile(
        &self,
        profile_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ChildProfileService: Send + Sync {
    fn get_profiles(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<ChildProfile>, CoreError>> + Send;

    fn create_profile(
        &self,
        identity: Identity,
        input: CreateChildProfileInput,
    ) -> impl Future<Output = Result<ChildProfile, CoreError>> + Send;

    fn update_profile(
        &self,
        identity: Identity,
        input: UpdateChildProfileInput,
    ) -> impl Future<Output = Result<ChildProfile, CoreError>> + Send;

    fn delete_profile(
        &self,
        identity: Identity,
        input: DeleteChildProfileInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
