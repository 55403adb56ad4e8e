use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
};

/// Session oracle: validates a bearer token issued by the hosted auth service.
#[cfg_attr(test, mockall::automock)]
pub trait SessionVerifier: Send + Sync {
    fn verify(&self, token: String) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn authenticate(
        &self,
        token: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
