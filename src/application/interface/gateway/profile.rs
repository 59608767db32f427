use crate::{
    application::app_error::AppResult,
    domain::entities::{
        id::Id,
        profile::Profile,
        user::User
    }
};
use async_trait::async_trait;

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<Profile>>;
}

#[async_trait]
pub trait ProfileWriter: Send + Sync {
    /// Inserts the row or updates it in place. Only the `Some` columns are
    /// written.
    async fn upsert(&self, profile: Profile) -> AppResult<()>;
}
