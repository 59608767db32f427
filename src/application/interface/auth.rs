use async_trait::async_trait;

use crate::application::app_error::AppResult;
use crate::domain::entities::session::{Session, SessionTokens};
use crate::domain::entities::user::User;

/// Auth provider operations, bound to the credentials of one request.
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn get_session(&self) -> AppResult<Option<Session>>;
    async fn get_user(&self) -> AppResult<Option<User>>;
    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<SessionTokens>;
    /// Returns `None` when the provider requires e-mail confirmation before
    /// it issues a session.
    async fn sign_up(&self, email: &str, password: &str) -> AppResult<Option<SessionTokens>>;
    async fn sign_out(&self) -> AppResult<()>;
}
