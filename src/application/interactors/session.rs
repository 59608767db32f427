use std::sync::Arc;

use tracing::warn;

use crate::application::dto::auth::SessionDTO;
use crate::application::interface::auth::AuthClient;
use crate::domain::entities::user::User;

/// Resolves the signed-in user. Provider failures count as "nobody".
pub(crate) async fn current_user(auth: &dyn AuthClient) -> Option<User> {
    match auth.get_user().await {
        Ok(user) => user,
        Err(err) => {
            warn!("Failed to resolve current user: {}", err);
            None
        }
    }
}

#[derive(Clone)]
pub struct GetSessionInteractor {
    auth: Arc<dyn AuthClient>,
}

impl GetSessionInteractor {
    pub fn new(auth: Arc<dyn AuthClient>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self) -> Option<SessionDTO> {
        match self.auth.get_session().await {
            Ok(session) => session.map(|session| SessionDTO {
                user_id: session.user.id.to_string(),
                email: session.user.email,
            }),
            Err(err) => {
                warn!("Failed to read session, rendering as signed out: {}", err);
                None
            }
        }
    }
}
