use std::sync::Arc;

use tracing::{info, warn};

use crate::application::app_error::AppResult;
use crate::application::dto::auth::{LoginDTO, SessionTokensDTO, SignUpDTO, SignUpOutcome};
use crate::application::interface::auth::AuthClient;

#[derive(Clone)]
pub struct LoginInteractor {
    auth: Arc<dyn AuthClient>,
}

impl LoginInteractor {
    pub fn new(auth: Arc<dyn AuthClient>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self, dto: LoginDTO) -> AppResult<SessionTokensDTO> {
        let tokens = self
            .auth
            .sign_in_with_password(&dto.email, &dto.password)
            .await
            .inspect_err(|err| warn!("Login failed for {}: {}", dto.email, err))?;
        info!("User {} logged in", dto.email);
        Ok(tokens.into())
    }
}

#[derive(Clone)]
pub struct SignUpInteractor {
    auth: Arc<dyn AuthClient>,
}

impl SignUpInteractor {
    pub fn new(auth: Arc<dyn AuthClient>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self, dto: SignUpDTO) -> AppResult<SignUpOutcome> {
        let tokens = self
            .auth
            .sign_up(&dto.email, &dto.password)
            .await
            .inspect_err(|err| warn!("Sign-up failed for {}: {}", dto.email, err))?;
        info!("User {} signed up", dto.email);
        Ok(match tokens {
            Some(tokens) => SignUpOutcome::SignedIn(tokens.into()),
            None => SignUpOutcome::ConfirmationRequired,
        })
    }
}

/// Ends the remote session. The outcome never blocks the redirect that
/// follows, so failures are only logged.
#[derive(Clone)]
pub struct LogoutInteractor {
    auth: Arc<dyn AuthClient>,
}

impl LogoutInteractor {
    pub fn new(auth: Arc<dyn AuthClient>) -> Self {
        Self { auth }
    }

    pub async fn execute(&self) {
        match self.auth.sign_out().await {
            Ok(()) => info!("Session signed out"),
            Err(err) => warn!("Sign-out failed: {}", err),
        }
    }
}
