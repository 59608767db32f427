use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use crate::adapter::http::credentials::credentials_from_headers;
use crate::adapter::http::extractors::avatar::AvatarLinks;
use crate::adapter::http::views::Views;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interactors::auth::{LoginInteractor, LogoutInteractor, SignUpInteractor};
use crate::application::interactors::profile::{
    LoadProfileInteractor, UpdateProfileInteractor, UploadAvatarInteractor,
};
use crate::application::interactors::session::GetSessionInteractor;
use crate::application::interface::backend::{Backend, BackendConnector};
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub backend: Arc<dyn BackendConnector>,
    pub views: Arc<Views>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<Views> {
    fn from_ref(state: &AppState) -> Self {
        state.views.clone()
    }
}

impl AppState {
    /// Platform handles bound to the access-token cookie of this request.
    pub fn connect(&self, parts: &Parts) -> Backend {
        let credentials = credentials_from_headers(&parts.headers, &self.config.session);
        self.backend.connect(credentials)
    }
}

pub trait FromAppState: Sized {
    fn from_app_state(state: &AppState, backend: Backend) -> AppResult<Self>;
}

/// Each listed type is extracted by connecting to the platform with the
/// request's credentials and handing the handles to `FromAppState`.
macro_rules! from_request_parts {
    ($($target:ty),+ $(,)?) => {
        $(
            impl<S> FromRequestParts<S> for $target
            where
                S: Send + Sync,
                AppState: FromRef<S>,
            {
                type Rejection = AppError;

                async fn from_request_parts(parts: &mut Parts, state: &S) -> AppResult<Self> {
                    let app_state = AppState::from_ref(state);
                    let backend = app_state.connect(parts);
                    <$target>::from_app_state(&app_state, backend)
                }
            }
        )+
    };
}

from_request_parts!(
    GetSessionInteractor,
    LoginInteractor,
    SignUpInteractor,
    LogoutInteractor,
    LoadProfileInteractor,
    UpdateProfileInteractor,
    UploadAvatarInteractor,
    AvatarLinks,
);

// GetSessionInteractor
impl FromAppState for GetSessionInteractor {
    fn from_app_state(_state: &AppState, backend: Backend) -> AppResult<Self> {
        Ok(GetSessionInteractor::new(backend.auth))
    }
}

// LoginInteractor
impl FromAppState for LoginInteractor {
    fn from_app_state(_state: &AppState, backend: Backend) -> AppResult<Self> {
        Ok(LoginInteractor::new(backend.auth))
    }
}

// SignUpInteractor
impl FromAppState for SignUpInteractor {
    fn from_app_state(_state: &AppState, backend: Backend) -> AppResult<Self> {
        Ok(SignUpInteractor::new(backend.auth))
    }
}

// LogoutInteractor
impl FromAppState for LogoutInteractor {
    fn from_app_state(_state: &AppState, backend: Backend) -> AppResult<Self> {
        Ok(LogoutInteractor::new(backend.auth))
    }
}

// LoadProfileInteractor
impl FromAppState for LoadProfileInteractor {
    fn from_app_state(_state: &AppState, backend: Backend) -> AppResult<Self> {
        Ok(LoadProfileInteractor::new(backend.auth, backend.profile_reader))
    }
}

// UpdateProfileInteractor
impl FromAppState for UpdateProfileInteractor {
    fn from_app_state(_state: &AppState, backend: Backend) -> AppResult<Self> {
        Ok(UpdateProfileInteractor::new(backend.auth, backend.profile_writer))
    }
}

// UploadAvatarInteractor
impl FromAppState for UploadAvatarInteractor {
    fn from_app_state(state: &AppState, backend: Backend) -> AppResult<Self> {
        let storage = &state.config.storage;
        Ok(UploadAvatarInteractor::new(
            backend.auth,
            backend.profile_writer,
            backend.storage,
            storage.avatar_bucket.clone(),
            storage.cache_control,
        ))
    }
}

// AvatarLinks
impl FromAppState for AvatarLinks {
    fn from_app_state(state: &AppState, backend: Backend) -> AppResult<Self> {
        Ok(AvatarLinks::new(backend.storage, state.config.storage.avatar_bucket.clone()))
    }
}
