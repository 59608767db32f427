use std::sync::Arc;

use crate::application::interface::auth::AuthClient;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::application::interface::storage::StorageClient;

/// What a request presents to the platform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    pub access_token: Option<String>,
}

impl Credentials {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
        }
    }
}

/// Platform handles for one request.
#[derive(Clone)]
pub struct Backend {
    pub auth: Arc<dyn AuthClient>,
    pub profile_reader: Arc<dyn ProfileReader>,
    pub profile_writer: Arc<dyn ProfileWriter>,
    pub storage: Arc<dyn StorageClient>,
}

pub trait BackendConnector: Send + Sync {
    fn connect(&self, credentials: Credentials) -> Backend;
}
