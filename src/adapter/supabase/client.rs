use std::sync::Arc;

use reqwest::{Method, Request, RequestBuilder, Response, StatusCode};
use serde_json::Value;

use crate::adapter::supabase::auth::AuthGateway;
use crate::adapter::supabase::profile::ProfileGateway;
use crate::adapter::supabase::storage::SupabaseStorageClient;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::backend::{Backend, BackendConnector, Credentials};
use crate::infra::config::SupabaseConfig;

/// Shared connection to the platform. Cheap to clone; the underlying
/// `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    public_base: String,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            public_base: config.public_base().trim_end_matches('/').to_string(),
        })
    }

    pub fn session(&self, credentials: Credentials) -> SupabaseSession {
        SupabaseSession {
            client: self.clone(),
            access_token: credentials.access_token,
        }
    }
}

impl BackendConnector for SupabaseClient {
    fn connect(&self, credentials: Credentials) -> Backend {
        let session = self.session(credentials);
        let profiles = Arc::new(ProfileGateway::new(session.clone()));
        Backend {
            auth: Arc::new(AuthGateway::new(session.clone())),
            profile_reader: profiles.clone(),
            profile_writer: profiles,
            storage: Arc::new(SupabaseStorageClient::new(session)),
        }
    }
}

/// Platform client bound to the credentials of one request.
#[derive(Clone)]
pub struct SupabaseSession {
    client: SupabaseClient,
    access_token: Option<String>,
}

impl SupabaseSession {
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn public_base(&self) -> &str {
        &self.client.public_base
    }

    /// Every call carries the anon key; the bearer is the user's token when
    /// there is one.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.client.anon_key);
        self.client
            .http
            .request(method, format!("{}{}", self.client.base_url, path))
            .header("apikey", &self.client.anon_key)
            .bearer_auth(bearer)
    }

    pub async fn execute(&self, request: Request) -> AppResult<Response> {
        Ok(self.client.http.execute(request).await?)
    }
}

pub async fn ensure_success(response: Response) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AppError::BackendError(error_message(status, &body)))
}

/// Auth, data and storage services report errors under different keys.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            ["msg", "message", "error_description", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(Value::as_str).map(str::to_string))
        })
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string())
}
