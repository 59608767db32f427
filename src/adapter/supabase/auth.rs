use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adapter::supabase::client::{SupabaseSession, ensure_success};
use crate::application::app_error::AppResult;
use crate::application::interface::auth::AuthClient;
use crate::domain::entities::session::{Session, SessionTokens};
use crate::domain::entities::user::User;

#[derive(Debug, Serialize)]
struct PasswordCredentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_in: i64,
}

/// Sign-up answers with a session when auto-confirm is on, otherwise with
/// the bare user object.
#[derive(Debug, Deserialize)]
struct SignUpResponse {
    access_token: Option<String>,
    refresh_token: Option<String>,
    expires_in: Option<i64>,
}

#[derive(Clone)]
pub struct AuthGateway {
    session: SupabaseSession,
}

impl AuthGateway {
    pub fn new(session: SupabaseSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl AuthClient for AuthGateway {
    async fn get_session(&self) -> AppResult<Option<Session>> {
        Ok(self.get_user().await?.map(|user| Session { user }))
    }

    async fn get_user(&self) -> AppResult<Option<User>> {
        if self.session.access_token().is_none() {
            return Ok(None);
        }

        let response = self.session.request(Method::GET, "/auth/v1/user").send().await?;
        if matches!(response.status(), StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            debug!("Access token rejected by auth provider");
            return Ok(None);
        }
        let user: UserResponse = ensure_success(response).await?.json().await?;

        Ok(Some(User {
            id: user.id.try_into()?,
            email: user.email,
        }))
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<SessionTokens> {
        let response = self
            .session
            .request(Method::POST, "/auth/v1/token")
            .query(&[("grant_type", "password")])
            .json(&PasswordCredentials { email, password })
            .send()
            .await?;
        let tokens: TokenResponse = ensure_success(response).await?.json().await?;

        Ok(SessionTokens {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.expires_in,
        })
    }

    async fn sign_up(&self, email: &str, password: &str) -> AppResult<Option<SessionTokens>> {
        let response = self
            .session
            .request(Method::POST, "/auth/v1/signup")
            .json(&PasswordCredentials { email, password })
            .send()
            .await?;
        let body: SignUpResponse = ensure_success(response).await?.json().await?;

        Ok(body.access_token.map(|access_token| SessionTokens {
            access_token,
            refresh_token: body.refresh_token,
            expires_in: body.expires_in.unwrap_or_default(),
        }))
    }

    async fn sign_out(&self) -> AppResult<()> {
        if self.session.access_token().is_none() {
            return Ok(());
        }

        let response = self.session.request(Method::POST, "/auth/v1/logout").send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::adapter::supabase::auth::AuthGateway;
    use crate::adapter::supabase::client::tests::{ACCESS_TOKEN, ANON_KEY, test_client};
    use crate::application::app_error::AppError;
    use crate::application::interface::auth::AuthClient;
    use crate::application::interface::backend::Credentials;

    const USER_ID: &str = "019c47ec-183d-744e-b11d-cd409015bf13";

    fn gateway(server: &MockServer, credentials: Credentials) -> AuthGateway {
        AuthGateway::new(test_client(&server.uri()).session(credentials))
    }

    #[tokio::test]
    async fn test_get_user_sends_user_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("apikey", ANON_KEY))
            .and(header("authorization", format!("Bearer {ACCESS_TOKEN}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": USER_ID,
                "email": "ada@example.com",
                "aud": "authenticated"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = gateway(&server, Credentials::bearer(ACCESS_TOKEN))
            .get_user()
            .await
            .unwrap()
            .expect("user");

        assert_eq!(user.id.to_string(), USER_ID);
        assert_eq!(user.email.as_deref(), Some("ada@example.com"));
    }

    #[tokio::test]
    async fn test_get_user_without_token_skips_request() {
        let server = MockServer::start().await;

        let user = gateway(&server, Credentials::anonymous()).get_user().await.unwrap();

        assert!(user.is_none());
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_session_rejected_token_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "code": 401,
                "msg": "invalid JWT: unable to parse or verify signature"
            })))
            .mount(&server)
            .await;

        let session = gateway(&server, Credentials::bearer("expired"))
            .get_session()
            .await
            .unwrap();

        assert!(session.is_none());
    }

    #[tokio::test]
    async fn test_get_session_server_error_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = gateway(&server, Credentials::bearer(ACCESS_TOKEN)).get_session().await;

        assert!(matches!(result, Err(AppError::BackendError(_))));
    }

    #[tokio::test]
    async fn test_sign_in_with_password() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .and(header("authorization", format!("Bearer {ANON_KEY}").as_str()))
            .and(body_json(json!({ "email": "ada@example.com", "password": "secret-password" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "access",
                "token_type": "bearer",
                "expires_in": 3600,
                "refresh_token": "refresh",
                "user": { "id": USER_ID }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tokens = gateway(&server, Credentials::anonymous())
            .sign_in_with_password("ada@example.com", "secret-password")
            .await
            .unwrap();

        assert_eq!(tokens.access_token, "access");
        assert_eq!(tokens.refresh_token.as_deref(), Some("refresh"));
        assert_eq!(tokens.expires_in, 3600);
    }

    #[tokio::test]
    async fn test_sign_in_failure_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Invalid login credentials"
            })))
            .mount(&server)
            .await;

        let err = gateway(&server, Credentials::anonymous())
            .sign_in_with_password("ada@example.com", "wrong")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid login credentials");
    }

    #[tokio::test]
    async fn test_sign_up_pending_confirmation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": USER_ID,
                "email": "ada@example.com",
                "confirmation_sent_at": "2026-01-01T00:00:00Z"
            })))
            .mount(&server)
            .await;

        let tokens = gateway(&server, Credentials::anonymous())
            .sign_up("ada@example.com", "secret-password")
            .await
            .unwrap();

        assert!(tokens.is_none());
    }

    #[tokio::test]
    async fn test_sign_up_auto_confirmed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "access",
                "expires_in": 3600,
                "refresh_token": "refresh",
                "user": { "id": USER_ID }
            })))
            .mount(&server)
            .await;

        let tokens = gateway(&server, Credentials::anonymous())
            .sign_up("ada@example.com", "secret-password")
            .await
            .unwrap()
            .expect("session tokens");

        assert_eq!(tokens.access_token, "access");
    }

    #[tokio::test]
    async fn test_sign_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .and(header("authorization", format!("Bearer {ACCESS_TOKEN}").as_str()))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        gateway(&server, Credentials::bearer(ACCESS_TOKEN))
            .sign_out()
            .await
            .unwrap();
    }
}
