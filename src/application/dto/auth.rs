use crate::domain::entities::session::SessionTokens;

#[derive(Debug)]
pub struct LoginDTO {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct SignUpDTO {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionDTO {
    pub user_id: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionTokensDTO {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: i64,
}

impl From<SessionTokens> for SessionTokensDTO {
    fn from(tokens: SessionTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.expires_in,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignUpOutcome {
    SignedIn(SessionTokensDTO),
    ConfirmationRequired,
}
