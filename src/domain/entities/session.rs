use crate::domain::entities::user::User;

/// Server-confirmed proof that a request belongs to an authenticated user.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
}

/// Tokens issued by the auth provider after a successful sign-in.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: i64,
}
