use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::application::dto::auth::{LoginDTO, SignUpDTO};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl From<LoginRequest> for LoginDTO {
    fn from(request: LoginRequest) -> Self {
        Self {
            email: request.email.trim().to_string(),
            password: request.password,
        }
    }
}

#[derive(Debug, Validate, Deserialize)]
pub struct SignUpRequest {
    #[serde(default)]
    #[validate(email(message = "Enter a valid e-mail address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

impl From<SignUpRequest> for SignUpDTO {
    fn from(request: SignUpRequest) -> Self {
        Self {
            email: request.email.trim().to_string(),
            password: request.password,
        }
    }
}

/// Flattens field errors into one sentence per rule, ordered by field name.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
        .into_iter()
        .flat_map(|(_, errors)| errors.iter())
        .map(|error| match &error.message {
            Some(message) => message.to_string(),
            None => error.code.to_string(),
        })
        .collect::<Vec<_>>()
        .join(". ")
}
