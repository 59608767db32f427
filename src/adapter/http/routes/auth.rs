use std::sync::Arc;

use axum::Form;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{Html, IntoResponse, Redirect, Response};
use validator::Validate;

use crate::adapter::http::credentials::{build_logout_cookies, build_session_cookies};
use crate::adapter::http::schema::auth::{LoginRequest, SignUpRequest, validation_message};
use crate::adapter::http::schema::pages::{CredentialsPage, Notice};
use crate::adapter::http::views::{CREDENTIALS, Views};
use crate::application::app_error::AppResult;
use crate::application::dto::auth::{SessionTokensDTO, SignUpOutcome};
use crate::application::interactors::auth::{LoginInteractor, LogoutInteractor, SignUpInteractor};
use crate::infra::config::{AppConfig, SessionConfig};

const CONFIRM_EMAIL: &str = "Check your e-mail for the confirmation link.";

pub async fn login_page(State(views): State<Arc<Views>>) -> AppResult<Html<String>> {
    views.render(CREDENTIALS, &CredentialsPage::login(String::new(), None))
}

pub async fn login(
    interactor: LoginInteractor,
    State(config): State<Arc<AppConfig>>,
    State(views): State<Arc<Views>>,
    Form(payload): Form<LoginRequest>,
) -> AppResult<Response> {
    let email = payload.email.clone();
    match interactor.execute(payload.into()).await {
        Ok(tokens) => signed_in(&tokens, &config.session),
        Err(err) => {
            let page = CredentialsPage::login(email, Some(Notice::error(err.to_string())));
            Ok(views.render(CREDENTIALS, &page)?.into_response())
        }
    }
}

pub async fn signup_page(State(views): State<Arc<Views>>) -> AppResult<Html<String>> {
    views.render(CREDENTIALS, &CredentialsPage::signup(String::new(), None))
}

pub async fn signup(
    interactor: SignUpInteractor,
    State(config): State<Arc<AppConfig>>,
    State(views): State<Arc<Views>>,
    Form(payload): Form<SignUpRequest>,
) -> AppResult<Response> {
    let email = payload.email.clone();
    if let Err(errors) = payload.validate() {
        let page = CredentialsPage::signup(email, Some(Notice::error(validation_message(&errors))));
        return Ok(views.render(CREDENTIALS, &page)?.into_response());
    }

    let notice = match interactor.execute(payload.into()).await {
        Ok(SignUpOutcome::SignedIn(tokens)) => return signed_in(&tokens, &config.session),
        Ok(SignUpOutcome::ConfirmationRequired) => Notice::success(CONFIRM_EMAIL),
        Err(err) => Notice::error(err.to_string()),
    };
    Ok(views
        .render(CREDENTIALS, &CredentialsPage::signup(email, Some(notice)))?
        .into_response())
}

/// Always clears the session cookies and lands on `/`, even when the
/// provider refused to end the session.
pub async fn logout(interactor: LogoutInteractor, State(config): State<Arc<AppConfig>>) -> AppResult<Response> {
    interactor.execute().await;
    redirect_with_cookies("/", build_logout_cookies(&config.session))
}

fn signed_in(tokens: &SessionTokensDTO, config: &SessionConfig) -> AppResult<Response> {
    redirect_with_cookies("/profile", build_session_cookies(tokens, config))
}

fn redirect_with_cookies(to: &str, cookies: Vec<String>) -> AppResult<Response> {
    let mut headers = HeaderMap::new();
    for cookie in cookies {
        headers.append(SET_COOKIE, HeaderValue::from_str(&cookie)?);
    }
    Ok((headers, Redirect::to(to)).into_response())
}
