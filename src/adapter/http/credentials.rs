use axum::http::HeaderMap;
use axum::http::header::COOKIE;

use crate::application::dto::auth::SessionTokensDTO;
use crate::application::interface::backend::Credentials;
use crate::infra::config::SessionConfig;

/// Returns the value of cookie `name`, ignoring empty values left behind by
/// a logout.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .find_map(|cookie| cookie.trim().strip_prefix(&prefix).map(str::to_string))
        .filter(|value| !value.is_empty())
}

pub fn credentials_from_headers(headers: &HeaderMap, config: &SessionConfig) -> Credentials {
    match read_cookie(headers, &config.access_cookie_name) {
        Some(token) => Credentials::bearer(token),
        None => Credentials::anonymous(),
    }
}

pub fn build_session_cookies(tokens: &SessionTokensDTO, config: &SessionConfig) -> Vec<String> {
    let mut cookies = vec![build_cookie(
        &config.access_cookie_name,
        &tokens.access_token,
        tokens.expires_in,
        config,
    )];
    if let Some(refresh_token) = &tokens.refresh_token {
        cookies.push(build_cookie(
            &config.refresh_cookie_name,
            refresh_token,
            config.refresh_max_age,
            config,
        ));
    }
    cookies
}

pub fn build_logout_cookies(config: &SessionConfig) -> Vec<String> {
    [&config.access_cookie_name, &config.refresh_cookie_name]
        .into_iter()
        .map(|name| build_cookie(name, "", 0, config))
        .collect()
}

fn build_cookie(name: &str, value: &str, max_age: i64, config: &SessionConfig) -> String {
    let secure = if config.cookie_secure { "; Secure" } else { "" };
    let http_only = if config.cookie_http_only { "; HttpOnly" } else { "" };
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax{}{}",
        name, value, max_age, secure, http_only
    )
}
