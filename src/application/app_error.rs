use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Opaque message reported by the platform, passed through verbatim.
    #[error("{0}")]
    BackendError(String),

    #[error("No user found")]
    NoUserFound,

    #[error("Invalid ID: {0}")]
    InvalidId(String),

    #[error("Invalid form: {0}")]
    InvalidForm(String),

    #[error("Upload exceeds {0} bytes")]
    UploadTooLarge(usize),

    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] axum::http::header::InvalidHeaderValue),
}

pub type AppResult<T> = Result<T, AppError>;
