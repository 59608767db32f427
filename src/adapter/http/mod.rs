pub mod app_error_impl;
pub mod credentials;
pub mod extractors;
pub mod routes;
pub mod schema;
pub mod views;
