pub mod auth;
pub mod client;
pub mod profile;
pub mod storage;
