pub mod auth;
pub mod backend;
pub mod gateway;
pub mod storage;
