pub mod avatar;
pub mod id;
pub mod profile;
pub mod session;
pub mod user;
