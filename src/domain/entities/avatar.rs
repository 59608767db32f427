use uuid::Uuid;

use crate::domain::entities::{
    id::Id,
    user::User
};

/// Object key of an uploaded avatar: `{user_id}/{user_id}-{random}.{ext}`.
///
/// Every upload gets a fresh key so a cached image under an older key is
/// never served for a new avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarPath(String);

impl AvatarPath {
    pub fn generate(user_id: &Id<User>, file_name: &str) -> Self {
        let token = Uuid::new_v4().simple();
        let file = match extension(file_name) {
            Some(ext) => format!("{user_id}-{token}.{ext}"),
            None => format!("{user_id}-{token}"),
        };
        Self(format!("{user_id}/{file}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn extension(file_name: &str) -> Option<&str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext.is_empty() || !ext.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext)
}
