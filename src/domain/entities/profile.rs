use crate::domain::entities::{
    id::Id,
    user::User
};

/// Per-user editable record. The row is keyed by the owner's id, so a
/// profile exists at most once per user.
///
/// `None` fields are "not set" when read and "leave untouched" when
/// upserted.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: Id<User>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl Profile {
    pub fn with_details(id: Id<User>, name: String, bio: String) -> Self {
        Self {
            id,
            name: Some(name),
            bio: Some(bio),
            avatar_url: None,
        }
    }

    pub fn with_avatar(id: Id<User>, avatar_url: String) -> Self {
        Self {
            id,
            name: None,
            bio: None,
            avatar_url: Some(avatar_url),
        }
    }
}
