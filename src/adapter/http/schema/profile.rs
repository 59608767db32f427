use serde::Deserialize;

use crate::application::dto::profile::{ProfileFormDTO, UpdateProfileDTO};

/// Editor state as posted back by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar_path: String,
}

impl ProfileForm {
    pub fn update_dto(&self) -> UpdateProfileDTO {
        UpdateProfileDTO {
            name: self.name.clone(),
            bio: self.bio.clone(),
        }
    }
}

impl From<ProfileForm> for ProfileFormDTO {
    fn from(form: ProfileForm) -> Self {
        Self {
            name: form.name,
            bio: form.bio,
            avatar_path: form.avatar_path,
        }
    }
}
