use std::sync::Arc;

use tracing::{error, info};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::profile::{AvatarUploadDTO, ProfileFormDTO, UpdateProfileDTO, UpdateProfileOutcome};
use crate::application::interactors::session::current_user;
use crate::application::interface::auth::AuthClient;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::application::interface::storage::{StorageClient, UploadOptions};
use crate::domain::entities::avatar::AvatarPath;
use crate::domain::entities::profile::Profile;

/// Fills the editor once per page activation. Never fails: a missing user,
/// a missing row and a failed fetch all render the empty editor.
#[derive(Clone)]
pub struct LoadProfileInteractor {
    auth: Arc<dyn AuthClient>,
    profile_reader: Arc<dyn ProfileReader>,
}

impl LoadProfileInteractor {
    pub fn new(auth: Arc<dyn AuthClient>, profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { auth, profile_reader }
    }

    pub async fn execute(&self) -> ProfileFormDTO {
        let Some(user) = current_user(self.auth.as_ref()).await else {
            return ProfileFormDTO::default();
        };

        match self.profile_reader.find_by_id(&user.id).await {
            Ok(Some(profile)) => ProfileFormDTO {
                name: profile.name.unwrap_or_default(),
                bio: profile.bio.unwrap_or_default(),
                avatar_path: profile.avatar_url.unwrap_or_default(),
            },
            Ok(None) => ProfileFormDTO::default(),
            Err(err) => {
                error!("Failed to load profile for user {}: {}", user.id, err);
                ProfileFormDTO::default()
            }
        }
    }
}

#[derive(Clone)]
pub struct UpdateProfileInteractor {
    auth: Arc<dyn AuthClient>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl UpdateProfileInteractor {
    pub fn new(auth: Arc<dyn AuthClient>, profile_writer: Arc<dyn ProfileWriter>) -> Self {
        Self { auth, profile_writer }
    }

    pub async fn execute(&self, dto: UpdateProfileDTO) -> AppResult<UpdateProfileOutcome> {
        let Some(user) = current_user(self.auth.as_ref()).await else {
            return Ok(UpdateProfileOutcome::Skipped);
        };

        let profile = Profile::with_details(user.id.clone(), dto.name, dto.bio);
        self.profile_writer.upsert(profile).await?;
        info!("Profile {} updated", user.id);
        Ok(UpdateProfileOutcome::Updated)
    }
}

#[derive(Clone)]
pub struct UploadAvatarInteractor {
    auth: Arc<dyn AuthClient>,
    profile_writer: Arc<dyn ProfileWriter>,
    storage: Arc<dyn StorageClient>,
    bucket: String,
    cache_control: u32,
}

impl UploadAvatarInteractor {
    pub fn new(
        auth: Arc<dyn AuthClient>,
        profile_writer: Arc<dyn ProfileWriter>,
        storage: Arc<dyn StorageClient>,
        bucket: String,
        cache_control: u32,
    ) -> Self {
        Self {
            auth,
            profile_writer,
            storage,
            bucket,
            cache_control,
        }
    }

    /// Stores the file under a fresh key and points the profile at it.
    /// Returns the new key, or `None` when no file was selected.
    pub async fn execute(&self, file: Option<AvatarUploadDTO>) -> AppResult<Option<String>> {
        let Some(file) = file else {
            return Ok(None);
        };

        let user = current_user(self.auth.as_ref())
            .await
            .ok_or(AppError::NoUserFound)
            .inspect_err(|err| error!("Avatar upload rejected: {}", err))?;
        let path = AvatarPath::generate(&user.id, &file.file_name);
        let options = UploadOptions {
            content_type: file.content_type,
            cache_control: self.cache_control,
            upsert: true,
        };

        self.storage
            .upload(&self.bucket, path.as_str(), file.data, &options)
            .await
            .inspect_err(|err| error!("Upload error: {}", err))?;

        self.profile_writer
            .upsert(Profile::with_avatar(user.id.clone(), path.as_str().to_string()))
            .await
            .inspect_err(|err| error!("Profile update error: {}", err))?;

        info!("Avatar of user {} stored at {}/{}", user.id, self.bucket, path.as_str());
        Ok(Some(path.into_inner()))
    }
}
