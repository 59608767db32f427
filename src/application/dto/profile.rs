use bytes::Bytes;

/// The three editable fields of the profile editor. Missing values are
/// empty strings, never absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFormDTO {
    pub name: String,
    pub bio: String,
    pub avatar_path: String,
}

#[derive(Debug)]
pub struct UpdateProfileDTO {
    pub name: String,
    pub bio: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateProfileOutcome {
    Updated,
    /// No signed-in user; nothing was written.
    Skipped,
}

#[derive(Debug, Clone)]
pub struct AvatarUploadDTO {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}
