use std::sync::Arc;

use axum::extract::multipart::MultipartError;
use axum::Form;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Html;

use crate::adapter::http::extractors::avatar::AvatarLinks;
use crate::adapter::http::schema::pages::{Notice, ProfilePage};
use crate::adapter::http::schema::profile::ProfileForm;
use crate::adapter::http::views::{PROFILE, Views};
use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::profile::{AvatarUploadDTO, ProfileFormDTO, UpdateProfileOutcome};
use crate::application::interactors::profile::{
    LoadProfileInteractor, UpdateProfileInteractor, UploadAvatarInteractor,
};
use crate::infra::config::AppConfig;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

pub async fn get_profile(
    interactor: LoadProfileInteractor,
    links: AvatarLinks,
    State(views): State<Arc<Views>>,
) -> AppResult<Html<String>> {
    let form = interactor.execute().await;
    render_editor(&views, &links, form, None)
}

pub async fn update_profile(
    interactor: UpdateProfileInteractor,
    links: AvatarLinks,
    State(views): State<Arc<Views>>,
    Form(form): Form<ProfileForm>,
) -> AppResult<Html<String>> {
    let notice = match interactor.execute(form.update_dto()).await {
        Ok(UpdateProfileOutcome::Updated) => Some(Notice::success("Profile updated successfully!")),
        Ok(UpdateProfileOutcome::Skipped) => None,
        Err(err) => Some(Notice::error(err.to_string())),
    };
    render_editor(&views, &links, form.into(), notice)
}

pub async fn upload_avatar(
    interactor: UploadAvatarInteractor,
    links: AvatarLinks,
    State(config): State<Arc<AppConfig>>,
    State(views): State<Arc<Views>>,
    multipart: Multipart,
) -> AppResult<Html<String>> {
    let (form, file) = read_avatar_form(multipart, config.application.max_upload_bytes).await?;
    let mut editor = ProfileFormDTO::from(form);
    let notice = match interactor.execute(file).await {
        Ok(Some(path)) => {
            editor.avatar_path = path;
            None
        }
        Ok(None) => None,
        Err(err) => Some(Notice::error(format!("Error uploading avatar! {}", err))),
    };
    render_editor(&views, &links, editor, notice)
}

fn render_editor(
    views: &Views,
    links: &AvatarLinks,
    form: ProfileFormDTO,
    notice: Option<Notice>,
) -> AppResult<Html<String>> {
    let avatar_src = links.src(&form.avatar_path);
    views.render(PROFILE, &ProfilePage::new(form, avatar_src, notice))
}

fn multipart_error(err: MultipartError, limit: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::UploadTooLarge(limit);
    }
    AppError::InvalidForm(err.body_text())
}

/// A part without a filename or without bytes means no file was chosen.
async fn read_avatar_form(
    mut multipart: Multipart,
    limit: usize,
) -> AppResult<(ProfileForm, Option<AvatarUploadDTO>)> {
    let mut form = ProfileForm::default();
    let mut file = None;
    let invalid_form = |err: MultipartError| multipart_error(err, limit);

    while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("name") => form.name = field.text().await.map_err(invalid_form)?,
            Some("bio") => form.bio = field.text().await.map_err(invalid_form)?,
            Some("avatar_path") => form.avatar_path = field.text().await.map_err(invalid_form)?,
            Some("avatar") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or(DEFAULT_CONTENT_TYPE).to_string();
                let data = field.bytes().await.map_err(invalid_form)?;
                if !file_name.is_empty() && !data.is_empty() {
                    file = Some(AvatarUploadDTO {
                        file_name,
                        content_type,
                        data,
                    });
                }
            }
            _ => {}
        }
    }

    Ok((form, file))
}
