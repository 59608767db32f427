use axum::response::Html;
use handlebars::{Handlebars, TemplateError};
use serde::Serialize;

use crate::application::app_error::AppResult;

pub const HOME: &str = "home";
pub const PROFILE: &str = "profile";
pub const CREDENTIALS: &str = "credentials";

const PARTIALS: [(&str, &str); 4] = [
    ("header", include_str!("../../../templates/partials/header.hbs")),
    ("footer", include_str!("../../../templates/partials/footer.hbs")),
    ("nav", include_str!("../../../templates/partials/nav.hbs")),
    ("notice", include_str!("../../../templates/partials/notice.hbs")),
];

const PAGES: [(&str, &str); 3] = [
    (HOME, include_str!("../../../templates/home.hbs")),
    (PROFILE, include_str!("../../../templates/profile.hbs")),
    (CREDENTIALS, include_str!("../../../templates/credentials.hbs")),
];

/// Compiled page templates. Output is HTML-escaped.
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        for (name, source) in PARTIALS {
            registry.register_partial(name, source)?;
        }
        for (name, source) in PAGES {
            registry.register_template_string(name, source)?;
        }
        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> AppResult<Html<String>> {
        Ok(Html(self.registry.render(name, data)?))
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use crate::adapter::http::schema::pages::{CredentialsPage, HomePage, Notice, ProfilePage};
    use crate::adapter::http::views::{CREDENTIALS, HOME, PROFILE, Views};
    use crate::application::dto::profile::ProfileFormDTO;

    #[fixture]
    fn views() -> Views {
        Views::new().expect("templates compile")
    }

    #[rstest]
    fn test_home_for_guest(views: Views) {
        let html = views.render(HOME, &HomePage::new(None)).unwrap().0;

        assert!(html.contains(r#"href="/login""#));
        assert!(html.contains(r#"href="/signup""#));
        assert!(!html.contains(r#"action="/logout""#));
        assert!(html.contains("Welcome to Your Profile App"));
        assert!(html.contains("<h2>Share Your Story</h2>"));
        assert!(html.contains("<h2>Connect</h2>"));
    }

    #[rstest]
    fn test_home_for_signed_in_user(views: Views) {
        let html = views
            .render(HOME, &HomePage::new(Some("ada@example.com".to_string())))
            .unwrap()
            .0;

        assert!(html.contains(r#"href="/profile""#));
        assert!(html.contains(r#"action="/logout""#));
        assert!(html.contains("Signed in as ada@example.com"));
    }

    #[rstest]
    fn test_profile_escapes_user_input(views: Views) {
        let form = ProfileFormDTO {
            name: "<script>alert(1)</script>".to_string(),
            bio: String::new(),
            avatar_path: String::new(),
        };

        let html = views.render(PROFILE, &ProfilePage::new(form, None, None)).unwrap().0;

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[rstest]
    fn test_profile_notice_and_avatar(views: Views) {
        let form = ProfileFormDTO {
            name: "Ada".to_string(),
            bio: "Engineer".to_string(),
            avatar_path: "u/u-1.png".to_string(),
        };
        let page = ProfilePage::new(
            form,
            Some("http://storage.test/u/u-1.png".to_string()),
            Some(Notice::success("Profile updated successfully!")),
        );

        let html = views.render(PROFILE, &page).unwrap().0;

        assert!(html.contains(r#"class="notice notice-success""#));
        assert!(html.contains("Profile updated successfully!"));
        assert!(html.contains(r#"src="http://storage.test/u/u-1.png""#));
        assert!(html.contains(r#"name="avatar_path" value="u/u-1.png""#));
    }

    #[rstest]
    fn test_profile_upload_posts_live_fields(views: Views) {
        let html = views
            .render(PROFILE, &ProfilePage::new(ProfileFormDTO::default(), None, None))
            .unwrap()
            .0;

        let editor = &html[html.find(r#"<form method="post" action="/profile">"#).unwrap()..];
        let editor = &editor[..editor.find("</form>").unwrap()];
        assert!(editor.contains(r#"type="file" name="avatar""#));
        assert!(editor.contains(r#"formaction="/profile/avatar" formenctype="multipart/form-data""#));
        assert!(editor.contains(r#"name="name""#));
        assert!(editor.contains(r#"name="bio""#));
        assert_eq!(html.matches(r#"name="name""#).count(), 1);
        assert_eq!(html.matches(r#"name="bio""#).count(), 1);
    }

    #[rstest]
    fn test_credentials_page(views: Views) {
        let html = views
            .render(CREDENTIALS, &CredentialsPage::signup("ada@example.com".to_string(), None))
            .unwrap()
            .0;

        assert!(html.contains(r#"action="/signup""#));
        assert!(html.contains(r#"value="ada@example.com""#));
        assert!(html.contains(r#"href="/login""#));
    }
}
