use serde::Serialize;

use crate::application::dto::profile::ProfileFormDTO;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Inline banner shown above the page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Nav {
    pub signed_in: bool,
    pub on_profile: bool,
}

impl Nav {
    pub fn landing(signed_in: bool) -> Self {
        Self {
            signed_in,
            on_profile: false,
        }
    }

    /// The editor always offers Home and Logout.
    pub fn editor() -> Self {
        Self {
            signed_in: true,
            on_profile: true,
        }
    }

    pub fn guest() -> Self {
        Self::landing(false)
    }
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub title: &'static str,
    pub nav: Nav,
    pub notice: Option<Notice>,
    pub email: Option<String>,
}

impl HomePage {
    /// `email` is `Some` for a signed-in visitor.
    pub fn new(email: Option<String>) -> Self {
        Self {
            title: "Profile App",
            nav: Nav::landing(email.is_some()),
            notice: None,
            email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfilePage {
    pub title: &'static str,
    pub nav: Nav,
    pub notice: Option<Notice>,
    pub name: String,
    pub bio: String,
    pub avatar_path: String,
    pub avatar_src: Option<String>,
}

impl ProfilePage {
    pub fn new(form: ProfileFormDTO, avatar_src: Option<String>, notice: Option<Notice>) -> Self {
        Self {
            title: "Profile",
            nav: Nav::editor(),
            notice,
            name: form.name,
            bio: form.bio,
            avatar_path: form.avatar_path,
            avatar_src,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Link {
    pub href: &'static str,
    pub label: &'static str,
}

/// Shared by the sign-in and sign-up forms.
#[derive(Debug, Serialize)]
pub struct CredentialsPage {
    pub title: &'static str,
    pub nav: Nav,
    pub notice: Option<Notice>,
    pub action: &'static str,
    pub email: String,
    pub alternate: Link,
}

impl CredentialsPage {
    pub fn login(email: String, notice: Option<Notice>) -> Self {
        Self {
            title: "Log In",
            nav: Nav::guest(),
            notice,
            action: "/login",
            email,
            alternate: Link {
                href: "/signup",
                label: "Need an account? Sign up",
            },
        }
    }

    pub fn signup(email: String, notice: Option<Notice>) -> Self {
        Self {
            title: "Sign Up",
            nav: Nav::guest(),
            notice,
            action: "/signup",
            email,
            alternate: Link {
                href: "/login",
                label: "Already registered? Log in",
            },
        }
    }
}
