use crate::domain::entities::id::Id;

/// Account as reported by the auth provider. Only the identifier matters to
/// this application; the e-mail is kept for log lines.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Id<User>,
    pub email: Option<String>,
}
