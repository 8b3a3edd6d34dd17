use crate::domain::users::User;
use askama::Template;

/// View-model for the single page this application renders: the user table
/// plus the create/edit form.
#[derive(Template)]
#[template(path = "users.html")]
pub struct UsersPage {
    pub users: Vec<User>,
    pub user: UserForm,
}

/// State of the create/edit form. A blank form (no id) posts to the
/// collection root; a prefilled form posts back to its user's path.
#[derive(Debug, Default)]
pub struct UserForm {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
}

impl From<User> for UserForm {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            name: user.name,
            email: user.email,
        }
    }
}
