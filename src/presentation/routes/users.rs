use crate::presentation::handlers::users;
use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::state::AppState;

/// User routes - list/create on the collection root, edit/update/delete on
/// the user path. Delete is a POST: HTML forms cannot issue DELETE, and a
/// destructive GET would be prefetchable.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route("/{id}", post(users::update_user))
        .route("/{id}/edit", get(users::edit_user))
        .route("/{id}/delete", post(users::delete_user))
}
