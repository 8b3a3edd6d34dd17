use crate::domain::users::UserRepository;
use std::sync::Arc;

/// Application state shared across handlers. The store is injected here so
/// the router can be wired against any `UserRepository` implementation.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}
