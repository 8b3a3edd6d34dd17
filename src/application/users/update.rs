use crate::domain::users::{UserRepository, UserUpdate};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// Id echoed back by the edit form; the path id always wins over it.
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Updates the user identified by `id`. Any id carried in the request
    /// body is ignored. Returns false when no such user exists.
    #[tracing::instrument(skip(self, req))]
    pub async fn execute(&self, id: i64, req: UpdateUserRequest) -> Result<bool, anyhow::Error> {
        let update = UserUpdate {
            name: req.name,
            email: req.email,
        };

        self.repo.update(id, update).await
    }
}
