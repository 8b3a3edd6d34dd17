use crate::domain::users::{NewUser, User, UserRepository};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self, req))]
    pub async fn execute(&self, req: CreateUserRequest) -> Result<User, anyhow::Error> {
        let new_user = NewUser {
            name: req.name,
            email: req.email,
        };

        self.repo.create(new_user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::memory::InMemoryUserRepository;

    #[tokio::test]
    async fn test_create_user() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let use_case = CreateUserUseCase::new(repo);

        let req = CreateUserRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        };

        let user = use_case.execute(req).await.expect("Failed to create user");

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = Arc::new(InMemoryUserRepository::default());
        let use_case = CreateUserUseCase::new(repo);

        for (i, name) in ["Alice", "Bob", "Carol"].iter().enumerate() {
            let req = CreateUserRequest {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
            };
            let user = use_case.execute(req).await.unwrap();
            assert_eq!(user.id, i as i64 + 1);
        }
    }
}
