use async_trait::async_trait;
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user; the store assigns the id.
    async fn create(&self, new_user: NewUser) -> Result<User, anyhow::Error>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, anyhow::Error>;
    /// All users, ordered by id.
    async fn find_all(&self) -> Result<Vec<User>, anyhow::Error>;
    /// Returns false when no row matched the id.
    async fn update(&self, id: i64, update: UserUpdate) -> Result<bool, anyhow::Error>;
    /// Returns false when no row matched the id.
    async fn delete(&self, id: i64) -> Result<bool, anyhow::Error>;
}
