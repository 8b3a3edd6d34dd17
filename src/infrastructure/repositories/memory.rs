use crate::domain::users::{NewUser, User, UserRepository, UserUpdate};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;

/// In-memory store with the same id-assignment semantics as the Postgres
/// schema: sequential ids starting at 1, never reused within a store.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    next_id: i64,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, anyhow::Error> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;

        let now = OffsetDateTime::now_utc();
        let user = User {
            id: inner.next_id,
            name: new_user.name,
            email: new_user.email,
            created_at: now,
            updated_at: now,
        };
        inner.users.push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, anyhow::Error> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, anyhow::Error> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.clone())
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<bool, anyhow::Error> {
        let mut inner = self.inner.lock().unwrap();
        match inner.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.name = update.name;
                user.email = update.email;
                user.updated_at = OffsetDateTime::now_utc();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, anyhow::Error> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.users.len();
        inner.users.retain(|u| u.id != id);
        Ok(inner.users.len() < before)
    }
}
