//! In-memory repositories, used when no `DATABASE_URL` is configured and in tests.
//!
//! Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::data::blog_repository::BlogRepository;
use crate::data::user_repository::UserRepository;
use crate::domain::blog::{Blog, BlogUpdate};
use crate::domain::error::DomainError;
use crate::domain::user::User;

#[derive(Default)]
pub struct InMemoryBlogRepository {
    store: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_all(&self) -> Result<Vec<Blog>, DomainError> {
        Ok(self.store.read().await.clone())
    }

    async fn create(&self, blog: Blog) -> Result<Blog, DomainError> {
        self.store.write().await.push(blog.clone());
        info!(blog_id = %blog.id, "blog created");
        Ok(blog)
    }

    async fn remove_by_id(&self, id: Uuid) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|blog| blog.id != id);
        if store.len() == before {
            debug!(blog_id = %id, "delete of missing blog ignored");
        } else {
            info!(blog_id = %id, "blog deleted");
        }
        Ok(())
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        update: BlogUpdate,
    ) -> Result<Option<Blog>, DomainError> {
        let mut store = self.store.write().await;
        let Some(blog) = store.iter_mut().find(|blog| blog.id == id) else {
            return Ok(None);
        };
        blog.apply(update);
        info!(blog_id = %id, "blog updated");
        Ok(Some(blog.clone()))
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut store = self.store.write().await;
        if store.iter().any(|u| u.username == user.username) {
            return Err(DomainError::UserAlreadyExists(user.username));
        }
        store.push(user.clone());
        info!(user_id = %user.id, username = %user.username, "user created");
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .store
            .read()
            .await
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.store.read().await.clone())
    }
}
