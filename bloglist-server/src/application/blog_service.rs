use std::sync::Arc;

use crate::data::blog_repository::BlogRepository;
use crate::domain::blog::{Blog, BlogUpdate, NewBlog};
use crate::domain::blog_stats::{FavoriteBlog, favorite_blog, total_likes};
use crate::domain::error::DomainError;
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct BlogStats {
    pub total_likes: u64,
    pub favorite: Option<FavoriteBlog>,
}

pub struct BlogService<R: BlogRepository + 'static> {
    repo: Arc<R>,
}

// `R` itself need not be `Clone`.
impl<R: BlogRepository + 'static> Clone for BlogService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R> BlogService<R>
where
    R: BlogRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get_blogs(&self) -> Result<Vec<Blog>, DomainError> {
        self.repo.find_all().await
    }

    pub async fn stats(&self) -> Result<BlogStats, DomainError> {
        let blogs = self.repo.find_all().await?;
        Ok(BlogStats {
            total_likes: total_likes(&blogs),
            favorite: favorite_blog(&blogs),
        })
    }

    #[instrument(skip(self))]
    pub async fn create_blog(&self, fields: NewBlog) -> Result<Blog, DomainError> {
        self.repo.create(Blog::new(fields)).await
    }

    #[instrument(skip(self))]
    pub async fn update_blog(&self, id: Uuid, update: BlogUpdate) -> Result<Blog, DomainError> {
        self.repo
            .update_by_id(id, update)
            .await?
            .ok_or(DomainError::BlogNotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_blog(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo.remove_by_id(id).await
    }
}
