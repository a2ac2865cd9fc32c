use crate::domain::blog::{Blog, BlogUpdate};
use crate::domain::error::DomainError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, error, info};
use uuid::Uuid;

#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Blog>, DomainError>;
    async fn create(&self, blog: Blog) -> Result<Blog, DomainError>;
    /// Succeeds whether or not a blog with `id` existed.
    async fn remove_by_id(&self, id: Uuid) -> Result<(), DomainError>;
    async fn update_by_id(&self, id: Uuid, update: BlogUpdate)
    -> Result<Option<Blog>, DomainError>;
}

#[derive(Clone)]
pub struct PostgresBlogRepository {
    pool: PgPool,
}

impl PostgresBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BlogRow {
    id: Uuid,
    title: String,
    author: Option<String>,
    url: String,
    likes: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<BlogRow> for Blog {
    type Error = DomainError;

    fn try_from(row: BlogRow) -> Result<Self, Self::Error> {
        let likes = u32::try_from(row.likes).map_err(|_| {
            DomainError::Internal(format!("blog {} has out of range likes {}", row.id, row.likes))
        })?;
        Ok(Blog {
            id: row.id,
            title: row.title,
            author: row.author,
            url: row.url,
            likes,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn find_all(&self) -> Result<Vec<Blog>, DomainError> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, title, author, url, likes, created_at
            FROM blogs
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("db error while fetching blogs: {}", e);
            DomainError::Internal(e.to_string())
        })?;

        rows.into_iter().map(Blog::try_from).collect()
    }

    async fn create(&self, blog: Blog) -> Result<Blog, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO blogs (id, title, author, url, likes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(blog.id)
        .bind(&blog.title)
        .bind(&blog.author)
        .bind(&blog.url)
        .bind(i64::from(blog.likes))
        .bind(blog.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to create blog: {}", e);
            DomainError::Internal(format!("database error: {}", e))
        })?;

        info!(blog_id = %blog.id, "blog created");
        Ok(blog)
    }

    async fn remove_by_id(&self, id: Uuid) -> Result<(), DomainError> {
        let deleted = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("failed to delete blog {}: {}", id, e);
                DomainError::Internal(e.to_string())
            })?;

        if deleted.rows_affected() == 0 {
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
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            UPDATE blogs
            SET
                title = COALESCE($1, title),
                author = COALESCE($2, author),
                url = COALESCE($3, url),
                likes = COALESCE($4, likes)
            WHERE id = $5
            RETURNING id, title, author, url, likes, created_at
            "#,
        )
        .bind(update.title)
        .bind(update.author)
        .bind(update.url)
        .bind(update.likes.map(i64::from))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to update blog {}: {}", id, e);
            DomainError::Internal(e.to_string())
        })?;

        if row.is_some() {
            info!(blog_id = %id, "blog updated");
        }

        row.map(Blog::try_from).transpose()
    }
}
