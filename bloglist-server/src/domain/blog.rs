use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored blog entry. Serializes to the public `{id, title, author, url, likes}` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    pub url: String,
    pub likes: u32,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
}

impl Blog {
    pub fn new(fields: NewBlog) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            author: fields.author,
            url: fields.url,
            likes: fields.likes,
            created_at: Utc::now(),
        }
    }

    /// Overwrites every field that is present in `update`.
    pub fn apply(&mut self, update: BlogUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(author) = update.author {
            self.author = Some(author);
        }
        if let Some(url) = update.url {
            self.url = url;
        }
        if let Some(likes) = update.likes {
            self.likes = likes;
        }
    }
}

/// Validated input for a new blog. `likes` is already defaulted.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: u32,
}

#[derive(Debug, Clone, Default)]
pub struct BlogUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u32>,
}
