use crate::domain::blog::{BlogUpdate, NewBlog};
use crate::domain::error::DomainError;
use crate::domain::user::{Registration, User};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 3;

// ======================= BLOGS =======================

#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u32>,
}

impl CreateBlogRequest {
    /// Rejects a missing or empty `title`/`url` and defaults `likes` to 0.
    pub fn validate(self) -> Result<NewBlog, DomainError> {
        let title = self.title.filter(|t| !t.is_empty());
        let url = self.url.filter(|u| !u.is_empty());
        let (Some(title), Some(url)) = (title, url) else {
            return Err(DomainError::Validation("title or url missing".to_string()));
        };

        Ok(NewBlog {
            title,
            author: self.author,
            url,
            likes: self.likes.unwrap_or(0),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u32>,
}

impl From<UpdateBlogRequest> for BlogUpdate {
    fn from(req: UpdateBlogRequest) -> Self {
        BlogUpdate {
            title: req.title,
            author: req.author,
            url: req.url,
            likes: req.likes,
        }
    }
}

// ======================= USERS =======================

#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

impl RegisterUserRequest {
    pub fn validate(self) -> Result<Registration, DomainError> {
        let username = self
            .username
            .filter(|u| !u.is_empty())
            .ok_or_else(|| DomainError::Validation("username missing".to_string()))?;
        if username.chars().count() < MIN_USERNAME_LENGTH {
            return Err(DomainError::Validation(format!(
                "username must be at least {MIN_USERNAME_LENGTH} characters long"
            )));
        }

        let password = self
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| DomainError::Validation("password missing".to_string()))?;
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters long"
            )));
        }

        Ok(Registration {
            username,
            name: self.name,
            password,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            name: user.name,
        }
    }
}
