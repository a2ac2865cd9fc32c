use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, name: Option<String>, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Registration input that passed field validation. The password is still plain text.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub name: Option<String>,
    pub password: String,
}
