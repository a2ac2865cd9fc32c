use std::sync::Arc;

use tracing::instrument;

use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::domain::user::{Registration, User};
use crate::infrastructure::security::hash_password;

pub struct UserService<R: UserRepository + 'static> {
    repo: Arc<R>,
}

impl<R: UserRepository + 'static> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R> UserService<R>
where
    R: UserRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get_users(&self) -> Result<Vec<User>, DomainError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self, registration), fields(username = %registration.username))]
    pub async fn register(&self, registration: Registration) -> Result<User, DomainError> {
        if self
            .repo
            .find_by_username(&registration.username)
            .await?
            .is_some()
        {
            return Err(DomainError::UserAlreadyExists(registration.username));
        }

        let hash = hash_password(&registration.password)
            .map_err(|err| DomainError::Internal(err.to_string()))?;
        let user = User::new(registration.username, registration.name, hash);
        self.repo.create(user).await
    }
}
