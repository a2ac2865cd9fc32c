mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use std::sync::Arc;

use anyhow::Context;
use application::blog_service::BlogService;
use application::user_service::UserService;
use data::blog_repository::PostgresBlogRepository;
use data::memory::{InMemoryBlogRepository, InMemoryUserRepository};
use data::user_repository::PostgresUserRepository;
use infrastructure::config::AppConfig;
use infrastructure::database::{create_pool, run_migrations};
use infrastructure::logging::init_logging;
use server::start_rest_server;
use tracing::warn;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = AppConfig::from_env().context("invalid configuration")?;

    match config.database_url.clone() {
        Some(database_url) => {
            let pool = create_pool(&database_url, config.database_max_connections)
                .await
                .context("failed to connect to database")?;
            run_migrations(&pool)
                .await
                .context("failed to run migrations")?;

            let blog_service = BlogService::new(Arc::new(PostgresBlogRepository::new(pool.clone())));
            let user_service = UserService::new(Arc::new(PostgresUserRepository::new(pool)));
            start_rest_server(config, blog_service, user_service).await
        }
        None => {
            warn!("DATABASE_URL is not set, blogs and users will be kept in memory");
            let blog_service = BlogService::new(Arc::new(InMemoryBlogRepository::new()));
            let user_service = UserService::new(Arc::new(InMemoryUserRepository::new()));
            start_rest_server(config, blog_service, user_service).await
        }
    }
}
