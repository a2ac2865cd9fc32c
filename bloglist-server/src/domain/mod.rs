pub mod blog;
pub mod blog_stats;
pub mod error;
pub mod user;
