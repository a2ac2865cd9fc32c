pub mod blog_repository;
pub mod memory;
pub mod user_repository;
