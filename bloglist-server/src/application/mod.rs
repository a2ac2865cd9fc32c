pub mod blog_service;
pub mod user_service;
