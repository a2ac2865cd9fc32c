//! Aggregations over an already-loaded list of blogs.

use serde::Serialize;

use crate::domain::blog::Blog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteBlog {
    pub title: String,
    pub author: Option<String>,
    pub likes: u32,
}

impl From<&Blog> for FavoriteBlog {
    fn from(blog: &Blog) -> Self {
        Self {
            title: blog.title.clone(),
            author: blog.author.clone(),
            likes: blog.likes,
        }
    }
}

/// Always 1, whatever the input.
pub fn dummy(_blogs: &[Blog]) -> u32 {
    1
}

pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs.iter().map(|blog| u64::from(blog.likes)).sum()
}

/// Blog with the most likes. Ties go to the earliest entry in `blogs`.
pub fn favorite_blog(blogs: &[Blog]) -> Option<FavoriteBlog> {
    // `Iterator::max_by_key` keeps the last maximum, so fold by hand.
    blogs
        .iter()
        .reduce(|best, blog| if blog.likes > best.likes { blog } else { best })
        .map(FavoriteBlog::from)
}
