//! In-memory content repository backed by seeded collections.

use std::collections::HashMap;

use async_trait::async_trait;

use quill_core::domain::{Comment, Post, User};
use quill_core::error::RepoError;
use quill_core::ports::ContentRepository;

use crate::repository::seed;

/// Read-only in-memory content store.
///
/// Note: data lives for the process lifetime only.
pub struct InMemoryContentRepository {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: HashMap<String, Vec<Comment>>,
}

impl InMemoryContentRepository {
    pub fn new(
        users: Vec<User>,
        posts: Vec<Post>,
        comments: HashMap<String, Vec<Comment>>,
    ) -> Self {
        Self {
            users,
            posts,
            comments,
        }
    }

    /// Repository populated with the demo catalog.
    pub fn seeded() -> Self {
        Self::new(seed::users(), seed::posts(), seed::comments())
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn posts(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.clone())
    }

    async fn post(&self, id: &str) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.iter().find(|post| post.id == id).cloned())
    }

    async fn user(&self, id: &str) -> Result<Option<User>, RepoError> {
        Ok(self.users.iter().find(|user| user.id == id).cloned())
    }

    async fn posts_by_author(&self, author_id: &str) -> Result<Vec<Post>, RepoError> {
        Ok(self
            .posts
            .iter()
            .filter(|post| post.author.id == author_id)
            .cloned()
            .collect())
    }

    async fn comments_for(&self, post_id: &str) -> Result<Vec<Comment>, RepoError> {
        Ok(self.comments.get(post_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_catalog_lookups() {
        let repo = InMemoryContentRepository::seeded();

        let post = repo.post("1").await.unwrap().unwrap();
        assert_eq!(post.likes, 248);
        assert_eq!(post.category, "Design");

        let user = repo.user("2").await.unwrap().unwrap();
        assert_eq!(user.name, "Sarah Williams");

        assert!(repo.post("999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_comments_for_unknown_post_is_empty() {
        let repo = InMemoryContentRepository::seeded();
        assert!(repo.comments_for("999").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_posts_by_author() {
        let repo = InMemoryContentRepository::seeded();
        let posts = repo.posts_by_author("1").await.unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|post| post.author.id == "1"));
    }
}
