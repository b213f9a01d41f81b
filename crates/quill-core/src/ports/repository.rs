use async_trait::async_trait;

use crate::domain::{Comment, Post, User};
use crate::error::RepoError;

/// Read-only content repository - the ground truth the session layers its
/// state over. The core never writes back; every mutation lives in
/// session-scoped state instead.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// All posts, in publication order.
    async fn posts(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its unique ID.
    async fn post(&self, id: &str) -> Result<Option<Post>, RepoError>;

    /// Find a user by their unique ID.
    async fn user(&self, id: &str) -> Result<Option<User>, RepoError>;

    /// Posts owned by one author, in publication order.
    async fn posts_by_author(&self, author_id: &str) -> Result<Vec<Post>, RepoError>;

    /// Comments on a post, in their stored order. Unknown post ids yield an
    /// empty list.
    async fn comments_for(&self, post_id: &str) -> Result<Vec<Comment>, RepoError>;
}
