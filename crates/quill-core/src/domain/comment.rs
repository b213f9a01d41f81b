use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::User;

/// Published-date sentinel for comments composed in the current session.
pub const JUST_NOW: &str = "Just now";

/// Comment entity - scoped to exactly one post via the repository's
/// `post_id -> comments` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author: User,
    pub published_date: String,
    pub likes: u32,
}

impl Comment {
    /// Create a comment composed locally in this session.
    pub fn local(author: User, content: String) -> Self {
        Self {
            id: format!("local-{}", Uuid::new_v4()),
            content,
            author,
            published_date: JUST_NOW.to_string(),
            likes: 0,
        }
    }
}
