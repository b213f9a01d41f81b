use serde::{Deserialize, Serialize};

use crate::domain::User;

/// Post entity - a published article with its baseline engagement counts.
///
/// `likes` and `comments` are the repository's baseline numbers; a viewer's
/// own toggles are layered on top by the engagement store and never written
/// back here. `content` is pre-rendered markup carried as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: User,
    pub published_date: String,
    pub read_time: u32,
    pub image_url: String,
    pub likes: u32,
    pub comments: u32,
    pub tags: Vec<String>,
    pub category: String,
}
