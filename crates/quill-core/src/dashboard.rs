//! Per-author aggregates for the dashboard view.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::Post;

/// Aggregate stats over an author's posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AuthorStats {
    pub post_count: usize,
    pub total_likes: u64,
    pub total_comments: u64,
}

/// Sum baseline counts over the author's posts.
///
/// Per-viewer engagement deltas are excluded on purpose: they belong to a
/// single viewing session, not to the author's aggregate.
pub fn author_stats(posts: &[Post], author_id: &str) -> AuthorStats {
    posts
        .iter()
        .filter(|post| post.author.id == author_id)
        .fold(AuthorStats::default(), |mut stats, post| {
            stats.post_count += 1;
            stats.total_likes += u64::from(post.likes);
            stats.total_comments += u64::from(post.comments);
            stats
        })
}

/// The author's own post list with session-local removals applied.
///
/// Removing a post hides it from this dashboard and its recomputed stats for
/// the rest of the session; the repository itself is untouched.
#[derive(Debug)]
pub struct AuthorDashboard {
    author_id: String,
    removed: HashSet<String>,
}

impl AuthorDashboard {
    pub fn new(author_id: impl Into<String>) -> Self {
        Self {
            author_id: author_id.into(),
            removed: HashSet::new(),
        }
    }

    pub fn author_id(&self) -> &str {
        &self.author_id
    }

    pub fn remove_post(&mut self, post_id: &str) {
        tracing::debug!(author_id = %self.author_id, post_id = %post_id, "post removed from dashboard");
        self.removed.insert(post_id.to_string());
    }

    /// Posts still visible on this dashboard, in publication order.
    pub fn posts(&self, all_posts: &[Post]) -> Vec<Post> {
        all_posts
            .iter()
            .filter(|post| post.author.id == self.author_id && !self.removed.contains(&post.id))
            .cloned()
            .collect()
    }

    /// Stats over the posts still visible on this dashboard.
    pub fn stats(&self, all_posts: &[Post]) -> AuthorStats {
        author_stats(&self.posts(all_posts), &self.author_id)
    }
}
