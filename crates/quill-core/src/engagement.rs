//! Session-scoped engagement state layered over read-only baseline counts.

use std::collections::HashMap;

use serde::Serialize;

/// Derived like state returned by toggle operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikeView {
    pub is_liked: bool,
    pub displayed_likes: u32,
}

/// Derived bookmark state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookmarkView {
    pub is_bookmarked: bool,
}

#[derive(Debug, Default, Clone, Copy)]
struct PostState {
    liked: bool,
    bookmarked: bool,
}

/// Per-viewer toggle state for posts and comments.
///
/// The repository's baseline counts are never mutated. Displayed counts are
/// recomputed from the baseline on every call, so the delta over the
/// baseline is always 0 or +1 and toggling twice lands exactly back on the
/// baseline. State for an id is created lazily on first interaction;
/// unknown ids simply start from a fresh unliked state.
#[derive(Debug, Default)]
pub struct EngagementStore {
    posts: HashMap<String, PostState>,
    comment_likes: HashMap<String, bool>,
}

impl EngagementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the like toggle for a post against the supplied baseline count.
    pub fn toggle_post_like(&mut self, post_id: &str, baseline_likes: u32) -> LikeView {
        let state = self.posts.entry(post_id.to_string()).or_default();
        state.liked = !state.liked;
        tracing::debug!(post_id = %post_id, liked = state.liked, "post like toggled");
        LikeView {
            is_liked: state.liked,
            displayed_likes: displayed(baseline_likes, state.liked),
        }
    }

    /// Flip the bookmark toggle for a post, independent of like state.
    pub fn toggle_bookmark(&mut self, post_id: &str) -> BookmarkView {
        let state = self.posts.entry(post_id.to_string()).or_default();
        state.bookmarked = !state.bookmarked;
        tracing::debug!(post_id = %post_id, bookmarked = state.bookmarked, "bookmark toggled");
        BookmarkView {
            is_bookmarked: state.bookmarked,
        }
    }

    /// Flip the like toggle for a comment. Same contract as post likes; the
    /// displayed count cannot drop below zero.
    pub fn toggle_comment_like(&mut self, comment_id: &str, baseline_likes: u32) -> LikeView {
        let liked = self.comment_likes.entry(comment_id.to_string()).or_default();
        *liked = !*liked;
        tracing::debug!(comment_id = %comment_id, liked = *liked, "comment like toggled");
        LikeView {
            is_liked: *liked,
            displayed_likes: displayed(baseline_likes, *liked),
        }
    }

    pub fn is_post_liked(&self, post_id: &str) -> bool {
        self.posts.get(post_id).map(|s| s.liked).unwrap_or(false)
    }

    pub fn is_bookmarked(&self, post_id: &str) -> bool {
        self.posts.get(post_id).map(|s| s.bookmarked).unwrap_or(false)
    }

    pub fn is_comment_liked(&self, comment_id: &str) -> bool {
        self.comment_likes.get(comment_id).copied().unwrap_or(false)
    }

    /// Baseline plus this viewer's pending toggle, without flipping anything.
    pub fn displayed_post_likes(&self, post_id: &str, baseline_likes: u32) -> u32 {
        displayed(baseline_likes, self.is_post_liked(post_id))
    }
}

fn displayed(baseline: u32, liked: bool) -> u32 {
    if liked {
        baseline.saturating_add(1)
    } else {
        baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_like_and_back_restores_baseline() {
        let mut store = EngagementStore::new();

        let liked = store.toggle_post_like("1", 248);
        assert!(liked.is_liked);
        assert_eq!(liked.displayed_likes, 249);

        let unliked = store.toggle_post_like("1", 248);
        assert!(!unliked.is_liked);
        assert_eq!(unliked.displayed_likes, 248);
    }

    #[test]
    fn test_like_never_accumulates_past_one() {
        let mut store = EngagementStore::new();
        for _ in 0..5 {
            store.toggle_post_like("1", 100);
        }
        // Five toggles end in the liked state with a single +1 delta.
        assert!(store.is_post_liked("1"));
        assert_eq!(store.displayed_post_likes("1", 100), 101);
    }

    #[test]
    fn test_bookmark_is_independent_of_like() {
        let mut store = EngagementStore::new();
        store.toggle_post_like("1", 10);

        let view = store.toggle_bookmark("1");
        assert!(view.is_bookmarked);
        assert!(store.is_post_liked("1"));

        let view = store.toggle_bookmark("1");
        assert!(!view.is_bookmarked);
        assert!(store.is_post_liked("1"));
    }

    #[test]
    fn test_comment_like_floors_at_zero() {
        let mut store = EngagementStore::new();

        let liked = store.toggle_comment_like("c9", 0);
        assert_eq!(liked.displayed_likes, 1);

        let unliked = store.toggle_comment_like("c9", 0);
        assert!(!unliked.is_liked);
        assert_eq!(unliked.displayed_likes, 0);

        // Rapid toggling never dips below zero.
        for _ in 0..7 {
            let view = store.toggle_comment_like("c9", 0);
            assert!(view.displayed_likes <= 1);
        }
    }

    #[test]
    fn test_unknown_id_starts_fresh() {
        let mut store = EngagementStore::new();
        assert!(!store.is_post_liked("missing"));
        let view = store.toggle_post_like("missing", 0);
        assert!(view.is_liked);
        assert_eq!(view.displayed_likes, 1);
    }
}
