//! Pure filtering and derivation over the post collection.

use crate::domain::Post;

/// Sentinel category meaning "no category filter applied".
pub const ALL_CATEGORIES: &str = "All";

/// Filter posts by category and free-text query.
///
/// The category matches by exact equality, except the `"All"` sentinel which
/// matches everything. The query matches case-insensitively as a substring of
/// the title or the excerpt; an empty query matches everything. The result
/// preserves input order and is a subset of the input - pure and idempotent.
pub fn filter_posts(posts: &[Post], category: &str, query: &str) -> Vec<Post> {
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| matches_category(post, category) && matches_query(post, &needle))
        .cloned()
        .collect()
}

fn matches_category(post: &Post, category: &str) -> bool {
    category == ALL_CATEGORIES || post.category == category
}

fn matches_query(post: &Post, needle: &str) -> bool {
    needle.is_empty()
        || post.title.to_lowercase().contains(needle)
        || post.excerpt.to_lowercase().contains(needle)
}

/// Posts related to `post`: same category or at least one shared tag,
/// excluding the post itself. Returns the first `limit` matches in input
/// order.
pub fn related_posts(posts: &[Post], post: &Post, limit: usize) -> Vec<Post> {
    posts
        .iter()
        .filter(|candidate| {
            candidate.id != post.id
                && (candidate.category == post.category
                    || candidate.tags.iter().any(|tag| post.tags.contains(tag)))
        })
        .take(limit)
        .cloned()
        .collect()
}

/// Split the collection into the featured story and the remaining feed.
pub fn featured_split(posts: &[Post]) -> (Option<&Post>, &[Post]) {
    match posts {
        [] => (None, &[]),
        [featured, rest @ ..] => (Some(featured), rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;

    fn author() -> User {
        User {
            id: "1".to_string(),
            name: "Alex Johnson".to_string(),
            email: "alex@example.com".to_string(),
            avatar_url: String::new(),
            bio: String::new(),
            joined_date: "January 2023".to_string(),
        }
    }

    fn post(id: &str, title: &str, excerpt: &str, category: &str, tags: &[&str]) -> Post {
        Post {
            id: id.to_string(),
            title: title.to_string(),
            content: String::new(),
            excerpt: excerpt.to_string(),
            author: author(),
            published_date: "May 15, 2023".to_string(),
            read_time: 5,
            image_url: String::new(),
            likes: 0,
            comments: 0,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            category: category.to_string(),
        }
    }

    fn sample_posts() -> Vec<Post> {
        vec![
            post(
                "1",
                "The Future of Minimalist Design",
                "How simplicity shapes digital products.",
                "Design",
                &["Design", "Minimalism"],
            ),
            post(
                "2",
                "Building Scalable React Applications",
                "Modern architecture patterns.",
                "Development",
                &["React", "Architecture"],
            ),
            post(
                "3",
                "Typography Fundamentals",
                "Creating readable, beautiful text.",
                "Design",
                &["Typography", "Design"],
            ),
        ]
    }

    #[test]
    fn test_all_with_empty_query_is_identity() {
        let posts = sample_posts();
        let filtered = filter_posts(&posts, ALL_CATEGORIES, "");
        assert_eq!(filtered, posts);
    }

    #[test]
    fn test_category_and_query_are_conjoined() {
        let posts = sample_posts();
        let filtered = filter_posts(&posts, "Design", "typography");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "3");
    }

    #[test]
    fn test_query_is_case_insensitive_over_title_and_excerpt() {
        let posts = sample_posts();

        let by_title = filter_posts(&posts, ALL_CATEGORIES, "MINIMALIST");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "1");

        let by_excerpt = filter_posts(&posts, ALL_CATEGORIES, "architecture patterns");
        assert_eq!(by_excerpt.len(), 1);
        assert_eq!(by_excerpt[0].id, "2");
    }

    #[test]
    fn test_filter_is_stable_and_idempotent() {
        let posts = sample_posts();
        let first = filter_posts(&posts, "Design", "");
        let second = filter_posts(&posts, "Design", "");
        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "3"]
        );
    }

    #[test]
    fn test_related_excludes_self_and_respects_limit() {
        let posts = sample_posts();
        let related = related_posts(&posts, &posts[0], 3);
        // Post 3 shares the Design category and a tag; post 2 shares nothing.
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "3");

        let capped = related_posts(&posts, &posts[2], 0);
        assert!(capped.is_empty());
    }

    #[test]
    fn test_featured_split() {
        let posts = sample_posts();
        let (featured, rest) = featured_split(&posts);
        assert_eq!(featured.map(|p| p.id.as_str()), Some("1"));
        assert_eq!(rest.len(), 2);

        let (none, empty) = featured_split(&[]);
        assert!(none.is_none());
        assert!(empty.is_empty());
    }
}
