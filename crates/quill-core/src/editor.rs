//! Draft editor workflow: field validation and simulated save/publish.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::Post;
use crate::error::ValidationError;
use crate::ports::{self, Notification, Notifier};

/// Starter content prefilled into a brand-new draft.
pub const STARTER_CONTENT: &str = r#"
<p>Start writing your article here. This editor supports basic formatting like <strong>bold</strong> and <em>italic</em>.</p>

<h2>Add subheadings to organize your content</h2>

<p>Break your content into sections to make it easier for readers to follow along. Each section should cover a specific aspect of your topic.</p>

<p>You can also add lists:</p>

<ul>
  <li>First item in an unordered list</li>
  <li>Second item in an unordered list</li>
  <li>Third item in an unordered list</li>
</ul>

<h2>Add images to enhance your article</h2>

<p>Images help illustrate your points and break up text. Use the image button in the toolbar to add images to your post.</p>

<blockquote>
  <p>Add quotes to highlight important points or include citations from other sources.</p>
</blockquote>

<p>Continue writing your article, and remember to review it before publishing!</p>
"#;

/// Simulated round-trip delays for save and publish.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub save_delay: Duration,
    pub publish_delay: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            save_delay: Duration::from_millis(1000),
            publish_delay: Duration::from_millis(1500),
        }
    }
}

impl EditorConfig {
    pub fn from_env() -> Self {
        let millis = |var: &str, default: u64| {
            Duration::from_millis(
                std::env::var(var)
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(default),
            )
        };
        Self {
            save_delay: millis("QUILL_EDITOR_SAVE_DELAY_MS", 1000),
            publish_delay: millis("QUILL_EDITOR_PUBLISH_DELAY_MS", 1500),
        }
    }
}

/// Markup fragments the editor toolbar can append to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snippet {
    Bold,
    Italic,
    Link,
    Heading1,
    Heading2,
    BulletList,
    NumberedList,
    Quote,
    Image,
}

impl Snippet {
    fn markup(self) -> &'static str {
        match self {
            Snippet::Bold => "<strong>Bold text</strong>",
            Snippet::Italic => "<em>Italic text</em>",
            Snippet::Link => "<a href=\"https://example.com\">Link text</a>",
            Snippet::Heading1 => "<h1>Heading 1</h1>",
            Snippet::Heading2 => "<h2>Heading 2</h2>",
            Snippet::BulletList => "<ul>\n  <li>List item</li>\n  <li>List item</li>\n</ul>",
            Snippet::NumberedList => "<ol>\n  <li>List item</li>\n  <li>List item</li>\n</ol>",
            Snippet::Quote => "<blockquote>\n  <p>Quoted text</p>\n</blockquote>",
            Snippet::Image => {
                "<img src=\"https://source.unsplash.com/random/800x400\" alt=\"Description\" />"
            }
        }
    }
}

/// Editor errors.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Only one save or publish may be in flight per editor session.
    #[error("a save or publish is already in flight")]
    Busy,
}

/// Per-session draft editor.
///
/// Saves and publishes resolve after an artificial delay standing in for a
/// future network call; a busy flag keeps at most one in flight. There is no
/// cancellation - the delay always completes.
pub struct PostEditor {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: String,
    pub category: String,
    pub tags: String,
    busy: bool,
    config: EditorConfig,
    notifier: Arc<dyn Notifier>,
}

impl PostEditor {
    /// Editor for a brand-new draft, prefilled with the starter content.
    pub fn new(notifier: Arc<dyn Notifier>, config: EditorConfig) -> Self {
        Self {
            title: String::new(),
            excerpt: String::new(),
            content: STARTER_CONTENT.to_string(),
            cover_image: String::new(),
            category: String::new(),
            tags: String::new(),
            busy: false,
            config,
            notifier,
        }
    }

    /// Editor prefilled from an existing post.
    pub fn for_post(post: &Post, notifier: Arc<dyn Notifier>, config: EditorConfig) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            cover_image: post.image_url.clone(),
            category: post.category.clone(),
            tags: post.tags.join(", "),
            busy: false,
            config,
            notifier,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Append a toolbar snippet to the draft content.
    pub fn insert_snippet(&mut self, snippet: Snippet) {
        self.content.push_str(snippet.markup());
    }

    /// The comma-separated tags field, parsed.
    pub fn parsed_tags(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Save the draft. Only the title is required at this stage.
    pub async fn save(&mut self) -> Result<(), EditorError> {
        if self.busy {
            return Err(EditorError::Busy);
        }
        if self.title.trim().is_empty() {
            self.reject("Please enter a title for your post").await;
            return Err(ValidationError::MissingRequiredField("title").into());
        }

        self.busy = true;
        tokio::time::sleep(self.config.save_delay).await;
        self.busy = false;

        tracing::debug!(title = %self.title, "draft saved");
        ports::fire(
            self.notifier.as_ref(),
            Notification::normal("Saved", "Post saved successfully"),
        )
        .await;
        Ok(())
    }

    /// Publish the draft. Each required field is checked independently, in
    /// order; the first failing check aborts the publish with nothing
    /// partially applied.
    pub async fn publish(&mut self) -> Result<(), EditorError> {
        if self.busy {
            return Err(EditorError::Busy);
        }

        let checks = [
            ("title", &self.title, "Please enter a title for your post"),
            ("content", &self.content, "Please add content to your post"),
            ("excerpt", &self.excerpt, "Please add an excerpt for your post"),
            (
                "cover image",
                &self.cover_image,
                "Please add a cover image for your post",
            ),
            (
                "category",
                &self.category,
                "Please select a category for your post",
            ),
        ];
        for (field, value, message) in checks {
            if value.trim().is_empty() {
                self.reject(message).await;
                return Err(ValidationError::MissingRequiredField(field).into());
            }
        }

        self.busy = true;
        tokio::time::sleep(self.config.publish_delay).await;
        self.busy = false;

        tracing::info!(title = %self.title, category = %self.category, "draft published");
        ports::fire(
            self.notifier.as_ref(),
            Notification::normal("Published", "Post published successfully"),
        )
        .await;
        Ok(())
    }

    async fn reject(&self, message: &str) {
        ports::fire(
            self.notifier.as_ref(),
            Notification::destructive("Missing information", message),
        )
        .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::NotifyError;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        seen: Mutex<Vec<Notification>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
            self.seen.lock().await.push(notification);
            Ok(())
        }
    }

    fn fast_config() -> EditorConfig {
        EditorConfig {
            save_delay: Duration::from_millis(0),
            publish_delay: Duration::from_millis(0),
        }
    }

    fn editor() -> (PostEditor, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let editor = PostEditor::new(notifier.clone(), fast_config());
        (editor, notifier)
    }

    #[tokio::test]
    async fn test_new_draft_starts_with_starter_content() {
        let (editor, _) = editor();
        assert!(editor.content.contains("Start writing your article here"));
        assert!(editor.title.is_empty());
    }

    #[tokio::test]
    async fn test_save_requires_title() {
        let (mut editor, notifier) = editor();

        let err = editor.save().await.unwrap_err();
        assert!(matches!(
            err,
            EditorError::Validation(ValidationError::MissingRequiredField("title"))
        ));

        let seen = notifier.seen.lock().await;
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].description, "Please enter a title for your post");
    }

    #[tokio::test]
    async fn test_save_with_title_succeeds_and_notifies() {
        let (mut editor, notifier) = editor();
        editor.title = "Typography Fundamentals".to_string();

        editor.save().await.unwrap();
        assert!(!editor.is_busy());

        let seen = notifier.seen.lock().await;
        assert_eq!(seen[0].description, "Post saved successfully");
    }

    #[tokio::test]
    async fn test_publish_checks_fields_in_order() {
        let (mut editor, _) = editor();
        editor.title = "A title".to_string();
        editor.content.clear();

        let err = editor.publish().await.unwrap_err();
        assert!(matches!(
            err,
            EditorError::Validation(ValidationError::MissingRequiredField("content"))
        ));

        editor.content = "<p>Body</p>".to_string();
        let err = editor.publish().await.unwrap_err();
        assert!(matches!(
            err,
            EditorError::Validation(ValidationError::MissingRequiredField("excerpt"))
        ));

        editor.excerpt = "Summary".to_string();
        let err = editor.publish().await.unwrap_err();
        assert!(matches!(
            err,
            EditorError::Validation(ValidationError::MissingRequiredField("cover image"))
        ));

        editor.cover_image = "https://example.com/cover.jpg".to_string();
        let err = editor.publish().await.unwrap_err();
        assert!(matches!(
            err,
            EditorError::Validation(ValidationError::MissingRequiredField("category"))
        ));

        editor.category = "Design".to_string();
        editor.publish().await.unwrap();
    }

    #[tokio::test]
    async fn test_parsed_tags_splits_and_trims() {
        let (mut editor, _) = editor();
        editor.tags = "Design, UX ,Research,  ".to_string();
        assert_eq!(editor.parsed_tags(), vec!["Design", "UX", "Research"]);
    }

    #[tokio::test]
    async fn test_insert_snippet_appends_markup() {
        let (mut editor, _) = editor();
        let before = editor.content.len();
        editor.insert_snippet(Snippet::Quote);
        assert!(editor.content.len() > before);
        assert!(editor.content.ends_with("</blockquote>"));
    }

    #[tokio::test]
    async fn test_editor_prefills_from_post() {
        use crate::domain::{Post, User};

        let post = Post {
            id: "1".to_string(),
            title: "The Future of Minimalist Design".to_string(),
            content: "<p>Body</p>".to_string(),
            excerpt: "How simplicity shapes products.".to_string(),
            author: User {
                id: "1".to_string(),
                name: "Alex Johnson".to_string(),
                email: "alex@example.com".to_string(),
                avatar_url: String::new(),
                bio: String::new(),
                joined_date: "January 2023".to_string(),
            },
            published_date: "May 15, 2023".to_string(),
            read_time: 5,
            image_url: "https://example.com/cover.jpg".to_string(),
            likes: 248,
            comments: 42,
            tags: vec!["Design".to_string(), "Minimalism".to_string()],
            category: "Design".to_string(),
        };

        let notifier = Arc::new(RecordingNotifier::default());
        let editor = PostEditor::for_post(&post, notifier, fast_config());
        assert_eq!(editor.title, post.title);
        assert_eq!(editor.tags, "Design, Minimalism");
        assert_eq!(editor.parsed_tags(), post.tags);
    }
}
