//! Viewer session - the explicit per-session context object.
//!
//! Every piece of mutable state (engagement toggles, comment threads, the
//! editor) hangs off one of these instead of ambient globals, so concurrent
//! sessions - including sessions in tests - never interfere.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::dashboard::AuthorDashboard;
use crate::domain::{Comment, Post, User};
use crate::editor::{EditorConfig, PostEditor};
use crate::engagement::{BookmarkView, EngagementStore, LikeView};
use crate::error::SessionError;
use crate::ports::{
    self, ContentRepository, Notification, Notifier, ShareError, ShareTarget,
};
use crate::thread::CommentThread;

/// One viewer's ephemeral session over the read-only content repository.
///
/// Holds the engagement store and the lazily loaded comment threads, wires
/// the pure reducers to baseline counts from the repository, and emits the
/// user-facing notifications. Nothing survives the session.
pub struct ViewerSession {
    viewer: User,
    started_at: DateTime<Utc>,
    repository: Arc<dyn ContentRepository>,
    notifier: Arc<dyn Notifier>,
    share_target: Arc<dyn ShareTarget>,
    engagement: RwLock<EngagementStore>,
    threads: RwLock<HashMap<String, CommentThread>>,
    editor_config: EditorConfig,
}

impl ViewerSession {
    pub fn new(
        viewer: User,
        repository: Arc<dyn ContentRepository>,
        notifier: Arc<dyn Notifier>,
        share_target: Arc<dyn ShareTarget>,
    ) -> Self {
        tracing::info!(viewer_id = %viewer.id, "viewer session started");
        Self {
            viewer,
            started_at: Utc::now(),
            repository,
            notifier,
            share_target,
            engagement: RwLock::new(EngagementStore::new()),
            threads: RwLock::new(HashMap::new()),
            editor_config: EditorConfig::default(),
        }
    }

    pub fn with_editor_config(mut self, config: EditorConfig) -> Self {
        self.editor_config = config;
        self
    }

    pub fn viewer(&self) -> &User {
        &self.viewer
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Flip the like toggle on a post. Unknown post ids behave as a fresh
    /// zero-baseline state rather than an error.
    pub async fn toggle_like(&self, post_id: &str) -> Result<LikeView, SessionError> {
        let baseline = self.baseline_likes(post_id).await?;
        let view = self
            .engagement
            .write()
            .await
            .toggle_post_like(post_id, baseline);

        let notification = if view.is_liked {
            Notification::normal(
                "Liked!",
                "You've liked this post! Thanks for showing appreciation.",
            )
        } else {
            Notification::normal("Unliked", "You've removed your like from this post.")
        };
        ports::fire(self.notifier.as_ref(), notification).await;
        Ok(view)
    }

    /// Flip the bookmark toggle on a post.
    pub async fn toggle_bookmark(&self, post_id: &str) -> Result<BookmarkView, SessionError> {
        let view = self.engagement.write().await.toggle_bookmark(post_id);

        let notification = if view.is_bookmarked {
            Notification::normal(
                "Bookmarked!",
                "This post has been added to your bookmarks for later reading.",
            )
        } else {
            Notification::normal(
                "Removed from bookmarks",
                "This post has been removed from your bookmarks.",
            )
        };
        ports::fire(self.notifier.as_ref(), notification).await;
        Ok(view)
    }

    /// Flip the like toggle on a comment in a post's thread.
    pub async fn toggle_comment_like(
        &self,
        post_id: &str,
        comment_id: &str,
    ) -> Result<LikeView, SessionError> {
        let baseline = self
            .with_thread(post_id, |thread| thread.baseline_likes(comment_id))
            .await?
            .unwrap_or(0);
        let view = self
            .engagement
            .write()
            .await
            .toggle_comment_like(comment_id, baseline);
        Ok(view)
    }

    pub async fn is_post_liked(&self, post_id: &str) -> bool {
        self.engagement.read().await.is_post_liked(post_id)
    }

    pub async fn is_bookmarked(&self, post_id: &str) -> bool {
        self.engagement.read().await.is_bookmarked(post_id)
    }

    /// Baseline plus this viewer's pending like toggle.
    pub async fn displayed_likes(&self, post_id: &str) -> Result<u32, SessionError> {
        let baseline = self.baseline_likes(post_id).await?;
        Ok(self
            .engagement
            .read()
            .await
            .displayed_post_likes(post_id, baseline))
    }

    /// The current comment list for a post, newest local additions first.
    pub async fn comments(&self, post_id: &str) -> Result<Vec<Comment>, SessionError> {
        self.with_thread(post_id, |thread| thread.comments().to_vec())
            .await
    }

    /// Submit a comment on a post. Blank text aborts with a warning
    /// notification and leaves the thread untouched.
    pub async fn post_comment(&self, post_id: &str, text: &str) -> Result<Comment, SessionError> {
        let result = self
            .with_thread(post_id, |thread| {
                thread.submit(text).map(|comment| comment.clone())
            })
            .await?;
        match result {
            Ok(comment) => Ok(comment),
            Err(err) => {
                ports::fire(
                    self.notifier.as_ref(),
                    Notification::destructive(
                        "Empty comment",
                        "Please write something before posting.",
                    ),
                )
                .await;
                Err(err.into())
            }
        }
    }

    /// Begin replying to a comment; returns the prefilled draft text.
    pub async fn start_reply(
        &self,
        post_id: &str,
        comment_id: &str,
    ) -> Result<String, SessionError> {
        self.with_thread(post_id, |thread| {
            thread.start_reply(comment_id);
            thread.draft().to_string()
        })
        .await
    }

    /// Abandon an in-progress reply.
    pub async fn cancel_reply(&self, post_id: &str) -> Result<(), SessionError> {
        self.with_thread(post_id, |thread| thread.cancel_reply())
            .await
    }

    /// Report a comment. The thread and all counts are left untouched; the
    /// only effect is the acknowledgement notification.
    pub async fn report_comment(
        &self,
        post_id: &str,
        comment_id: &str,
    ) -> Result<(), SessionError> {
        let known = self
            .with_thread(post_id, |thread| thread.report(comment_id))
            .await?;
        if known {
            ports::fire(
                self.notifier.as_ref(),
                Notification::normal(
                    "Report received",
                    "Thanks for flagging this comment. Our moderators will take a look.",
                ),
            )
            .await;
        } else {
            tracing::debug!(post_id = %post_id, comment_id = %comment_id, "report for unknown comment ignored");
        }
        Ok(())
    }

    /// Share a post through the platform surface, degrading to a clipboard
    /// copy when that surface is unavailable. Failure of the fallback
    /// surfaces a destructive notification and changes no state.
    pub async fn share_post(&self, post_id: &str) -> Result<(), SessionError> {
        let title = self
            .repository
            .post(post_id)
            .await?
            .map(|post| post.title)
            .unwrap_or_default();
        let url = format!("/post/{post_id}");

        match self.share_target.share(&title, &url).await {
            Ok(()) => Ok(()),
            Err(ShareError::Unavailable) => {
                self.copy_link(&url).await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "share failed, falling back to clipboard");
                self.copy_link(&url).await;
                Ok(())
            }
        }
    }

    async fn copy_link(&self, url: &str) {
        match self.share_target.copy(url).await {
            Ok(()) => {
                ports::fire(
                    self.notifier.as_ref(),
                    Notification::normal(
                        "Link copied!",
                        "Post link has been copied to your clipboard.",
                    ),
                )
                .await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "clipboard fallback failed");
                ports::fire(
                    self.notifier.as_ref(),
                    Notification::destructive(
                        "Sharing failed",
                        "Couldn't copy the link. Please try again.",
                    ),
                )
                .await;
            }
        }
    }

    /// Editor for a brand-new draft.
    pub fn editor(&self) -> PostEditor {
        PostEditor::new(self.notifier.clone(), self.editor_config.clone())
    }

    /// Editor prefilled from an existing post.
    pub fn editor_for(&self, post: &Post) -> PostEditor {
        PostEditor::for_post(post, self.notifier.clone(), self.editor_config.clone())
    }

    /// Dashboard over the viewer's own posts.
    pub fn author_dashboard(&self) -> AuthorDashboard {
        AuthorDashboard::new(self.viewer.id.clone())
    }

    async fn baseline_likes(&self, post_id: &str) -> Result<u32, SessionError> {
        Ok(self
            .repository
            .post(post_id)
            .await?
            .map(|post| post.likes)
            .unwrap_or(0))
    }

    /// Run a closure against the post's thread, loading it from the
    /// repository on first touch.
    async fn with_thread<R>(
        &self,
        post_id: &str,
        f: impl FnOnce(&mut CommentThread) -> R,
    ) -> Result<R, SessionError> {
        let mut threads = self.threads.write().await;
        let thread = match threads.entry(post_id.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let loaded = self.repository.comments_for(post_id).await?;
                entry.insert(CommentThread::new(post_id, self.viewer.clone(), loaded))
            }
        };
        Ok(f(thread))
    }
}
