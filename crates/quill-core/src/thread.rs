//! Comment thread reducer - one post's comments plus the in-progress draft.

use crate::domain::{Comment, User};
use crate::error::ValidationError;

/// What the viewer is currently composing, if anything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DraftState {
    #[default]
    Idle,
    Composing,
    Replying {
        target_id: String,
    },
}

/// Ordered comment list for one post, with local additions layered on top of
/// the originally loaded comments.
///
/// Locally added comments sit at the front in reverse insertion order; the
/// loaded comments keep their original order behind them and are never
/// reordered.
#[derive(Debug)]
pub struct CommentThread {
    post_id: String,
    viewer: User,
    comments: Vec<Comment>,
    draft: String,
    state: DraftState,
}

impl CommentThread {
    pub fn new(post_id: impl Into<String>, viewer: User, loaded: Vec<Comment>) -> Self {
        Self {
            post_id: post_id.into(),
            viewer,
            comments: loaded,
            draft: String::new(),
            state: DraftState::Idle,
        }
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    /// The displayed comment list, newest local additions first.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn state(&self) -> &DraftState {
        &self.state
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Baseline like count of a comment in this thread.
    pub fn baseline_likes(&self, comment_id: &str) -> Option<u32> {
        self.comments
            .iter()
            .find(|comment| comment.id == comment_id)
            .map(|comment| comment.likes)
    }

    /// Update the draft text as the viewer types.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        match self.state {
            DraftState::Idle if !self.draft.is_empty() => self.state = DraftState::Composing,
            DraftState::Composing if self.draft.is_empty() => self.state = DraftState::Idle,
            _ => {}
        }
    }

    /// Begin replying to a comment in this thread. The draft is prefilled
    /// with an @-mention of the target's author. Unknown targets are ignored.
    pub fn start_reply(&mut self, target_id: &str) {
        let Some(author_name) = self.author_name(target_id) else {
            tracing::debug!(post_id = %self.post_id, target_id = %target_id, "reply target not in thread");
            return;
        };
        self.draft = format!("@{author_name} ");
        self.state = DraftState::Replying {
            target_id: target_id.to_string(),
        };
    }

    /// Abandon the reply; the draft is cleared.
    pub fn cancel_reply(&mut self) {
        self.draft.clear();
        self.state = DraftState::Idle;
    }

    /// Submit a comment with the given body text.
    ///
    /// Blank text is rejected and nothing changes. Otherwise a fresh comment
    /// authored by the viewer is prepended - mention-prefixed when replying -
    /// and the draft resets to idle.
    pub fn submit(&mut self, text: &str) -> Result<&Comment, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }

        let content = match &self.state {
            DraftState::Replying { target_id } => match self.author_name(target_id) {
                Some(name) => format!("@{name} {text}"),
                None => text.to_string(),
            },
            _ => text.to_string(),
        };

        let comment = Comment::local(self.viewer.clone(), content);
        tracing::debug!(post_id = %self.post_id, comment_id = %comment.id, "comment added");
        self.comments.insert(0, comment);
        self.draft.clear();
        self.state = DraftState::Idle;
        Ok(&self.comments[0])
    }

    /// Whether a report for this comment can be raised. Reporting flows
    /// through the session as a pure notification; the thread itself never
    /// changes.
    pub fn report(&self, comment_id: &str) -> bool {
        self.comments.iter().any(|comment| comment.id == comment_id)
    }

    fn author_name(&self, comment_id: &str) -> Option<String> {
        self.comments
            .iter()
            .find(|comment| comment.id == comment_id)
            .map(|comment| comment.author.name.clone())
    }
}
