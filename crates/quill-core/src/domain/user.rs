use serde::{Deserialize, Serialize};

/// User entity - an author or commenter as loaded from the content
/// repository. Never mutated by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub bio: String,
    pub joined_date: String,
}
