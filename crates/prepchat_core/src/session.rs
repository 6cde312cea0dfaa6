use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attachment::Attachment;
use crate::turn::Turn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-session conversation state. The driver is the only mutator; the
/// normalizer, builder, and interpreter read it through shared references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub history: Vec<Turn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            history: Vec::new(),
            attachment: None,
            created_at: Utc::now(),
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.history.push(Turn::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.history.push(Turn::assistant(content));
    }

    /// Set the pending attachment, replacing any previous one.
    pub fn attach(&mut self, attachment: Attachment) {
        self.attachment = Some(attachment);
    }

    pub fn clear_attachment(&mut self) {
        self.attachment = None;
    }

    /// Drop all turns and the pending attachment, keeping the session id.
    pub fn reset(&mut self) {
        self.history.clear();
        self.attachment = None;
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::MediaType;
    use crate::turn::Role;

    #[test]
    fn test_session_new() {
        let session = Session::new();
        assert!(session.is_empty());
        assert!(session.attachment.is_none());
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(SessionId::new().as_str(), SessionId::new().as_str());
    }

    #[test]
    fn test_push_turns_preserves_order() {
        let mut session = Session::new();
        session.push_user("q1");
        session.push_assistant("a1");
        session.push_user("q2");

        let roles: Vec<Role> = session.history.iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
    }

    #[test]
    fn test_attach_replaces_pending() {
        let mut session = Session::new();
        session.attach(Attachment::Document {
            name: "a.txt".to_string(),
            text: "one".to_string(),
        });
        session.attach(Attachment::Image {
            name: "b.png".to_string(),
            data: vec![0],
            media_type: MediaType::Png,
        });

        assert!(session.attachment.as_ref().unwrap().is_image());

        session.clear_attachment();
        assert!(session.attachment.is_none());
    }

    #[test]
    fn test_reset_clears_history_and_attachment() {
        let mut session = Session::new();
        session.push_user("hello");
        session.attach(Attachment::Document {
            name: "a.txt".to_string(),
            text: "x".to_string(),
        });
        session.reset();
        assert!(session.is_empty());
        assert!(session.attachment.is_none());
    }
}
