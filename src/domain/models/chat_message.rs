use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// `"user"` is the user; any other discriminator is the assistant.
    pub fn from_kind(kind: &str) -> Self {
        if kind == "user" {
            ChatRole::User
        } else {
            ChatRole::Assistant
        }
    }
}

/// A prior conversational turn as the caller records it.
///
/// `kind` is serialized as `type`, which is how chat front ends tag turns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl HistoryEntry {
    pub fn new(kind: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            content: Some(content.into()),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

/// A turn as the backend expects it in `chat_history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Translate a history entry, or `None` when it has no content or no role.
    pub fn from_entry(entry: &HistoryEntry) -> Option<Self> {
        let role = ChatRole::from_kind(entry.kind.as_deref()?);
        let content = entry.content.as_deref().filter(|c| !c.is_empty())?;
        Some(Self::new(role, content))
    }
}

/// Map a caller history to outgoing messages, dropping unusable entries.
pub fn to_chat_history(entries: &[HistoryEntry]) -> Vec<ChatMessage> {
    entries.iter().filter_map(ChatMessage::from_entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_user_and_assistant_in_order() {
        let history = vec![
            HistoryEntry::user("Hello"),
            HistoryEntry::assistant("Hi there"),
        ];

        let messages = to_chat_history(&history);

        assert_eq!(
            messages,
            vec![
                ChatMessage::new(ChatRole::User, "Hello"),
                ChatMessage::new(ChatRole::Assistant, "Hi there"),
            ]
        );
    }

    #[test]
    fn unknown_kind_is_assistant() {
        let entry = HistoryEntry::new("bot", "beep");
        let message = ChatMessage::from_entry(&entry).unwrap();
        assert_eq!(message.role, ChatRole::Assistant);
    }

    #[test]
    fn drops_empty_missing_content_and_missing_kind() {
        let history = vec![
            HistoryEntry::user("first"),
            HistoryEntry::user(""),
            HistoryEntry {
                kind: Some("assistant".to_string()),
                content: None,
            },
            HistoryEntry {
                kind: None,
                content: Some("orphan".to_string()),
            },
            HistoryEntry::assistant("last"),
        ];

        let messages = to_chat_history(&history);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "first");
        assert_eq!(messages[1].content, "last");
    }

    #[test]
    fn entry_reads_type_field() {
        let entry: HistoryEntry =
            serde_json::from_str(r#"{"type":"user","content":"Hello"}"#).unwrap();
        assert_eq!(entry, HistoryEntry::user("Hello"));
    }

    #[test]
    fn message_serializes_role_lowercase() {
        let json = serde_json::to_value(ChatMessage::new(ChatRole::Assistant, "Hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "assistant", "content": "Hi"}));
    }
}
