use serde::Serialize;

use super::{to_chat_history, ChatMessage, HistoryEntry};

/// JSON body of `POST /query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    pub query: String,
    pub session_id: String,
    pub doc_id: String,
    pub chat_history: Vec<ChatMessage>,
}

impl QueryRequest {
    pub fn new(
        query: impl Into<String>,
        session_id: impl Into<String>,
        doc_id: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            session_id: session_id.into(),
            doc_id: doc_id.into(),
            chat_history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: &[HistoryEntry]) -> Self {
        self.chat_history = to_chat_history(history);
        self
    }
}
