use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            suggestions: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            suggestions: None,
        }
    }

    pub fn assistant_with_suggestions(content: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            suggestions: Some(suggestions),
        }
    }
}

/// The ticket fields accumulated over one dialogue. Nothing here is
/// persisted; the draft only feeds the preview pane until the user
/// submits it through the regular ticket API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketDraft {
    pub purpose: String,
    pub selected_title: String,
    pub selected_category: String,
    pub selected_description: String,
    pub summary: String,
}

/// One client's dialogue state, passed into and back out of the engine
/// on every exchange. Owned entirely by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSession {
    pub messages: Vec<ChatMessage>,
    pub step: u8,
    pub draft: TicketDraft,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preview fields derived from the current draft. Recomputed after
    /// every assistant reply.
    pub fn preview(&self) -> TicketPreview {
        let title_suggestions = if self.draft.selected_title.is_empty() {
            Vec::new()
        } else {
            vec![self.draft.selected_title.clone()]
        };

        TicketPreview {
            title_suggestions,
            description: self.draft.selected_description.clone(),
            summary: self.draft.summary.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketPreview {
    pub title_suggestions: Vec<String>,
    pub description: String,
    pub summary: String,
}
