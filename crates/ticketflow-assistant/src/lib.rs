pub mod categories;
pub mod engine;
pub mod provider;
pub mod session;

pub use categories::related_categories;
pub use engine::DialogueEngine;
pub use provider::{StaticSuggestions, SuggestionProvider};
pub use session::{ChatMessage, ChatRole, ChatSession, TicketDraft, TicketPreview};
