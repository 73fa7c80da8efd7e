//! Convenience re-exports for embedding TicketFlow.

pub use ticketflow_assistant::{
    ChatMessage, ChatRole, ChatSession, DialogueEngine, StaticSuggestions, SuggestionProvider,
    TicketDraft, TicketPreview,
};
pub use ticketflow_store::{
    Category, NewTicket, PageRequest, SqliteStore, StoreError, Ticket, TicketFilter, TicketPage,
    TicketPatch, TicketStore, TicketWithRelations,
};
