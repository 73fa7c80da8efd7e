//! # TicketFlow - Ticket Management with a Guided Assistant
//!
//! TicketFlow bundles a SQLite-backed ticket store and a step-driven
//! drafting assistant behind one crate:
//!
//! - **Filtered listings** (search, category filter, pagination)
//! - **Partial updates** with form-friendly semantics
//! - **Guided drafting** (a fixed eight-step dialogue that assembles a
//!   ticket title, description, and summary)
//! - **Async/await** (built on Tokio)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ticketflow::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = SqliteStore::open("data/ticketflow.db").await?;
//!     store.seed_demo_data().await?;
//!
//!     let page = store
//!         .list_tickets(TicketFilter::default(), PageRequest::default())
//!         .await?;
//!     println!("{} tickets", page.total);
//!
//!     let engine = DialogueEngine::new();
//!     let mut session = ChatSession::new();
//!     let preview = engine.advance(&mut session, "our login page is broken");
//!     println!("{:?}", preview);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! TicketFlow consists of composable crates:
//!
//! - **ticketflow-store**: models, the `TicketStore` trait, and the
//!   SQLite implementation
//! - **ticketflow-assistant**: the dialogue engine, suggestion provider,
//!   and category inference
//! - **ticketflow-api**: the axum HTTP server (binary, not re-exported)

pub use ticketflow_assistant::{
    related_categories, ChatMessage, ChatRole, ChatSession, DialogueEngine, StaticSuggestions,
    SuggestionProvider, TicketDraft, TicketPreview,
};
pub use ticketflow_store::{
    Category, NewTicket, PageRequest, Result, SqliteStore, StoreError, Ticket, TicketFilter,
    TicketPage, TicketPatch, TicketStore, TicketWithRelations, User, UserRef,
};

pub mod prelude;
