pub mod error;
pub mod models;
pub mod store;
pub mod traits;

mod commands;
mod queries;
mod seed;

pub use error::{Result, StoreError};
pub use models::{
    Category, NewTicket, PageRequest, Ticket, TicketFilter, TicketPage, TicketPatch,
    TicketWithRelations, User, UserRef,
};
pub use queries::ALL_CATEGORIES;
pub use store::SqliteStore;
pub use traits::TicketStore;
