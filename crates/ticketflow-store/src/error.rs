use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Ticket not found: {0}")]
    TicketNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
