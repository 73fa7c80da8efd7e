use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, UserRef};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub summary: Option<String>,
    pub category_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ticket joined with its category and the author's username, the shape
/// every read and write operation returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketWithRelations {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub category: Category,
    pub user: UserRef,
}

/// Fields required to create a ticket. `summary` is the only optional one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub summary: Option<String>,
    pub category_id: String,
    pub user_id: String,
}

/// Partial update. `title`, `description`, and `category_id` are applied
/// only when present and non-empty; `summary` is applied whenever present,
/// including the empty string (callers clear it that way).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub category_id: Option<String>,
}

/// Listing filter. An empty search imposes no constraint; a category of
/// `"All"` (or empty) matches every category.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn offset(&self) -> u32 {
        self.page.saturating_sub(1) * self.limit
    }
}

/// One page of enriched tickets plus the unpaginated match count.
#[derive(Debug, Clone)]
pub struct TicketPage {
    pub tickets: Vec<TicketWithRelations>,
    pub total: u64,
    pub total_pages: u64,
}
