use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Category, NewTicket, PageRequest, TicketFilter, TicketPage, TicketPatch, TicketWithRelations};

/// Trait for ticket persistence operations
///
/// Implementations provide storage-specific CRUD plus the listing
/// contract (filter, pagination, ordering).
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// List tickets matching the filter, newest first, one page at a time
    async fn list_tickets(&self, filter: TicketFilter, page: PageRequest) -> Result<TicketPage>;

    /// Fetch a single enriched ticket by id
    async fn get_ticket(&self, ticket_id: &str) -> Result<TicketWithRelations>;

    /// Validate and persist a new ticket
    async fn create_ticket(&self, new_ticket: NewTicket) -> Result<TicketWithRelations>;

    /// Apply a partial update to an existing ticket
    async fn update_ticket(&self, ticket_id: &str, patch: TicketPatch) -> Result<TicketWithRelations>;

    /// Hard-delete a ticket after an existence check
    async fn delete_ticket(&self, ticket_id: &str) -> Result<()>;

    /// List all categories, ordered by name
    async fn list_categories(&self) -> Result<Vec<Category>>;
}
