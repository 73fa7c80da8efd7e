//! Write side of the store: validated create, partial update, hard delete.
//! Each function is one self-contained round-trip; the caller holds the
//! connection lock for its duration.

use chrono::Utc;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::models::{NewTicket, TicketPatch, TicketWithRelations};
use crate::queries;

pub(crate) fn create_ticket(conn: &mut Connection, new_ticket: NewTicket) -> Result<TicketWithRelations> {
    if new_ticket.title.is_empty()
        || new_ticket.description.is_empty()
        || new_ticket.category_id.is_empty()
        || new_ticket.user_id.is_empty()
    {
        return Err(StoreError::Validation("Missing required fields".to_string()));
    }

    if !queries::category_exists(conn, &new_ticket.category_id)? {
        return Err(StoreError::CategoryNotFound(new_ticket.category_id));
    }
    if !queries::user_exists(conn, &new_ticket.user_id)? {
        return Err(StoreError::UserNotFound(new_ticket.user_id));
    }

    let ticket_id = Uuid::new_v4().to_string();
    let now = Utc::now();

    conn.execute(
        "INSERT INTO tickets (id, title, description, summary, category_id, user_id, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            ticket_id,
            new_ticket.title,
            new_ticket.description,
            new_ticket.summary,
            new_ticket.category_id,
            new_ticket.user_id,
            now,
            now
        ],
    )?;

    queries::get_ticket(conn, &ticket_id)
}

pub(crate) fn update_ticket(
    conn: &mut Connection,
    ticket_id: &str,
    patch: TicketPatch,
) -> Result<TicketWithRelations> {
    let current = queries::get_ticket(conn, ticket_id)?.ticket;

    // A present-but-empty title/description/categoryId leaves the stored
    // value alone; callers send whole forms with untouched blank fields.
    let title = patch.title.filter(|t| !t.is_empty()).unwrap_or(current.title);
    let description = patch
        .description
        .filter(|d| !d.is_empty())
        .unwrap_or(current.description);
    let category_id = match patch.category_id.filter(|c| !c.is_empty()) {
        Some(category_id) => {
            if !queries::category_exists(conn, &category_id)? {
                return Err(StoreError::CategoryNotFound(category_id));
            }
            category_id
        }
        None => current.category_id,
    };
    // Summary is different: an explicit empty string clears it
    let summary = patch.summary.or(current.summary);

    conn.execute(
        "UPDATE tickets SET title = ?1, description = ?2, summary = ?3, category_id = ?4, updated_at = ?5
         WHERE id = ?6",
        params![title, description, summary, category_id, Utc::now(), ticket_id],
    )?;

    queries::get_ticket(conn, ticket_id)
}

pub(crate) fn delete_ticket(conn: &mut Connection, ticket_id: &str) -> Result<()> {
    let deleted = conn.execute("DELETE FROM tickets WHERE id = ?1", params![ticket_id])?;
    if deleted == 0 {
        return Err(StoreError::TicketNotFound(ticket_id.to_string()));
    }
    Ok(())
}
