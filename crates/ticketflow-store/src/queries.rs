//! Read side of the store: filtered, paginated, sorted ticket listings
//! plus single-row lookups. No operation here has side effects.

use rusqlite::{params_from_iter, Connection, Row};

use crate::error::{Result, StoreError};
use crate::models::{Category, PageRequest, Ticket, TicketFilter, TicketPage, TicketWithRelations, UserRef};

/// Sentinel category value that imposes no filter.
pub const ALL_CATEGORIES: &str = "All";

const TICKET_SELECT: &str = "SELECT t.id, t.title, t.description, t.summary, \
     t.category_id, t.user_id, t.created_at, t.updated_at, \
     c.id, c.name, c.description, u.username \
     FROM tickets t \
     JOIN categories c ON c.id = t.category_id \
     JOIN users u ON u.id = t.user_id";

const TICKET_COUNT: &str = "SELECT COUNT(*) \
     FROM tickets t \
     JOIN categories c ON c.id = t.category_id \
     JOIN users u ON u.id = t.user_id";

fn ticket_from_row(row: &Row) -> rusqlite::Result<TicketWithRelations> {
    Ok(TicketWithRelations {
        ticket: Ticket {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            summary: row.get(3)?,
            category_id: row.get(4)?,
            user_id: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        },
        category: Category {
            id: row.get(8)?,
            name: row.get(9)?,
            description: row.get(10)?,
        },
        user: UserRef {
            username: row.get(11)?,
        },
    })
}

/// Build the WHERE clause for a listing filter. All bound values are
/// strings; a NULL summary never matches the search arm.
fn filter_clause(filter: &TicketFilter) -> (String, Vec<String>) {
    let mut clauses: Vec<&str> = Vec::new();
    let mut params: Vec<String> = Vec::new();

    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        clauses.push(
            "(LOWER(t.title) LIKE ? OR LOWER(t.description) LIKE ? OR LOWER(t.summary) LIKE ?)",
        );
        let pattern = format!("%{}%", search.to_lowercase());
        params.push(pattern.clone());
        params.push(pattern.clone());
        params.push(pattern);
    }

    if let Some(category) = filter
        .category
        .as_deref()
        .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
    {
        clauses.push("c.name = ?");
        params.push(category.to_string());
    }

    let sql = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };

    (sql, params)
}

pub(crate) fn list_tickets(
    conn: &Connection,
    filter: &TicketFilter,
    page: &PageRequest,
) -> Result<TicketPage> {
    let (where_sql, params) = filter_clause(filter);

    let limit = u64::from(page.limit.max(1));
    let offset = u64::from(page.page.max(1) - 1) * limit;

    let total = conn.query_row(
        &format!("{}{}", TICKET_COUNT, where_sql),
        params_from_iter(params.iter()),
        |row| row.get::<_, i64>(0),
    )? as u64;

    // Newest first; equal timestamps fall back to insertion order
    let sql = format!(
        "{}{} ORDER BY t.created_at DESC, t.seq ASC LIMIT {} OFFSET {}",
        TICKET_SELECT, where_sql, limit, offset
    );
    let mut stmt = conn.prepare(&sql)?;
    let tickets = stmt
        .query_map(params_from_iter(params.iter()), ticket_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let total_pages = (total + limit - 1) / limit;

    Ok(TicketPage {
        tickets,
        total,
        total_pages,
    })
}

pub(crate) fn get_ticket(conn: &Connection, ticket_id: &str) -> Result<TicketWithRelations> {
    let sql = format!("{} WHERE t.id = ?1", TICKET_SELECT);
    conn.query_row(&sql, [ticket_id], ticket_from_row)
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => StoreError::TicketNotFound(ticket_id.to_string()),
            other => StoreError::Database(other),
        })
}

pub(crate) fn list_categories(conn: &Connection) -> Result<Vec<Category>> {
    let mut stmt = conn.prepare("SELECT id, name, description FROM categories ORDER BY name")?;
    let categories = stmt
        .query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(categories)
}

pub(crate) fn category_exists(conn: &Connection, category_id: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM categories WHERE id = ?1")?;
    Ok(stmt.exists([category_id])?)
}

pub(crate) fn user_exists(conn: &Connection, user_id: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM users WHERE id = ?1")?;
    Ok(stmt.exists([user_id])?)
}
