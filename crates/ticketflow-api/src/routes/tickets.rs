use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use ticketflow_store::{
    Category, NewTicket, PageRequest, TicketFilter, TicketPatch, TicketStore, TicketWithRelations,
    UserRef,
};

use crate::{
    error::ApiResult,
    state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub summary: Option<String>,
    pub category_id: String,
    pub user_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub category: CategoryResponse,
    pub user: UserResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct ListTicketsQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: String,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListTicketsResponse {
    pub tickets: Vec<TicketResponse>,
    pub pagination: PaginationResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub summary: Option<String>,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub user_id: String,
}

#[derive(Debug, Serialize, Deserialize, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub category_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteTicketResponse {
    pub message: String,
}

/// List tickets with search, category filter, and pagination
#[utoipa::path(
    get,
    path = "/tickets",
    params(
        ("page" = Option<u32>, Query, description = "Page number, starting at 1 (default: 1)"),
        ("limit" = Option<u32>, Query, description = "Page size (default: 10)"),
        ("search" = Option<String>, Query, description = "Case-insensitive match on title, description, or summary"),
        ("category" = Option<String>, Query, description = "Exact category name; empty or \"All\" disables the filter")
    ),
    responses(
        (status = 200, description = "One page of tickets", body = ListTicketsResponse)
    ),
    tag = "tickets"
)]
pub async fn list_tickets(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListTicketsQuery>,
) -> ApiResult<Json<ListTicketsResponse>> {
    let filter = TicketFilter {
        search: (!query.search.is_empty()).then(|| query.search.clone()),
        category: (!query.category.is_empty()).then(|| query.category.clone()),
    };
    let page = PageRequest::new(query.page, query.limit);

    let result = state.store.list_tickets(filter, page).await?;

    Ok(Json(ListTicketsResponse {
        tickets: result.tickets.into_iter().map(ticket_to_response).collect(),
        pagination: PaginationResponse {
            page: page.page,
            limit: page.limit,
            total: result.total,
            total_pages: result.total_pages,
        },
    }))
}

/// Create a new ticket
#[utoipa::path(
    post,
    path = "/tickets",
    request_body = CreateTicketRequest,
    responses(
        (status = 201, description = "Ticket created", body = TicketResponse),
        (status = 400, description = "Missing required fields"),
        (status = 404, description = "Category or user does not exist")
    ),
    tag = "tickets"
)]
pub async fn create_ticket(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTicketRequest>,
) -> ApiResult<(StatusCode, Json<TicketResponse>)> {
    let ticket = state
        .store
        .create_ticket(NewTicket {
            title: req.title,
            description: req.description,
            summary: req.summary,
            category_id: req.category_id,
            user_id: req.user_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ticket_to_response(ticket))))
}

/// Get a single ticket by ID
#[utoipa::path(
    get,
    path = "/tickets/{ticket_id}",
    params(
        ("ticket_id" = String, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket details", body = TicketResponse),
        (status = 404, description = "Ticket not found")
    ),
    tag = "tickets"
)]
pub async fn get_ticket(
    State(state): State<Arc<AppState>>,
    Path(ticket_id): Path<String>,
) -> ApiResult<Json<TicketResponse>> {
    let ticket = state.store.get_ticket(&ticket_id).await?;
    Ok(Json(ticket_to_response(ticket)))
}

/// Apply a partial update to a ticket
///
/// A present-but-empty title, description, or categoryId leaves the field
/// unchanged; an empty summary clears it.
#[utoipa::path(
    put,
    path = "/tickets/{ticket_id}",
    params(
        ("ticket_id" = String, Path, description = "Ticket ID")
    ),
    request_body = UpdateTicketRequest,
    responses(
        (status = 200, description = "Updated ticket", body = TicketResponse),
        (status = 404, description = "Ticket not found")
    ),
    tag = "tickets"
)]
pub async fn update_ticket(
    State(state): State<Arc<AppState>>,
    Path(ticket_id): Path<String>,
    Json(req): Json<UpdateTicketRequest>,
) -> ApiResult<Json<TicketResponse>> {
    let ticket = state
        .store
        .update_ticket(
            &ticket_id,
            TicketPatch {
                title: req.title,
                description: req.description,
                summary: req.summary,
                category_id: req.category_id,
            },
        )
        .await?;

    Ok(Json(ticket_to_response(ticket)))
}

/// Delete a ticket
#[utoipa::path(
    delete,
    path = "/tickets/{ticket_id}",
    params(
        ("ticket_id" = String, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket deleted", body = DeleteTicketResponse),
        (status = 404, description = "Ticket not found")
    ),
    tag = "tickets"
)]
pub async fn delete_ticket(
    State(state): State<Arc<AppState>>,
    Path(ticket_id): Path<String>,
) -> ApiResult<Json<DeleteTicketResponse>> {
    state.store.delete_ticket(&ticket_id).await?;

    Ok(Json(DeleteTicketResponse {
        message: "Ticket deleted successfully".to_string(),
    }))
}

pub(crate) fn ticket_to_response(ticket: TicketWithRelations) -> TicketResponse {
    TicketResponse {
        id: ticket.ticket.id,
        title: ticket.ticket.title,
        description: ticket.ticket.description,
        summary: ticket.ticket.summary,
        category_id: ticket.ticket.category_id,
        user_id: ticket.ticket.user_id,
        created_at: ticket.ticket.created_at,
        updated_at: ticket.ticket.updated_at,
        category: category_to_response(ticket.category),
        user: user_to_response(ticket.user),
    }
}

pub(crate) fn category_to_response(category: Category) -> CategoryResponse {
    CategoryResponse {
        id: category.id,
        name: category.name,
        description: category.description,
    }
}

fn user_to_response(user: UserRef) -> UserResponse {
    UserResponse {
        username: user.username,
    }
}
