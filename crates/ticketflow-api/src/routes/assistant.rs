use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use ticketflow_assistant::{related_categories, ChatSession, TicketPreview};

use crate::{error::ApiResult, state::AppState};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// Dialogue state from the previous exchange; omit to start fresh
    #[serde(default)]
    #[schema(value_type = Object)]
    pub session: ChatSession,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    #[schema(value_type = Object)]
    pub session: ChatSession,
    #[schema(value_type = Object)]
    pub preview: TicketPreview,
    /// Category labels inferred from the drafted title, for the preview pane
    pub related_categories: Vec<String>,
}

/// Advance the ticket assistant dialogue by one exchange
///
/// The session is owned by the client and travels with every request;
/// nothing is persisted server-side.
#[utoipa::path(
    post,
    path = "/assistant/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Updated transcript and ticket preview", body = ChatResponse)
    ),
    tag = "assistant"
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatResponse>> {
    let mut session = req.session;
    let preview = state.engine.advance(&mut session, &req.message);
    let related = related_categories(&session.draft.selected_title)
        .iter()
        .map(|s| s.to_string())
        .collect();

    Ok(Json(ChatResponse {
        session,
        preview,
        related_categories: related,
    }))
}
