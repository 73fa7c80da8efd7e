use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use ticketflow_store::TicketStore;

use crate::{
    error::ApiResult,
    routes::tickets::{category_to_response, CategoryResponse},
    state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct ListCategoriesResponse {
    pub categories: Vec<CategoryResponse>,
}

/// List all ticket categories
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories, ordered by name", body = ListCategoriesResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ListCategoriesResponse>> {
    let categories = state.store.list_categories().await?;

    Ok(Json(ListCategoriesResponse {
        categories: categories.into_iter().map(category_to_response).collect(),
    }))
}
