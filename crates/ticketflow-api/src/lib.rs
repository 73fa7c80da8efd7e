pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::middleware::logging;
use crate::routes::{assistant, categories, health, tickets};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        tickets::list_tickets,
        tickets::create_ticket,
        tickets::get_ticket,
        tickets::update_ticket,
        tickets::delete_ticket,
        categories::list_categories,
        assistant::chat,
    ),
    components(schemas(
        health::HealthResponse,
        tickets::TicketResponse,
        tickets::CategoryResponse,
        tickets::UserResponse,
        tickets::PaginationResponse,
        tickets::ListTicketsResponse,
        tickets::CreateTicketRequest,
        tickets::UpdateTicketRequest,
        tickets::DeleteTicketResponse,
        categories::ListCategoriesResponse,
        assistant::ChatRequest,
        assistant::ChatResponse,
    )),
    tags(
        (name = "tickets", description = "Ticket management"),
        (name = "categories", description = "Category reference data"),
        (name = "assistant", description = "Guided ticket assistant"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Tickets
        .route("/tickets", post(tickets::create_ticket))
        .route("/tickets", get(tickets::list_tickets))
        .route("/tickets/:ticket_id", get(tickets::get_ticket))
        .route("/tickets/:ticket_id", put(tickets::update_ticket))
        .route("/tickets/:ticket_id", delete(tickets::delete_ticket))
        // Categories
        .route("/categories", get(categories::list_categories))
        // Assistant
        .route("/assistant/chat", post(assistant::chat));

    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .merge(api_routes)
        .layer(axum::middleware::from_fn(logging::log_request))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    if config.cors.enabled {
        let cors = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers(Any);

        if config.cors.origins.iter().any(|o| o == "*") {
            cors.allow_origin(Any)
        } else {
            let parsed_origins: Vec<HeaderValue> = config
                .cors
                .origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok())
                .collect();

            cors.allow_origin(parsed_origins)
        }
    } else {
        CorsLayer::permissive()
    }
}
