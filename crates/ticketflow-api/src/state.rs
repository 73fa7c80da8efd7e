use std::sync::Arc;

use ticketflow_assistant::DialogueEngine;
use ticketflow_store::TicketStore;

use crate::config::Config;

/// Shared application state passed to all handlers
///
/// All resources are wrapped in Arc for efficient sharing across async
/// tasks. The dialogue engine is stateless; per-client session state
/// travels in each request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn TicketStore>,
    pub engine: Arc<DialogueEngine>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn TicketStore>, engine: DialogueEngine) -> Self {
        Self {
            config: Arc::new(config),
            store,
            engine: Arc::new(engine),
        }
    }
}
