use serde::{Deserialize, Serialize};

/// Reference data attached to tickets. Created by seeding, never
/// cascading-deleted while tickets still point at it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}
