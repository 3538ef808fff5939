//! Work item comment domain model.

use serde::{Deserialize, Serialize};

use super::Usuario;

/// A comment attached to a work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comentario {
    pub id: i64,
    pub demanda_id: i64,
    pub texto: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autor: Option<Usuario>,
    /// ISO datetime as emitted by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Payload for adding a comment to a work item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoComentario {
    pub demanda_id: i64,
    pub texto: String,
}
