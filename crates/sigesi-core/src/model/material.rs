//! Material catalog domain model.

use serde::{Deserialize, Serialize};

/// A material that can be attached to a work item, with its unit cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: i64,
    pub nome: String,
    pub preco: f64,
}
