//! Address domain model.

use serde::{Deserialize, Serialize};

/// A street address attached to a service request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endereco {
    pub id: i64,
    pub logradouro: String,
    pub numero: String,
    pub bairro: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referencia: Option<String>,
}

/// Payload for creating an address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovoEndereco {
    pub logradouro: String,
    pub numero: String,
    pub bairro: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referencia: Option<String>,
}
