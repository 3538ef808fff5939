//! Work item (demanda) domain model.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::{Material, Solicitacao, Usuario};

/// Lifecycle status of a tracked work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusDemanda {
    Pendente,
    EmAndamento,
    Bloqueada,
    Concluida,
}

/// Priority assigned by an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PrioridadeDemanda {
    Baixa,
    Media,
    Alta,
    Critica,
}

/// An internally tracked work item derived from a solicitação, assigned to a
/// field agent, with status and materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demanda {
    pub id: i64,
    pub solicitacao_id: i64,
    pub status: StatusDemanda,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prioridade: Option<PrioridadeDemanda>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsavel_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsavel: Option<Usuario>,
    /// Due date as emitted by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prazo: Option<String>,
    #[serde(default)]
    pub materiais: Vec<Material>,
    /// The originating request, embedded by some endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solicitacao: Option<Solicitacao>,
}

/// Payload for creating a work item from a solicitação.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovaDemanda {
    pub solicitacao_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsavel_id: Option<i64>,
    pub prazo: String,
    pub materiais_ids: Vec<i64>,
}

/// Partial update payload; only the provided fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtualizacaoDemanda {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsavel_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusDemanda>,
}
