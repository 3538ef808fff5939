//! Service request (solicitação) domain model.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::{Endereco, Usuario};

/// Lifecycle status of a citizen-submitted service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusSolicitacao {
    Aberta,
    EmAndamento,
    Concluida,
    Encerrada,
    Rejeitada,
}

/// Category of the reported problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoSolicitacao {
    Buraco,
    Esgoto,
    Iluminacao,
    Limpeza,
    Outros,
}

/// A citizen-submitted service request (the intake record).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solicitacao {
    pub id: i64,
    pub assunto: String,
    /// Free-text description. The backend field is named `body`.
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<TipoSolicitacao>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusSolicitacao>,
    /// ISO datetime as emitted by the backend.
    pub data: String,
    pub local: Endereco,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autor: Option<Usuario>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anexo: Option<serde_json::Value>,
}

/// Payload for creating a service request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovaSolicitacao {
    pub assunto: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anexo_id: Option<i64>,
    pub autor_id: i64,
    pub local_id: i64,
}

/// Partial update payload; only the provided fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtualizacaoSolicitacao {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assunto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anexo_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autor_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&StatusSolicitacao::EmAndamento).unwrap();
        assert_eq!(json, "\"EM_ANDAMENTO\"");
    }

    #[test]
    fn test_partial_update_skips_absent_fields() {
        let update = AtualizacaoSolicitacao {
            assunto: Some("Buraco na rua".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"assunto":"Buraco na rua"}"#);
    }

    #[test]
    fn test_solicitacao_with_missing_optionals() {
        let json = r#"{
            "id": 1,
            "assunto": "Esgoto aberto",
            "body": "Vazamento na esquina",
            "data": "2026-03-01T10:30:00",
            "local": {"id": 2, "logradouro": "Rua A", "numero": "10", "bairro": "Centro"}
        }"#;
        let s: Solicitacao = serde_json::from_str(json).unwrap();
        assert!(s.tipo.is_none());
        assert!(s.autor.is_none());
        assert_eq!(s.local.bairro, "Centro");
    }
}
