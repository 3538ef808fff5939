//! User domain model.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Role of a user within SIGESI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PerfilUsuario {
    /// Citizen submitting service requests through the portal.
    Cidadao,
    /// Operator triaging requests into work items.
    Operador,
    /// Field agent executing work items.
    Agente,
    Admin,
}

/// A SIGESI user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub perfil: PerfilUsuario,
    pub ativo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfil_wire_format() {
        let json = serde_json::to_string(&PerfilUsuario::Operador).unwrap();
        assert_eq!(json, "\"OPERADOR\"");

        let parsed: PerfilUsuario = serde_json::from_str("\"CIDADAO\"").unwrap();
        assert_eq!(parsed, PerfilUsuario::Cidadao);
    }

    #[test]
    fn test_perfil_display_matches_wire_format() {
        assert_eq!(PerfilUsuario::Operador.to_string(), "OPERADOR");
    }

    #[test]
    fn test_usuario_roundtrip() {
        let json = r#"{"id":7,"nome":"Ana","email":"ana@example.com","perfil":"AGENTE","ativo":true}"#;
        let user: Usuario = serde_json::from_str(json).unwrap();
        assert_eq!(user.perfil, PerfilUsuario::Agente);
        assert!(user.ativo);
    }
}
