//! User endpoints.

use std::sync::Arc;

use serde::Deserialize;
use sigesi_core::model::{PerfilUsuario, Usuario};
use sigesi_core::session::IdentityGateway;
use sigesi_core::Result;

use crate::api::ApiClient;

/// Path of the fire-and-forget logout endpoint.
pub const LOGOUT_PATH: &str = "/logout";

/// Wire shape of `GET /api/usuarios/me`, which differs from the domain model
/// (`name`/`role` instead of `nome`/`perfil`, no `ativo` flag).
#[derive(Debug, Deserialize)]
struct CurrentUserWire {
    id: i64,
    name: String,
    email: String,
    role: PerfilUsuario,
}

impl From<CurrentUserWire> for Usuario {
    fn from(wire: CurrentUserWire) -> Self {
        Usuario {
            id: wire.id,
            nome: wire.name,
            email: wire.email,
            perfil: wire.role,
            // Not reported by this endpoint.
            ativo: true,
        }
    }
}

/// Client for `/api/usuarios`.
#[derive(Clone)]
pub struct UsuariosService {
    api: Arc<ApiClient>,
}

impl UsuariosService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Fetches the authenticated user.
    pub async fn current_user(&self) -> Result<Usuario> {
        let wire: CurrentUserWire = self.api.get("/api/usuarios/me").await?;
        Ok(wire.into())
    }

    /// Lists all users.
    pub async fn list(&self) -> Result<Vec<Usuario>> {
        self.api.get("/api/usuarios/").await
    }

    /// Invalidates the server-side session.
    pub async fn logout(&self) -> Result<()> {
        self.api.post_empty(LOGOUT_PATH).await
    }
}

#[async_trait::async_trait]
impl IdentityGateway for UsuariosService {
    async fn fetch_current_user(&self) -> Result<Usuario> {
        self.current_user().await
    }

    async fn logout(&self) -> Result<()> {
        UsuariosService::logout(self).await
    }
}
