//! CLI command implementations.

pub mod auth;
pub mod comentario;
pub mod config;
pub mod demanda;
pub mod endereco;
pub mod material;
pub mod solicitacao;

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use sigesi_client::services::{
    ComentariosService, DemandasService, EnderecosService, MateriaisService, SolicitacoesService,
    UsuariosService,
};
use sigesi_client::ApiClient;
use sigesi_infrastructure::{ConfigStore, CredentialStore};

/// Shared state for one CLI invocation: configuration resolved, credential
/// store opened, API client built.
pub struct AppContext {
    pub api: Arc<ApiClient>,
    pub credentials: Arc<CredentialStore>,
}

impl AppContext {
    /// Resolves configuration and builds the API client.
    pub fn init() -> Result<Self> {
        let config = ConfigStore::new()?.load()?;
        let credentials = Arc::new(CredentialStore::new()?);
        let api = Arc::new(ApiClient::new(
            config.normalized_api_base(),
            credentials.clone(),
        )?);
        Ok(Self { api, credentials })
    }

    pub fn usuarios(&self) -> UsuariosService {
        UsuariosService::new(self.api.clone())
    }

    pub fn solicitacoes(&self) -> SolicitacoesService {
        SolicitacoesService::new(self.api.clone())
    }

    pub fn demandas(&self) -> DemandasService {
        DemandasService::new(self.api.clone())
    }

    pub fn comentarios(&self) -> ComentariosService {
        ComentariosService::new(self.api.clone())
    }

    pub fn materiais(&self) -> MateriaisService {
        MateriaisService::new(self.api.clone())
    }

    pub fn enderecos(&self) -> EnderecosService {
        EnderecosService::new(self.api.clone())
    }
}

/// Prints a value as pretty JSON (the `--json` output mode).
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
