//! Service request (solicitação) endpoints.

use std::sync::Arc;

use sigesi_core::model::{AtualizacaoSolicitacao, NovaSolicitacao, Solicitacao};
use sigesi_core::Result;

use crate::api::ApiClient;

/// Client for `/api/solicitacoes`.
#[derive(Clone)]
pub struct SolicitacoesService {
    api: Arc<ApiClient>,
}

impl SolicitacoesService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Solicitacao>> {
        self.api.get("/api/solicitacoes").await
    }

    pub async fn get(&self, id: i64) -> Result<Solicitacao> {
        self.api.get(&format!("/api/solicitacoes/{id}")).await
    }

    pub async fn create(&self, nova: &NovaSolicitacao) -> Result<Solicitacao> {
        self.api.post("/api/solicitacoes", nova).await
    }

    pub async fn update(&self, id: i64, update: &AtualizacaoSolicitacao) -> Result<Solicitacao> {
        self.api
            .patch(&format!("/api/solicitacoes/{id}"), update)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/api/solicitacoes/{id}")).await
    }
}
