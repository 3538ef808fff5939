//! Work item (demanda) endpoints.

use std::sync::Arc;

use sigesi_core::model::{AtualizacaoDemanda, Demanda, NovaDemanda};
use sigesi_core::Result;

use crate::api::ApiClient;

/// Client for `/api/demandas`.
#[derive(Clone)]
pub struct DemandasService {
    api: Arc<ApiClient>,
}

impl DemandasService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Demanda>> {
        self.api.get("/api/demandas/").await
    }

    pub async fn get(&self, id: i64) -> Result<Demanda> {
        self.api.get(&format!("/api/demandas/{id}")).await
    }

    /// Lists the work items derived from one solicitação.
    pub async fn by_solicitacao(&self, solicitacao_id: i64) -> Result<Vec<Demanda>> {
        self.api
            .get(&format!("/api/demandas/solicitacao/{solicitacao_id}"))
            .await
    }

    /// Lists the work items assigned to one field agent.
    pub async fn by_responsavel(&self, responsavel_id: i64) -> Result<Vec<Demanda>> {
        self.api
            .get(&format!(
                "/api/demandas/responsavel?responsavelId={responsavel_id}"
            ))
            .await
    }

    pub async fn create(&self, nova: &NovaDemanda) -> Result<Demanda> {
        self.api.post("/api/demandas/", nova).await
    }

    pub async fn update(&self, id: i64, update: &AtualizacaoDemanda) -> Result<Demanda> {
        self.api.patch(&format!("/api/demandas/{id}"), update).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/api/demandas/{id}")).await
    }
}
