//! Work item comment endpoints.

use std::sync::Arc;

use sigesi_core::model::{Comentario, NovoComentario};
use sigesi_core::Result;

use crate::api::ApiClient;

/// Client for `/api/comentarios`.
#[derive(Clone)]
pub struct ComentariosService {
    api: Arc<ApiClient>,
}

impl ComentariosService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Lists the comments on one work item.
    pub async fn by_demanda(&self, demanda_id: i64) -> Result<Vec<Comentario>> {
        self.api
            .get(&format!("/api/comentarios/demanda/{demanda_id}"))
            .await
    }

    pub async fn create(&self, novo: &NovoComentario) -> Result<Comentario> {
        self.api.post("/api/comentarios/", novo).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete(&format!("/api/comentarios/{id}")).await
    }
}
