//! Material catalog endpoints.

use std::sync::Arc;

use sigesi_core::model::Material;
use sigesi_core::Result;

use crate::api::ApiClient;

/// Client for `/api/materiais`.
#[derive(Clone)]
pub struct MateriaisService {
    api: Arc<ApiClient>,
}

impl MateriaisService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Material>> {
        self.api.get("/api/materiais/").await
    }
}
