//! Address endpoints.

use std::sync::Arc;

use sigesi_core::model::{Endereco, NovoEndereco};
use sigesi_core::Result;

use crate::api::ApiClient;

/// Client for `/api/enderecos`.
#[derive(Clone)]
pub struct EnderecosService {
    api: Arc<ApiClient>,
}

impl EnderecosService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// Creates an address; a new solicitação references it by id.
    pub async fn create(&self, novo: &NovoEndereco) -> Result<Endereco> {
        self.api.post("/api/enderecos/", novo).await
    }
}
