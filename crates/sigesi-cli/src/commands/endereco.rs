//! Address commands.

use anyhow::Result;
use sigesi_core::model::NovoEndereco;

use super::AppContext;

pub async fn create(
    ctx: &AppContext,
    logradouro: String,
    numero: String,
    bairro: String,
    referencia: Option<String>,
) -> Result<()> {
    let endereco = ctx
        .enderecos()
        .create(&NovoEndereco {
            logradouro,
            numero,
            bairro,
            referencia,
        })
        .await?;
    println!("✅ Endereço #{} registrado.", endereco.id);
    Ok(())
}
