//! Material catalog commands.

use anyhow::Result;

use super::{print_json, AppContext};

pub async fn list(ctx: &AppContext, json: bool) -> Result<()> {
    let materiais = ctx.materiais().list().await?;
    if json {
        return print_json(&materiais);
    }
    if materiais.is_empty() {
        println!("Catálogo de materiais vazio.");
        return Ok(());
    }
    for m in &materiais {
        println!("#{} {} — R$ {:.2}", m.id, m.nome, m.preco);
    }
    Ok(())
}
