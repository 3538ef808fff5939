//! Work item comment commands.

use anyhow::Result;
use sigesi_core::model::NovoComentario;

use super::{print_json, AppContext};

pub async fn list(ctx: &AppContext, demanda_id: i64, json: bool) -> Result<()> {
    let comentarios = ctx.comentarios().by_demanda(demanda_id).await?;
    if json {
        return print_json(&comentarios);
    }
    if comentarios.is_empty() {
        println!("Nenhum comentário na demanda #{}.", demanda_id);
        return Ok(());
    }
    for c in &comentarios {
        let autor = c
            .autor
            .as_ref()
            .map(|a| a.nome.as_str())
            .unwrap_or("Usuário");
        match &c.data {
            Some(data) => println!("[{}] {}: {}", data, autor, c.texto),
            None => println!("{}: {}", autor, c.texto),
        }
    }
    Ok(())
}

pub async fn add(ctx: &AppContext, demanda_id: i64, texto: String) -> Result<()> {
    let comentario = ctx
        .comentarios()
        .create(&NovoComentario { demanda_id, texto })
        .await?;
    println!("✅ Comentário #{} adicionado.", comentario.id);
    Ok(())
}

pub async fn delete(ctx: &AppContext, id: i64) -> Result<()> {
    ctx.comentarios().delete(id).await?;
    println!("🗑️  Comentário #{} removido.", id);
    Ok(())
}
