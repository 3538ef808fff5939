//! Service request commands.

use anyhow::Result;
use sigesi_core::model::{AtualizacaoSolicitacao, NovaSolicitacao, NovoEndereco};

use super::{print_json, AppContext};

pub struct CreateArgs {
    pub assunto: String,
    pub descricao: String,
    pub autor_id: i64,
    pub logradouro: String,
    pub numero: String,
    pub bairro: String,
    pub referencia: Option<String>,
}

pub async fn list(ctx: &AppContext, json: bool) -> Result<()> {
    let solicitacoes = ctx.solicitacoes().list().await?;
    if json {
        return print_json(&solicitacoes);
    }
    if solicitacoes.is_empty() {
        println!("Nenhuma solicitação encontrada.");
        return Ok(());
    }
    for s in &solicitacoes {
        let status = s
            .status
            .map(|st| st.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "#{} [{}] {} — {}, {}",
            s.id, status, s.assunto, s.local.logradouro, s.local.bairro
        );
    }
    Ok(())
}

pub async fn show(ctx: &AppContext, id: i64, json: bool) -> Result<()> {
    let s = ctx.solicitacoes().get(id).await?;
    if json {
        return print_json(&s);
    }
    println!("#{} {}", s.id, s.assunto);
    println!("   {}", s.body);
    if let Some(status) = s.status {
        println!("   status: {}", status);
    }
    if let Some(tipo) = s.tipo {
        println!("   tipo: {}", tipo);
    }
    println!("   data: {}", s.data);
    println!(
        "   local: {}, {} — {}",
        s.local.logradouro, s.local.numero, s.local.bairro
    );
    if let Some(autor) = &s.autor {
        println!("   autor: {} <{}>", autor.nome, autor.email);
    }
    Ok(())
}

/// Submits a service request the way the portal does: register the address
/// first, then reference it from the new solicitação.
pub async fn create(ctx: &AppContext, args: CreateArgs) -> Result<()> {
    let endereco = ctx
        .enderecos()
        .create(&NovoEndereco {
            logradouro: args.logradouro,
            numero: args.numero,
            bairro: args.bairro,
            referencia: args.referencia,
        })
        .await?;

    let solicitacao = ctx
        .solicitacoes()
        .create(&NovaSolicitacao {
            assunto: args.assunto,
            body: args.descricao,
            anexo_id: None,
            autor_id: args.autor_id,
            local_id: endereco.id,
        })
        .await?;

    println!("✅ Solicitação #{} criada.", solicitacao.id);
    Ok(())
}

pub async fn update(
    ctx: &AppContext,
    id: i64,
    assunto: Option<String>,
    descricao: Option<String>,
) -> Result<()> {
    if assunto.is_none() && descricao.is_none() {
        println!("Nada para atualizar.");
        return Ok(());
    }
    let update = AtualizacaoSolicitacao {
        assunto,
        body: descricao,
        ..Default::default()
    };
    ctx.solicitacoes().update(id, &update).await?;
    println!("✅ Solicitação #{} atualizada.", id);
    Ok(())
}

pub async fn delete(ctx: &AppContext, id: i64) -> Result<()> {
    ctx.solicitacoes().delete(id).await?;
    println!("🗑️  Solicitação #{} removida.", id);
    Ok(())
}
