//! Work item commands.

use anyhow::{bail, Result};
use sigesi_core::model::{AtualizacaoDemanda, NovaDemanda, StatusDemanda};

use super::{print_json, AppContext};

pub async fn list(
    ctx: &AppContext,
    solicitacao: Option<i64>,
    responsavel: Option<i64>,
    json: bool,
) -> Result<()> {
    let service = ctx.demandas();
    let demandas = match (solicitacao, responsavel) {
        (Some(id), _) => service.by_solicitacao(id).await?,
        (None, Some(id)) => service.by_responsavel(id).await?,
        (None, None) => service.list().await?,
    };

    if json {
        return print_json(&demandas);
    }
    if demandas.is_empty() {
        println!("Nenhuma demanda encontrada.");
        return Ok(());
    }
    for d in &demandas {
        let responsavel = d
            .responsavel_id
            .map(|id| format!("agente {}", id))
            .unwrap_or_else(|| "sem agente".to_string());
        println!(
            "#{} [{}] solicitação #{} — {}",
            d.id, d.status, d.solicitacao_id, responsavel
        );
    }
    Ok(())
}

pub async fn show(ctx: &AppContext, id: i64, json: bool) -> Result<()> {
    let d = ctx.demandas().get(id).await?;
    if json {
        return print_json(&d);
    }
    println!("#{} [{}] solicitação #{}", d.id, d.status, d.solicitacao_id);
    if let Some(prioridade) = d.prioridade {
        println!("   prioridade: {}", prioridade);
    }
    if let Some(prazo) = &d.prazo {
        println!("   prazo: {}", prazo);
    }
    if let Some(responsavel) = &d.responsavel {
        println!("   responsável: {}", responsavel.nome);
    }
    if d.materiais.is_empty() {
        println!("   materiais: nenhum");
    } else {
        println!("   materiais:");
        for m in &d.materiais {
            println!("     - {} (R$ {:.2})", m.nome, m.preco);
        }
    }
    Ok(())
}

pub async fn create(
    ctx: &AppContext,
    solicitacao_id: i64,
    prazo: String,
    responsavel_id: Option<i64>,
    materiais_ids: Vec<i64>,
) -> Result<()> {
    let demanda = ctx
        .demandas()
        .create(&NovaDemanda {
            solicitacao_id,
            responsavel_id,
            prazo,
            materiais_ids,
        })
        .await?;
    println!("✅ Demanda #{} criada.", demanda.id);
    Ok(())
}

pub async fn assign(ctx: &AppContext, id: i64, responsavel_id: i64) -> Result<()> {
    let update = AtualizacaoDemanda {
        responsavel_id: Some(responsavel_id),
        ..Default::default()
    };
    ctx.demandas().update(id, &update).await?;
    println!("✅ Demanda #{} atribuída ao agente {}.", id, responsavel_id);
    Ok(())
}

pub async fn set_status(ctx: &AppContext, id: i64, status: &str) -> Result<()> {
    let status = parse_status(status)?;
    let update = AtualizacaoDemanda {
        status: Some(status),
        ..Default::default()
    };
    ctx.demandas().update(id, &update).await?;
    println!("✅ Demanda #{} agora está {}.", id, status);
    Ok(())
}

pub async fn delete(ctx: &AppContext, id: i64) -> Result<()> {
    ctx.demandas().delete(id).await?;
    println!("🗑️  Demanda #{} removida.", id);
    Ok(())
}

/// Parses a status argument in the backend's wire spelling.
fn parse_status(raw: &str) -> Result<StatusDemanda> {
    let normalized = raw.trim().to_uppercase();
    match serde_json::from_value(serde_json::Value::String(normalized)) {
        Ok(status) => Ok(status),
        Err(_) => bail!(
            "status inválido '{}'; use PENDENTE, EM_ANDAMENTO, BLOQUEADA ou CONCLUIDA",
            raw
        ),
    }
}
