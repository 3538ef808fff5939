use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::AppContext;

#[derive(Parser)]
#[command(name = "sigesi")]
#[command(about = "SIGESI - municipal service request client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or change the client configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(flatten)]
    Api(ApiCommand),
}

/// Everything that talks to the backend, so it needs a configured context.
#[derive(Subcommand)]
enum ApiCommand {
    /// Log in through the backend's Google OAuth flow
    Login,
    /// Invalidate the server session and clear local state
    Logout,
    /// Show the authenticated user
    Whoami,
    /// Citizen service requests
    Solicitacao {
        #[command(subcommand)]
        action: SolicitacaoAction,
    },
    /// Tracked work items
    Demanda {
        #[command(subcommand)]
        action: DemandaAction,
    },
    /// Work item comments
    Comentario {
        #[command(subcommand)]
        action: ComentarioAction,
    },
    /// Material catalog
    Material {
        #[command(subcommand)]
        action: MaterialAction,
    },
    /// Addresses
    Endereco {
        #[command(subcommand)]
        action: EnderecoAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Set the backend base URL
    SetBase { url: String },
}

#[derive(Subcommand)]
enum SolicitacaoAction {
    /// List all service requests
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one service request
    Show {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Submit a service request (creates its address first)
    Create {
        #[arg(long)]
        assunto: String,
        #[arg(long)]
        descricao: String,
        #[arg(long)]
        autor_id: i64,
        #[arg(long)]
        logradouro: String,
        #[arg(long)]
        numero: String,
        #[arg(long)]
        bairro: String,
        #[arg(long)]
        referencia: Option<String>,
    },
    /// Update fields of a service request
    Update {
        id: i64,
        #[arg(long)]
        assunto: Option<String>,
        #[arg(long)]
        descricao: Option<String>,
    },
    /// Delete a service request
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum DemandaAction {
    /// List work items, optionally filtered
    List {
        #[arg(long)]
        solicitacao: Option<i64>,
        #[arg(long)]
        responsavel: Option<i64>,
        #[arg(long)]
        json: bool,
    },
    /// Show one work item
    Show {
        id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Create a work item from a service request
    Create {
        #[arg(long)]
        solicitacao_id: i64,
        #[arg(long)]
        prazo: String,
        #[arg(long)]
        responsavel_id: Option<i64>,
        /// Material ids to attach (repeatable)
        #[arg(long = "material")]
        materiais: Vec<i64>,
    },
    /// Assign a field agent
    Assign {
        id: i64,
        #[arg(long)]
        responsavel_id: i64,
    },
    /// Change the status (PENDENTE, EM_ANDAMENTO, BLOQUEADA, CONCLUIDA)
    Status { id: i64, status: String },
    /// Delete a work item
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum ComentarioAction {
    /// List the comments on a work item
    List {
        demanda_id: i64,
        #[arg(long)]
        json: bool,
    },
    /// Add a comment to a work item
    Add {
        demanda_id: i64,
        texto: String,
    },
    /// Delete a comment
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum MaterialAction {
    /// List the material catalog
    List {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum EnderecoAction {
    /// Register an address
    Create {
        #[arg(long)]
        logradouro: String,
        #[arg(long)]
        numero: String,
        #[arg(long)]
        bairro: String,
        #[arg(long)]
        referencia: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show()?,
            ConfigAction::SetBase { url } => commands::config::set_base(&url)?,
        },
        Commands::Api(command) => {
            let ctx = AppContext::init()?;
            dispatch(&ctx, command).await?;
        }
    }

    Ok(())
}

async fn dispatch(ctx: &AppContext, command: ApiCommand) -> Result<()> {
    match command {
        ApiCommand::Login => commands::auth::login(ctx).await?,
        ApiCommand::Logout => commands::auth::logout(ctx).await?,
        ApiCommand::Whoami => commands::auth::whoami(ctx).await?,
        ApiCommand::Solicitacao { action } => match action {
            SolicitacaoAction::List { json } => commands::solicitacao::list(ctx, json).await?,
            SolicitacaoAction::Show { id, json } => {
                commands::solicitacao::show(ctx, id, json).await?
            }
            SolicitacaoAction::Create {
                assunto,
                descricao,
                autor_id,
                logradouro,
                numero,
                bairro,
                referencia,
            } => {
                commands::solicitacao::create(
                    ctx,
                    commands::solicitacao::CreateArgs {
                        assunto,
                        descricao,
                        autor_id,
                        logradouro,
                        numero,
                        bairro,
                        referencia,
                    },
                )
                .await?
            }
            SolicitacaoAction::Update {
                id,
                assunto,
                descricao,
            } => commands::solicitacao::update(ctx, id, assunto, descricao).await?,
            SolicitacaoAction::Delete { id } => commands::solicitacao::delete(ctx, id).await?,
        },
        ApiCommand::Demanda { action } => match action {
            DemandaAction::List {
                solicitacao,
                responsavel,
                json,
            } => commands::demanda::list(ctx, solicitacao, responsavel, json).await?,
            DemandaAction::Show { id, json } => commands::demanda::show(ctx, id, json).await?,
            DemandaAction::Create {
                solicitacao_id,
                prazo,
                responsavel_id,
                materiais,
            } => {
                commands::demanda::create(ctx, solicitacao_id, prazo, responsavel_id, materiais)
                    .await?
            }
            DemandaAction::Assign { id, responsavel_id } => {
                commands::demanda::assign(ctx, id, responsavel_id).await?
            }
            DemandaAction::Status { id, status } => {
                commands::demanda::set_status(ctx, id, &status).await?
            }
            DemandaAction::Delete { id } => commands::demanda::delete(ctx, id).await?,
        },
        ApiCommand::Comentario { action } => match action {
            ComentarioAction::List { demanda_id, json } => {
                commands::comentario::list(ctx, demanda_id, json).await?
            }
            ComentarioAction::Add { demanda_id, texto } => {
                commands::comentario::add(ctx, demanda_id, texto).await?
            }
            ComentarioAction::Delete { id } => commands::comentario::delete(ctx, id).await?,
        },
        ApiCommand::Material { action } => match action {
            MaterialAction::List { json } => commands::material::list(ctx, json).await?,
        },
        ApiCommand::Endereco { action } => match action {
            EnderecoAction::Create {
                logradouro,
                numero,
                bairro,
                referencia,
            } => commands::endereco::create(ctx, logradouro, numero, bairro, referencia).await?,
        },
    }

    Ok(())
}
