//! Login, logout and whoami.

use anyhow::Result;
use sigesi_core::auth::{LoginHandshake, LoginNotice, LoginNotifier, SystemClock};
use sigesi_core::session::{CurrentUserService, SessionCache};
use sigesi_client::{HttpSessionProbe, SystemBrowserOpener, OAUTH_ENTRY_PATH};

use super::AppContext;

/// Delivers the handshake's terminal notification on the console.
struct ConsoleNotifier;

impl LoginNotifier for ConsoleNotifier {
    fn notify(&self, notice: LoginNotice) {
        match notice {
            LoginNotice::Succeeded => println!("✅ Login concluído com sucesso."),
            LoginNotice::Cancelled => println!("⚠️  Login cancelado: a janela de login foi fechada."),
            LoginNotice::TimedOut => println!("❌ Tempo esgotado: o login não foi concluído a tempo."),
            LoginNotice::WindowBlocked => println!("❌ Não foi possível abrir a janela de login."),
        }
    }
}

pub async fn login(ctx: &AppContext) -> Result<()> {
    let url = ctx.api.url(OAUTH_ENTRY_PATH);
    println!("🌐 Abrindo o navegador para login com Google...");
    println!("   {}", url);

    let probe = HttpSessionProbe::new(ctx.api.clone());
    let mut handshake = LoginHandshake::new(probe, SystemClock, ConsoleNotifier);
    handshake.run(&SystemBrowserOpener, &url).await?;

    let user = ctx.usuarios().current_user().await?;
    println!("👤 Conectado como {} ({})", user.nome, user.perfil);
    Ok(())
}

pub async fn logout(ctx: &AppContext) -> Result<()> {
    let service = CurrentUserService::new(ctx.usuarios(), SessionCache::new(SystemClock));
    // Fire-and-forget towards the backend; local state is cleared regardless.
    service.logout().await;
    ctx.credentials.clear()?;
    println!("👋 Sessão local encerrada.");
    Ok(())
}

pub async fn whoami(ctx: &AppContext) -> Result<()> {
    let service = CurrentUserService::new(ctx.usuarios(), SessionCache::new(SystemClock));
    let user = service.current_user().await?;
    println!("👤 {} <{}>", user.nome, user.email);
    println!("   perfil: {}", user.perfil);
    Ok(())
}
