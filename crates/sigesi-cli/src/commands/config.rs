//! Client configuration commands.

use anyhow::Result;
use sigesi_infrastructure::{ClientConfig, ConfigStore, API_BASE_ENV};

pub fn show() -> Result<()> {
    let config = ConfigStore::new()?.load()?;
    println!("api_base = {}", config.api_base);
    if std::env::var(API_BASE_ENV).is_ok() {
        println!("(overridden by {})", API_BASE_ENV);
    }
    Ok(())
}

pub fn set_base(url: &str) -> Result<()> {
    let store = ConfigStore::new()?;
    store.save(&ClientConfig {
        api_base: url.trim_end_matches('/').to_string(),
    })?;
    println!("✅ Backend configurado: {}", url.trim_end_matches('/'));
    Ok(())
}
