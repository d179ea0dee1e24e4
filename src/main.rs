use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use bizcard::card::CardContent;
use bizcard::cli::{Cli, Commands};
use bizcard::config::Config;
use bizcard::export::export_content;
use bizcard::logging::init_tracing;
use bizcard::services::Services;
use bizcard::ui;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.load_config().context("Failed to load config")?;
    tracing::info!(profile = %config.profile.source, "bizcard starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match &cli.command {
        None => ui::runtime::run(config, &runtime),
        Some(Commands::Export { .. }) => runtime.block_on(export(&config)),
        Some(Commands::Shorten { url }) => runtime.block_on(shorten(&config, url.as_deref())),
    }
}

async fn export(config: &Config) -> anyhow::Result<()> {
    let services = Services::from_config(config)?;
    let profile = services
        .profile
        .load()
        .await
        .with_context(|| format!("Failed to load profile from {}", services.profile.source()))?;
    let content = CardContent::new(Arc::new(profile));
    let face_size = (config.card.face_width, config.card.face_height);
    let path = export_content(&services.exporter, &content, config.card.theme, face_size)
        .await
        .context("Export failed")?;
    println!("{}", path.display());
    Ok(())
}

async fn shorten(config: &Config, url: Option<&str>) -> anyhow::Result<()> {
    let services = Services::from_config(config)?;
    let long_url = match url.map(str::to_string).or_else(|| config.card.page_url.clone()) {
        Some(url) => url,
        None => services
            .profile
            .load()
            .await
            .context("No URL given and the profile could not be loaded")?
            .website
            .to_string(),
    };
    let short_url = services
        .shortener
        .shorten(&long_url)
        .await
        .with_context(|| format!("Failed to shorten {long_url}"))?;
    println!("{short_url}");
    Ok(())
}
