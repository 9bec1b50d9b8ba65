#![allow(non_snake_case)]

mod app;
mod components;
mod config;
pub mod context;
mod pages;
mod theme;
mod timer;

#[cfg(feature = "desktop")]
fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = config::cli::Args::parse();
    let startup = args.into_startup()?;

    let title = match &startup.content {
        Ok(portfolio) => format!("{} - Portfolio", portfolio.owner),
        Err(_) => "Portfolio".to_string(),
    };

    tracing::info!(
        theme = %startup.theme,
        section = startup.section.as_deref().unwrap_or("intro"),
        "Starting portfolio window"
    );
    config::install(startup);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(LogicalSize::new(1280.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(not(feature = "desktop"))]
fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let startup = config::Startup::bundled();
    if let Err(ref e) = startup.content {
        tracing::error!("Bundled content is invalid: {}", e);
    }
    config::install(startup);

    tracing::info!("Starting portfolio");
    dioxus::launch(app::App);
}
