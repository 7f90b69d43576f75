use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use text_hasher_server::config::{self, Config, DEFAULT_LISTEN, DEFAULT_MAX_BODY_BYTES};
use text_hasher_server::{build_router, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cfg = parse_args()?;

    let listen = env::var("TEXT_HASHER_LISTEN")
        .ok()
        .or_else(|| cfg.server.listen.clone())
        .unwrap_or_else(|| DEFAULT_LISTEN.to_owned());

    let max_body_bytes = env::var("TEXT_HASHER_MAX_BODY_BYTES")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .or(cfg.server.max_body_bytes)
        .unwrap_or(DEFAULT_MAX_BODY_BYTES);

    let addr: SocketAddr = listen
        .parse()
        .with_context(|| format!("invalid listen address: {listen}"))?;
    let app = build_router(AppState { max_body_bytes });

    info!(%addr, max_body_bytes, "starting hash service");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("hash service stopped");
    Ok(())
}

/// Parse CLI args, returning the loaded config.
fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config_path: Option<PathBuf> = None;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                if i >= args.len() {
                    bail!("--config requires a path argument");
                }
                config_path = Some(PathBuf::from(&args[i]));
            }
            other => bail!("unexpected argument: {other}"),
        }
        i += 1;
    }

    match config_path {
        Some(path) => {
            info!(?path, "loading config file");
            config::load_config(&path)
        }
        None => Ok(Config::default()),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
