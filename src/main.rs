//! `ghmcp`: thin binary entry point for the MCP server (spec §1, §4.M).
//! Builds the tool registry (`ghmcp-tools`), wraps it in an axum router
//! (`ghmcp::http`), and serves it. Delegates everything routable to
//! `src/lib.rs` so integration tests can build the same router without a
//! real process, matching the teacher's thin-binary convention
//! (`vinhnx-VTCode`'s `src/main.rs`).

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use ghmcp::http::build_router;
use ghmcp::AppState;
use ghmcp_config::ServerConfig;
use ghmcp_tools::{build_registry, ToolDeps, WriteGate};

/// MCP server exposing gated GitHub/workspace tools to LLM-driven assistants.
#[derive(Debug, Parser)]
#[command(name = "ghmcp", version, about)]
struct Args {
    /// Address to bind the HTTP transport adapter to.
    #[arg(long, default_value = "127.0.0.1:8787", env = "GHMCP_BIND_ADDR")]
    bind: SocketAddr,
}

fn main() -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build Tokio runtime")?;
    runtime.block_on(run())
}

async fn run() -> Result<()> {
    init_tracing();

    // Dev convenience only: never used to read the server's own secrets at
    // runtime (spec §6 Non-goals: "storing secrets at rest"). Silently
    // ignored when no `.env` file is present.
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let config = Arc::new(ServerConfig::from_env().context("loading server configuration")?);
    let gate = WriteGate::new(config.write_allowed);
    let deps = ToolDeps::new(config.clone());
    let registry = build_registry(deps, gate);
    let state = Arc::new(AppState::new(registry, config));

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    tracing::info!(addr = %args.bind, "ghmcp listening");
    axum::serve(listener, router).await.context("serving HTTP")?;
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
