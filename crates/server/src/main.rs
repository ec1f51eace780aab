// crates/server/src/main.rs
//! Octolens server binary.
//!
//! Binds the HTTP listener, wires the upstream client and note store into
//! shared state, and serves forever. Startup UX uses eprintln; everything
//! after that goes through tracing.

use std::net::{IpAddr, SocketAddr};

use anyhow::Result;
use clap::Parser;
use octolens_github::{GithubClient, GithubConfig};
use octolens_server::notes::NoteStore;
use octolens_server::{create_app, AppState};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Default port for the server.
const DEFAULT_PORT: u16 = 47311;

#[derive(Debug, Parser)]
#[command(name = "octolens", about = "Developer profile lookup and insight server")]
struct Args {
    /// Port to listen on. Falls back to $OCTOLENS_PORT, then $PORT.
    #[arg(short, long)]
    port: Option<u16>,

    /// Bind address.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,
}

/// Get the server port from the CLI flag, environment, or default.
fn resolve_port(args: &Args) -> u16 {
    args.port
        .or_else(|| {
            std::env::var("OCTOLENS_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
        })
        .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Print banner
    eprintln!("\n\u{1f52d} octolens v{}\n", env!("CARGO_PKG_VERSION"));

    let github = GithubClient::new(GithubConfig::default())?;
    let notes = NoteStore::open(NoteStore::default_path())?;
    let state = AppState::new(github, notes);

    let port = resolve_port(&args);
    let addr = SocketAddr::from((args.host, port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    eprintln!("  \u{2192} http://{addr}\n");
    tracing::info!(%addr, "octolens server listening");

    axum::serve(listener, create_app(state)).await?;

    Ok(())
}
