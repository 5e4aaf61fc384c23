//! HTTP search proxy over the DuckDuckGo Instant Answer API.
//!
//! Forwards queries upstream, flattens the nested `RelatedTopics` tree into a
//! flat result list, paginates it, and keeps an append-only log of past
//! queries served back as search history.
mod history;
mod search;
mod server;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use dotenv::dotenv;
use history::SearchHistoryLog;
use search::{DuckDuckGoClient, SearchService};
use server::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
    bind_addr: SocketAddr,

    /// Base URL of the DuckDuckGo Instant Answer API
    #[arg(
        long,
        env = "DUCKDUCKGO_API_BASE_URL",
        default_value = "https://api.duckduckgo.com"
    )]
    upstream_url: String,

    /// Path of the append-only search history log file
    #[arg(long, env = "SEARCH_HISTORY_FILE", default_value = "search_queries.log")]
    history_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();

    let state = AppState {
        search: SearchService::new(DuckDuckGoClient::new(args.upstream_url)),
        history: SearchHistoryLog::new(args.history_file),
    };
    let app = server::create_router(state);

    let listener = tokio::net::TcpListener::bind(args.bind_addr).await?;
    log::info!("🚀 ducksearch API running on {}", args.bind_addr);

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            log::info!("Shutdown signal received");
        }
    }

    Ok(())
}
