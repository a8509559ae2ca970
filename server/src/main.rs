//! Stylist server binary.
//!
//! Configuration comes from environment variables; there are no CLI flags:
//!
//! - `STYLIST_CATALOG`: catalog CSV path (default `assets/clothes.csv`)
//! - `STYLIST_SNAPSHOT`: embedding snapshot path (default next to the catalog)
//! - `STYLIST_ADDR`: listen address (default `127.0.0.1:8080`)
//! - `STYLIST_OLLAMA_URL`: Ollama base URL (default `OLLAMA_HOST` or localhost)
//! - `STYLIST_MODE`: `retrieval` (default) or `full_catalog`

mod web;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stylist_embeddings::OllamaProvider;
use stylist_engine::{ChatClient, PromptMode, Stylist, StylistConfig};

use crate::web::AppState;

fn config_from_env() -> StylistConfig {
    let catalog =
        std::env::var("STYLIST_CATALOG").unwrap_or_else(|_| "assets/clothes.csv".to_string());
    let mut config = StylistConfig::new(catalog);

    if let Ok(snapshot) = std::env::var("STYLIST_SNAPSHOT") {
        config = config.with_snapshot_path(snapshot);
    }
    if let Ok(url) = std::env::var("STYLIST_OLLAMA_URL") {
        config = config.with_ollama_url(url);
    }
    if let Ok(mode) = std::env::var("STYLIST_MODE") {
        config = config.with_prompt_mode(parse_mode(&mode));
    }

    config
}

fn parse_mode(mode: &str) -> PromptMode {
    if mode.eq_ignore_ascii_case("full_catalog") || mode.eq_ignore_ascii_case("full") {
        PromptMode::FullCatalog
    } else {
        PromptMode::Retrieval
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config_from_env();

    let mut provider = OllamaProvider::new().with_model(config.embedding_model.as_str());
    let mut chat = ChatClient::new().with_model(config.chat_model.as_str());
    if let Some(url) = &config.ollama_url {
        provider = provider.with_base_url(url.as_str());
        chat = chat.with_base_url(url.as_str());
    }

    let stylist = Stylist::new(config, provider, chat)
        .await
        .context("failed to initialize stylist")?;
    info!("Loaded {} catalog items", stylist.item_count());

    let state = AppState {
        stylist: Arc::new(stylist),
    };

    let addr: SocketAddr = std::env::var("STYLIST_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()
        .context("invalid STYLIST_ADDR")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Stylist listening on {addr}");

    axum::serve(listener, web::router(state)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("full_catalog"), PromptMode::FullCatalog);
        assert_eq!(parse_mode("FULL"), PromptMode::FullCatalog);
        assert_eq!(parse_mode("retrieval"), PromptMode::Retrieval);
        assert_eq!(parse_mode("anything-else"), PromptMode::Retrieval);
    }
}
