//! # Storefront Library
//!
//! Session, commands and shell for the storefront demo.
//! `main.rs` only parses flags and calls [`run`].
//!
//! ## Module Organization
//! ```text
//! storefront/
//! ├── lib.rs              ◄─── You are here (flags, logging, run)
//! ├── shell.rs            ◄─── Line-oriented driver (stdin + timers)
//! ├── state/
//! │   ├── mod.rs          ◄─── State type exports
//! │   ├── session.rs      ◄─── Storefront: one visitor's session
//! │   ├── analytics.rs    ◄─── Data-layer sinks + emitter
//! │   ├── page.rs         ◄─── Surface trait + headless Page
//! │   ├── router.rs       ◄─── View switching
//! │   ├── notification.rs ◄─── "Added to cart" toast state machine
//! │   ├── clock.rs        ◄─── Clock trait (tokio / manual)
//! │   └── config.rs       ◄─── StoreConfig + catalog
//! ├── commands/
//! │   ├── mod.rs          ◄─── UiEvent + dispatch
//! │   ├── navigation.rs   ◄─── navigate, start
//! │   ├── cart.rs         ◄─── add_to_cart, render_cart
//! │   └── checkout.rs     ◄─── checkout
//! └── error.rs            ◄─── AppError
//! ```
//!
//! ## Where Records Go
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  data_layer_enabled = false  or  --no-data-layer                        │
//! │      ──► no sink: events are built, logged at debug, then dropped       │
//! │                                                                         │
//! │  --data-layer-out FILE                                                  │
//! │      ──► JsonLinesSink: one JSON record per line                        │
//! │                                                                         │
//! │  otherwise                                                              │
//! │      ──► SharedDataLayer in memory, printable with `datalayer`          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::AppResult;
use crate::shell::Shell;
use crate::state::{
    DataLayerSink, JsonLinesSink, SharedDataLayer, StoreConfig, Storefront, TokioClock,
};

/// Command-line flags.
#[derive(Debug, Default, Parser)]
#[command(name = "storefront", version, about = "Storefront demo with data-layer analytics")]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Append data-layer records to this file as JSON lines
    #[arg(long, value_name = "FILE", conflicts_with = "no_data_layer")]
    pub data_layer_out: Option<PathBuf>,

    /// Run without a data layer
    #[arg(long)]
    pub no_data_layer: bool,
}

/// Runs one storefront session on stdin/stdout.
///
/// ## Startup Sequence
/// 1. Load config (file, then `STOREFRONT_*` env vars)
/// 2. Validate the catalog
/// 3. Pick the data-layer sink
/// 4. Start the session (home page view) and hand it to the shell
pub async fn run(cli: Cli) -> AppResult<()> {
    let mut config = StoreConfig::load(cli.config.as_deref())?;
    if cli.no_data_layer {
        config.data_layer_enabled = false;
    }

    let catalog = config.products()?;
    info!(
        store = %config.store_name,
        currency = %config.currency_code,
        products = catalog.len(),
        "Starting storefront"
    );

    let (sink, data_layer) = build_sink(&config, cli.data_layer_out.as_deref())?;
    let store = Storefront::with_page(config, sink, Arc::new(TokioClock));
    info!(session_id = %store.session_id(), "Session started");

    let mut shell = Shell::start(store, data_layer);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    shell.run(stdin, &mut stdout).await?;

    info!("Storefront closed");
    Ok(())
}

/// Sink for the session, plus a handle when the records stay in memory.
fn build_sink(
    config: &StoreConfig,
    out: Option<&Path>,
) -> AppResult<(Option<Box<dyn DataLayerSink>>, Option<SharedDataLayer>)> {
    if !config.data_layer_enabled {
        info!("Data layer disabled");
        return Ok((None, None));
    }

    match out {
        Some(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            info!(path = %path.display(), "Writing data layer to file");
            let sink = JsonLinesSink::new(BufWriter::new(file));
            Ok((Some(Box::new(sink)), None))
        }
        None => {
            let data_layer = SharedDataLayer::new();
            Ok((Some(Box::new(data_layer.clone())), Some(data_layer)))
        }
    }
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so they never mix with the shell's page output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Trace for the storefront crates only
/// - Default: `info`, `debug` for the storefront crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["storefront", "--data-layer-out", "dl.jsonl"]);
        assert_eq!(cli.data_layer_out, Some(PathBuf::from("dl.jsonl")));
        assert!(!cli.no_data_layer);

        let cli = Cli::parse_from(["storefront", "--no-data-layer"]);
        assert!(cli.no_data_layer);

        assert!(Cli::try_parse_from(["storefront", "--no-data-layer", "--data-layer-out", "x"])
            .is_err());
    }

    #[test]
    fn test_build_sink_disabled() {
        let config = StoreConfig {
            data_layer_enabled: false,
            ..StoreConfig::default()
        };
        let (sink, handle) = build_sink(&config, None).unwrap();
        assert!(sink.is_none());
        assert!(handle.is_none());
    }

    #[test]
    fn test_build_sink_in_memory_handle_sees_pushes() {
        let (sink, handle) = build_sink(&StoreConfig::default(), None).unwrap();
        let mut sink = sink.unwrap();
        sink.push(serde_json::json!({"event": "x"})).unwrap();
        assert_eq!(handle.unwrap().len(), 1);
    }

    #[test]
    fn test_build_sink_file_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dl.jsonl");

        let (sink, handle) = build_sink(&StoreConfig::default(), Some(&path)).unwrap();
        assert!(handle.is_none());
        let mut sink = sink.unwrap();
        sink.push(serde_json::json!({"event": "a"})).unwrap();
        sink.push(serde_json::json!({"event": "b"})).unwrap();
        drop(sink);

        let mut text = String::new();
        File::open(&path).unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, "{\"event\":\"a\"}\n{\"event\":\"b\"}\n");
    }
}
