//! # Stockroom Console Library
//!
//! Everything the `stockroom` binary does, kept in a library so sessions can
//! be driven from tests with in-memory streams.
//!
//! ## Module Organization
//! ```text
//! stockroom_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Environment-driven settings
//! ├── console.rs      ◄─── Token reader + prompt writer
//! ├── menu.rs         ◄─── Menu text and choice parsing
//! ├── session.rs      ◄─── The menu loop, owns the Inventory
//! ├── commands/
//! │   ├── add.rs      ◄─── 1. Add new item
//! │   ├── sell.rs     ◄─── 2. Sell item
//! │   └── list.rs     ◄─── 3. List items
//! └── error.rs        ◄─── Console error type
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{ConsoleConfig, DEFAULT_LOG_FILTER};
use session::Session;

/// Runs the console application on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • STOCKROOM_* environment variables over defaults                   │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, override with STOCKROOM_LOG or RUST_LOG            │
/// │                                                                         │
/// │  3. Run Session ──────────────────────────────────────────────────────► │
/// │     • Empty inventory, menu loop until 4 or end of input                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConsoleConfig::from_env()?;
    init_tracing(&config);

    info!("Starting Stockroom console");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run()?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `STOCKROOM_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_core=info` - Used when STOCKROOM_LOG is unset
/// - Default: WARN level
///
/// Output goes to stderr; stdout carries the prompts.
pub fn init_tracing(config: &ConsoleConfig) {
    let filter = config
        .log_filter
        .as_deref()
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber may already be installed (tests); keep the existing one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
