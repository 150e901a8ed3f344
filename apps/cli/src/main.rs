//! # Stockroom Console Entry Point
//!
//! ## Usage
//! ```bash
//! cargo run -p stockroom-cli
//!
//! # Verbose store events on stderr
//! STOCKROOM_LOG=debug cargo run -p stockroom-cli
//!
//! # Scripted session
//! printf '1 apple 10 2.50\n2 apple 4\n3\n4\n' | cargo run -p stockroom-cli
//! ```

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    stockroom_cli::run()
}
