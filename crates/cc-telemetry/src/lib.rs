//! Logging setup for the command-center binaries.
//!
//! Wraps `tracing-subscriber` so every entry point configures output the same
//! way: `RUST_LOG` wins, otherwise the configured default level applies, and
//! output is either human-readable or JSON lines.

pub mod logging;

pub use logging::{init, LogOutput};
