//! Configuration loading
//!
//! Settings come from an optional file in the user's config directory. CLI
//! flags and environment variables are layered on top by the command handlers
//! (CLI > Env > File > Defaults).

pub mod loader;

pub use loader::{default_config_home, load_config};
