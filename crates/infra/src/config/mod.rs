//! Configuration loading
//!
//! `DATEVOTE_*` environment variables (after `.env`) take precedence; without
//! them the first `config`/`datevote` JSON or TOML file found is used.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, probe_config_paths, validate};
