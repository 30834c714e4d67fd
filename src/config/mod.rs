// src/config/mod.rs

//! Configuration loading and validation for named shell commands.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate each command block before any runner is built (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{CommandConfig, ConfigFile, RawConfigFile};
pub use validate::{parse_template, parse_timeout};
