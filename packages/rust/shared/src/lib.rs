//! Shared types, error model, and configuration for gendercite.
//!
//! This crate is the foundation depended on by all other gendercite crates.
//! It provides:
//! - [`GenderciteError`] — the unified error type
//! - Domain types ([`Gender`], [`GenderGuess`], [`AuthorNames`], [`CitationRecord`])
//! - Configuration ([`AppConfig`], seed table, config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, EndpointsConfig, Seed, config_dir, config_file_path, init_config,
    load_api_key, load_config, load_config_from,
};
pub use error::{GenderciteError, Result};
pub use types::{AuthorNames, CitationRecord, Direction, Gender, GenderGuess};
