//! # Mesa Config
//!
//! Configuration management for Mesa. Configuration is loaded from layered
//! TOML files plus `MESA_`-prefixed environment variables.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
