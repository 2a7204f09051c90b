pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod services;

#[cfg(feature = "client")]
pub mod cli;

/// Prefix of environment variables overriding the configuration files.
pub const ENV_PREFIX: &str = "APP";
