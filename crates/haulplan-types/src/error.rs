//! Error types for haulplan

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid legal limit `{name}`: {value} (must be positive)")]
    InvalidLimit { name: &'static str, value: f64 },

    #[error("Truck catalog is empty")]
    EmptyCatalog,
}

/// Reasons a cargo item is rejected by validation
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("{field} must be positive, got {value}")]
    NonPositiveDimension { field: &'static str, value: f64 },

    #[error("weight must be positive, got {0}")]
    NonPositiveWeight(f64),

    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid cargo item `{id}`: {source}")]
    InvalidItem { id: String, source: ItemError },

    #[error("Invalid load requirements: {0}")]
    InvalidRequirements(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
