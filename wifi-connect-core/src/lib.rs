//! Core library for the WiFi connect UI controller.
//! This crate models the connect page (network dropdown, credential inputs,
//! status panels), the controller that reacts to user events, and the
//! runtime that executes its network I/O against a provisioning backend.

pub mod api;
pub mod config;
pub mod controller;
pub mod labels;
pub mod page;
pub mod request;
pub mod runtime;
pub mod structs;
pub mod traits;

// Define a shared Error and Result type for the entire crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

/// A specialized `Result` type for this crate's operations.
pub type Result<T> = std::result::Result<T, Error>;
