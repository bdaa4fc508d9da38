//! Core utilities for the NBA shot chart library
//!
//! This module consolidates ambient setup used across the crate:
//! - `config`: environment-driven configuration and fixed limits
//! - `http`: default request headers for the stats service

pub mod config;
pub mod http;

// Re-export commonly used items for convenience
pub use config::{Config, DEFAULT_BASE_URL, DEFAULT_PLAYER_ID, REQUEST_TIMEOUT};
pub use http::stats_header_map;
