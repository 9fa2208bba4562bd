//! Core components of the `dbn-hist` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`HistClient`] and its builder.
//! - The primary [`HistError`] type.
//! - Shared data models like [`DateRange`] and [`FeedMode`].
//! - The request helpers every endpoint goes through.

/// The main client (`HistClient`), builder, and configuration.
pub mod client;
/// The primary error type (`HistError`) for the crate.
pub mod error;
/// Shared data models used across multiple API modules.
pub mod models;
/// The `HistoricalService` trait over the whole API.
pub mod services;
pub(crate) mod wire;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::HistClient`
pub use client::{HistClient, HistClientBuilder};
pub use error::{HistError, RequestError};
pub use models::{ALL_SYMBOLS, DateRange, FeedMode};
pub use services::HistoricalService;
