//! # Pura Search Core
//!
//! Shared, WASM-safe logic for Pura Search: content models, the store
//! abstraction, and the keyword relevance-search engine (tokenizer,
//! matcher, scorer, excerpt extractor, orchestrator).
//!
//! This crate contains no tokio, sqlx, filesystem I/O, or other
//! native-only dependencies.

pub mod error;
pub mod excerpt;
pub mod matcher;
pub mod models;
pub mod score;
pub mod search;
pub mod store;
pub mod tokenize;
