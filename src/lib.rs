//! # Pura Search
//!
//! Educational content management and keyword relevance search for
//! Balinese Hindu temples.
//!
//! Articles are stored in SQLite and searched with the smart-search engine
//! from `pura-search-core`: whole-word title/content matching with phrase
//! bonuses and an excerpt framed around the best match.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌───────────────┐   ┌───────────────────┐
//! │   CLI    │──▶│               │──▶│ pura-search-core  │
//! │  (pura)  │   │  SqliteStore  │   │ tokenize → match  │
//! ├──────────┤   │ (ContentStore)│   │ → score → excerpt │
//! │   HTTP   │──▶│               │   │ → rank            │
//! └──────────┘   └───────────────┘   └───────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! pura init
//! pura content add --title "Pura Besakih" --category architecture --content "..."
//! pura search "temple architecture"
//! pura serve
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`logging`] | Tracing subscriber setup |
//! | [`db`] | Database connection |
//! | [`migrate`] | Schema migrations |
//! | [`sqlite_store`] | SQLite `ContentStore` |
//! | [`content`] | Content management commands |
//! | [`search`] | Search entry points |
//! | [`server`] | JSON HTTP server |

pub mod config;
pub mod content;
pub mod db;
pub mod logging;
pub mod migrate;
pub mod search;
pub mod server;
pub mod sqlite_store;
