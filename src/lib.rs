//! # Salescope
//!
//! A faceted query engine and REST API for browsing large sales
//! transaction datasets.
//!
//! ## Features
//!
//! - **Combinable Filters**: multi-select dimensions, numeric and date
//!   ranges, substring tag matching, mixed-type free-text search
//! - **One Predicate, Three Answers**: the record page, the facet lists
//!   and the aggregate summary stay mutually consistent because the page
//!   and summary paths share one normalized `FilterSpec` and one compiled
//!   `Predicate`
//! - **Whole-Set Aggregates**: totals describe the entire filtered set,
//!   not just the visible page, without materializing the set
//! - **Stable Facets**: choice lists always reflect the whole dataset so
//!   they never shrink as the user filters
//! - **Pluggable Storage**: a small async store trait with an in-memory
//!   backend; predicates are explicit values a backend can push down
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use salescope::prelude::*;
//!
//! let transactions = load_transactions("data/transactions.json")?;
//! let store = InMemoryTransactionStore::new(transactions);
//! let engine = Arc::new(QueryEngine::new(Arc::new(store)));
//!
//! let app = build_router(engine);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core types ===
    pub use crate::core::{
        error::{ScopeError, ScopeResult, StoreError, ValidationError},
        filter::{FilterSpec, QueryParams},
        predicate::Predicate,
        query::{FilterOptions, PaginatedResponse, PaginationMeta, Summary},
        sort::{PageSpec, SortKey, SortOrder, SortSpec},
        transaction::Transaction,
    };

    // === Engine ===
    pub use crate::engine::QueryEngine;

    // === Storage ===
    pub use crate::storage::{
        FacetField, InMemoryTransactionStore, TransactionStore, load_transactions,
    };

    // === Config ===
    pub use crate::config::ServiceConfig;

    // === Server ===
    pub use crate::server::{AppState, build_router};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
}
