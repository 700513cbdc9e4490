//! Storage collaborator interface and backends
//!
//! The engine consumes four read-only primitives from its store: a count,
//! a sorted page scan, a per-dimension distinct-values scan, and a grouped
//! aggregation. All of them take the compiled [`Predicate`] so a backend
//! can push it down into its native query layer or fall back to in-process
//! evaluation.

pub mod in_memory;
pub mod loader;

use crate::core::error::ScopeResult;
use crate::core::predicate::Predicate;
use crate::core::query::Summary;
use crate::core::sort::SortSpec;
use crate::core::transaction::Transaction;
use async_trait::async_trait;

pub use in_memory::InMemoryTransactionStore;
pub use loader::load_transactions;

/// The filterable dimensions the facet resolver asks distinct values for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetField {
    Region,
    Category,
    Status,
    PaymentMethod,
    DeliveryType,
    Brand,
    /// Denormalized: each record's comma-joined tag string is union-split
    /// into individual tokens before deduplication
    Tags,
}

/// Read-only query primitives over the transaction dataset
///
/// Implementations never mutate records; the dataset is immutable for the
/// duration of any request. The store's own concurrency control is opaque
/// to the engine.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Count the records matching the predicate
    async fn count(&self, predicate: &Predicate) -> ScopeResult<usize>;

    /// Return the window `[skip, skip + limit)` of the matching set,
    /// ordered by `sort` with ties broken by store natural order
    async fn find_page(
        &self,
        predicate: &Predicate,
        sort: &SortSpec,
        skip: usize,
        limit: usize,
    ) -> ScopeResult<Vec<Transaction>>;

    /// Distinct non-empty values of one dimension over the whole dataset,
    /// sorted ascending
    async fn distinct(&self, field: FacetField) -> ScopeResult<Vec<String>>;

    /// Aggregate totals over the entire matching set
    async fn summarize(&self, predicate: &Predicate) -> ScopeResult<Summary>;
}
