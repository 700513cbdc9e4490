//! Core types of the faceted query engine

pub mod error;
pub mod field;
pub mod filter;
pub mod predicate;
pub mod query;
pub mod sort;
pub mod transaction;

pub use error::{ConfigError, ScopeError, ScopeResult, StoreError, ValidationError};
pub use field::FieldValue;
pub use filter::{FilterSpec, QueryParams};
pub use predicate::{Clause, Predicate, SelectField};
pub use query::{FacetsResponse, FilterOptions, PaginatedResponse, PaginationMeta, Summary, SummaryResponse};
pub use sort::{PageSpec, SortKey, SortOrder, SortSpec};
pub use transaction::Transaction;
