//! The faceted query engine
//!
//! One [`QueryEngine`] serves three query paths over the same store: a
//! sorted page of matching records, the distinct value lists per
//! filterable dimension, and aggregate totals over the entire matching
//! set. The page and summary paths compile the *same* predicate from the
//! same normalized spec, which keeps the visible page and the displayed
//! totals describing exactly the same logical set.
//!
//! The engine holds no per-request state; every query builds its own spec
//! and predicate and discards them with the response.

use crate::core::error::ScopeResult;
use crate::core::filter::FilterSpec;
use crate::core::predicate::Predicate;
use crate::core::query::{FilterOptions, PaginatedResponse, PaginationMeta, Summary};
use crate::core::sort::{PageSpec, SortSpec};
use crate::core::transaction::Transaction;
use crate::storage::{FacetField, TransactionStore};
use std::sync::Arc;

/// Stateless query engine over a transaction store
#[derive(Clone)]
pub struct QueryEngine {
    store: Arc<dyn TransactionStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<dyn TransactionStore>) -> Self {
        Self { store }
    }

    /// Fetch one page of the filtered, sorted matching set
    ///
    /// Counts first; a zero-match set returns an empty page with zeroed
    /// metadata without scanning. A page beyond the last returns an empty
    /// slice rather than erroring.
    pub async fn fetch_page(
        &self,
        spec: &FilterSpec,
        sort: &SortSpec,
        page: &PageSpec,
    ) -> ScopeResult<PaginatedResponse<Transaction>> {
        let predicate = Predicate::from_spec(spec);

        let total = self.store.count(&predicate).await?;
        if total == 0 {
            return Ok(PaginatedResponse {
                data: Vec::new(),
                pagination: PaginationMeta::new(page.page(), page.limit(), 0),
            });
        }

        let pagination = PaginationMeta::new(page.page(), page.limit(), total);
        let data = if page.skip() >= total {
            Vec::new()
        } else {
            self.store
                .find_page(&predicate, sort, page.skip(), page.limit())
                .await?
        };

        Ok(PaginatedResponse { data, pagination })
    }

    /// Resolve the distinct value lists for every filterable dimension
    ///
    /// Deliberately independent of any active filter so choice lists never
    /// shrink as the user narrows a query. The per-dimension scans are
    /// issued concurrently and joined.
    pub async fn filter_options(&self) -> ScopeResult<FilterOptions> {
        let (regions, categories, statuses, payment_methods, delivery_types, brands, tags) =
            futures::try_join!(
                self.store.distinct(FacetField::Region),
                self.store.distinct(FacetField::Category),
                self.store.distinct(FacetField::Status),
                self.store.distinct(FacetField::PaymentMethod),
                self.store.distinct(FacetField::DeliveryType),
                self.store.distinct(FacetField::Brand),
                self.store.distinct(FacetField::Tags),
            )?;

        Ok(FilterOptions {
            regions,
            categories,
            statuses,
            payment_methods,
            delivery_types,
            brands,
            tags,
        })
    }

    /// Aggregate totals over the entire matching set
    ///
    /// Uses the identical predicate semantics as [`Self::fetch_page`],
    /// independent of any page window.
    pub async fn summarize(&self, spec: &FilterSpec) -> ScopeResult<Summary> {
        let predicate = Predicate::from_spec(spec);
        self.store.summarize(&predicate).await
    }
}
