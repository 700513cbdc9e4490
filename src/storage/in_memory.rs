//! In-memory implementation of `TransactionStore`
//!
//! Holds the whole dataset as an immutable shared slice and evaluates the
//! predicate in-process. Suitable for datasets that fit in memory; the
//! aggregation path streams over matches without materializing them.

use crate::core::error::ScopeResult;
use crate::core::predicate::Predicate;
use crate::core::query::Summary;
use crate::core::sort::{SortOrder, SortSpec};
use crate::core::transaction::Transaction;
use crate::storage::{FacetField, TransactionStore};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::Arc;

/// In-memory transaction store
///
/// Cloning is cheap; all clones share the same immutable dataset.
#[derive(Clone)]
pub struct InMemoryTransactionStore {
    transactions: Arc<[Transaction]>,
}

impl InMemoryTransactionStore {
    /// Create a store over a loaded dataset
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: transactions.into(),
        }
    }

    /// Number of records in the dataset
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn matching<'a>(&'a self, predicate: &'a Predicate) -> impl Iterator<Item = &'a Transaction> {
        self.transactions.iter().filter(|tx| predicate.matches(tx))
    }
}

/// Comparator under a sort spec
///
/// Records missing the sort attribute (and mixed-type raw fallbacks)
/// compare equal, so the stable sort preserves store order for them.
fn compare(a: &Transaction, b: &Transaction, sort: &SortSpec) -> Ordering {
    let ordering = match (sort.key.value(a), sort.key.value(b)) {
        (Some(left), Some(right)) => left.compare(&right),
        _ => Ordering::Equal,
    };
    match sort.order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn count(&self, predicate: &Predicate) -> ScopeResult<usize> {
        Ok(self.matching(predicate).count())
    }

    async fn find_page(
        &self,
        predicate: &Predicate,
        sort: &SortSpec,
        skip: usize,
        limit: usize,
    ) -> ScopeResult<Vec<Transaction>> {
        let mut matches: Vec<&Transaction> = self.matching(predicate).collect();
        // sort_by is stable: ties keep store order, no secondary key imposed
        matches.sort_by(|a, b| compare(a, b, sort));

        Ok(matches
            .into_iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn distinct(&self, field: FacetField) -> ScopeResult<Vec<String>> {
        let mut values = BTreeSet::new();

        for tx in self.transactions.iter() {
            match field {
                FacetField::Region => insert_non_empty(&mut values, &tx.customer_region),
                FacetField::Category => insert_non_empty(&mut values, &tx.product_category),
                FacetField::Status => insert_non_empty(&mut values, &tx.order_status),
                FacetField::PaymentMethod => insert_non_empty(&mut values, &tx.payment_method),
                FacetField::DeliveryType => insert_non_empty(&mut values, &tx.delivery_type),
                FacetField::Brand => insert_non_empty(&mut values, &tx.brand),
                FacetField::Tags => {
                    for token in tx.tag_tokens() {
                        values.insert(token.to_string());
                    }
                }
            }
        }

        Ok(values.into_iter().collect())
    }

    async fn summarize(&self, predicate: &Predicate) -> ScopeResult<Summary> {
        let mut summary = Summary::default();

        for tx in self.matching(predicate) {
            summary.total_units += u64::from(tx.quantity);
            summary.total_amount += tx.final_amount;
            summary.total_discount += tx.discount();
            summary.total_records += 1;
        }

        Ok(summary)
    }
}

fn insert_non_empty(values: &mut BTreeSet<String>, value: &str) {
    if !value.is_empty() {
        values.insert(value.to_string());
    }
}
