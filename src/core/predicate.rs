//! Predicate construction and evaluation
//!
//! A [`Predicate`] is an explicit, serializable value compiled once from a
//! [`FilterSpec`] and then reused unchanged by the paginated retriever and
//! the aggregator. A store adapter can translate the clause list into its
//! native query syntax (pushdown) or evaluate it in-process via
//! [`Predicate::matches`].

use crate::core::filter::FilterSpec;
use crate::core::transaction::Transaction;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The exact-match multi-select dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectField {
    Region,
    Category,
    Status,
    PaymentMethod,
    DeliveryType,
    Gender,
}

impl SelectField {
    /// The record attribute this dimension selects on
    pub fn value_of<'a>(&self, tx: &'a Transaction) -> &'a str {
        match self {
            SelectField::Region => &tx.customer_region,
            SelectField::Category => &tx.product_category,
            SelectField::Status => &tx.order_status,
            SelectField::PaymentMethod => &tx.payment_method,
            SelectField::DeliveryType => &tx.delivery_type,
            SelectField::Gender => &tx.gender,
        }
    }
}

/// One per-dimension filter clause
///
/// Clauses combine with logical AND; values within a clause combine with
/// logical OR.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Clause {
    /// Case-insensitive substring over customer and product names, ORed
    /// with an exact id match when the term parses as an integer. The
    /// term is stored lowercased.
    Search { term: String, id: Option<i64> },

    /// The record's value must be a member of the selected set
    OneOf {
        field: SelectField,
        values: Vec<String>,
    },

    /// The record's joined tag string must contain any selected tag as a
    /// case-insensitive substring. Tags are matched by substring, not set
    /// membership, because the attribute is stored denormalized.
    TagsLikeAny { patterns: Vec<String> },

    /// Inclusive age range; records without an age never match
    AgeRange { min: Option<u32>, max: Option<u32> },

    /// Inclusive timestamp range
    DateRange {
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    },
}

impl Clause {
    /// Evaluate this clause against a single record
    pub fn matches(&self, tx: &Transaction) -> bool {
        match self {
            Clause::Search { term, id } => {
                tx.customer_name.to_lowercase().contains(term.as_str())
                    || tx.product_name.to_lowercase().contains(term.as_str())
                    || id.is_some_and(|id| tx.transaction_id == id)
            }
            Clause::OneOf { field, values } => {
                let actual = field.value_of(tx);
                values.iter().any(|v| v == actual)
            }
            Clause::TagsLikeAny { patterns } => {
                let joined = tx.tags.to_lowercase();
                patterns.iter().any(|p| joined.contains(p.as_str()))
            }
            Clause::AgeRange { min, max } => tx.age.is_some_and(|age| {
                min.is_none_or(|lo| age >= lo) && max.is_none_or(|hi| age <= hi)
            }),
            Clause::DateRange { start, end } => {
                start.is_none_or(|s| tx.date >= s) && end.is_none_or(|e| tx.date <= e)
            }
        }
    }
}

/// A compiled filter predicate: the conjunction of its clauses
///
/// An empty predicate is universal truth and matches every record. The
/// predicate is a pure function of the spec it was built from; evaluation
/// order of clauses is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    /// Compile a normalized filter spec into a predicate
    pub fn from_spec(spec: &FilterSpec) -> Self {
        let mut clauses = Vec::new();

        if let Some(term) = &spec.search {
            clauses.push(Clause::Search {
                term: term.to_lowercase(),
                id: term.parse::<i64>().ok(),
            });
        }

        let selects = [
            (SelectField::Region, &spec.regions),
            (SelectField::Category, &spec.categories),
            (SelectField::Status, &spec.statuses),
            (SelectField::PaymentMethod, &spec.payment_methods),
            (SelectField::DeliveryType, &spec.delivery_types),
            (SelectField::Gender, &spec.genders),
        ];
        for (field, selection) in selects {
            if let Some(values) = selection {
                clauses.push(Clause::OneOf {
                    field,
                    values: values.clone(),
                });
            }
        }

        if let Some(tags) = &spec.tags {
            clauses.push(Clause::TagsLikeAny {
                patterns: tags.iter().map(|t| t.to_lowercase()).collect(),
            });
        }

        if spec.age_min.is_some() || spec.age_max.is_some() {
            clauses.push(Clause::AgeRange {
                min: spec.age_min,
                max: spec.age_max,
            });
        }

        if spec.start_date.is_some() || spec.end_date.is_some() {
            clauses.push(Clause::DateRange {
                start: spec.start_date,
                end: spec.end_date,
            });
        }

        Self { clauses }
    }

    /// True when the predicate restricts nothing
    pub fn is_universal(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The clause list, for store adapters that push the predicate down
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Evaluate the predicate in-process against a single record
    pub fn matches(&self, tx: &Transaction) -> bool {
        self.clauses.iter().all(|clause| clause.matches(tx))
    }
}
