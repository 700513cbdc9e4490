//! Response shapes: pages, pagination metadata, facets and summaries

use serde::Serialize;

/// Paginated response wrapper
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The records of the requested page window
    pub data: Vec<T>,

    /// Pagination metadata describing the whole matching set
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Total number of matching records across all pages
    pub total_documents: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Requested page number (1-based)
    pub current_page: usize,

    /// Page size in effect
    pub limit: usize,

    /// Whether a later page exists
    pub has_next_page: bool,

    /// Whether an earlier page exists
    pub has_prev_page: bool,
}

impl PaginationMeta {
    /// Compute metadata for a matching set of `total` records
    ///
    /// A zero-match set zeroes everything except the requested page and
    /// limit. A page beyond the last simply has no next page; it never
    /// errors.
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let limit = limit.max(1);
        let total_pages = total.div_ceil(limit);

        Self {
            total_documents: total,
            total_pages,
            current_page: page,
            limit,
            has_next_page: page < total_pages,
            has_prev_page: total > 0 && page > 1,
        }
    }
}

/// Aggregate totals over the entire filtered set
///
/// Computed fresh per query, never cached. An empty match set is all
/// zeros, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Sum of quantities
    pub total_units: u64,

    /// Sum of final amounts
    pub total_amount: f64,

    /// Sum of (total amount − final amount) per record
    pub total_discount: f64,

    /// Number of matching records
    pub total_records: u64,
}

/// Distinct value lists per filterable dimension
///
/// Always computed over the whole dataset, never the current filter, so
/// choice lists stay stable while the user filters. Each list is sorted
/// ascending and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub regions: Vec<String>,
    pub categories: Vec<String>,
    pub statuses: Vec<String>,
    pub payment_methods: Vec<String>,
    pub delivery_types: Vec<String>,
    pub brands: Vec<String>,
    pub tags: Vec<String>,
}

/// Response wrapper for the facet endpoint
#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    pub filters: FilterOptions,
}

/// Response wrapper for the summary endpoint
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: Summary,
}
