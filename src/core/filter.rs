//! Filter normalization: raw query parameters into a typed `FilterSpec`
//!
//! This is the single place where the loosely-typed request parameters are
//! validated. Both the record-listing path and the summary path normalize
//! through here, which is what guarantees a page and its totals describe
//! the same logical set.

use crate::core::error::{ScopeResult, ValidationError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// Raw query parameters as they arrive on the wire
///
/// Every filter value is a plain string; multi-value fields are
/// comma-separated. All parameters are optional.
///
/// # Example
/// ```text
/// GET /api/transactions?region=North,South&tags=organic&ageMin=18&page=2&limit=25
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryParams {
    /// Free-text search over customer name, product name and transaction id
    pub search: Option<String>,
    /// Comma-separated customer regions
    pub region: Option<String>,
    /// Comma-separated product categories
    pub category: Option<String>,
    /// Comma-separated order statuses
    pub status: Option<String>,
    /// Comma-separated payment methods
    pub payment_method: Option<String>,
    /// Comma-separated delivery types
    pub delivery_type: Option<String>,
    /// Comma-separated genders
    pub gender: Option<String>,
    /// Comma-separated tags (substring-matched, see `Predicate`)
    pub tags: Option<String>,
    /// Minimum age, inclusive
    pub age_min: Option<String>,
    /// Maximum age, inclusive
    pub age_max: Option<String>,
    /// Start of the date range, inclusive (RFC 3339 or `YYYY-MM-DD`)
    pub start_date: Option<String>,
    /// End of the date range, inclusive (RFC 3339 or `YYYY-MM-DD`)
    pub end_date: Option<String>,
    /// Sort field name (default "Date")
    pub sort_by: Option<String>,
    /// "asc" or "desc" (default "desc")
    pub sort_order: Option<String>,
    /// Page number, 1-based
    #[serde(default = "default_page")]
    pub page: usize,
    /// Items per page, clamped to [1, 100]
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    10
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: None,
            region: None,
            category: None,
            status: None,
            payment_method: None,
            delivery_type: None,
            gender: None,
            tags: None,
            age_min: None,
            age_max: None,
            start_date: None,
            end_date: None,
            sort_by: None,
            sort_order: None,
            page: default_page(),
            limit: default_limit(),
        }
    }
}

/// Normalized, typed filter criteria
///
/// Absence of a field means "no restriction on this dimension", never
/// "match nothing". Every present set contains only non-empty trimmed
/// strings. Created per request and discarded with the response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub search: Option<String>,
    pub regions: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub statuses: Option<Vec<String>>,
    pub payment_methods: Option<Vec<String>>,
    pub delivery_types: Option<Vec<String>>,
    pub genders: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl FilterSpec {
    /// Normalize raw query parameters into a validated spec
    ///
    /// Pure transform: no side effects, no state. Malformed dates and
    /// non-numeric age bounds are rejected here so the predicate layer
    /// never sees them.
    pub fn from_params(params: &QueryParams) -> ScopeResult<Self> {
        Ok(Self {
            search: params
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            regions: split_csv(params.region.as_deref()),
            categories: split_csv(params.category.as_deref()),
            statuses: split_csv(params.status.as_deref()),
            payment_methods: split_csv(params.payment_method.as_deref()),
            delivery_types: split_csv(params.delivery_type.as_deref()),
            genders: split_csv(params.gender.as_deref()),
            tags: split_csv(params.tags.as_deref()),
            age_min: parse_age("ageMin", params.age_min.as_deref())?,
            age_max: parse_age("ageMax", params.age_max.as_deref())?,
            start_date: parse_date("startDate", params.start_date.as_deref())?,
            end_date: parse_date("endDate", params.end_date.as_deref())?,
        })
    }

    /// True when no dimension restricts the result set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Split a comma-separated value into trimmed, non-empty tokens
///
/// An empty resulting set is treated as "field absent".
fn split_csv(raw: Option<&str>) -> Option<Vec<String>> {
    let values: Vec<String> = raw?
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    if values.is_empty() { None } else { Some(values) }
}

/// Parse an optional age bound
///
/// A missing or blank value leaves that side of the range open; a
/// non-numeric value is a validation error.
fn parse_age(field: &str, raw: Option<&str>) -> ScopeResult<Option<u32>> {
    let Some(trimmed) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| {
            ValidationError::InvalidNumber {
                field: field.to_string(),
                value: trimmed.to_string(),
            }
            .into()
        })
}

/// Parse an optional date bound
///
/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates (interpreted as
/// midnight UTC). Anything else fails the request rather than silently
/// matching everything.
fn parse_date(field: &str, raw: Option<&str>) -> ScopeResult<Option<DateTime<Utc>>> {
    let Some(trimmed) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }

    if let Ok(date) = trimmed.parse::<NaiveDate>() {
        let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
            ValidationError::InvalidDate {
                field: field.to_string(),
                value: trimmed.to_string(),
            }
        })?;
        return Ok(Some(midnight.and_utc()));
    }

    Err(ValidationError::InvalidDate {
        field: field.to_string(),
        value: trimmed.to_string(),
    }
    .into())
}
