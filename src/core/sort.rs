//! Sort and page specifications

use crate::core::field::FieldValue;
use crate::core::transaction::Transaction;

/// Maximum page size accepted from a request
pub const MAX_PAGE_SIZE: usize = 100;

/// A sortable attribute resolved from the request's `sortBy` name
///
/// Friendly names are mapped through a fixed whitelist; anything else
/// falls back to the raw name, resolved against the record's source field
/// names at sort time. An unresolvable raw name leaves the store's
/// natural order untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey {
    Date,
    FinalAmount,
    TotalAmount,
    CustomerName,
    ProductName,
    Category,
    Status,
    Region,
    PaymentMethod,
    TransactionId,
    /// Unmapped field name, matched against raw record field names
    Other(String),
}

impl SortKey {
    /// Resolve a requested sort field name
    pub fn resolve(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "date" => SortKey::Date,
            "amount" | "finalamount" => SortKey::FinalAmount,
            "totalamount" => SortKey::TotalAmount,
            "name" | "customername" => SortKey::CustomerName,
            "productname" => SortKey::ProductName,
            "category" | "productcategory" => SortKey::Category,
            "status" | "orderstatus" => SortKey::Status,
            "region" | "customerregion" => SortKey::Region,
            "paymentmethod" => SortKey::PaymentMethod,
            "transactionid" => SortKey::TransactionId,
            _ => SortKey::Other(name.to_string()),
        }
    }

    /// The sortable value of a record under this key
    pub fn value(&self, tx: &Transaction) -> Option<FieldValue> {
        match self {
            SortKey::Date => Some(FieldValue::DateTime(tx.date)),
            SortKey::FinalAmount => Some(FieldValue::Float(tx.final_amount)),
            SortKey::TotalAmount => Some(FieldValue::Float(tx.total_amount)),
            SortKey::CustomerName => Some(FieldValue::String(tx.customer_name.clone())),
            SortKey::ProductName => Some(FieldValue::String(tx.product_name.clone())),
            SortKey::Category => Some(FieldValue::String(tx.product_category.clone())),
            SortKey::Status => Some(FieldValue::String(tx.order_status.clone())),
            SortKey::Region => Some(FieldValue::String(tx.customer_region.clone())),
            SortKey::PaymentMethod => Some(FieldValue::String(tx.payment_method.clone())),
            SortKey::TransactionId => Some(FieldValue::Integer(tx.transaction_id)),
            SortKey::Other(name) => tx.field(name),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Sort field plus direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Date,
            order: SortOrder::Desc,
        }
    }
}

impl SortSpec {
    /// Build a sort spec from raw request parameters
    ///
    /// Defaults to `Date` descending. Any `sortOrder` value other than
    /// "asc" sorts descending.
    pub fn from_params(sort_by: Option<&str>, sort_order: Option<&str>) -> Self {
        let key = sort_by.map_or(SortKey::Date, SortKey::resolve);
        let order = match sort_order {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        };
        Self { key, order }
    }
}

/// Requested page window: 1-based page number plus page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    page: usize,
    limit: usize,
}

impl PageSpec {
    pub fn new(page: usize, limit: usize) -> Self {
        Self { page, limit }
    }

    /// Page number, ensuring a minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Page size, clamped to [1, MAX_PAGE_SIZE]
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }

    /// Records to skip before the window starts
    pub fn skip(&self) -> usize {
        (self.page() - 1) * self.limit()
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}
