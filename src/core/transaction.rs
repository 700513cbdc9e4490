//! The transaction record and its field access helpers

use crate::core::field::FieldValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single sales transaction
///
/// Field names mirror the source dataset's JSON keys so records can be
/// loaded and served without a mapping layer. Records are immutable from
/// the engine's perspective: the store owns them, queries only read them.
///
/// Invariants: `final_amount <= total_amount` and `quantity >= 0`. The
/// loader warns about records violating the amount invariant but does not
/// reject them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    // Transaction info
    #[serde(rename = "TransactionID")]
    pub transaction_id: i64,
    #[serde(rename = "Date")]
    pub date: DateTime<Utc>,

    // Customer info
    #[serde(rename = "CustomerID", default)]
    pub customer_id: String,
    #[serde(rename = "CustomerName")]
    pub customer_name: String,
    #[serde(rename = "PhoneNumber", default)]
    pub phone_number: String,
    #[serde(rename = "Gender", default)]
    pub gender: String,
    #[serde(rename = "Age", default)]
    pub age: Option<u32>,
    #[serde(rename = "CustomerRegion")]
    pub customer_region: String,
    #[serde(rename = "CustomerType", default)]
    pub customer_type: String,

    // Product info
    #[serde(rename = "ProductID", default)]
    pub product_id: String,
    #[serde(rename = "ProductName")]
    pub product_name: String,
    #[serde(rename = "Brand", default)]
    pub brand: String,
    #[serde(rename = "ProductCategory")]
    pub product_category: String,
    /// Comma-joined list of tags, stored denormalized
    #[serde(rename = "Tags", default)]
    pub tags: String,

    // Order info
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    #[serde(rename = "PricePerUnit", default)]
    pub price_per_unit: f64,
    #[serde(rename = "DiscountPercentage", default)]
    pub discount_percentage: f64,
    #[serde(rename = "TotalAmount")]
    pub total_amount: f64,
    #[serde(rename = "FinalAmount")]
    pub final_amount: f64,

    // Payment & delivery
    #[serde(rename = "PaymentMethod")]
    pub payment_method: String,
    #[serde(rename = "OrderStatus")]
    pub order_status: String,
    #[serde(rename = "DeliveryType", default)]
    pub delivery_type: String,

    // Store info
    #[serde(rename = "StoreID", default)]
    pub store_id: String,
    #[serde(rename = "StoreLocation", default)]
    pub store_location: String,
    #[serde(rename = "SalespersonID", default)]
    pub salesperson_id: String,
    #[serde(rename = "EmployeeName", default)]
    pub employee_name: String,
}

impl Transaction {
    /// The discount granted on this transaction
    pub fn discount(&self) -> f64 {
        self.total_amount - self.final_amount
    }

    /// Iterate the individual tag tokens of the denormalized tag string
    ///
    /// Tokens are trimmed; empty tokens are skipped.
    pub fn tag_tokens(&self) -> impl Iterator<Item = &str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    /// Resolve a source field name to a comparable value
    ///
    /// Used as the fallback sort path when the requested sort field is not
    /// in the whitelist. Unknown names return `None`, which sorts by the
    /// store's natural order.
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "TransactionID" => FieldValue::Integer(self.transaction_id),
            "Date" => FieldValue::DateTime(self.date),
            "CustomerID" => FieldValue::String(self.customer_id.clone()),
            "CustomerName" => FieldValue::String(self.customer_name.clone()),
            "PhoneNumber" => FieldValue::String(self.phone_number.clone()),
            "Gender" => FieldValue::String(self.gender.clone()),
            "Age" => FieldValue::Integer(i64::from(self.age?)),
            "CustomerRegion" => FieldValue::String(self.customer_region.clone()),
            "CustomerType" => FieldValue::String(self.customer_type.clone()),
            "ProductID" => FieldValue::String(self.product_id.clone()),
            "ProductName" => FieldValue::String(self.product_name.clone()),
            "Brand" => FieldValue::String(self.brand.clone()),
            "ProductCategory" => FieldValue::String(self.product_category.clone()),
            "Tags" => FieldValue::String(self.tags.clone()),
            "Quantity" => FieldValue::Integer(i64::from(self.quantity)),
            "PricePerUnit" => FieldValue::Float(self.price_per_unit),
            "DiscountPercentage" => FieldValue::Float(self.discount_percentage),
            "TotalAmount" => FieldValue::Float(self.total_amount),
            "FinalAmount" => FieldValue::Float(self.final_amount),
            "PaymentMethod" => FieldValue::String(self.payment_method.clone()),
            "OrderStatus" => FieldValue::String(self.order_status.clone()),
            "DeliveryType" => FieldValue::String(self.delivery_type.clone()),
            "StoreID" => FieldValue::String(self.store_id.clone()),
            "StoreLocation" => FieldValue::String(self.store_location.clone()),
            "SalespersonID" => FieldValue::String(self.salesperson_id.clone()),
            "EmployeeName" => FieldValue::String(self.employee_name.clone()),
            _ => return None,
        };
        Some(value)
    }
}
