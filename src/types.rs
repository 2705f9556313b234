use serde::{Deserialize, Serialize};
use std::fmt;

/// unique identifier for a loan product
pub type ProductId = u64;

/// loan product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    /// small unsecured working-capital loan
    Microloan,
    /// financing against a confirmed purchase order
    PurchaseOrder,
    /// advance against an outstanding invoice
    InvoiceDiscount,
    Custom,
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ProductCategory::Microloan => "microloan",
            ProductCategory::PurchaseOrder => "purchase_order",
            ProductCategory::InvoiceDiscount => "invoice_discount",
            ProductCategory::Custom => "custom",
        };
        f.write_str(tag)
    }
}

/// how a quote turns rate and term into payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotePolicy {
    /// linear interest over the term, total split into ~30-day instalments
    SimpleInterest,
    /// monthly compounding with equal instalments
    Amortized,
}

/// which product bound a request fell outside of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundViolation {
    AmountBelowMinimum,
    AmountAboveMaximum,
    RateBelowMinimum,
    RateAboveMaximum,
    TermBelowMinimum,
    TermAboveMaximum,
}
