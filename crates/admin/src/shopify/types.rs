//! Display-ready order types for the unfulfilled-orders page.
//!
//! These are the flat, defaulted records produced by [`conversions`] from
//! the nested query response, separate from the wire schema in [`queries`].
//!
//! [`conversions`]: super::conversions
//! [`queries`]: super::queries

use serde::Serialize;

/// A flattened order ready for tabular rendering.
///
/// All defaulting has been applied: every field holds a displayable value,
/// and `subtotal` is the reconstructed pre-discount figure.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayOrder {
    /// Full Shopify order GID.
    pub id: String,
    /// Order display name, `"Guest"` when the order carries none.
    pub name: String,
    /// Creation timestamp, ISO 8601 as received.
    pub created_at: String,
    /// Pre-discount subtotal (reported subtotal plus any cart discount).
    pub subtotal: f64,
    /// Customer label, `"<first> <last>"` with per-field defaults.
    pub customer: String,
    /// Customer email, `"N/A"` when none exists.
    pub email: String,
    /// Line items in response order.
    pub items: Vec<DisplayLineItem>,
}

/// A flattened line item.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayLineItem {
    /// Variant display name when present, else the product title.
    pub title: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Per-unit price after line-level discounts.
    pub price: f64,
}
