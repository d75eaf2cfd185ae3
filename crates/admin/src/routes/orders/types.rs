//! Type definitions and conversions for order table rows.

use chrono::DateTime;

use crate::shopify::types::{DisplayLineItem, DisplayOrder};

/// Platform prefix carried by Shopify order GIDs on the wire.
pub const ORDER_GID_PREFIX: &str = "gid://shopify/Order/";

/// Suffix Shopify appends to variant display names of single-variant products.
const DEFAULT_VARIANT_SUFFIX: &str = " - Default Title";

/// Placeholder for a row cell with nothing to show.
const EMPTY_CELL: &str = "—";

/// One fully formatted table row: seven cells plus the short ID the edit
/// link navigates with.
#[derive(Debug, Clone)]
pub struct OrderRowView {
    /// Numeric ID for the edit-order URL (GID prefix stripped).
    pub short_id: String,
    /// Order name (e.g., "#1001").
    pub name: String,
    /// Customer display label.
    pub customer: String,
    /// Customer email.
    pub email: String,
    /// Creation date, human formatted.
    pub created_at: String,
    /// Summary of the first line item only.
    pub first_item: String,
    /// Subtotal formatted to two decimal places.
    pub subtotal: String,
}

impl From<&DisplayOrder> for OrderRowView {
    fn from(order: &DisplayOrder) -> Self {
        Self {
            short_id: short_order_id(&order.id).to_string(),
            name: order.name.clone(),
            customer: order.customer.clone(),
            email: order.email.clone(),
            created_at: format_created_at(&order.created_at),
            first_item: first_item_summary(&order.items),
            subtotal: format_price(order.subtotal),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Strip the platform prefix from a Shopify order GID.
///
/// Returns the input unchanged when the prefix is absent.
#[must_use]
pub fn short_order_id(gid: &str) -> &str {
    gid.strip_prefix(ORDER_GID_PREFIX).unwrap_or(gid)
}

/// Format an amount as a price string.
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Human-format an ISO 8601 timestamp, passing the raw value through when it
/// does not parse.
fn format_created_at(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw).map_or_else(
        |_| raw.to_string(),
        |created| created.format("%b %-d, %Y %-I:%M %p").to_string(),
    )
}

/// Summarize only the first line item, a deliberate simplification of this
/// table. Orders with multiple items still show a single summary cell.
fn first_item_summary(items: &[DisplayLineItem]) -> String {
    items.first().map_or_else(
        || EMPTY_CELL.to_string(),
        |item| {
            let title = item.title.replace(DEFAULT_VARIANT_SUFFIX, "");
            format!("{} x {} @ {}", item.quantity, title, format_price(item.price))
        },
    )
}
