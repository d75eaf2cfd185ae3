//! GraphQL query and response schema for the unfulfilled-orders page.
//!
//! The response types below are an explicit wire schema for the one query
//! this page issues, deserialized by serde at the client boundary. Field
//! access never reaches through untyped JSON, so a change to the query
//! string fails loudly here instead of silently downstream.

use serde::Deserialize;

/// Number of orders requested per page.
pub const ORDER_PAGE_SIZE: i64 = 10;

/// Number of line items requested per order.
pub const LINE_ITEM_PAGE_SIZE: i64 = 5;

/// Query for unfulfilled orders with the fields the orders table needs.
///
/// Amounts are requested in presentment currency; the reported subtotal is
/// net of cart discounts.
pub const UNFULFILLED_ORDERS: &str = r#"
query UnfulfilledOrders($first: Int!, $lineItemCount: Int!) {
    orders(first: $first, query: "fulfillment_status:unfulfilled") {
        edges {
            node {
                id
                name
                createdAt
                cartDiscountAmountSet {
                    presentmentMoney {
                        amount
                    }
                }
                currentSubtotalPriceSet {
                    presentmentMoney {
                        amount
                    }
                }
                customer {
                    firstName
                    lastName
                    email
                }
                lineItems(first: $lineItemCount) {
                    edges {
                        node {
                            title
                            quantity
                            variant {
                                displayName
                            }
                            discountedUnitPriceSet {
                                presentmentMoney {
                                    amount
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
"#;

// =============================================================================
// Response schema
// =============================================================================

/// Top-level `data` payload of the unfulfilled-orders query.
#[derive(Debug, Clone, Deserialize)]
pub struct UnfulfilledOrdersData {
    /// The order connection.
    pub orders: OrderConnection,
}

/// Relay-style connection of orders.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderConnection {
    /// Connection edges, in response order.
    #[serde(default)]
    pub edges: Vec<OrderEdge>,
}

/// A single order edge.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderEdge {
    /// The order node.
    pub node: OrderNode,
}

/// One order as returned by the query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderNode {
    /// Shopify order GID (e.g. `gid://shopify/Order/123`).
    pub id: String,
    /// Order display name (e.g. `#1001`).
    #[serde(default)]
    pub name: Option<String>,
    /// Creation timestamp, ISO 8601.
    pub created_at: String,
    /// Cart-level discount applied to the order, if any.
    #[serde(default)]
    pub cart_discount_amount_set: Option<MoneySet>,
    /// Subtotal as reported by Shopify, net of discounts.
    pub current_subtotal_price_set: MoneySet,
    /// The customer who placed the order, if known.
    #[serde(default)]
    pub customer: Option<CustomerNode>,
    /// Line items on the order.
    pub line_items: LineItemConnection,
}

/// A monetary amount in the store's presentment currency.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneySet {
    /// The presentment-currency amount.
    pub presentment_money: Money,
}

/// Decimal amount as string (precision preserved on the wire).
#[derive(Debug, Clone, Deserialize)]
pub struct Money {
    /// Decimal amount, e.g. `"100.00"`.
    pub amount: String,
}

/// Customer fields requested for the orders table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerNode {
    /// Customer first name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Customer last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Customer email address.
    #[serde(default)]
    pub email: Option<String>,
}

/// Relay-style connection of line items.
#[derive(Debug, Clone, Deserialize)]
pub struct LineItemConnection {
    /// Connection edges, in response order.
    #[serde(default)]
    pub edges: Vec<LineItemEdge>,
}

/// A single line item edge.
#[derive(Debug, Clone, Deserialize)]
pub struct LineItemEdge {
    /// The line item node.
    pub node: LineItemNode,
}

/// One line item as returned by the query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemNode {
    /// Product title.
    pub title: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// The purchased variant, if it still exists.
    #[serde(default)]
    pub variant: Option<VariantNode>,
    /// Per-unit price after line-level discounts.
    pub discounted_unit_price_set: MoneySet,
}

/// Variant fields requested for the orders table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantNode {
    /// Variant display name (e.g. `T-Shirt - Large - Red`).
    pub display_name: String,
}
