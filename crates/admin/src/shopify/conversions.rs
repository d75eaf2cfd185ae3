//! Order normalization: nested query response nodes to flat display records.
//!
//! This is a pure, single-pass transform. Every input order yields exactly
//! one output order and every line item is carried through in response
//! order; nothing is dropped, merged, or re-sorted.

use tracing::warn;

use super::queries::{CustomerNode, LineItemNode, OrderNode};
use super::types::{DisplayLineItem, DisplayOrder};

/// Fallback for a missing order name or customer first name.
const GUEST_LABEL: &str = "Guest";

/// Fallback shown when no customer email exists.
const MISSING_EMAIL_LABEL: &str = "N/A";

/// Flatten a page of order nodes into display records.
#[must_use]
pub fn normalize(orders: Vec<OrderNode>) -> Vec<DisplayOrder> {
    orders.into_iter().map(normalize_order).collect()
}

fn normalize_order(order: OrderNode) -> DisplayOrder {
    let reported =
        parse_amount(&order.current_subtotal_price_set.presentment_money.amount).unwrap_or_else(
            || {
                warn!(order_id = %order.id, "order subtotal is not a number, substituting 0");
                0.0
            },
        );

    // Shopify reports the subtotal net of cart discounts; add the discount
    // back to recover the pre-discount figure. An absent or non-numeric
    // discount contributes nothing.
    let discount = order
        .cart_discount_amount_set
        .as_ref()
        .and_then(|set| parse_amount(&set.presentment_money.amount))
        .unwrap_or(0.0);

    let customer = customer_label(order.customer.as_ref());
    let email = customer_email(order.customer.as_ref());

    DisplayOrder {
        id: order.id,
        name: order.name.unwrap_or_else(|| GUEST_LABEL.to_string()),
        created_at: order.created_at,
        subtotal: reported + discount,
        customer,
        email,
        items: order
            .line_items
            .edges
            .into_iter()
            .map(|edge| normalize_line_item(edge.node))
            .collect(),
    }
}

fn normalize_line_item(item: LineItemNode) -> DisplayLineItem {
    let LineItemNode {
        title,
        quantity,
        variant,
        discounted_unit_price_set,
    } = item;

    DisplayLineItem {
        title: variant.map_or(title, |v| v.display_name),
        quantity,
        price: parse_amount(&discounted_unit_price_set.presentment_money.amount).unwrap_or(0.0),
    }
}

/// Customer label with per-field defaults: a missing first name becomes
/// `"Guest"`, a missing last name becomes the empty string. The trailing
/// space for a missing last name is tolerated downstream.
fn customer_label(customer: Option<&CustomerNode>) -> String {
    let first = customer
        .and_then(|c| c.first_name.as_deref())
        .unwrap_or(GUEST_LABEL);
    let last = customer.and_then(|c| c.last_name.as_deref()).unwrap_or("");
    format!("{first} {last}")
}

fn customer_email(customer: Option<&CustomerNode>) -> String {
    customer
        .and_then(|c| c.email.clone())
        .unwrap_or_else(|| MISSING_EMAIL_LABEL.to_string())
}

/// Parse a wire decimal into a finite number.
///
/// `"NaN"` and infinities parse in Rust but are rejected here: a
/// non-finite amount must count as unparseable, not poison the subtotal.
fn parse_amount(amount: &str) -> Option<f64> {
    amount.trim().parse::<f64>().ok().filter(|a| a.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shopify::queries::{LineItemConnection, LineItemEdge, Money, MoneySet, VariantNode};

    fn money_set(amount: &str) -> MoneySet {
        MoneySet {
            presentment_money: Money {
                amount: amount.to_string(),
            },
        }
    }

    fn line_item(title: &str, quantity: i64, variant: Option<&str>, price: &str) -> LineItemEdge {
        LineItemEdge {
            node: LineItemNode {
                title: title.to_string(),
                quantity,
                variant: variant.map(|name| VariantNode {
                    display_name: name.to_string(),
                }),
                discounted_unit_price_set: money_set(price),
            },
        }
    }

    fn order(subtotal: &str, discount: Option<&str>) -> OrderNode {
        OrderNode {
            id: "gid://shopify/Order/1001".to_string(),
            name: Some("#1001".to_string()),
            created_at: "2026-08-01T14:30:00Z".to_string(),
            cart_discount_amount_set: discount.map(money_set),
            current_subtotal_price_set: money_set(subtotal),
            customer: Some(CustomerNode {
                first_name: Some("Ana".to_string()),
                last_name: Some("Silva".to_string()),
                email: Some("ana@example.com".to_string()),
            }),
            line_items: LineItemConnection {
                edges: vec![line_item("T-Shirt", 1, None, "45.00")],
            },
        }
    }

    #[test]
    fn test_discount_added_back_to_subtotal() {
        let orders = normalize(vec![order("100.00", Some("10.00"))]);
        assert!((orders[0].subtotal - 110.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_absent_discount_leaves_subtotal_unchanged() {
        let orders = normalize(vec![order("100.00", None)]);
        assert!((orders[0].subtotal - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_numeric_discount_leaves_subtotal_unchanged() {
        let orders = normalize(vec![order("100.00", Some("free shipping"))]);
        assert!((orders[0].subtotal - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nan_discount_counts_as_unparseable() {
        // "NaN" parses as f64 but must not poison the subtotal.
        let orders = normalize(vec![order("100.00", Some("NaN"))]);
        assert!((orders[0].subtotal - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unparseable_subtotal_substitutes_zero() {
        let orders = normalize(vec![order("not a number", Some("10.00"))]);
        assert!((orders[0].subtotal - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(normalize(vec![]).is_empty());
    }

    #[test]
    fn test_order_count_preserved() {
        let input = vec![
            order("10.00", None),
            order("20.00", Some("1.00")),
            order("30.00", None),
        ];
        assert_eq!(normalize(input).len(), 3);
    }

    #[test]
    fn test_order_and_item_sequence_preserved() {
        let mut first = order("10.00", None);
        first.id = "gid://shopify/Order/1".to_string();
        first.line_items.edges = vec![
            line_item("Alpha", 1, None, "1.00"),
            line_item("Beta", 1, None, "2.00"),
            line_item("Gamma", 1, None, "3.00"),
        ];
        let mut second = order("20.00", None);
        second.id = "gid://shopify/Order/2".to_string();

        let orders = normalize(vec![first, second]);
        assert_eq!(orders[0].id, "gid://shopify/Order/1");
        assert_eq!(orders[1].id, "gid://shopify/Order/2");
        let titles: Vec<&str> = orders[0].items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_missing_order_name_defaults_to_guest() {
        let mut node = order("100.00", None);
        node.name = None;
        let orders = normalize(vec![node]);
        assert_eq!(orders[0].name, "Guest");
    }

    #[test]
    fn test_present_order_name_kept() {
        let orders = normalize(vec![order("100.00", None)]);
        assert_eq!(orders[0].name, "#1001");
    }

    #[test]
    fn test_missing_customer_defaults() {
        let mut node = order("100.00", None);
        node.customer = None;
        let orders = normalize(vec![node]);
        assert_eq!(orders[0].customer, "Guest ");
        assert_eq!(orders[0].email, "N/A");
    }

    #[test]
    fn test_customer_fields_default_independently() {
        let mut node = order("100.00", None);
        node.customer = Some(CustomerNode {
            first_name: Some("Ana".to_string()),
            last_name: None,
            email: Some("a@x.com".to_string()),
        });
        let orders = normalize(vec![node]);
        // Present first name with absent last name keeps the real first name.
        assert_eq!(orders[0].customer, "Ana ");
        assert_eq!(orders[0].email, "a@x.com");
    }

    #[test]
    fn test_variant_display_name_preferred_over_title() {
        let mut node = order("100.00", None);
        node.line_items.edges = vec![line_item("T-Shirt", 1, Some("Large - Red"), "45.00")];
        let orders = normalize(vec![node]);
        assert_eq!(orders[0].items[0].title, "Large - Red");
    }

    #[test]
    fn test_missing_variant_falls_back_to_title() {
        let mut node = order("100.00", None);
        node.line_items.edges = vec![line_item("T-Shirt", 1, None, "45.00")];
        let orders = normalize(vec![node]);
        assert_eq!(orders[0].items[0].title, "T-Shirt");
    }

    #[test]
    fn test_unparseable_item_price_substitutes_zero() {
        let mut node = order("100.00", None);
        node.line_items.edges = vec![line_item("Widget", 1, None, "n/a")];
        let orders = normalize(vec![node]);
        assert!((orders[0].items[0].price - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_full_guest_order_scenario() {
        let node = OrderNode {
            id: "gid://shopify/Order/42".to_string(),
            name: None,
            created_at: "2026-08-01T14:30:00Z".to_string(),
            cart_discount_amount_set: Some(money_set("10.00")),
            current_subtotal_price_set: money_set("100.00"),
            customer: None,
            line_items: LineItemConnection {
                edges: vec![line_item("Widget", 2, None, "45.00")],
            },
        };

        let orders = normalize(vec![node]);
        assert_eq!(orders.len(), 1);
        let first = &orders[0];
        assert_eq!(first.name, "Guest");
        assert!((first.subtotal - 110.0).abs() < f64::EPSILON);
        assert_eq!(first.customer, "Guest ");
        assert_eq!(first.email, "N/A");
        assert_eq!(first.items.len(), 1);
        assert_eq!(first.items[0].title, "Widget");
        assert_eq!(first.items[0].quantity, 2);
        assert!((first.items[0].price - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_amount_rejects_non_finite() {
        assert!(parse_amount("inf").is_none());
        assert!(parse_amount("-inf").is_none());
        assert!(parse_amount("NaN").is_none());
        assert_eq!(parse_amount(" 12.50 "), Some(12.5));
    }
}
