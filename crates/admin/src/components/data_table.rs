//! Data table component types.
//!
//! These types define the column configuration for the orders data table.

use serde::Serialize;

/// Column definition for a data table.
#[derive(Debug, Clone, Serialize)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
}

impl TableColumn {
    /// Create a new column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// Column configuration for the unfulfilled-orders table.
///
/// One column per row cell, in render order.
#[must_use]
pub fn unfulfilled_orders_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("order", "Order"),
        TableColumn::new("customer", "Customer"),
        TableColumn::new("email", "Email"),
        TableColumn::new("created_at", "Created At"),
        TableColumn::new("first_item", "First Item"),
        TableColumn::new("subtotal", "Subtotal"),
        TableColumn::new("edit", "Edit Order"),
    ]
}
