//! Unfulfilled-orders list page handler.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::{
    components::data_table::{TableColumn, unfulfilled_orders_columns},
    error::AppError,
    state::AppState,
};

use super::types::OrderRowView;

/// Unfulfilled-orders page template.
#[derive(Template)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Rows to display, one per order.
    pub orders: Vec<OrderRowView>,
}

/// Unfulfilled-orders page handler.
///
/// Fetches the current page of unfulfilled orders, flattens them into row
/// views, and renders the table. A fetch failure fails the whole request.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let orders = state.shopify().unfulfilled_orders().await?;

    let rows: Vec<OrderRowView> = orders.iter().map(OrderRowView::from).collect();
    tracing::debug!(count = rows.len(), "rendering unfulfilled orders");

    let template = OrdersIndexTemplate {
        columns: unfulfilled_orders_columns(),
        orders: rows,
    };

    Ok(Html(template.render()?))
}
