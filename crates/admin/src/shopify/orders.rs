//! Order fetch operations for the Admin API.

use tracing::instrument;

use super::client::AdminClient;
use super::conversions::normalize;
use super::queries::{self, UnfulfilledOrdersData};
use super::types::DisplayOrder;
use super::ShopifyError;

impl AdminClient {
    /// Fetch the current page of unfulfilled orders, flattened for display.
    ///
    /// Issues the fixed unfulfilled-orders query (up to
    /// [`queries::ORDER_PAGE_SIZE`] orders with up to
    /// [`queries::LINE_ITEM_PAGE_SIZE`] line items each) and normalizes the
    /// result. Response order is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response. Failures are fatal for the page; there is no retry and no
    /// partial result.
    #[instrument(skip(self))]
    pub async fn unfulfilled_orders(&self) -> Result<Vec<DisplayOrder>, ShopifyError> {
        let variables = serde_json::json!({
            "first": queries::ORDER_PAGE_SIZE,
            "lineItemCount": queries::LINE_ITEM_PAGE_SIZE,
        });

        let response: UnfulfilledOrdersData = self
            .execute(queries::UNFULFILLED_ORDERS, Some(variables))
            .await?;

        let nodes = response
            .orders
            .edges
            .into_iter()
            .map(|edge| edge.node)
            .collect();

        Ok(normalize(nodes))
    }
}
