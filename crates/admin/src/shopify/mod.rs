//! Shopify Admin API client for the unfulfilled-orders page.
//!
//! # Architecture
//!
//! - Hand-rolled GraphQL query with an explicit serde response schema
//!   ([`queries`]), validated at the client boundary
//! - [`conversions`] flattens the nested response nodes into display records
//! - Direct API calls to Shopify (no local database sync)
//!
//! # Example
//!
//! ```rust,ignore
//! use orderboard_admin::shopify::AdminClient;
//!
//! let client = AdminClient::new(&config.shopify);
//! let orders = client.unfulfilled_orders().await?;
//! ```

mod client;
pub mod conversions;
mod orders;
pub mod queries;
pub mod types;

pub use client::AdminClient;

use thiserror::Error;

/// Errors that can occur when interacting with the Shopify Admin API.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}
