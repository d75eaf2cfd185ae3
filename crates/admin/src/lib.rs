//! Orderboard admin library.
//!
//! This crate provides the unfulfilled-orders admin page as a library,
//! allowing it to be tested and reused.
//!
//! # Security
//!
//! This crate holds a HIGH PRIVILEGE Shopify Admin API access token. Only
//! deploy behind trusted network access.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;
pub mod routes;
pub mod shopify;
pub mod state;
