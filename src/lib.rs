//! Catalog & Cart Library
//!
//! This library provides a product catalog and shopping cart HTTP service
//! over a key-value store with secondary indexes.

// Storage
pub mod access;
pub mod store;

// Domain modules
pub mod cart;
pub mod catalog;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
pub mod state;
pub mod telemetry;
