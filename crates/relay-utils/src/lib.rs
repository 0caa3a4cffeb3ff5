//! Shared utilities for stock-relay
//!
//! Tracing setup shared by the stock-relay binaries.

pub mod logging;

pub use logging::init_tracing;
