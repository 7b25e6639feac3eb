#![doc(test(attr(deny(warnings))))]

//! Finance Core is the data layer of a personal finance tracker: categories and
//! income/expense transactions kept in a local key-value store, plus the pure
//! aggregations behind the dashboard totals and category breakdown.

pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod storage;
pub mod utils;

pub use crate::core::{Dashboard, FinanceError, FinanceTracker, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
