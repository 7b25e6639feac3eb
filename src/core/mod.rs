pub mod errors;
pub mod services;
pub mod tracker;

pub use errors::{FinanceError, Result};
pub use tracker::{Dashboard, FinanceTracker};
