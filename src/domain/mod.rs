pub mod category;
pub mod common;
pub mod transaction;

pub use category::{default_categories, Category};
pub use common::{find_by_id, generate_id, Identifiable};
pub use transaction::{NewTransaction, Transaction, TransactionFilter, TransactionKind};
