// Service exports
pub mod reporter;
pub mod store;

pub use store::{load_customers, StoreError};
