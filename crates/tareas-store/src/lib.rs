pub mod json_store;
pub mod paths;
pub mod reference;

pub use crate::json_store::JsonStore;
