pub mod composer;
pub mod error;
pub mod export;
pub mod profile;
pub mod store;
pub mod tasks;
pub mod tracker;
pub mod types;
pub mod vocab;

pub use crate::error::TrackerError;
pub use crate::store::Store;
pub use crate::tracker::Tracker;
