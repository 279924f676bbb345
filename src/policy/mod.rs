//! Log filtering and masking policy

pub mod matching;
pub mod store;

pub use store::{PolicyStore, MASK_TOKEN};
