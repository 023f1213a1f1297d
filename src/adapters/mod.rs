// Adapters layer: concrete implementations of the domain ports.

pub mod source;
pub mod storage;

pub use source::{HttpSource, LocalSource};
pub use storage::LocalStorage;
