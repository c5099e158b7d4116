//! Derive macros shared across the crate's value types.

pub use derive_more::Display;
