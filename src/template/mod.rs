//! Resolved-template types: track sizes and the named-area matrix.

mod core;

pub use core::{Fr, GridTemplate};
