//! Sparse position-to-occupant assignments.

mod core;

pub use core::{CrossSlots, QuadSlots};
