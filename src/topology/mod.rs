//! Fixed slot enumerations and base geometry for both topologies.

mod core;

pub use core::{CrossSlot, QuadSlot};
pub(crate) use core::{cross_base, quadrant_base};
