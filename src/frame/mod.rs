//! Frames are the reactive containers: they own the slot assignment, the
//! style attributes, and the layout object, and re-resolve the grid template
//! synchronously on every slot mutation.

mod core;

pub use core::{AppFrame, QuadFrame};
