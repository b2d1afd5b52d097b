mod core;

pub use core::{AlignItems, JustifyContent, StyleProps};
