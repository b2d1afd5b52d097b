mod types;

pub use types::{FrameError, Result};
