//! Slot-driven CSS Grid template resolution.
//!
//! A frame container owns a fixed topology of named slots (an application
//! shell with header, footer, sidebars and center, or a 2x2 quadrant board),
//! a set of style attributes, and a layout object consumed by an external
//! renderer. Assigning or clearing a slot synchronously re-resolves the grid
//! template; with merging enabled, unoccupied positions collapse into their
//! neighbours instead of leaving named-but-unfilled areas.

pub mod error;
pub mod frame;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod resolve;
pub mod slots;
pub mod style;
pub mod template;
pub mod topology;

pub use error::{FrameError, Result};
pub use frame::{AppFrame, QuadFrame};
pub use layout::{GridChild, GridProps, Pane};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink, SharedMemorySink, kv,
};
pub use metrics::{FrameMetrics, MetricsSnapshot};
pub use resolve::{resolve_cross, resolve_quadrant};
pub use slots::{CrossSlots, QuadSlots};
pub use style::{AlignItems, JustifyContent, StyleProps};
pub use template::{Fr, GridTemplate};
pub use topology::{CrossSlot, QuadSlot};
