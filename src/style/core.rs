//! Container style attributes mirrored onto the owned layout object.
//!
//! The enumerated attributes accept exactly the CSS keywords the rendering
//! layer recognizes; free-form attributes (gap, width, height) pass through
//! untouched. Values outside the enumerations are rejected at the parsing
//! boundary, before they ever reach a frame.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::FrameError;
use crate::layout::GridProps;

/// `justify-content` keyword set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
}

impl JustifyContent {
    pub fn as_css(self) -> &'static str {
        match self {
            JustifyContent::FlexStart => "flex-start",
            JustifyContent::FlexEnd => "flex-end",
            JustifyContent::Center => "center",
            JustifyContent::SpaceBetween => "space-between",
            JustifyContent::SpaceAround => "space-around",
        }
    }
}

impl fmt::Display for JustifyContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl FromStr for JustifyContent {
    type Err = FrameError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "flex-start" => Ok(JustifyContent::FlexStart),
            "flex-end" => Ok(JustifyContent::FlexEnd),
            "center" => Ok(JustifyContent::Center),
            "space-between" => Ok(JustifyContent::SpaceBetween),
            "space-around" => Ok(JustifyContent::SpaceAround),
            other => Err(FrameError::JustifyContent(other.to_string())),
        }
    }
}

/// `align-items` keyword set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    Stretch,
}

impl AlignItems {
    pub fn as_css(self) -> &'static str {
        match self {
            AlignItems::FlexStart => "flex-start",
            AlignItems::FlexEnd => "flex-end",
            AlignItems::Center => "center",
            AlignItems::Baseline => "baseline",
            AlignItems::Stretch => "stretch",
        }
    }
}

impl fmt::Display for AlignItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl FromStr for AlignItems {
    type Err = FrameError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "flex-start" => Ok(AlignItems::FlexStart),
            "flex-end" => Ok(AlignItems::FlexEnd),
            "center" => Ok(AlignItems::Center),
            "baseline" => Ok(AlignItems::Baseline),
            "stretch" => Ok(AlignItems::Stretch),
            other => Err(FrameError::AlignItems(other.to_string())),
        }
    }
}

/// Style attributes held by a frame container.
///
/// `merge` controls whether unoccupied positions collapse into their
/// neighbours during resolution; everything else is relayed verbatim to the
/// owned layout object.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleProps {
    pub grid_gap: Option<String>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub merge: bool,
}

impl Default for StyleProps {
    fn default() -> Self {
        Self {
            grid_gap: None,
            justify_content: None,
            align_items: None,
            width: None,
            height: None,
            merge: true,
        }
    }
}

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid_gap(mut self, gap: impl Into<String>) -> Self {
        self.grid_gap = Some(gap.into());
        self
    }

    pub fn with_justify_content(mut self, justify: JustifyContent) -> Self {
        self.justify_content = Some(justify);
        self
    }

    pub fn with_align_items(mut self, align: AlignItems) -> Self {
        self.align_items = Some(align);
        self
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn with_merge(mut self, merge: bool) -> Self {
        self.merge = merge;
        self
    }

    /// One-time construction pass: copy every set attribute onto the layout
    /// object. `merge` always carries a value and is always copied.
    pub fn copy_into(&self, layout: &mut GridProps) {
        if let Some(gap) = &self.grid_gap {
            layout.grid_gap = Some(gap.clone());
        }
        if let Some(justify) = self.justify_content {
            layout.justify_content = Some(justify);
        }
        if let Some(align) = self.align_items {
            layout.align_items = Some(align);
        }
        if let Some(width) = &self.width {
            layout.width = Some(width.clone());
        }
        if let Some(height) = &self.height {
            layout.height = Some(height.clone());
        }
        layout.merge = Some(self.merge);
    }
}
