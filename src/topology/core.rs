use std::fmt;

use crate::template::{Fr, GridTemplate};

/// Named position in the five-slot application topology: a spanning header and
/// footer around a sidebar / center / sidebar middle band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossSlot {
    Header,
    Footer,
    LeftSidebar,
    RightSidebar,
    Center,
}

impl CrossSlot {
    /// Canonical slot order. Governs the visible-children list.
    pub const ALL: [CrossSlot; 5] = [
        CrossSlot::Header,
        CrossSlot::Footer,
        CrossSlot::LeftSidebar,
        CrossSlot::RightSidebar,
        CrossSlot::Center,
    ];

    /// CSS grid area name for this slot.
    pub fn area_name(self) -> &'static str {
        match self {
            CrossSlot::Header => "header",
            CrossSlot::Footer => "footer",
            CrossSlot::LeftSidebar => "left-sidebar",
            CrossSlot::RightSidebar => "right-sidebar",
            CrossSlot::Center => "center",
        }
    }
}

impl fmt::Display for CrossSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.area_name())
    }
}

/// Named position in the 2x2 quadrant topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadSlot {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl QuadSlot {
    /// Canonical slot order. Governs the visible-children list.
    pub const ALL: [QuadSlot; 4] = [
        QuadSlot::TopLeft,
        QuadSlot::TopRight,
        QuadSlot::BottomLeft,
        QuadSlot::BottomRight,
    ];

    /// CSS grid area name for this slot.
    pub fn area_name(self) -> &'static str {
        match self {
            QuadSlot::TopLeft => "top-left",
            QuadSlot::TopRight => "top-right",
            QuadSlot::BottomLeft => "bottom-left",
            QuadSlot::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for QuadSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.area_name())
    }
}

/// Base (unmerged) geometry for the application topology.
pub(crate) fn cross_base() -> GridTemplate {
    GridTemplate {
        rows: vec![Fr::new(1), Fr::new(3), Fr::new(1)],
        columns: vec![Fr::new(1), Fr::new(2), Fr::new(1)],
        areas: vec![
            vec!["header", "header", "header"],
            vec!["left-sidebar", "center", "right-sidebar"],
            vec!["footer", "footer", "footer"],
        ],
    }
}

/// Base (unmerged) geometry for the quadrant topology.
pub(crate) fn quadrant_base() -> GridTemplate {
    GridTemplate {
        rows: vec![Fr::new(1), Fr::new(1)],
        columns: vec![Fr::new(1), Fr::new(1)],
        areas: vec![
            vec!["top-left", "top-right"],
            vec!["bottom-left", "bottom-right"],
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_area_names_are_kebab_case() {
        assert_eq!(CrossSlot::LeftSidebar.area_name(), "left-sidebar");
        assert_eq!(CrossSlot::Center.to_string(), "center");
    }

    #[test]
    fn canonical_order_is_stable() {
        let names: Vec<_> = CrossSlot::ALL.iter().map(|s| s.area_name()).collect();
        assert_eq!(
            names,
            vec!["header", "footer", "left-sidebar", "right-sidebar", "center"]
        );

        let names: Vec<_> = QuadSlot::ALL.iter().map(|s| s.area_name()).collect();
        assert_eq!(
            names,
            vec!["top-left", "top-right", "bottom-left", "bottom-right"]
        );
    }

    #[test]
    fn base_matrices_match_track_counts() {
        for base in [cross_base(), quadrant_base()] {
            assert_eq!(base.areas.len(), base.rows.len());
            for row in &base.areas {
                assert_eq!(row.len(), base.columns.len());
            }
        }
    }
}
