use serde::Serialize;

use crate::error::Result;
use crate::style::{AlignItems, JustifyContent};
use crate::template::GridTemplate;

/// The owned layout object: everything the external rendering layer reads.
///
/// A frame is the only writer. Template fields are rewritten wholesale on
/// every recompute; style fields are relayed attribute-by-attribute as the
/// container's own attributes change. Nothing flows back from here to the
/// container.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GridProps {
    pub grid_template_columns: Option<String>,
    pub grid_template_rows: Option<String>,
    pub grid_template_areas: Option<String>,
    pub grid_gap: Option<String>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub merge: Option<bool>,
}

impl GridProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the three grid-template fields from a resolved template.
    pub fn apply_template(&mut self, template: &GridTemplate) {
        self.grid_template_columns = Some(template.template_columns());
        self.grid_template_rows = Some(template.template_rows());
        self.grid_template_areas = Some(template.template_areas());
    }

    /// Content hash over the serialized props so consumers can cheaply detect
    /// change between reads. The frame itself never diffs on this.
    pub fn fingerprint(&self) -> Result<blake3::Hash> {
        let encoded = serde_json::to_vec(self)?;
        Ok(blake3::hash(&encoded))
    }
}

/// Occupant-side layout boundary: receives the area tag that places the
/// occupant into the matching named area of the grid.
pub trait GridChild {
    fn set_grid_area(&mut self, area: &'static str);
}

/// Minimal ready-made occupant: a content payload plus the last area tag the
/// owning frame assigned to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pane {
    pub content: String,
    pub grid_area: Option<&'static str>,
}

impl Pane {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            grid_area: None,
        }
    }
}

impl GridChild for Pane {
    fn set_grid_area(&mut self, area: &'static str) {
        self.grid_area = Some(area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Fr;

    fn sample_template() -> GridTemplate {
        GridTemplate {
            rows: vec![Fr::new(1), Fr::new(1)],
            columns: vec![Fr::new(1)],
            areas: vec![vec!["header"], vec!["footer"]],
        }
    }

    #[test]
    fn apply_template_writes_all_three_fields() {
        let mut props = GridProps::new();
        props.apply_template(&sample_template());
        assert_eq!(props.grid_template_columns.as_deref(), Some("1fr"));
        assert_eq!(props.grid_template_rows.as_deref(), Some("1fr 1fr"));
        assert_eq!(
            props.grid_template_areas.as_deref(),
            Some("\"header\"\n\"footer\"")
        );
    }

    #[test]
    fn fingerprint_tracks_content_changes() {
        let mut props = GridProps::new();
        let empty = props.fingerprint().unwrap();

        props.apply_template(&sample_template());
        let applied = props.fingerprint().unwrap();
        assert_ne!(empty, applied);

        props.apply_template(&sample_template());
        assert_eq!(props.fingerprint().unwrap(), applied);
    }

    #[test]
    fn pane_records_assigned_area() {
        let mut pane = Pane::new("status line");
        pane.set_grid_area("footer");
        assert_eq!(pane.grid_area, Some("footer"));
    }
}
