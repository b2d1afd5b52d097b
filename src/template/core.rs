use std::fmt;
use std::num::NonZeroU16;

/// Fractional grid track size (CSS `fr` unit).
///
/// Must be non-zero - a zero-weight track would absorb no space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fr(NonZeroU16);

impl Fr {
    /// Create a fractional track size.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    pub fn new(n: u16) -> Self {
        Self(NonZeroU16::new(n).expect("fr track size must be non-zero"))
    }

    pub fn get(self) -> u16 {
        self.0.get()
    }
}

impl fmt::Display for Fr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}fr", self.0)
    }
}

/// Resolved grid geometry: row tracks, column tracks, and the named-area
/// matrix, ready for textual serialization to the rendering layer.
///
/// Every row of `areas` has the same length as `columns`, and `areas` has as
/// many rows as `rows` has tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTemplate {
    pub rows: Vec<Fr>,
    pub columns: Vec<Fr>,
    pub areas: Vec<Vec<&'static str>>,
}

impl GridTemplate {
    /// `grid-template-rows` value, e.g. `"1fr 3fr 1fr"`.
    pub fn template_rows(&self) -> String {
        join_tracks(&self.rows)
    }

    /// `grid-template-columns` value, e.g. `"1fr 2fr 1fr"`.
    pub fn template_columns(&self) -> String {
        join_tracks(&self.columns)
    }

    /// `grid-template-areas` value: one quoted line per row, space-joined
    /// cells, lines joined by newline.
    pub fn template_areas(&self) -> String {
        self.areas
            .iter()
            .map(|row| format!("\"{}\"", row.join(" ")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn join_tracks(tracks: &[Fr]) -> String {
    tracks
        .iter()
        .map(Fr::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fr_displays_css_unit() {
        assert_eq!(Fr::new(1).to_string(), "1fr");
        assert_eq!(Fr::new(3).to_string(), "3fr");
    }

    #[test]
    #[should_panic(expected = "fr track size must be non-zero")]
    fn fr_zero_panics() {
        Fr::new(0);
    }

    #[test]
    fn template_serializes_css_grid_syntax() {
        let template = GridTemplate {
            rows: vec![Fr::new(1), Fr::new(3), Fr::new(1)],
            columns: vec![Fr::new(1), Fr::new(2), Fr::new(1)],
            areas: vec![
                vec!["header", "header", "header"],
                vec!["left-sidebar", "center", "right-sidebar"],
                vec!["footer", "footer", "footer"],
            ],
        };

        assert_eq!(template.template_rows(), "1fr 3fr 1fr");
        assert_eq!(template.template_columns(), "1fr 2fr 1fr");
        assert_eq!(
            template.template_areas(),
            "\"header header header\"\n\"left-sidebar center right-sidebar\"\n\"footer footer footer\""
        );
    }

    #[test]
    fn single_cell_area_quotes_one_line() {
        let template = GridTemplate {
            rows: vec![Fr::new(1)],
            columns: vec![Fr::new(1)],
            areas: vec![vec!["footer"]],
        };
        assert_eq!(template.template_areas(), "\"footer\"");
    }
}
