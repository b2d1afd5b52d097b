//! Slot-to-grid resolution - derives a grid template from which slots are
//! occupied.
//!
//! Both resolvers are pure: `(present slots, merge flag) -> template`. An
//! empty slot set resolves to `None`, which callers treat as "keep the prior
//! layout". With merging disabled the base geometry is emitted verbatim; with
//! merging enabled, unoccupied positions collapse into their neighbours
//! instead of leaving named-but-unfilled areas.

use crate::template::{Fr, GridTemplate};
use crate::topology::{CrossSlot, QuadSlot, cross_base, quadrant_base};

/// Resolve the five-slot application topology.
///
/// `present` lists the occupied slots; order does not matter here. Merge
/// reductions are applied in a fixed order: middle-column drop, sidebar
/// expansions, the header/footer-only wholesale replacement, then header and
/// footer row drops against whatever matrix the earlier steps produced.
pub fn resolve_cross(present: &[CrossSlot], merge: bool) -> Option<GridTemplate> {
    if present.is_empty() {
        return None;
    }

    let mut template = cross_base();
    let has = |slot: CrossSlot| present.contains(&slot);

    if merge {
        if let [only] = present {
            let tag = only.area_name();
            template.areas = vec![vec![tag; 3]; 3];
        } else {
            if !has(CrossSlot::Center) {
                for row in &mut template.areas {
                    row.remove(1);
                }
                template.columns.remove(1);
            }

            if !has(CrossSlot::LeftSidebar) {
                template.areas[1][0] = template.areas[1][1];
            }

            if !has(CrossSlot::RightSidebar) {
                let last = template.areas[1].len() - 1;
                template.areas[1][last] = template.areas[1][last - 1];
            }

            if !has(CrossSlot::LeftSidebar)
                && !has(CrossSlot::RightSidebar)
                && !has(CrossSlot::Center)
            {
                template.areas = vec![vec!["header"], vec!["footer"]];
                template.columns = vec![Fr::new(1)];
                template.rows = vec![Fr::new(1), Fr::new(1)];
            }

            if !has(CrossSlot::Header) {
                template.areas.remove(0);
                template.rows.remove(0);
            }

            if !has(CrossSlot::Footer) {
                template.areas.pop();
                template.rows.pop();
            }
        }
    }

    Some(template)
}

/// Resolve the 2x2 quadrant topology.
///
/// Each column merges independently: a fully empty column is absorbed by its
/// neighbour row-by-row, a half-empty column merges vertically within itself.
/// Columns are processed left then right; with two or more occupants a fully
/// empty column implies a fully occupied neighbour, so the pass never reads a
/// cell the pass itself rewrote. Track lists are never modified.
pub fn resolve_quadrant(present: &[QuadSlot], merge: bool) -> Option<GridTemplate> {
    if present.is_empty() {
        return None;
    }

    let mut template = quadrant_base();
    let has = |slot: QuadSlot| present.contains(&slot);

    if merge {
        if let [only] = present {
            let tag = only.area_name();
            template.areas = vec![vec![tag; 2]; 2];
        } else {
            let columns = [
                (QuadSlot::TopLeft, QuadSlot::BottomLeft),
                (QuadSlot::TopRight, QuadSlot::BottomRight),
            ];
            for (i, (top, bottom)) in columns.into_iter().enumerate() {
                let opposite = (i + 1) % 2;
                match (has(top), has(bottom)) {
                    (false, false) => {
                        template.areas[0][i] = template.areas[0][opposite];
                        template.areas[1][i] = template.areas[1][opposite];
                    }
                    (false, true) => {
                        template.areas[0][i] = template.areas[1][i];
                    }
                    (true, false) => {
                        template.areas[1][i] = template.areas[0][i];
                    }
                    (true, true) => {}
                }
            }
        }
    }

    Some(template)
}
