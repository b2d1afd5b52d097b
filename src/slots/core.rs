//! Sparse position-to-occupant assignments for both topologies.
//!
//! Absent entries are valid and mean "empty". The same occupant appearing in
//! two positions is an unchecked precondition left to the caller; nothing here
//! validates identity.

use crate::topology::{CrossSlot, QuadSlot};

/// Occupants of the five-slot application topology.
#[derive(Debug, Clone)]
pub struct CrossSlots<C> {
    header: Option<C>,
    footer: Option<C>,
    left_sidebar: Option<C>,
    right_sidebar: Option<C>,
    center: Option<C>,
}

impl<C> Default for CrossSlots<C> {
    fn default() -> Self {
        Self {
            header: None,
            footer: None,
            left_sidebar: None,
            right_sidebar: None,
            center: None,
        }
    }
}

impl<C> CrossSlots<C> {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, slot: CrossSlot) -> &mut Option<C> {
        match slot {
            CrossSlot::Header => &mut self.header,
            CrossSlot::Footer => &mut self.footer,
            CrossSlot::LeftSidebar => &mut self.left_sidebar,
            CrossSlot::RightSidebar => &mut self.right_sidebar,
            CrossSlot::Center => &mut self.center,
        }
    }

    /// Replace a slot's occupant, returning the displaced one.
    pub fn set(&mut self, slot: CrossSlot, occupant: Option<C>) -> Option<C> {
        std::mem::replace(self.entry(slot), occupant)
    }

    pub fn get(&self, slot: CrossSlot) -> Option<&C> {
        match slot {
            CrossSlot::Header => self.header.as_ref(),
            CrossSlot::Footer => self.footer.as_ref(),
            CrossSlot::LeftSidebar => self.left_sidebar.as_ref(),
            CrossSlot::RightSidebar => self.right_sidebar.as_ref(),
            CrossSlot::Center => self.center.as_ref(),
        }
    }

    pub fn get_mut(&mut self, slot: CrossSlot) -> Option<&mut C> {
        self.entry(slot).as_mut()
    }

    /// Occupied slots in canonical order.
    pub fn present(&self) -> Vec<CrossSlot> {
        CrossSlot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot).is_some())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.present().len()
    }

    pub fn is_empty(&self) -> bool {
        CrossSlot::ALL.into_iter().all(|slot| self.get(slot).is_none())
    }
}

/// Occupants of the 2x2 quadrant topology.
#[derive(Debug, Clone)]
pub struct QuadSlots<C> {
    top_left: Option<C>,
    top_right: Option<C>,
    bottom_left: Option<C>,
    bottom_right: Option<C>,
}

impl<C> Default for QuadSlots<C> {
    fn default() -> Self {
        Self {
            top_left: None,
            top_right: None,
            bottom_left: None,
            bottom_right: None,
        }
    }
}

impl<C> QuadSlots<C> {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, slot: QuadSlot) -> &mut Option<C> {
        match slot {
            QuadSlot::TopLeft => &mut self.top_left,
            QuadSlot::TopRight => &mut self.top_right,
            QuadSlot::BottomLeft => &mut self.bottom_left,
            QuadSlot::BottomRight => &mut self.bottom_right,
        }
    }

    /// Replace a slot's occupant, returning the displaced one.
    pub fn set(&mut self, slot: QuadSlot, occupant: Option<C>) -> Option<C> {
        std::mem::replace(self.entry(slot), occupant)
    }

    pub fn get(&self, slot: QuadSlot) -> Option<&C> {
        match slot {
            QuadSlot::TopLeft => self.top_left.as_ref(),
            QuadSlot::TopRight => self.top_right.as_ref(),
            QuadSlot::BottomLeft => self.bottom_left.as_ref(),
            QuadSlot::BottomRight => self.bottom_right.as_ref(),
        }
    }

    pub fn get_mut(&mut self, slot: QuadSlot) -> Option<&mut C> {
        self.entry(slot).as_mut()
    }

    /// Occupied slots in canonical order.
    pub fn present(&self) -> Vec<QuadSlot> {
        QuadSlot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot).is_some())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.present().len()
    }

    pub fn is_empty(&self) -> bool {
        QuadSlot::ALL.into_iter().all(|slot| self.get(slot).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_returns_displaced_occupant() {
        let mut slots = CrossSlots::new();
        assert!(slots.set(CrossSlot::Center, Some("a")).is_none());
        assert_eq!(slots.set(CrossSlot::Center, Some("b")), Some("a"));
        assert_eq!(slots.set(CrossSlot::Center, None), Some("b"));
        assert!(slots.is_empty());
    }

    #[test]
    fn present_follows_canonical_order_not_insertion_order() {
        let mut slots = CrossSlots::new();
        slots.set(CrossSlot::Center, Some("c"));
        slots.set(CrossSlot::Header, Some("h"));
        slots.set(CrossSlot::Footer, Some("f"));
        assert_eq!(
            slots.present(),
            vec![CrossSlot::Header, CrossSlot::Footer, CrossSlot::Center]
        );
        assert_eq!(slots.len(), 3);
    }

    #[test]
    fn quad_present_follows_canonical_order() {
        let mut slots = QuadSlots::new();
        slots.set(QuadSlot::BottomRight, Some(1));
        slots.set(QuadSlot::TopRight, Some(2));
        assert_eq!(
            slots.present(),
            vec![QuadSlot::TopRight, QuadSlot::BottomRight]
        );
    }
}
