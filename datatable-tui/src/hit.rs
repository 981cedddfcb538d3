//! Click targets registered while rendering.

use crate::action::Action;
use crate::buffer::Rect;

/// Screen regions mapped to the action a click triggers.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Action)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region. Later registrations take priority on overlap.
    pub fn register(&mut self, rect: Rect, action: Action) {
        if rect.width > 0 && rect.height > 0 {
            self.regions.push((rect, action));
        }
    }

    /// The action for a click at (`x`, `y`).
    pub fn hit(&self, x: u16, y: u16) -> Option<&Action> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, action)| action)
    }

    pub fn regions(&self) -> &[(Rect, Action)] {
        &self.regions
    }
}
