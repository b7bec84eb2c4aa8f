//! Traffic-light intersections
//!
//! Lights are informational: nothing in the engine reacts to their state.

use super::types::{GridPos, GREEN_LIGHT_GLYPH, RED_LIGHT_GLYPH};

/// A traffic light at a fixed grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimIntersection {
    pub position: GridPos,
    pub is_green: bool,
}

impl SimIntersection {
    /// New intersections start green
    pub fn new(position: GridPos) -> Self {
        Self {
            position,
            is_green: true,
        }
    }

    /// Flip the light between green and red
    pub fn toggle(&mut self) {
        self.is_green = !self.is_green;
    }

    pub fn glyph(&self) -> char {
        if self.is_green {
            GREEN_LIGHT_GLYPH
        } else {
            RED_LIGHT_GLYPH
        }
    }
}
