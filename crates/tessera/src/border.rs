//! Border piece set for the square-grid layout.
//!
//! A border definition contributes a corner piece and one or two side
//! variants. All three pieces share a single region-color map: a region
//! named `part3` in the corner and `part3` in a side tile always take the
//! same color, so recoloring happens in one call across the set.

use crate::artwork::{Artwork, RegionColor};

/// The artwork pieces of a selected border.
///
/// Every piece is optional: catalog data drifts, and the layout engines
/// degrade missing pieces to placeholder cells instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderSet {
    pub corner: Option<Artwork>,
    pub side_a: Option<Artwork>,
    pub side_b: Option<Artwork>,
}

impl BorderSet {
    pub fn new(corner: Option<Artwork>, side_a: Option<Artwork>, side_b: Option<Artwork>) -> Self {
        Self {
            corner,
            side_a,
            side_b,
        }
    }

    /// Does this border alternate between two side variants?
    pub fn has_second_side(&self) -> bool {
        self.side_b.is_some()
    }

    /// Recolor every piece with the same shared map.
    pub fn with_colors(&self, colors: &[RegionColor]) -> BorderSet {
        BorderSet {
            corner: self.corner.as_ref().map(|a| a.with_colors(colors)),
            side_a: self.side_a.as_ref().map(|a| a.with_colors(colors)),
            side_b: self.side_b.as_ref().map(|a| a.with_colors(colors)),
        }
    }
}
