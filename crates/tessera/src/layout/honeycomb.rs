//! Honeycomb engine for flat-top hexagonal tiles.
//!
//! Hexagons cannot tile on a plain rectangular lattice; rows interlock
//! instead. Each row drops by half a tile height so the slanted sides
//! nest, and odd rows shift right by half the horizontal pitch so their
//! hexagons sit in the pockets of the row above. The column gap equals
//! half a tile width, which is exactly the horizontal room the offset
//! rows need.

use crate::geometry::{Outline, hexagon_outline};
use crate::layout::{ArtworkRef, Layout, PlacedTile};
use crate::rotation::RotationTable;

/// Grid-size knobs for the honeycomb engine.
#[derive(Debug, Clone, PartialEq)]
pub struct HoneycombConfig {
    pub cols: usize,
    pub rows: usize,
    /// Hexagon bounding-box width.
    pub width: f64,
    /// Hexagon bounding-box height; the flat-top catalog tiles use the
    /// near-regular 200 x 173 box.
    pub height: f64,
}

impl Default for HoneycombConfig {
    fn default() -> Self {
        Self {
            cols: 4,
            rows: 7,
            width: 200.0,
            height: 173.0,
        }
    }
}

/// Plan the interlocking honeycomb.
///
/// Rotations come from the row-wrapped lookup on the catalog table, so a
/// partial table repeats over the field; without a table every hexagon
/// sits at 0 degrees.
pub fn plan_honeycomb(spec: Option<&RotationTable>, config: &HoneycombConfig) -> Layout {
    let gap = config.width / 2.0;
    let h_pitch = config.width + gap;
    let v_pitch = config.height / 2.0;
    let odd_offset = h_pitch / 2.0;

    let mut placements = Vec::with_capacity(config.cols * config.rows);
    for row in 0..config.rows {
        let row_shift = if row % 2 == 1 { odd_offset } else { 0.0 };
        for col in 0..config.cols {
            let rotation = spec.map(|t| t.wrapped(row, col)).unwrap_or(0.0);
            placements.push(PlacedTile {
                row,
                col,
                x: col as f64 * h_pitch + row_shift + config.width / 2.0,
                y: row as f64 * v_pitch + config.height / 2.0,
                width: config.width,
                height: config.height,
                rotation,
                artwork: ArtworkRef::Main,
            });
        }
    }

    Layout {
        view_width: (config.cols - 1) as f64 * h_pitch + config.width + odd_offset,
        view_height: (config.rows - 1) as f64 * v_pitch + config.height,
        clip: Some(Outline::Polygon(hexagon_outline(config.width, config.height))),
        fill: None,
        placements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_field_dimensions() {
        let layout = plan_honeycomb(None, &HoneycombConfig::default());
        assert_eq!(layout.placements.len(), 28);
        // 3 pitches of 300 + tile + odd-row offset of 150
        assert_eq!(layout.view_width, 3.0 * 300.0 + 200.0 + 150.0);
        // 6 half-height steps + tile
        assert_eq!(layout.view_height, 6.0 * 86.5 + 173.0);
    }

    #[test]
    fn rows_interlock() {
        let layout = plan_honeycomb(None, &HoneycombConfig::default());
        let even = layout.cell(0, 1).unwrap();
        let odd = layout.cell(1, 1).unwrap();
        // Odd row drops half a tile height and shifts half the pitch
        assert_eq!(odd.y - even.y, 173.0 / 2.0);
        assert_eq!(odd.x - even.x, (200.0 + 100.0) / 2.0);
        // Row 2 lines back up with row 0 horizontally
        let next_even = layout.cell(2, 1).unwrap();
        assert_eq!(next_even.x, even.x);
    }

    #[test]
    fn clip_is_the_hexagon_outline() {
        let layout = plan_honeycomb(None, &HoneycombConfig::default());
        let Some(Outline::Polygon(points)) = &layout.clip else {
            panic!("honeycomb should clip to a polygon");
        };
        assert_eq!(points.len(), 6);
        assert_eq!(points[2].x, 200.0, "right vertex touches the box edge");
    }

    #[test]
    fn partial_table_wraps_over_the_field() {
        let spec = RotationTable::new(vec![vec![0.0, 60.0], vec![120.0]]);
        let layout = plan_honeycomb(Some(&spec), &HoneycombConfig::default());
        assert_eq!(layout.cell(0, 3).unwrap().rotation, 60.0, "column wrap");
        assert_eq!(layout.cell(1, 2).unwrap().rotation, 120.0, "single-entry row");
        assert_eq!(layout.cell(2, 0).unwrap().rotation, 0.0, "row wrap");
    }
}
