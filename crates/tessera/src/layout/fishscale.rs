//! Fish-scale engine for the non-convex drop tile.
//!
//! Scales overlap like roof shingles: each row sits half a tile height
//! over the one above, and odd rows shift right by half a width so every
//! drop nests between the two above it. Columns touch edge to edge.
//! Row order doubles as paint order, so lower rows overpaint the tails
//! of the tiles above them.

use crate::geometry::Outline;
use crate::layout::{ArtworkRef, Layout, PlacedTile};
use crate::rotation::RotationTable;

/// Outline of the drop shape in its 200 x 200 box. Two concave shoulder
/// arcs meet at a top notch, flowing into one convex bowl.
pub const DROP_OUTLINE: &str = "m 199.83512,96.616655 c -53.99305,0 -97.92227,-42.779053 -99.68404,-96.46120487 h -0.10364 c -1.347232,0 -2.590831,0 -3.834431,0.10363345 C 94.451246,52.593994 52.389262,94.641846 0.15798792,96.610884 c 0,1.139968 0.016323,2.307282 0.016323,3.343615 0,55.133021 44.74012308,99.799051 99.87313908,99.799051 55.13302,0 99.98706,-44.66635 99.79905,-99.799051 z";

/// Grid-size knobs for the fish-scale engine.
#[derive(Debug, Clone, PartialEq)]
pub struct FishScaleConfig {
    pub cols: usize,
    pub rows: usize,
    pub width: f64,
    pub height: f64,
}

impl Default for FishScaleConfig {
    fn default() -> Self {
        Self {
            cols: 5,
            rows: 8,
            width: 200.0,
            height: 200.0,
        }
    }
}

/// Plan the overlapping scale field.
pub fn plan_fish_scale(spec: Option<&RotationTable>, config: &FishScaleConfig) -> Layout {
    let h_pitch = config.width;
    let v_pitch = config.height / 2.0;
    let odd_offset = config.width / 2.0;

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
        clip: Some(Outline::Path(DROP_OUTLINE.to_string())),
        fill: None,
        placements,
    }
}
