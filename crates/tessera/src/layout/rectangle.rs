//! Rectangle engine: brick, stack-bond, and herringbone layouts for
//! rectangular tiles.
//!
//! Tile size is derived, not configured. The canvas width and column
//! count fix the tile width, and the artwork's aspect ratio fixes the
//! height, so a 2:1 subway tile and a 4:1 plank lay out with the same
//! code and keep their proportions.

use crate::geometry::Point;
use crate::layout::{ArtworkRef, BondPattern, Layout, PlacedTile};

/// Fallback paint for herringbone when the artwork has no usable region
/// color.
const HERRINGBONE_FALLBACK: &str = "#94a3b8";

/// Canvas and density knobs for the rectangle engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangleConfig {
    /// Rows in the brick and stack-bond fields.
    pub rows: usize,
    /// Whole tiles across the canvas.
    pub cols: usize,
    /// Grout gap between tiles for brick and stack-bond.
    pub gap: f64,
    /// Square canvas edge length.
    pub canvas: f64,
    /// Grout gap inside the rotated herringbone weave; much thinner than
    /// the axis-aligned gap because the tiles there are bare rects.
    pub herringbone_gap: f64,
}

impl Default for RectangleConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 3,
            gap: 4.0,
            canvas: 200.0,
            herringbone_gap: 0.8,
        }
    }
}

impl RectangleConfig {
    /// Tile size for the axis-aligned patterns: width divides the canvas
    /// into `cols` tiles with grout between, height follows the artwork
    /// aspect ratio.
    fn tile_size(&self, aspect_ratio: f64) -> (f64, f64) {
        let tw = (self.canvas - (self.cols - 1) as f64 * self.gap) / self.cols as f64;
        (tw, tw / aspect_ratio)
    }
}

/// Plan a rectangular-tile layout in the requested bond pattern.
///
/// Brick and stack-bond place the colorized artwork; herringbone draws
/// bare rounded rects in `flat_color`, so the weave reads as grout lines
/// rather than a grid of miniature artworks.
pub fn plan_rectangle(
    pattern: BondPattern,
    aspect_ratio: f64,
    flat_color: Option<&str>,
    config: &RectangleConfig,
) -> Layout {
    match pattern {
        BondPattern::Brick => plan_courses(aspect_ratio, true, config),
        BondPattern::StackBond => plan_courses(aspect_ratio, false, config),
        BondPattern::Herringbone => plan_herringbone(aspect_ratio, flat_color, config),
    }
}

/// Shared row-course planner. Stack-bond aligns the columns; brick
/// shifts odd courses left by half a pitch, adding one tile per course
/// so the right edge stays covered.
fn plan_courses(aspect_ratio: f64, offset_courses: bool, config: &RectangleConfig) -> Layout {
    let (tw, th) = config.tile_size(aspect_ratio);
    let h_pitch = tw + config.gap;
    let v_pitch = th + config.gap;
    let per_row = if offset_courses { config.cols + 1 } else { config.cols };

    let mut placements = Vec::with_capacity(config.rows * per_row);
    for row in 0..config.rows {
        let shift = if offset_courses && row % 2 == 1 {
            h_pitch / 2.0
        } else {
            0.0
        };
        for col in 0..per_row {
            placements.push(PlacedTile {
                row,
                col,
                x: col as f64 * h_pitch - shift + tw / 2.0,
                y: row as f64 * v_pitch + th / 2.0,
                width: tw,
                height: th,
                rotation: 0.0,
                artwork: ArtworkRef::Main,
            });
        }
    }

    Layout {
        view_width: config.canvas,
        view_height: config.rows as f64 * th + (config.rows - 1) as f64 * config.gap,
        clip: None,
        fill: None,
        placements,
    }
}

/// Herringbone: interlocking L-shaped pairs on a diagonal lattice, the
/// whole field turned 45 degrees so the Ls read as inverted Vs.
///
/// Tile width is scaled down by sqrt(2) before dividing by the column
/// count, so the rotated weave shows about as many tile widths across as
/// brick does. The lattice is generated oversized (the canvas diagonal,
/// plus margin rows and columns) because a 45-degree turn pulls the
/// field's corners inside the viewport; the renderer clips the excess.
fn plan_herringbone(aspect_ratio: f64, flat_color: Option<&str>, config: &RectangleConfig) -> Layout {
    let g = config.herringbone_gap;
    let center = Point::new(config.canvas / 2.0, config.canvas / 2.0);

    // Horizontal leg of the L; the vertical leg is the same tile turned
    // a quarter, so its dimensions swap.
    let h_w = config.canvas / 2f64.sqrt() / config.cols as f64;
    let h_h = h_w / aspect_ratio;
    let (v_w, v_h) = (h_h, h_w);

    let step_x = v_w + g;
    let step_y = h_h + g;
    let column_spacing = h_w + g;

    let coverage = config.canvas * 2f64.sqrt();
    let ls_per_column = (coverage / (step_x + step_y)).ceil() as usize + 8;
    let num_columns = (coverage / column_spacing).ceil() as usize + 2;

    let start_x = center.x - coverage * 0.75;
    let start_y = center.y - coverage * 0.25;

    let mut placements = Vec::with_capacity(num_columns * ls_per_column * 2);
    for col_idx in 0..num_columns {
        let col_dx = col_idx as f64 * column_spacing;
        let col_dy = -(col_idx as f64) * column_spacing;

        for i in 0..ls_per_column {
            let base_x = start_x + i as f64 * step_x + col_dx;
            let base_y = start_y + i as f64 * step_y + col_dy;

            // Horizontal leg on top, vertical leg tucked below-left
            let legs = [
                (base_x, base_y, h_w, h_h),
                (base_x, base_y + h_h + g, v_w, v_h),
            ];
            for (x, y, w, h) in legs {
                let c = Point::new(x + w / 2.0, y + h / 2.0).rotated_about(center, 45.0);
                placements.push(PlacedTile {
                    row: i,
                    col: col_idx,
                    x: c.x,
                    y: c.y,
                    width: w,
                    height: h,
                    rotation: 45.0,
                    artwork: ArtworkRef::Main,
                });
            }
        }
    }

    Layout {
        view_width: config.canvas,
        view_height: config.canvas,
        clip: None,
        fill: Some(flat_color.unwrap_or(HERRINGBONE_FALLBACK).to_string()),
        placements,
    }
}
