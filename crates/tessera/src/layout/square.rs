//! Square-grid engine: an interior field of main tiles wrapped on two
//! sides by a border ring.
//!
//! The grid is `(interior + 1)` cells on a side. Rows and columns below
//! `interior` hold main tiles; the last row and last column form the
//! ring. Only the bottom and right edges are rendered, the full frame
//! being implied by symmetry in the product preview.

use crate::border::BorderSet;
use crate::layout::{ArtworkRef, Layout, PlacedTile};
use crate::rotation::{self, RotationTable, default_square_spin};

/// Grid-size knobs for the square engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareGridConfig {
    /// Interior tiles per side; the rendered grid adds one ring cell.
    pub interior: usize,
    /// Cell edge length in layout units.
    pub cell: f64,
    /// Spacing between adjacent cells.
    pub gap: f64,
}

impl Default for SquareGridConfig {
    fn default() -> Self {
        Self {
            interior: 4,
            cell: 200.0,
            gap: 0.0,
        }
    }
}

/// Artwork and rotation for one border-ring cell.
///
/// The bottom row alternates side variants by column parity and keeps
/// the artwork upright; the right column alternates by row parity and
/// turns the side piece a quarter turn counter-clockwise so its outer
/// edge faces outward. The shared corner closes the ring at the
/// bottom-right.
fn ring_cell(row: usize, col: usize, interior: usize, border: Option<&BorderSet>) -> (ArtworkRef, f64) {
    let Some(set) = border else {
        return (ArtworkRef::Placeholder, 0.0);
    };

    if row == interior && col == interior {
        return match set.corner {
            Some(_) => (ArtworkRef::BorderCorner, 0.0),
            None => (ArtworkRef::Placeholder, 0.0),
        };
    }

    let (parity, rotation) = if row == interior {
        (col % 2, 0.0)
    } else {
        (row % 2, 270.0)
    };

    let variant = if parity == 0 || !set.has_second_side() {
        match set.side_a {
            Some(_) => ArtworkRef::BorderSideA,
            None => ArtworkRef::Placeholder,
        }
    } else {
        ArtworkRef::BorderSideB
    };
    let rotation = if variant == ArtworkRef::Placeholder { 0.0 } else { rotation };
    (variant, rotation)
}

/// Plan the bordered square grid.
///
/// Interior rotations come from the three-tier resolver seeded with the
/// built-in quarter-turn spin table; border rotations are fixed by cell
/// position and never consult the rotation spec.
pub fn plan_square_grid(
    spec: Option<&RotationTable>,
    border: Option<&BorderSet>,
    config: &SquareGridConfig,
) -> Layout {
    let n = config.interior + 1;
    let pitch = config.cell + config.gap;
    let extent = n as f64 * config.cell + (n - 1) as f64 * config.gap;
    let default = default_square_spin();

    let mut placements = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            let (artwork, rotation) = if row < config.interior && col < config.interior {
                (
                    ArtworkRef::Main,
                    rotation::resolve(spec, row, col, config.interior, config.interior, &default),
                )
            } else {
                ring_cell(row, col, config.interior, border)
            };

            placements.push(PlacedTile {
                row,
                col,
                x: col as f64 * pitch + config.cell / 2.0,
                y: row as f64 * pitch + config.cell / 2.0,
                width: config.cell,
                height: config.cell,
                rotation,
                artwork,
            });
        }
    }

    Layout {
        view_width: extent,
        view_height: extent,
        clip: None,
        fill: None,
        placements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork::Artwork;

    fn piece() -> Artwork {
        Artwork::parse(r##"<svg viewBox="0 0 200 200"><g id="part1"><rect width="200" height="200" fill="#123456"/></g></svg>"##).unwrap()
    }

    fn full_border() -> BorderSet {
        BorderSet::new(Some(piece()), Some(piece()), Some(piece()))
    }

    #[test]
    fn default_grid_without_border() {
        let layout = plan_square_grid(None, None, &SquareGridConfig::default());
        assert_eq!(layout.placements.len(), 25);
        assert_eq!(layout.count_of(ArtworkRef::Main), 16, "4x4 interior");
        assert_eq!(layout.count_of(ArtworkRef::Placeholder), 9, "ring degrades to placeholders");
        assert_eq!(layout.view_width, 1000.0);

        // Default spin table: 0/90 even rows, 270/180 odd rows
        assert_eq!(layout.cell(0, 0).unwrap().rotation, 0.0);
        assert_eq!(layout.cell(0, 1).unwrap().rotation, 90.0);
        assert_eq!(layout.cell(1, 0).unwrap().rotation, 270.0);
        assert_eq!(layout.cell(1, 1).unwrap().rotation, 180.0);
    }

    #[test]
    fn centers_advance_by_cell_pitch() {
        let layout = plan_square_grid(None, None, &SquareGridConfig::default());
        let a = layout.cell(0, 0).unwrap();
        let b = layout.cell(0, 1).unwrap();
        let c = layout.cell(2, 3).unwrap();
        assert_eq!((a.x, a.y), (100.0, 100.0));
        assert_eq!((b.x, b.y), (300.0, 100.0));
        assert_eq!((c.x, c.y), (700.0, 500.0));
    }

    #[test]
    fn ring_alternates_two_side_variants() {
        let border = full_border();
        let layout = plan_square_grid(None, Some(&border), &SquareGridConfig::default());

        // Corner closes the ring, unrotated
        let corner = layout.cell(4, 4).unwrap();
        assert_eq!(corner.artwork, ArtworkRef::BorderCorner);
        assert_eq!(corner.rotation, 0.0);

        // Bottom row: column parity picks the variant, artwork stays upright
        assert_eq!(layout.cell(4, 0).unwrap().artwork, ArtworkRef::BorderSideA);
        assert_eq!(layout.cell(4, 0).unwrap().rotation, 0.0);
        assert_eq!(layout.cell(4, 1).unwrap().artwork, ArtworkRef::BorderSideB);
        assert_eq!(layout.cell(4, 2).unwrap().artwork, ArtworkRef::BorderSideA);

        // Right column: row parity picks the variant, quarter turn CCW
        assert_eq!(layout.cell(0, 4).unwrap().artwork, ArtworkRef::BorderSideA);
        assert_eq!(layout.cell(0, 4).unwrap().rotation, 270.0);
        assert_eq!(layout.cell(1, 4).unwrap().artwork, ArtworkRef::BorderSideB);
        assert_eq!(layout.cell(1, 4).unwrap().rotation, 270.0);
    }

    #[test]
    fn single_variant_border_repeats_side_a() {
        let border = BorderSet::new(Some(piece()), Some(piece()), None);
        let layout = plan_square_grid(None, Some(&border), &SquareGridConfig::default());
        for col in 0..4 {
            assert_eq!(
                layout.cell(4, col).unwrap().artwork,
                ArtworkRef::BorderSideA,
                "col {} should fall back to the single side variant",
                col
            );
        }
    }

    #[test]
    fn missing_pieces_degrade_to_placeholders() {
        let border = BorderSet::new(None, Some(piece()), None);
        let layout = plan_square_grid(None, Some(&border), &SquareGridConfig::default());
        assert_eq!(layout.cell(4, 4).unwrap().artwork, ArtworkRef::Placeholder);
        assert_eq!(layout.cell(4, 0).unwrap().artwork, ArtworkRef::BorderSideA);
    }

    #[test]
    fn partial_spec_tiles_interior_when_it_divides() {
        let spec = RotationTable::new(vec![vec![15.0, 30.0], vec![45.0, 60.0]]);
        let layout = plan_square_grid(Some(&spec), None, &SquareGridConfig::default());
        // 2x2 divides the 4x4 interior, so cell (3,3) wraps to (1,1)
        assert_eq!(layout.cell(3, 3).unwrap().rotation, 60.0);
        assert_eq!(layout.cell(2, 0).unwrap().rotation, 15.0);
    }
}
