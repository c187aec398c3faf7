//! Per-cell rotation resolution.
//!
//! Catalog data may ship a rotation table that is smaller than the
//! rendered grid (a 2x2 or 2x4 excerpt of the repeating motif). Rather
//! than truncating, the lookup tiles the table across the grid. Three of
//! the four layout engines need some flavor of this, so the fallback
//! logic lives here instead of being re-inlined per engine.

/// A 2-D table of rotation angles in degrees, as supplied by catalog
/// data. Rows may be ragged; ragged tables are usable for the row-wrapped
/// lookup but never for sub-multiple tiling.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationTable {
    rows: Vec<Vec<f64>>,
}

impl RotationTable {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// A table with zero rows, or only empty rows, is treated as wholly
    /// absent by every lookup.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.is_empty())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column count if the table is rectangular (every row the same
    /// non-zero length). Malformed tables report `None` and fall through
    /// to the default.
    pub fn rectangular_cols(&self) -> Option<usize> {
        let first = self.rows.first()?.len();
        if first == 0 {
            return None;
        }
        if self.rows.iter().all(|r| r.len() == first) {
            Some(first)
        } else {
            None
        }
    }

    /// Direct lookup, `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Row-wrapped double-modulo lookup: the row index wraps over the
    /// table height, the column index wraps over *that row's* length.
    /// Used by the honeycomb and fish-scale engines, which have no
    /// default table beyond 0 degrees.
    pub fn wrapped(&self, row: usize, col: usize) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        let row_cfg = &self.rows[row % self.rows.len()];
        if row_cfg.is_empty() {
            return 0.0;
        }
        row_cfg[col % row_cfg.len()]
    }
}

/// Built-in rotation table for square tiles: 0/90 on even rows, 270/180
/// on odd rows, by column parity. Using only quarter turns this spins the
/// motif into a herringbone-like repeat.
pub fn default_square_spin() -> RotationTable {
    RotationTable::new(vec![
        vec![0.0, 90.0, 0.0, 90.0, 0.0],
        vec![270.0, 180.0, 270.0, 180.0, 270.0],
        vec![0.0, 90.0, 0.0, 90.0, 0.0],
        vec![270.0, 180.0, 270.0, 180.0, 270.0],
        vec![0.0, 90.0, 0.0, 90.0, 0.0],
    ])
}

/// Resolve the rotation for grid cell `(row, col)`.
///
/// Three-tier fallback, in order:
/// 1. direct hit inside `spec`;
/// 2. if `spec` is rectangular and its dimensions evenly tile the
///    `grid_rows` x `grid_cols` grid, index it modulo its own size;
/// 3. the built-in `default` table, itself tiled by modulo so any grid
///    size is covered.
///
/// Partial specs from catalog data are thereby repeated rather than
/// truncated, and malformed specs can never escalate past tier 3.
pub fn resolve(
    spec: Option<&RotationTable>,
    row: usize,
    col: usize,
    grid_rows: usize,
    grid_cols: usize,
    default: &RotationTable,
) -> f64 {
    if let Some(table) = spec.filter(|t| !t.is_empty()) {
        if let Some(v) = table.get(row, col) {
            return v;
        }
        if let Some(cols) = table.rectangular_cols() {
            let rows = table.row_count();
            if grid_rows % rows == 0 && grid_cols % cols == 0 {
                if let Some(v) = table.get(row % rows, col % cols) {
                    return v;
                }
            }
        }
    }
    default.wrapped(row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_hit_wins() {
        let spec = RotationTable::new(vec![vec![0.0, 45.0], vec![90.0, 135.0]]);
        let default = default_square_spin();
        assert_eq!(resolve(Some(&spec), 1, 1, 5, 5, &default), 135.0);
    }

    #[test]
    fn sub_multiple_spec_tiles_the_grid() {
        // 2x2 spec over a 4x4 grid: every cell resolves from the spec
        let spec = RotationTable::new(vec![vec![0.0, 90.0], vec![180.0, 270.0]]);
        let default = default_square_spin();
        assert_eq!(resolve(Some(&spec), 2, 2, 4, 4, &default), 0.0);
        assert_eq!(resolve(Some(&spec), 3, 2, 4, 4, &default), 180.0);
        assert_eq!(resolve(Some(&spec), 2, 3, 4, 4, &default), 90.0);
    }

    #[test]
    fn non_dividing_spec_falls_to_default() {
        // 2x4 does not divide 5x5, so out-of-bounds cells use the default
        let spec = RotationTable::new(vec![
            vec![0.0, 60.0, 120.0, 180.0],
            vec![240.0, 300.0, 0.0, 60.0],
        ]);
        let default = default_square_spin();
        assert_eq!(resolve(Some(&spec), 0, 1, 5, 5, &default), 60.0, "in-bounds direct hit");
        assert_eq!(resolve(Some(&spec), 4, 4, 5, 5, &default), 0.0, "default row 4 col 4");
        assert_eq!(resolve(Some(&spec), 3, 4, 5, 5, &default), 270.0, "default row 3 col 4");
    }

    #[test]
    fn ragged_spec_never_tiles() {
        let spec = RotationTable::new(vec![vec![0.0, 90.0], vec![180.0]]);
        let default = default_square_spin();
        // (1,0) is a direct hit
        assert_eq!(resolve(Some(&spec), 1, 0, 4, 4, &default), 180.0);
        // (3,1) would tile to (1,1) which does not exist; default instead
        assert_eq!(resolve(Some(&spec), 3, 1, 4, 4, &default), 180.0);
    }

    #[test]
    fn empty_spec_is_absent() {
        let default = default_square_spin();
        let empty = RotationTable::new(vec![]);
        let hollow = RotationTable::new(vec![vec![], vec![]]);
        assert_eq!(resolve(Some(&empty), 0, 1, 5, 5, &default), 90.0);
        assert_eq!(resolve(Some(&hollow), 1, 0, 5, 5, &default), 270.0);
        assert_eq!(resolve(None, 1, 1, 5, 5, &default), 180.0);
    }

    #[test]
    fn defined_for_every_cell_of_any_grid() {
        // Coverage: dividing specs resolve every cell without panicking
        let spec = RotationTable::new(vec![vec![0.0, 90.0], vec![180.0, 270.0]]);
        let default = default_square_spin();
        for grid in [2usize, 4, 6, 8, 12] {
            for row in 0..grid {
                for col in 0..grid {
                    let v = resolve(Some(&spec), row, col, grid, grid, &default);
                    assert!(
                        [0.0, 90.0, 180.0, 270.0].contains(&v),
                        "cell ({},{}) of grid size {} resolved to {}",
                        row,
                        col,
                        grid,
                        v
                    );
                }
            }
        }
    }

    #[test]
    fn default_spin_checkerboard() {
        let d = default_square_spin();
        assert_eq!(d.get(0, 0), Some(0.0));
        assert_eq!(d.get(0, 1), Some(90.0));
        assert_eq!(d.get(1, 0), Some(270.0));
        assert_eq!(d.get(1, 1), Some(180.0));
        assert_eq!(d.get(4, 4), Some(0.0));
    }

    #[test]
    fn wrapped_lookup_wraps_both_axes() {
        let table = RotationTable::new(vec![vec![0.0, 60.0, 120.0], vec![180.0]]);
        assert_eq!(table.wrapped(0, 4), 60.0, "column wraps over row length");
        assert_eq!(table.wrapped(2, 0), 0.0, "row wraps over table height");
        assert_eq!(table.wrapped(3, 7), 180.0, "ragged rows wrap independently");
    }
}
