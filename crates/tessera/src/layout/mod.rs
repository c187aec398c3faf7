//! Layout engines for the tessellation preview.
//!
//! Each engine answers one question: where does every repeated tile go,
//! at what rotation, and with which artwork. The output is a flat list of
//! [`PlacedTile`] descriptors in the layout's own coordinate space; the
//! renderer draws each descriptor standalone and never calls back in.
//!
//! ## Rust Lesson #14: Enums as dispatch tables
//!
//! In TS you'd switch on a string union. Rust enums are closed: adding a
//! shape means the compiler walks you through every match that needs a
//! new arm. Catalog strings enter through `Shape::from_name`, which is
//! the single place an unknown shape can be rejected.

pub mod fishscale;
pub mod honeycomb;
pub mod rectangle;
pub mod square;

pub use fishscale::{FishScaleConfig, plan_fish_scale};
pub use honeycomb::{HoneycombConfig, plan_honeycomb};
pub use rectangle::{RectangleConfig, plan_rectangle};
pub use square::{SquareGridConfig, plan_square_grid};

use crate::border::BorderSet;
use crate::geometry::Outline;
use crate::rotation::RotationTable;

/// Error type for layout planning.
#[derive(Debug)]
pub enum LayoutError {
    /// The catalog named a shape no engine knows. Loud on purpose: this
    /// means a catalog/engine version mismatch, not transient bad data.
    UnsupportedShape(String),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::UnsupportedShape(name) => {
                write!(f, "unsupported tile shape: {}", name)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Tile shapes supported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Square,
    Hexagon,
    Rectangle,
    /// Non-convex drop shape; catalog code "g1".
    FishScale,
}

impl Shape {
    pub fn all() -> &'static [Shape] {
        &[Shape::Square, Shape::Hexagon, Shape::Rectangle, Shape::FishScale]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Square => "square",
            Shape::Hexagon => "hexagon",
            Shape::Rectangle => "rectangle",
            Shape::FishScale => "fish-scale",
        }
    }

    /// Parse a catalog shape name. Unknown names are an error rather than
    /// a fallback; see [`LayoutError::UnsupportedShape`].
    pub fn from_name(name: &str) -> Result<Shape, LayoutError> {
        match name.to_lowercase().as_str() {
            "square" => Ok(Shape::Square),
            "hexagon" | "hex" => Ok(Shape::Hexagon),
            "rectangle" | "rect" => Ok(Shape::Rectangle),
            "fish-scale" | "fishscale" | "g1" => Ok(Shape::FishScale),
            other => Err(LayoutError::UnsupportedShape(other.to_string())),
        }
    }
}

/// Laying patterns for rectangular tiles. Ignored for other shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondPattern {
    Brick,
    StackBond,
    Herringbone,
}

impl BondPattern {
    pub fn all() -> &'static [BondPattern] {
        &[BondPattern::Brick, BondPattern::StackBond, BondPattern::Herringbone]
    }

    pub fn name(&self) -> &'static str {
        match self {
            BondPattern::Brick => "brick",
            BondPattern::StackBond => "stack-bond",
            BondPattern::Herringbone => "herringbone",
        }
    }

    /// Parse a pattern name. Returns `None` for unrecognized values;
    /// callers fall back to [`BondPattern::StackBond`], the least
    /// surprising axis-aligned layout.
    pub fn from_name(name: &str) -> Option<BondPattern> {
        match name.to_lowercase().as_str() {
            "brick" | "running-bond" => Some(BondPattern::Brick),
            "stack-bond" | "stack" => Some(BondPattern::StackBond),
            "herringbone" | "chevron" => Some(BondPattern::Herringbone),
            _ => None,
        }
    }
}

/// Which artwork a placed tile renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkRef {
    /// The colorized main tile.
    Main,
    /// The border corner piece.
    BorderCorner,
    /// First border side variant.
    BorderSideA,
    /// Second border side variant.
    BorderSideB,
    /// Empty dashed placeholder (border ring with no border selected, or
    /// a border cell whose artwork is missing).
    Placeholder,
}

/// One cell of a computed layout.
///
/// `x`/`y` is the **center** of the tile's bounding box and `rotation` is
/// applied about that center, so a descriptor can be drawn standalone:
/// translate to `(x - width/2, y - height/2)`, then rotate about the
/// center.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTile {
    pub row: usize,
    pub col: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub artwork: ArtworkRef,
}

/// A computed layout: the coordinate space plus every placed tile.
///
/// Recomputed on every color/pattern/rotation change and never persisted;
/// callers memoize on their own input equality.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub view_width: f64,
    pub view_height: f64,
    /// Clip outline shared by all placements, in tile-local coordinates.
    pub clip: Option<Outline>,
    /// Flat fill color for engines that draw bare shapes instead of
    /// artwork (herringbone).
    pub fill: Option<String>,
    pub placements: Vec<PlacedTile>,
}

impl Layout {
    /// Count placements referencing a given artwork.
    pub fn count_of(&self, artwork: ArtworkRef) -> usize {
        self.placements.iter().filter(|p| p.artwork == artwork).count()
    }

    /// Find the placement at grid cell `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Option<&PlacedTile> {
        self.placements.iter().find(|p| p.row == row && p.col == col)
    }
}

/// Everything the dispatcher needs to know about the selected tile.
/// Artwork content stays with the caller; engines work from metadata.
#[derive(Debug, Clone, Copy)]
pub struct TileDescription<'a> {
    pub shape: Shape,
    /// Intrinsic width / height of the tile artwork.
    pub aspect_ratio: f64,
    /// Catalog rotation table; absent, partial, or full.
    pub rotation: Option<&'a RotationTable>,
    /// Laying pattern for rectangular tiles. `None` means the catalog
    /// default (brick).
    pub pattern: Option<BondPattern>,
    /// Selected border, if any. Only the square grid uses it.
    pub border: Option<&'a BorderSet>,
    /// First region color, used where the engine paints bare shapes.
    pub flat_color: Option<&'a str>,
}

/// Grid-size and spacing knobs for every engine, with the preview
/// defaults baked in. The exact counts are preview-density choices, not
/// tessellation math, so they are configuration rather than constants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutConfig {
    pub square: SquareGridConfig,
    pub honeycomb: HoneycombConfig,
    pub fish_scale: FishScaleConfig,
    pub rectangle: RectangleConfig,
}

/// Pick the engine for a tile and plan its layout.
pub fn plan_layout(tile: &TileDescription, config: &LayoutConfig) -> Layout {
    match tile.shape {
        Shape::Square => plan_square_grid(tile.rotation, tile.border, &config.square),
        Shape::Hexagon => plan_honeycomb(tile.rotation, &config.honeycomb),
        Shape::FishScale => plan_fish_scale(tile.rotation, &config.fish_scale),
        Shape::Rectangle => plan_rectangle(
            tile.pattern.unwrap_or(BondPattern::Brick),
            tile.aspect_ratio,
            tile.flat_color,
            &config.rectangle,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(shape: Shape) -> TileDescription<'static> {
        TileDescription {
            shape,
            aspect_ratio: 1.0,
            rotation: None,
            pattern: None,
            border: None,
            flat_color: None,
        }
    }

    #[test]
    fn unknown_shape_is_loud() {
        let err = Shape::from_name("triangle").unwrap_err();
        assert!(
            err.to_string().contains("unsupported tile shape: triangle"),
            "error should name the offending shape, got {}",
            err
        );
    }

    #[test]
    fn shape_names_roundtrip() {
        for shape in Shape::all() {
            assert_eq!(Shape::from_name(shape.name()).unwrap(), *shape);
        }
        assert_eq!(Shape::from_name("g1").unwrap(), Shape::FishScale);
    }

    #[test]
    fn unknown_pattern_maps_to_none() {
        assert_eq!(BondPattern::from_name("basketweave"), None);
        assert_eq!(BondPattern::from_name("Brick"), Some(BondPattern::Brick));
    }

    #[test]
    fn square_dispatch_builds_bordered_grid() {
        let layout = plan_layout(&tile(Shape::Square), &LayoutConfig::default());
        assert_eq!(layout.placements.len(), 25, "5x5 grid including border ring");
        assert!(layout.clip.is_none());
    }

    #[test]
    fn hexagon_dispatch_clips_to_hexagon() {
        let layout = plan_layout(&tile(Shape::Hexagon), &LayoutConfig::default());
        assert!(matches!(layout.clip, Some(crate::geometry::Outline::Polygon(_))));
        assert_eq!(layout.placements.len(), 4 * 7);
    }

    #[test]
    fn fish_scale_dispatch_clips_to_path() {
        let layout = plan_layout(&tile(Shape::FishScale), &LayoutConfig::default());
        assert!(matches!(layout.clip, Some(crate::geometry::Outline::Path(_))));
        assert_eq!(layout.placements.len(), 5 * 8);
    }

    #[test]
    fn rectangle_dispatch_defaults_to_brick() {
        let mut desc = tile(Shape::Rectangle);
        desc.aspect_ratio = 2.0;
        let layout = plan_layout(&desc, &LayoutConfig::default());
        let cfg = RectangleConfig::default();
        // Brick rows carry one extra tile each
        assert_eq!(layout.placements.len(), cfg.rows * (cfg.cols + 1));
    }
}
