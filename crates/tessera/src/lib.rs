//! # tessera
//!
//! Tile artwork recoloring and tessellation layout library.
//!
//! ## Rust Lesson #7: Modules
//!
//! Rust modules are like ES6 modules but more explicit:
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level
//!
//! Unlike Node.js, you must explicitly declare every module.

pub mod artwork;
pub mod border;
pub mod geometry;
pub mod layout;
pub mod rotation;

// Re-export common types at crate root for convenience.
pub use artwork::{Artwork, ArtworkError, RegionColor};
pub use border::BorderSet;
pub use geometry::{Outline, Point, hexagon_outline};
pub use layout::{
    ArtworkRef, BondPattern, Layout, LayoutConfig, LayoutError, PlacedTile, Shape,
    TileDescription, plan_layout,
};
pub use rotation::{RotationTable, default_square_spin};
