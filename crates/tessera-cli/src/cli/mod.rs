//! CLI command implementations.
//!
//! This module contains the implementations for the various CLI subcommands:
//! - `preview` - Compose a design file into a layout preview SVG
//! - `render` - Rasterize a design preview to PNG
//! - `shapes` - List supported tile shapes and laying patterns
//! - `regions` - Inspect the colorable regions of a tile SVG

pub mod compose;
pub mod design;
pub mod info;
pub mod preview;
pub mod render;

pub use compose::{TileArt, compose_svg, layout_to_json};
pub use design::Design;
pub use info::{cmd_regions, cmd_shapes};
pub use preview::cmd_preview;
pub use render::cmd_render;
