//! Output utilities for flattened geometry.
//!
//! Serializes quadratic and cubic Bézier chains as SVG path data.

mod svg;

pub use svg::{cubics_to_svg_path, draw_commands_to_svg_path, quads_to_svg_path};
