//! # osd-logo
//!
//! Renders the fixed vector logo into a raster mask PNG for the on-screen
//! display pipeline. The OSD treats alpha as 1-bit, so the output is a crisp
//! mask: alpha 255 wherever the logo fill covers a pixel center, 0 elsewhere,
//! with a 3-stop diagonal gradient in RGB inside the covered region. No
//! antialiasing, by design.
//!
//! Pipeline: path data -> [`path::Path::parse`] (flattening cubics through
//! [`curve::Cubic`]) -> affine transform -> [`raster::render_mask`]
//! (nonzero-winding fill + gradient sampling) -> [`png::encode_rgba`].
//! Everything is deterministic: identical inputs produce byte-identical PNGs.

pub mod curve;
pub mod error;
pub mod fill;
pub mod geometry;
pub mod gradient;
pub mod logo;
pub mod path;
pub mod png;
pub mod raster;
pub mod svg;

pub use error::RenderError;
pub use geometry::{Affine, BBox, Point};
pub use gradient::{GradientSpec, Rgb};
pub use path::Path;
pub use raster::{render_mask, RasterBuffer};
