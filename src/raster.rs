// src/raster.rs

//! RGBA mask buffer and the per-pixel rasterization loop.
//!
//! The alpha channel of the output is strictly binary: 255 where the logo
//! fill covers a pixel center, 0 everywhere else. RGB comes from the
//! diagonal gradient, sampled in pixel space over the full image extent so
//! the gradient's look does not depend on the path's own geometry scale.
//! Each pixel depends only on its own coordinates and the read-only path
//! data, so the loop is trivially parallelizable; a single thread is plenty
//! at OSD sizes.

use crate::error::RenderError;
use crate::fill;
use crate::geometry::{BBox, Point};
use crate::gradient::{GradientSpec, Rgb};
use crate::path::Path;
use log::{debug, info};

/// Row-major RGBA8 pixel buffer.
///
/// Invariant: every alpha byte is exactly 0 or 255.
#[derive(Debug, Clone)]
pub struct RasterBuffer {
    pub width: u32,
    pub height: u32,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Fully transparent buffer of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize * 4;
        Self {
            width,
            height,
            data: vec![0; size],
        }
    }

    /// Raw bytes, row-major, 4 per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// One pixel as (r, g, b, a). Panics out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        assert!(x < self.width && y < self.height);
        let i = (y as usize * self.width as usize + x as usize) * 4;
        (self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }

    fn put(&mut self, x: u32, y: u32, color: Rgb) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
        self.data[i + 3] = 255;
    }
}

/// Rasterize an already-transformed path into a binary-alpha mask.
///
/// The path's bounding box is scaled to fit `width - 2 * pad` horizontally;
/// the height follows from the box's aspect ratio plus padding on all sides,
/// with a floor of one row.
///
/// # Panics
/// Panics when `2 * pad >= width`; the caller validates that padding leaves
/// a positive drawable width.
pub fn render_mask(
    path: &Path,
    width: u32,
    pad: u32,
    gradient: &GradientSpec,
) -> Result<RasterBuffer, RenderError> {
    assert!(
        u64::from(width) > 2 * u64::from(pad),
        "padding must leave a positive drawable width"
    );
    let bbox = path
        .bbox()
        .ok_or_else(|| RenderError::MalformedPath("path produced no geometry".into()))?;
    if bbox.width() <= 0.0 {
        return Err(RenderError::MalformedPath(
            "path has zero horizontal extent".into(),
        ));
    }

    let pad = f64::from(pad);
    let scale = (f64::from(width) - 2.0 * pad) / bbox.width();
    let height = ((bbox.height() * scale + 2.0 * pad).round() as u32).max(1);
    info!("rasterizing {width}x{height} mask, scale {scale:.4}");
    debug!(
        "path bbox ({:.2}, {:.2})..({:.2}, {:.2}), {} subpaths",
        bbox.min_x,
        bbox.min_y,
        bbox.max_x,
        bbox.max_y,
        path.subpaths.len()
    );

    // Gradient spans the whole image, in pixel coordinates.
    let grad_bbox = BBox {
        min_x: 0.0,
        min_y: 0.0,
        max_x: f64::from(width - 1),
        max_y: f64::from(height - 1),
    };

    let mut buf = RasterBuffer::new(width, height);
    for py in 0..height {
        for px in 0..width {
            // Invert the pixel-to-viewBox mapping at the pixel center.
            let q = Point::new(
                bbox.min_x + (f64::from(px) - pad + 0.5) / scale,
                bbox.min_y + (f64::from(py) - pad + 0.5) / scale,
            );
            if fill::hit_test(q, path) {
                let color = gradient.sample(f64::from(px), f64::from(py), &grad_bbox);
                buf.put(px, py, color);
            }
        }
    }
    Ok(buf)
}
