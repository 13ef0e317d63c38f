// src/logo.rs

//! Fixed Faceter logo source data.
//!
//! Path data and transform come from the upstream logo SVG
//! (static.cdnlogo.com, single `<path>`); both are kept verbatim so the
//! reference SVG can re-emit them unchanged. Immutable constants, never
//! runtime state.

use crate::geometry::Affine;

/// The logo outline in the supported path-data subset.
pub const PATH_DATA: &str = concat!(
    "m45.7 0h-21c-1.4 0-2.5 1.1-2.5 2.5v21.6h-7.6c-1.4 0-2.6 1-2.6 2.3s1.2 2.3 2.6 2.3h10.2",
    "c1.4 0 2.5-1.1 2.5-2.5v-11.1h12.4c1.3 0 2.3-1 2.3-2.3s-1-2.3-2.3-2.3h-12.5v-5.9h18.5",
    "c1.3 0 2.3-1 2.3-2.3s-1-2.3-2.3-2.3zm-20.8 36.4h-10.7c-1.3 0-2.3 1-2.3 2.3s1 2.3 2.3 2.3",
    "h10.7c1.3 0 2.3-1 2.3-2.3s-1-2.3-2.3-2.3zm-11.9-25.9h-10.7c-1.3 0-2.3 1-2.3 2.3s1 2.3 2.3 2.3",
    "h10.7c1.3 0 2.3-1 2.3-2.3 0-1.2-1-2.3-2.3-2.3z",
);

/// Placement of the path inside the viewBox:
/// matrix(5.625 0 0 5.625 145 84.6875).
pub const TRANSFORM: Affine = Affine::new(5.625, 0.0, 0.0, 5.625, 145.0, 84.6875);

/// The shared viewBox the transform maps into: x, y, width, height.
pub const VIEW_BOX: [f64; 4] = [0.0, 0.0, 560.0, 400.0];

/// Default gradient stops, light to dark blue along the diagonal.
pub const DEFAULT_COLORS: &str = "#00C2FF,#2D7CFF,#0047FF";
