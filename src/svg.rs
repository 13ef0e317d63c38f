// src/svg.rs

//! Reference SVG emitter.
//!
//! Pure string templating around the fixed logo data: the same path,
//! transform and gradient stops that drive the rasterizer, in a
//! human-auditable vector file. The raster pipeline never reads this back.

use crate::gradient::GradientSpec;
use crate::logo;

/// Render the reference SVG document for the given gradient stops.
pub fn reference_svg(gradient: &GradientSpec) -> String {
    let [c0, c1, c2] = gradient.stops;
    let [vx, vy, vw, vh] = logo::VIEW_BOX;
    let m = logo::TRANSFORM;
    format!(
        r#"<svg clip-rule="evenodd" fill-rule="evenodd" stroke-linejoin="round" stroke-miterlimit="2" viewBox="{vx} {vy} {vw} {vh}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="logoGrad" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0" stop-color="{}"/>
      <stop offset="0.55" stop-color="{}"/>
      <stop offset="1" stop-color="{}"/>
    </linearGradient>
  </defs>
  <path d="{}" fill="url(#logoGrad)" fill-rule="nonzero"
        transform="matrix({} {} {} {} {} {})"/>
</svg>
"#,
        c0.to_hex(),
        c1.to_hex(),
        c2.to_hex(),
        logo::PATH_DATA,
        m.a,
        m.b,
        m.c,
        m.d,
        m.e,
        m.f,
    )
}
