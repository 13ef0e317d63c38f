// src/gradient.rs

//! Gradient stops and diagonal color sampling.
//!
//! The gradient runs along the normalized top-left to bottom-right diagonal
//! of a bounding box, with three stops at 0, 0.55 and 1. Sampling is pure:
//! position in, 8-bit RGB out.

use crate::error::RenderError;
use crate::geometry::BBox;

/// Relative position of the middle stop along the diagonal axis.
const MID_STOP: f64 = 0.55;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the `#` is optional, hex digits either case).
    pub fn parse(s: &str) -> Result<Rgb, RenderError> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RenderError::Format(s.to_string()));
        }
        let channel = |range| u8::from_str_radix(&hex[range], 16).unwrap_or(0);
        Ok(Rgb::new(channel(0..2), channel(2..4), channel(4..6)))
    }

    /// Uppercase `#RRGGBB` form, as used in the reference SVG.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Three gradient stops at diagonal positions 0, 0.55 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientSpec {
    pub stops: [Rgb; 3],
}

impl GradientSpec {
    pub const fn new(stops: [Rgb; 3]) -> Self {
        Self { stops }
    }

    /// Color at `(x, y)` relative to `bbox`.
    ///
    /// Positions outside the box clamp to the nearest end of the axis. A box
    /// with zero extent on either axis returns the last stop directly; that
    /// is the documented fallback, not an error.
    pub fn sample(&self, x: f64, y: f64, bbox: &BBox) -> Rgb {
        let dx = bbox.width();
        let dy = bbox.height();
        if dx <= 0.0 || dy <= 0.0 {
            return self.stops[2];
        }
        let u = (x - bbox.min_x) / dx;
        let v = (y - bbox.min_y) / dy;
        let t = ((u + v) * 0.5).clamp(0.0, 1.0);
        if t <= MID_STOP {
            mix(self.stops[0], self.stops[1], t / MID_STOP)
        } else {
            mix(self.stops[1], self.stops[2], (t - MID_STOP) / (1.0 - MID_STOP))
        }
    }
}

/// Linear interpolation per channel, rounded to nearest independently.
fn mix(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    Rgb::new(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STOPS: [Rgb; 3] = [
        Rgb::new(0x00, 0xC2, 0xFF),
        Rgb::new(0x2D, 0x7C, 0xFF),
        Rgb::new(0x00, 0x47, 0xFF),
    ];

    fn unit_bbox() -> BBox {
        BBox {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 1.0,
            max_y: 1.0,
        }
    }

    #[test]
    fn parse_accepts_hash_and_bare_forms() {
        assert_eq!(Rgb::parse("#00C2FF").unwrap(), STOPS[0]);
        assert_eq!(Rgb::parse("00c2ff").unwrap(), STOPS[0]);
        assert_eq!(Rgb::parse(" #2d7cff ").unwrap(), STOPS[1]);
    }

    #[test]
    fn parse_rejects_bad_formats() {
        for bad in ["#00C2F", "#00C2FFA", "#GGGGGG", "", "#", "rgb(0,0,0)"] {
            assert!(
                matches!(Rgb::parse(bad).unwrap_err(), RenderError::Format(_)),
                "{bad:?} must be rejected"
            );
        }
    }

    #[test]
    fn hex_round_trips() {
        assert_eq!(Rgb::parse("#2D7CFF").unwrap().to_hex(), "#2D7CFF");
    }

    #[test]
    fn endpoints_hit_first_and_last_stop() {
        let g = GradientSpec::new(STOPS);
        assert_eq!(g.sample(0.0, 0.0, &unit_bbox()), STOPS[0]);
        assert_eq!(g.sample(1.0, 1.0, &unit_bbox()), STOPS[2]);
    }

    #[test]
    fn middle_stop_is_exact_at_boundary() {
        // (u + v) / 2 = 0.55 lands exactly on the segment boundary; both
        // ramps must agree there and produce stop 1 verbatim.
        let g = GradientSpec::new(STOPS);
        assert_eq!(g.sample(0.55, 0.55, &unit_bbox()), STOPS[1]);
    }

    #[test]
    fn positions_outside_the_box_clamp() {
        let g = GradientSpec::new(STOPS);
        assert_eq!(g.sample(-5.0, -5.0, &unit_bbox()), STOPS[0]);
        assert_eq!(g.sample(9.0, 9.0, &unit_bbox()), STOPS[2]);
    }

    #[test]
    fn zero_extent_box_returns_last_stop() {
        let g = GradientSpec::new(STOPS);
        let flat = BBox {
            min_x: 0.0,
            min_y: 3.0,
            max_x: 10.0,
            max_y: 3.0,
        };
        assert_eq!(g.sample(4.0, 3.0, &flat), STOPS[2]);
    }

    #[test]
    fn channels_round_to_nearest_not_down() {
        let g = GradientSpec::new([Rgb::new(0, 0, 0), Rgb::new(8, 40, 200), Rgb::new(0, 0, 0)]);
        // t = 0.055 is a tenth of the way up the first ramp: channel values
        // 0.8, 4.0 and 20.0. Truncation would give 0 for the first.
        let c = g.sample(0.055, 0.055, &unit_bbox());
        assert_eq!(c, Rgb::new(1, 4, 20));
    }
}
