// src/path.rs

//! Interpreter for the constrained SVG path-data subset used by the logo.
//!
//! Supported commands: `M/m L/l H/h V/v C/c S/s Z/z`, absolute and relative.
//! A command letter may be followed by several coordinate groups; each extra
//! group repeats the command implicitly (moveto's extra groups become
//! linetos, keeping the moveto's absolute/relative case). Cubic segments are
//! expanded through the flattener on the spot; the interpreter's output is
//! purely polylines, and every subpath is closed by the time it comes out.

use crate::curve::Cubic;
use crate::error::RenderError;
use crate::geometry::{Affine, BBox, Point};
use log::trace;

/// Flatness tolerance for cubic segments, in path-local units.
pub const CURVE_TOLERANCE: f64 = 0.35;

/// An ordered set of closed polylines in path-local coordinates.
///
/// Invariant: every subpath's first point equals its last point. Subpath
/// order never affects the fill result (winding sums commute) but is kept
/// as-authored for reproducibility.
#[derive(Debug, Clone, Default)]
pub struct Path {
    pub subpaths: Vec<Vec<Point>>,
}

impl Path {
    /// Interpret a path-data string into closed subpaths.
    pub fn parse(data: &str) -> Result<Path, RenderError> {
        let tokens = tokenize(data)?;
        Interpreter::new(&tokens).run()
    }

    /// Apply an affine map to every point in place.
    pub fn transform(&mut self, m: &Affine) {
        for sub in &mut self.subpaths {
            for p in sub.iter_mut() {
                *p = m.apply(*p);
            }
        }
    }

    /// Tight bounding box over all subpaths. `None` for an empty path.
    pub fn bbox(&self) -> Option<BBox> {
        BBox::from_points(self.subpaths.iter().flatten().copied())
    }
}

/// One lexical token of path data.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Command(char),
    Number(f64),
}

/// Split path data into command letters and numbers. Whitespace and commas
/// separate tokens; a sign or a second decimal point also terminates the
/// number before it, so runs like `2.3-2.3` and `.5.5` lex as two numbers.
fn tokenize(data: &str) -> Result<Vec<Token>, RenderError> {
    let bytes = data.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_ascii_whitespace() || c == ',' {
            i += 1;
        } else if c.is_ascii_alphabetic() {
            tokens.push(Token::Command(c));
            i += 1;
        } else if c == '+' || c == '-' || c == '.' || c.is_ascii_digit() {
            let start = i;
            if c == '+' || c == '-' {
                i += 1;
            }
            let mut seen_dot = false;
            while i < bytes.len() {
                match bytes[i] {
                    b'0'..=b'9' => i += 1,
                    b'.' if !seen_dot => {
                        seen_dot = true;
                        i += 1;
                    }
                    _ => break,
                }
            }
            // Optional exponent; only consumed when digits follow.
            if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
                let mut j = i + 1;
                if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
                    j += 1;
                }
                let digits_at = j;
                while j < bytes.len() && bytes[j].is_ascii_digit() {
                    j += 1;
                }
                if j > digits_at {
                    i = j;
                }
            }
            let text = &data[start..i];
            let value: f64 = text
                .parse()
                .map_err(|_| RenderError::MalformedPath(format!("bad number {:?}", text)))?;
            tokens.push(Token::Number(value));
        } else {
            return Err(RenderError::MalformedPath(format!(
                "unexpected character {:?}",
                c
            )));
        }
    }
    Ok(tokens)
}

/// Cursor-style interpreter over the token stream.
struct Interpreter<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Current pen position.
    cur: Point,
    /// Start of the open subpath, if any.
    start: Option<Point>,
    /// Points of the open subpath.
    sub: Vec<Point>,
    /// Finished, closed subpaths.
    subs: Vec<Vec<Point>>,
    /// Second control point of the previous cubic, for S/s reflection.
    last_ctrl: Option<Point>,
}

impl<'a> Interpreter<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            cur: Point::default(),
            start: None,
            sub: Vec::new(),
            subs: Vec::new(),
            last_ctrl: None,
        }
    }

    /// True while the next token is a number (another implicit group).
    fn more_coords(&self) -> bool {
        matches!(self.tokens.get(self.pos), Some(Token::Number(_)))
    }

    fn number(&mut self) -> Result<f64, RenderError> {
        match self.tokens.get(self.pos) {
            Some(Token::Number(v)) => {
                self.pos += 1;
                Ok(*v)
            }
            _ => Err(RenderError::MalformedPath(
                "missing coordinate for command".into(),
            )),
        }
    }

    /// Absolute target from a coordinate pair under the current mode.
    fn target(&self, x: f64, y: f64, rel: bool) -> Point {
        if rel {
            Point::new(self.cur.x + x, self.cur.y + y)
        } else {
            Point::new(x, y)
        }
    }

    /// Close the open subpath, appending its start point when the last
    /// emitted point differs, and emit it. No-op when nothing is open.
    fn close_subpath(&mut self) {
        if let Some(start) = self.start.take() {
            if !self.sub.is_empty() {
                if *self.sub.last().unwrap() != start {
                    self.sub.push(start);
                }
                trace!("closed subpath with {} points", self.sub.len());
                self.subs.push(std::mem::take(&mut self.sub));
            }
        }
        self.sub.clear();
        self.last_ctrl = None;
    }

    fn run(mut self) -> Result<Path, RenderError> {
        let mut cmd: Option<char> = None;
        while self.pos < self.tokens.len() {
            if let Token::Command(c) = self.tokens[self.pos] {
                cmd = Some(c);
                self.pos += 1;
            }
            let c = cmd.ok_or_else(|| {
                RenderError::MalformedPath("coordinate data before any command".into())
            })?;

            match c {
                'M' | 'm' => {
                    let rel = c == 'm';
                    let x = self.number()?;
                    let y = self.number()?;
                    self.cur = self.target(x, y, rel);
                    // A new subpath force-closes the previous one.
                    self.close_subpath();
                    self.start = Some(self.cur);
                    self.sub.push(self.cur);
                    // Any further groups are implicit linetos in the same mode.
                    cmd = Some(if rel { 'l' } else { 'L' });
                }
                'L' | 'l' => {
                    let rel = c == 'l';
                    while self.more_coords() {
                        let x = self.number()?;
                        let y = self.number()?;
                        self.cur = self.target(x, y, rel);
                        self.sub.push(self.cur);
                    }
                    self.last_ctrl = None;
                }
                'H' | 'h' => {
                    let rel = c == 'h';
                    while self.more_coords() {
                        let x = self.number()?;
                        let nx = if rel { self.cur.x + x } else { x };
                        self.cur = Point::new(nx, self.cur.y);
                        self.sub.push(self.cur);
                    }
                    self.last_ctrl = None;
                }
                'V' | 'v' => {
                    let rel = c == 'v';
                    while self.more_coords() {
                        let y = self.number()?;
                        let ny = if rel { self.cur.y + y } else { y };
                        self.cur = Point::new(self.cur.x, ny);
                        self.sub.push(self.cur);
                    }
                    self.last_ctrl = None;
                }
                'C' | 'c' => {
                    let rel = c == 'c';
                    while self.more_coords() {
                        let (x1, y1) = (self.number()?, self.number()?);
                        let (x2, y2) = (self.number()?, self.number()?);
                        let (x3, y3) = (self.number()?, self.number()?);
                        let p1 = self.target(x1, y1, rel);
                        let p2 = self.target(x2, y2, rel);
                        let p3 = self.target(x3, y3, rel);
                        self.emit_cubic(p1, p2, p3);
                    }
                }
                'S' | 's' => {
                    let rel = c == 's';
                    while self.more_coords() {
                        let (x2, y2) = (self.number()?, self.number()?);
                        let (x3, y3) = (self.number()?, self.number()?);
                        // Reflect the previous cubic's second control point
                        // through the current point; fall back to the current
                        // point when the previous segment was not a cubic.
                        let p1 = match self.last_ctrl {
                            Some(ctrl) => Point::new(
                                2.0 * self.cur.x - ctrl.x,
                                2.0 * self.cur.y - ctrl.y,
                            ),
                            None => self.cur,
                        };
                        let p2 = self.target(x2, y2, rel);
                        let p3 = self.target(x3, y3, rel);
                        self.emit_cubic(p1, p2, p3);
                    }
                }
                'Z' | 'z' => {
                    self.close_subpath();
                    cmd = None;
                }
                other => return Err(RenderError::UnsupportedCommand(other)),
            }
        }
        // End of input force-closes a still-open subpath.
        self.close_subpath();
        Ok(Path { subpaths: self.subs })
    }

    /// Flatten one cubic segment onto the open subpath and advance the pen.
    fn emit_cubic(&mut self, p1: Point, p2: Point, p3: Point) {
        Cubic::new(self.cur, p1, p2, p3).flatten(CURVE_TOLERANCE, &mut self.sub);
        self.cur = p3;
        self.last_ctrl = Some(p2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed(sub: &[Point]) -> bool {
        sub.first() == sub.last()
    }

    #[test]
    fn simple_triangle_closes_explicitly() {
        let path = Path::parse("M0 0 L10 0 L10 10 Z").unwrap();
        assert_eq!(path.subpaths.len(), 1);
        let sub = &path.subpaths[0];
        assert!(closed(sub));
        assert_eq!(sub.len(), 4);
        assert_eq!(sub[0], Point::new(0.0, 0.0));
        assert_eq!(sub[2], Point::new(10.0, 10.0));
    }

    #[test]
    fn end_of_input_force_closes() {
        let path = Path::parse("M0 0 L10 0 L10 10").unwrap();
        assert_eq!(path.subpaths.len(), 1);
        assert!(closed(&path.subpaths[0]));
        assert_eq!(path.subpaths[0].len(), 4);
    }

    #[test]
    fn new_moveto_force_closes_previous_subpath() {
        let path = Path::parse("M0 0 L10 0 M20 20 L30 20 Z").unwrap();
        assert_eq!(path.subpaths.len(), 2);
        assert!(closed(&path.subpaths[0]));
        assert!(closed(&path.subpaths[1]));
    }

    #[test]
    fn moveto_extra_groups_are_implicit_linetos() {
        // "m" seeds relative linetos.
        let rel = Path::parse("m1 1 2 0 0 2z").unwrap();
        assert_eq!(
            rel.subpaths[0],
            vec![
                Point::new(1.0, 1.0),
                Point::new(3.0, 1.0),
                Point::new(3.0, 3.0),
                Point::new(1.0, 1.0),
            ]
        );
        // "M" seeds absolute linetos.
        let abs = Path::parse("M1 1 3 1 3 3z").unwrap();
        assert_eq!(abs.subpaths, rel.subpaths);
    }

    #[test]
    fn repeated_lineto_groups_without_letter() {
        let path = Path::parse("M0 0 l5 0 0 5 -5 0 z").unwrap();
        assert_eq!(path.subpaths[0].len(), 5);
        assert_eq!(path.subpaths[0][3], Point::new(0.0, 5.0));
    }

    #[test]
    fn horizontal_and_vertical_change_one_axis() {
        let path = Path::parse("M1 2 h3 v4 H0 V0 z").unwrap();
        let sub = &path.subpaths[0];
        assert_eq!(sub[1], Point::new(4.0, 2.0));
        assert_eq!(sub[2], Point::new(4.0, 6.0));
        assert_eq!(sub[3], Point::new(0.0, 6.0));
        assert_eq!(sub[4], Point::new(0.0, 0.0));
    }

    #[test]
    fn compact_relative_lexing_matches_spaced() {
        // Signs and repeated decimal points act as separators.
        let compact = Path::parse("m1.5.5-1 .5h-.5z").unwrap();
        let spaced = Path::parse("m 1.5 0.5 -1 0.5 h -0.5 z").unwrap();
        assert_eq!(compact.subpaths, spaced.subpaths);
    }

    #[test]
    fn smooth_cubic_reflects_previous_control() {
        // S reflecting (10,10) about (10,0) gives first control (10,-10);
        // spelling that out with C must produce identical geometry.
        let smooth = Path::parse("M0 0 C0 10 10 10 10 0 S20 -10 20 0").unwrap();
        let explicit = Path::parse("M0 0 C0 10 10 10 10 0 C10 -10 20 -10 20 0").unwrap();
        assert_eq!(smooth.subpaths, explicit.subpaths);
    }

    #[test]
    fn smooth_cubic_after_lineto_uses_current_point() {
        let smooth = Path::parse("M0 0 L5 5 S15 15 20 5").unwrap();
        let explicit = Path::parse("M0 0 L5 5 C5 5 15 15 20 5").unwrap();
        assert_eq!(smooth.subpaths, explicit.subpaths);
    }

    #[test]
    fn cubics_are_flattened_not_retained() {
        let path = Path::parse("M0 0 C0 40 40 40 40 0").unwrap();
        let sub = &path.subpaths[0];
        // More vertices than the 2 endpoints, and none of them is a raw
        // control point.
        assert!(sub.len() > 3);
        assert!(!sub.contains(&Point::new(0.0, 40.0)));
        assert!(!sub.contains(&Point::new(40.0, 40.0)));
    }

    #[test]
    fn coordinate_before_any_command_is_malformed() {
        let err = Path::parse("10 20 L5 5").unwrap_err();
        assert!(matches!(err, RenderError::MalformedPath(_)));
    }

    #[test]
    fn coordinates_after_closepath_are_malformed() {
        let err = Path::parse("M0 0 L1 1 Z 5 5").unwrap_err();
        assert!(matches!(err, RenderError::MalformedPath(_)));
    }

    #[test]
    fn missing_coordinates_are_malformed() {
        assert!(matches!(
            Path::parse("M0").unwrap_err(),
            RenderError::MalformedPath(_)
        ));
        assert!(matches!(
            Path::parse("M0 0 L5").unwrap_err(),
            RenderError::MalformedPath(_)
        ));
        assert!(matches!(
            Path::parse("M0 0 C1 2 3 4 5").unwrap_err(),
            RenderError::MalformedPath(_)
        ));
    }

    #[test]
    fn unsupported_command_names_the_letter() {
        match Path::parse("M0 0 A 5 5 0 0 1 10 10").unwrap_err() {
            RenderError::UnsupportedCommand(c) => assert_eq!(c, 'A'),
            other => panic!("expected UnsupportedCommand, got {other:?}"),
        }
    }

    #[test]
    fn stray_character_is_malformed() {
        assert!(matches!(
            Path::parse("M0 0 %").unwrap_err(),
            RenderError::MalformedPath(_)
        ));
    }

    #[test]
    fn empty_input_yields_empty_path() {
        let path = Path::parse("").unwrap();
        assert!(path.subpaths.is_empty());
        assert!(path.bbox().is_none());
    }

    #[test]
    fn transform_maps_every_point() {
        let mut path = Path::parse("M0 0 L1 0 L1 1 Z").unwrap();
        path.transform(&Affine::new(2.0, 0.0, 0.0, 2.0, 10.0, 20.0));
        let bbox = path.bbox().unwrap();
        assert_eq!(bbox.min_x, 10.0);
        assert_eq!(bbox.min_y, 20.0);
        assert_eq!(bbox.max_x, 12.0);
        assert_eq!(bbox.max_y, 22.0);
    }
}
