//! Parametric suit glyph geometry.
//!
//! Each suit decomposes into a small set of filled primitives inside a
//! `size x size` bounding square. Local icon space is y-up with the origin at
//! the bottom-left corner of the box (the composer flips it into page space),
//! which keeps the glyph constants identical to the print layouts they were
//! tuned on. Generation is pure: same suit + size, same path, every time.

use cardstock_core::SuitKind;
use cardstock_core::geom::{Point, point};

/// A filled primitive in local icon space.
#[derive(Debug, Clone, PartialEq)]
pub enum IconPrimitive {
    /// Closed polygonal sub-path. `closed` is always set by the generator and
    /// asserted by tests; SVG emission relies on it to append `Z`.
    Polygon { points: Vec<Point>, closed: bool },
    Circle { center: Point, radius: f64 },
    Rect { origin: Point, width: f64, height: f64 },
}

/// One suit glyph: an ordered set of primitives, filled with the nonzero
/// winding rule in the caller's color.
#[derive(Debug, Clone, PartialEq)]
pub struct IconPath {
    pub primitives: Vec<IconPrimitive>,
}

impl IconPath {
    /// True when every sub-path is closed. Circles and rects are closed by
    /// construction; polygons carry an explicit flag.
    pub fn is_closed(&self) -> bool {
        self.primitives.iter().all(|p| match p {
            IconPrimitive::Polygon { closed, .. } => *closed,
            IconPrimitive::Circle { .. } | IconPrimitive::Rect { .. } => true,
        })
    }
}

fn polygon(points: Vec<Point>) -> IconPrimitive {
    IconPrimitive::Polygon {
        points,
        closed: true,
    }
}

fn circle(cx: f64, cy: f64, radius: f64) -> IconPrimitive {
    IconPrimitive::Circle {
        center: point(cx, cy),
        radius,
    }
}

fn rect(x: f64, y: f64, width: f64, height: f64) -> IconPrimitive {
    IconPrimitive::Rect {
        origin: point(x, y),
        width,
        height,
    }
}

// Trig helpers are deliberately module-local; the star construction must not
// depend on anything outside this file.
fn polar_xy(radius: f64, angle_deg: f64) -> (f64, f64) {
    let angle = angle_deg.to_radians();
    (radius * angle.cos(), radius * angle.sin())
}

/// Builds the glyph for `kind` in a `size x size` bounding square.
pub fn suit_icon(kind: SuitKind, size: f64) -> IconPath {
    let s = size;
    let primitives = match kind {
        SuitKind::Diamond => vec![polygon(vec![
            point(s / 2.0, 0.0),
            point(0.0, s / 2.0),
            point(s / 2.0, s),
            point(s, s / 2.0),
        ])],
        SuitKind::Heart => vec![
            circle(s / 3.0, 2.0 * s / 3.0, s / 4.0),
            circle(2.0 * s / 3.0, 2.0 * s / 3.0, s / 4.0),
            polygon(vec![
                point(s / 6.0, s / 2.0),
                point(5.0 * s / 6.0, s / 2.0),
                point(s / 2.0, 0.0),
            ]),
        ],
        SuitKind::Spade => vec![
            circle(s / 2.0, 2.0 * s / 3.0, s / 3.0),
            stem(s),
        ],
        SuitKind::Club => vec![
            circle(s / 2.0, 2.0 * s / 3.0, s / 6.0),
            circle(s / 3.0, s / 2.0, s / 6.0),
            circle(2.0 * s / 3.0, s / 2.0, s / 6.0),
            stem(s),
        ],
        SuitKind::Star => vec![polygon(star_points(s))],
        SuitKind::Crown => {
            // Base band plus three equally spaced points on top.
            let mut prims = vec![rect(0.0, 0.0, s, s / 3.0)];
            for i in 0..3 {
                prims.push(rect(i as f64 * s / 3.0, s / 3.0, s / 6.0, s / 2.0));
            }
            prims
        }
        SuitKind::Shield => vec![polygon(vec![
            point(s / 2.0, 0.0),
            point(0.0, s / 3.0),
            point(0.0, 2.0 * s / 3.0),
            point(s / 2.0, s),
            point(s, 2.0 * s / 3.0),
            point(s, s / 3.0),
        ])],
        SuitKind::Lightning => vec![polygon(vec![
            point(s / 3.0, 0.0),
            point(0.0, s / 2.0),
            point(s / 3.0, s / 2.0),
            point(0.0, s),
            point(2.0 * s / 3.0, s / 2.0),
            point(s / 3.0, s / 2.0),
        ])],
    };
    IconPath { primitives }
}

/// Vertical stem shared by spade and club: width s/5, height s/2, left edge
/// at x = 2s/5.
fn stem(s: f64) -> IconPrimitive {
    rect(2.0 * s / 5.0, 0.0, s / 5.0, s / 2.0)
}

/// 10-vertex alternating-radius star polygon. Vertices step 36 degrees,
/// starting 90 degrees before the positive x axis; even vertices sit on the
/// outer radius (s/2), odd ones on the inner (s/4).
fn star_points(s: f64) -> Vec<Point> {
    let center = s / 2.0;
    (0..10)
        .map(|i| {
            let radius = if i % 2 == 0 { s / 2.0 } else { s / 4.0 };
            let (dx, dy) = polar_xy(radius, i as f64 * 36.0 - 90.0);
            point(center + dx, center + dy)
        })
        .collect()
}
