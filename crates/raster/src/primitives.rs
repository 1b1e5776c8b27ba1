//! Shape rasterization primitives.
//!
//! All primitives clip silently against the surface bounds; coordinates
//! wholly or partially outside the surface are legitimate inputs, not
//! errors. Filled shapes and strokes blend source-over, so the caller's
//! color alpha is honored; only `Surface::put_pixel` stores exactly.
//!
//! Two levels of quality are provided, matching how the HUD uses them:
//!
//! - Aliased fills (`fill_rect`, `fill_ellipse`, markers): hard-edged,
//!   one blend per covered pixel.
//! - Anti-aliased coverage rendering (`fill_triangle_aa`,
//!   `stroke_line_aa`): per-pixel fractional coverage folded into the
//!   source alpha.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::layout::PixelLayout;
use crate::surface::Surface;

/// Fill the axis-aligned rectangle with corners (x1, y1) and (x2, y2),
/// both inclusive. Corners may be given in any order.
pub fn fill_rect<L, C>(surface: &mut Surface<L, C>, x1: i32, y1: i32, x2: i32, y2: i32, color: Color)
where
    L: PixelLayout,
    C: AsRef<[u8]> + AsMut<[u8]>,
{
    let (x_lo, x_hi) = (x1.min(x2).max(0), x1.max(x2).min(surface.width() as i32 - 1));
    let (y_lo, y_hi) = (y1.min(y2).max(0), y1.max(y2).min(surface.height() as i32 - 1));
    if x_lo > x_hi || y_lo > y_hi {
        return;
    }
    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            surface.blend_pixel(x, y, color, 255);
        }
    }
}

/// Fill the axis-aligned ellipse centered at (cx, cy) with radii rx, ry.
/// Aliased scanline fill; negative radii draw nothing, a zero radius
/// degenerates to a line.
pub fn fill_ellipse<L, C>(surface: &mut Surface<L, C>, cx: i32, cy: i32, rx: i32, ry: i32, color: Color)
where
    L: PixelLayout,
    C: AsRef<[u8]> + AsMut<[u8]>,
{
    if rx < 0 || ry < 0 {
        return;
    }
    for dy in -ry..=ry {
        let t = if ry == 0 {
            1.0
        } else {
            1.0 - (dy as f64 * dy as f64) / (ry as f64 * ry as f64)
        };
        if t < 0.0 {
            continue;
        }
        let half = (rx as f64 * t.sqrt()).floor() as i32;
        let y = cy.saturating_add(dy);
        fill_rect(
            surface,
            cx.saturating_sub(half),
            y,
            cx.saturating_add(half),
            y,
            color,
        );
    }
}

/// Number of subsamples per pixel axis for coverage estimation.
const AA_GRID: i32 = 4;

/// Fill the triangle (x1, y1)-(x2, y2)-(x3, y3) with anti-aliased edges.
///
/// Coverage is estimated on a 4x4 subsample grid per pixel, then shaped
/// by the power-curve `coverage ^ (gamma * 2.0)`. Large gamma values
/// crush partial coverage toward zero, so the unset-gamma sentinel used
/// by the drawing state renders effectively hard edges; small values
/// soften them. Pixels with zero geometric coverage are never lifted by
/// the curve. Degenerate (zero-area) triangles draw nothing.
pub fn fill_triangle_aa<L, C>(
    surface: &mut Surface<L, C>,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    x3: i32,
    y3: i32,
    color: Color,
    gamma: i32,
) where
    L: PixelLayout,
    C: AsRef<[u8]> + AsMut<[u8]>,
{
    let (ax, ay) = (x1 as f64, y1 as f64);
    let (bx, by) = (x2 as f64, y2 as f64);
    let (cx, cy) = (x3 as f64, y3 as f64);

    // Twice the signed area; orientation sign normalizes the edge tests.
    let area = (bx - ax) * (cy - ay) - (cx - ax) * (by - ay);
    if area == 0.0 {
        return;
    }
    let sign = if area > 0.0 { 1.0 } else { -1.0 };

    let inside = |px: f64, py: f64| -> bool {
        let e0 = ((bx - ax) * (py - ay) - (px - ax) * (by - ay)) * sign;
        let e1 = ((cx - bx) * (py - by) - (px - bx) * (cy - by)) * sign;
        let e2 = ((ax - cx) * (py - cy) - (px - cx) * (ay - cy)) * sign;
        e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0
    };

    let x_lo = x1.min(x2).min(x3).max(0);
    let x_hi = (x1.max(x2).max(x3)).min(surface.width() as i32 - 1);
    let y_lo = y1.min(y2).min(y3).max(0);
    let y_hi = (y1.max(y2).max(y3)).min(surface.height() as i32 - 1);

    let exponent = gamma as f64 * 2.0;
    let samples = (AA_GRID * AA_GRID) as f64;

    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            let mut hits = 0;
            for sy in 0..AA_GRID {
                for sx in 0..AA_GRID {
                    let px = x as f64 + (sx as f64 + 0.5) / AA_GRID as f64;
                    let py = y as f64 + (sy as f64 + 0.5) / AA_GRID as f64;
                    if inside(px, py) {
                        hits += 1;
                    }
                }
            }
            if hits == 0 {
                continue;
            }
            let coverage = hits as f64 / samples;
            let shaped = if coverage >= 1.0 {
                1.0
            } else {
                coverage.powf(exponent)
            };
            let cover = (shaped * 255.0).round().clamp(0.0, 255.0) as u8;
            surface.blend_pixel(x, y, color, cover);
        }
    }
}

/// Stroke an anti-aliased line of the given width from (x1, y1) to
/// (x2, y2), with round end caps.
///
/// Integer endpoints address pixel centers, so a width-1.0 horizontal
/// stroke lands crisply on a single row. Coverage comes from the
/// distance of each pixel center to the segment, which yields round caps
/// for free and lets the loop clip its bounding box to the surface, so
/// endpoints far outside the surface are safe.
pub fn stroke_line_aa<L, C>(
    surface: &mut Surface<L, C>,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    width: f64,
    color: Color,
) where
    L: PixelLayout,
    C: AsRef<[u8]> + AsMut<[u8]>,
{
    if !width.is_finite() || width < 0.0 {
        return;
    }
    let (ax, ay) = (x1 as f64 + 0.5, y1 as f64 + 0.5);
    let (bx, by) = (x2 as f64 + 0.5, y2 as f64 + 0.5);
    let half = width / 2.0;

    let reach = (half.ceil() as i32).saturating_add(1);
    let x_lo = x1.min(x2).saturating_sub(reach).max(0);
    let x_hi = x1.max(x2).saturating_add(reach).min(surface.width() as i32 - 1);
    let y_lo = y1.min(y2).saturating_sub(reach).max(0);
    let y_hi = y1.max(y2).saturating_add(reach).min(surface.height() as i32 - 1);
    if x_lo > x_hi || y_lo > y_hi {
        return;
    }

    let (dx, dy) = (bx - ax, by - ay);
    let len_sq = dx * dx + dy * dy;

    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
            // Distance from the pixel center to the closest point on the
            // segment (the endpoints when the projection falls outside).
            let t = if len_sq == 0.0 {
                0.0
            } else {
                (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
            };
            let (qx, qy) = (ax + t * dx, ay + t * dy);
            let dist = ((px - qx) * (px - qx) + (py - qy) * (py - qy)).sqrt();
            let coverage = (half + 0.5 - dist).clamp(0.0, 1.0);
            if coverage > 0.0 {
                surface.blend_pixel(x, y, color, (coverage * 255.0).round() as u8);
            }
        }
    }
}

/// The fixed set of marker glyph shapes.
///
/// Any integer selects a marker deterministically through
/// [`MarkerKind::from_index`]; out-of-range and negative values wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    Square,
    Circle,
    Cross,
    X,
    Diamond,
    Dot,
}

impl MarkerKind {
    /// Number of marker kinds, the modulus of the wraparound law.
    pub const COUNT: i32 = 6;

    /// Map any integer onto a marker kind. `rem_euclid` keeps negative
    /// indices well-defined, so `kind` and `kind + COUNT` always agree.
    pub fn from_index(kind: i32) -> Self {
        match kind.rem_euclid(Self::COUNT) {
            0 => MarkerKind::Square,
            1 => MarkerKind::Circle,
            2 => MarkerKind::Cross,
            3 => MarkerKind::X,
            4 => MarkerKind::Diamond,
            _ => MarkerKind::Dot,
        }
    }
}

/// Draw a marker glyph centered at (x, y). `size` is the half-extent in
/// pixels; non-positive sizes degenerate to a single pixel.
///
/// Coordinate arithmetic saturates, so markers near the i32 extremes
/// clip away like any other offscreen draw instead of overflowing.
pub fn draw_marker<L, C>(
    surface: &mut Surface<L, C>,
    x: i32,
    y: i32,
    size: i32,
    kind: MarkerKind,
    color: Color,
) where
    L: PixelLayout,
    C: AsRef<[u8]> + AsMut<[u8]>,
{
    let h = size.max(0);
    match kind {
        MarkerKind::Square => fill_rect(
            surface,
            x.saturating_sub(h),
            y.saturating_sub(h),
            x.saturating_add(h),
            y.saturating_add(h),
            color,
        ),
        MarkerKind::Circle => fill_ellipse(surface, x, y, h, h, color),
        MarkerKind::Cross => {
            fill_rect(surface, x.saturating_sub(h), y, x.saturating_add(h), y, color);
            fill_rect(surface, x, y.saturating_sub(h), x, y.saturating_add(h), color);
        }
        MarkerKind::X => {
            for d in -h..=h {
                surface.blend_pixel(x.saturating_add(d), y.saturating_add(d), color, 255);
                if d != 0 {
                    surface.blend_pixel(x.saturating_add(d), y.saturating_sub(d), color, 255);
                }
            }
        }
        MarkerKind::Diamond => {
            for dy in -h..=h {
                let span = h - dy.abs();
                let row = y.saturating_add(dy);
                fill_rect(
                    surface,
                    x.saturating_sub(span),
                    row,
                    x.saturating_add(span),
                    row,
                    color,
                );
            }
        }
        MarkerKind::Dot => {
            // Half the nominal extent; size 0 and 1 collapse to one pixel.
            let r = h / 2;
            fill_ellipse(surface, x, y, r, r, color);
        }
    }
}
