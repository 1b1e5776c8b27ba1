//! Fixed-cell bitmap glyph rendering.
//!
//! Fonts are opaque resources to the drawing layer: a cell size, an
//! integer pixel scale, and a glyph lookup returning one byte of row
//! bits per cell row (MSB = leftmost column). Storage and name-based
//! lookup of the actual font set live in the OSD crate; this module only
//! knows how to blit.

use crate::color::Color;
use crate::layout::PixelLayout;
use crate::surface::Surface;

/// A fixed-cell bitmap font resource.
///
/// `glyph` returns `None` for characters the font does not cover; such
/// characters still advance the cursor by one (blank) cell. Cells are at
/// most 8 pixels wide. `scale` is an integer magnification applied to
/// both axes at blit time.
#[derive(Clone, Copy)]
pub struct BitmapFont {
    pub name: &'static str,
    pub cell_width: u32,
    pub cell_height: u32,
    pub scale: u32,
    pub glyph: fn(char) -> Option<&'static [u8]>,
}

impl BitmapFont {
    /// Horizontal cursor advance per character, in pixels. Saturates for
    /// malformed (absurdly large) cell or scale values.
    pub fn advance(&self) -> i32 {
        self.cell_width
            .saturating_mul(self.scale.max(1))
            .min(i32::MAX as u32) as i32
    }
}

impl std::fmt::Debug for BitmapFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitmapFont")
            .field("name", &self.name)
            .field("cell_width", &self.cell_width)
            .field("cell_height", &self.cell_height)
            .field("scale", &self.scale)
            .finish()
    }
}

/// Draw `text` as a single row of glyph cells with its top-left corner
/// at (x, y) in logical (y-down) space.
///
/// `flip_y` reconciles logical space against bottom-up row storage:
/// when true (the normal case for this pipeline) glyph rows advance
/// downward from `y`; when false they advance upward. Newlines are
/// skipped; there is no wrapping. Pixels falling outside the surface
/// are clipped silently.
pub fn draw_text<L, C>(
    surface: &mut Surface<L, C>,
    font: &BitmapFont,
    x: i32,
    y: i32,
    text: &str,
    color: Color,
    flip_y: bool,
) where
    L: PixelLayout,
    C: AsRef<[u8]> + AsMut<[u8]>,
{
    // The font's public fields carry the <=8-wide invariant only by
    // documentation; clamp here so a malformed font clips instead of
    // shifting out of range. Coordinate math saturates for the same
    // reason the shape primitives' does: any integer anchor is legal.
    let scale = font.scale.clamp(1, 1024) as i32;
    let cell_width = font.cell_width.min(8);
    let mut cursor_x = x;

    for ch in text.chars() {
        if ch == '\n' {
            continue;
        }
        if let Some(rows) = (font.glyph)(ch) {
            for (row, &bits) in rows.iter().enumerate().take(font.cell_height as usize) {
                for col in 0..cell_width {
                    if (bits >> (7 - col)) & 1 == 0 {
                        continue;
                    }
                    let gx = cursor_x.saturating_add(col as i32 * scale);
                    let dy = (row as i32).saturating_mul(scale);
                    let gy = if flip_y {
                        y.saturating_add(dy)
                    } else {
                        y.saturating_sub(dy)
                    };
                    for sy in 0..scale {
                        for sx in 0..scale {
                            surface.blend_pixel(
                                gx.saturating_add(sx),
                                gy.saturating_add(sy),
                                color,
                                255,
                            );
                        }
                    }
                }
            }
        }
        cursor_x = cursor_x.saturating_add(font.advance());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rgba8888;

    const WHITE: Color = Color::new(255, 255, 255, 255);

    // Minimal 2x2 test font: '#' is a full cell, everything else is
    // uncovered.
    fn test_glyph(c: char) -> Option<&'static [u8]> {
        match c {
            '#' => Some(&[0b1100_0000, 0b1100_0000]),
            _ => None,
        }
    }

    const TEST_FONT: BitmapFont = BitmapFont {
        name: "test2x2",
        cell_width: 2,
        cell_height: 2,
        scale: 1,
        glyph: test_glyph,
    };

    fn surface_8x8() -> Surface<Rgba8888, Vec<u8>> {
        Surface::alloc(8, 8)
    }

    #[test]
    fn test_full_cell_glyph_fills_cell() {
        let mut s = surface_8x8();
        draw_text(&mut s, &TEST_FONT, 1, 1, "#", WHITE, true);
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            assert_eq!(s.get_pixel(x, y), Some(WHITE));
        }
        assert_eq!(s.get_pixel(3, 1), Some(Color::TRANSPARENT));
        assert_eq!(s.get_pixel(1, 3), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_uncovered_chars_advance_cursor() {
        let mut s = surface_8x8();
        draw_text(&mut s, &TEST_FONT, 0, 0, ".#", WHITE, true);
        // '.' is a blank cell, so the '#' starts at x = 2
        assert_eq!(s.get_pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(s.get_pixel(2, 0), Some(WHITE));
    }

    #[test]
    fn test_flip_direction() {
        let mut down = surface_8x8();
        let mut up = surface_8x8();
        draw_text(&mut down, &TEST_FONT, 0, 4, "#", WHITE, true);
        draw_text(&mut up, &TEST_FONT, 0, 4, "#", WHITE, false);
        // Flipped text puts row 1 above the anchor instead of below
        assert_eq!(down.get_pixel(0, 5), Some(WHITE));
        assert_eq!(down.get_pixel(0, 3), Some(Color::TRANSPARENT));
        assert_eq!(up.get_pixel(0, 3), Some(WHITE));
        assert_eq!(up.get_pixel(0, 5), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_scale_doubles_cell() {
        let scaled = BitmapFont {
            scale: 2,
            ..TEST_FONT
        };
        let mut s = surface_8x8();
        draw_text(&mut s, &scaled, 0, 0, "#", WHITE, true);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(s.get_pixel(x, y), Some(WHITE), "scaled pixel ({x},{y})");
            }
        }
        assert_eq!(s.get_pixel(4, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_overwide_cell_width_is_clamped() {
        // A hand-built font can claim any cell width; columns past the
        // 8 bits of row data must clip, not shift out of range.
        let wide = BitmapFont {
            cell_width: 16,
            ..TEST_FONT
        };
        let mut s = surface_8x8();
        draw_text(&mut s, &wide, 0, 0, "#", WHITE, true);
        assert_eq!(s.get_pixel(0, 0), Some(WHITE));
    }

    #[test]
    fn test_extreme_anchor_never_overflows() {
        let mut s = surface_8x8();
        draw_text(&mut s, &TEST_FONT, i32::MAX, i32::MAX, "###", WHITE, true);
        draw_text(&mut s, &TEST_FONT, i32::MIN, i32::MIN, "###", WHITE, false);
        assert!(s.bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_offscreen_text_clips_silently() {
        let mut s = surface_8x8();
        draw_text(&mut s, &TEST_FONT, -1, -1, "##", WHITE, true);
        // Only the in-bounds fragment is drawn
        assert_eq!(s.get_pixel(0, 0), Some(WHITE));
        draw_text(&mut s, &TEST_FONT, 100, 100, "#", WHITE, true);
    }
}
