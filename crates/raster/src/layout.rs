//! Pixel layout policies.
//!
//! Each supported in-memory pixel format implements [`PixelLayout`], a
//! compile-time policy describing how to encode a [`Color`] into buffer
//! bytes, decode it back, and source-over blend against it. Drawing
//! primitives are generic over the layout, so the per-format inner loops
//! are monomorphized with no dispatch inside them; runtime polymorphism
//! happens one level up, at the draw-target boundary.
//!
//! Formats match what the emulator's video pipeline actually hands us:
//! 32-bit RGBA/BGRA overlay buffers and 16-bit RGB565 screen buffers.

use crate::color::Color;

/// A pixel encoding policy for one in-memory format.
///
/// `write`/`read` are exact store/load (no blending); `blend` is
/// source-over with a 0-255 coverage factor folded into the source alpha.
/// All three operate on exactly [`Self::BYTES_PER_PIXEL`] bytes.
pub trait PixelLayout {
    /// Bytes occupied by one pixel in this layout.
    const BYTES_PER_PIXEL: usize;

    /// Human-readable layout name, for logs and debugging.
    const NAME: &'static str;

    /// Encode `color` into `dst` exactly (no blending).
    fn write(dst: &mut [u8], color: Color);

    /// Decode the pixel in `src` to the nearest representable RGBA8 value.
    fn read(src: &[u8]) -> Color;

    /// Source-over blend `color` onto the pixel in `px`, scaling the
    /// source alpha by `cover` (0 = invisible, 255 = full).
    #[inline]
    fn blend(px: &mut [u8], color: Color, cover: u8) {
        if cover == 0 || color.a == 0 {
            return;
        }
        let dst = Self::read(px);
        Self::write(px, color.over(dst, cover));
    }
}

/// 32-bit RGBA, byte order R,G,B,A. The overlay buffer format.
#[derive(Debug)]
pub struct Rgba8888;

impl PixelLayout for Rgba8888 {
    const BYTES_PER_PIXEL: usize = 4;
    const NAME: &'static str = "RGBA8888";

    #[inline]
    fn write(dst: &mut [u8], c: Color) {
        dst[0] = c.r;
        dst[1] = c.g;
        dst[2] = c.b;
        dst[3] = c.a;
    }

    #[inline]
    fn read(src: &[u8]) -> Color {
        Color::new(src[0], src[1], src[2], src[3])
    }
}

/// 32-bit BGRA, byte order B,G,R,A. Matches little-endian ARGB word
/// framebuffers (0xAARRGGBB in a `u32`).
pub struct Bgra8888;

impl PixelLayout for Bgra8888 {
    const BYTES_PER_PIXEL: usize = 4;
    const NAME: &'static str = "BGRA8888";

    #[inline]
    fn write(dst: &mut [u8], c: Color) {
        dst[0] = c.b;
        dst[1] = c.g;
        dst[2] = c.r;
        dst[3] = c.a;
    }

    #[inline]
    fn read(src: &[u8]) -> Color {
        Color::new(src[2], src[1], src[0], src[3])
    }
}

/// 16-bit RGB565, little-endian, no alpha channel.
///
/// Writes quantize each channel by truncation to 5/6/5 bits and drop
/// alpha. Reads expand channels by bit replication (the standard rounding
/// rule: the high bits are repeated into the low bits, so 0x1F maps back
/// to 0xFF) and always report alpha 255. Blending therefore treats the
/// destination as opaque.
#[derive(Debug)]
pub struct Rgb565;

impl PixelLayout for Rgb565 {
    const BYTES_PER_PIXEL: usize = 2;
    const NAME: &'static str = "RGB565";

    #[inline]
    fn write(dst: &mut [u8], c: Color) {
        let word: u16 =
            ((c.r as u16 >> 3) << 11) | ((c.g as u16 >> 2) << 5) | (c.b as u16 >> 3);
        dst[0] = (word & 0xFF) as u8;
        dst[1] = (word >> 8) as u8;
    }

    #[inline]
    fn read(src: &[u8]) -> Color {
        let word = src[0] as u16 | ((src[1] as u16) << 8);
        let r5 = ((word >> 11) & 0x1F) as u8;
        let g6 = ((word >> 5) & 0x3F) as u8;
        let b5 = (word & 0x1F) as u8;
        Color::new(
            (r5 << 3) | (r5 >> 2),
            (g6 << 2) | (g6 >> 4),
            (b5 << 3) | (b5 >> 2),
            255,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba8888_roundtrip_exact() {
        let c = Color::new(12, 34, 56, 78);
        let mut px = [0u8; 4];
        Rgba8888::write(&mut px, c);
        assert_eq!(Rgba8888::read(&px), c);
    }

    #[test]
    fn test_bgra8888_matches_argb_word() {
        let c = Color::new(0xBB, 0xCC, 0xDD, 0xAA);
        let mut px = [0u8; 4];
        Bgra8888::write(&mut px, c);
        let word = u32::from_le_bytes(px);
        assert_eq!(word, 0xAABBCCDD);
        assert_eq!(Bgra8888::read(&px), c);
    }

    #[test]
    fn test_rgb565_extremes_roundtrip() {
        for c in [
            Color::new(255, 255, 255, 255),
            Color::new(0, 0, 0, 255),
            Color::new(255, 0, 0, 255),
            Color::new(0, 255, 0, 255),
            Color::new(0, 0, 255, 255),
        ] {
            let mut px = [0u8; 2];
            Rgb565::write(&mut px, c);
            assert_eq!(Rgb565::read(&px), c);
        }
    }

    #[test]
    fn test_rgb565_read_is_opaque() {
        let mut px = [0u8; 2];
        Rgb565::write(&mut px, Color::new(10, 20, 30, 0));
        assert_eq!(Rgb565::read(&px).a, 255);
    }

    #[test]
    fn test_rgb565_bit_replication() {
        let mut px = [0u8; 2];
        // 0xF8 truncates to r5 = 0x1F which must expand back to 0xFF
        Rgb565::write(&mut px, Color::new(0xF8, 0, 0, 255));
        assert_eq!(Rgb565::read(&px).r, 0xFF);
    }

    #[test]
    fn test_blend_full_cover_opaque_replaces() {
        let mut px = [0u8; 4];
        Rgba8888::write(&mut px, Color::new(1, 2, 3, 255));
        Rgba8888::blend(&mut px, Color::new(9, 8, 7, 255), 255);
        assert_eq!(Rgba8888::read(&px), Color::new(9, 8, 7, 255));
    }

    #[test]
    fn test_blend_zero_cover_is_noop() {
        let mut px = [0u8; 4];
        Rgba8888::write(&mut px, Color::new(1, 2, 3, 4));
        Rgba8888::blend(&mut px, Color::new(9, 8, 7, 255), 0);
        assert_eq!(Rgba8888::read(&px), Color::new(1, 2, 3, 4));
    }
}
