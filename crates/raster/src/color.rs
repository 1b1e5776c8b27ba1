//! RGBA8 color value used by all drawing state and primitives.

use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGBA color.
///
/// This is the single color representation the drawing layer traffics in;
/// reduced-precision pixel layouts convert to and from it at the buffer
/// boundary. The default is opaque black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black, the clear value for overlay surfaces.
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    /// Opaque black, the initial render-state color.
    pub const BLACK: Color = Color::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from unvalidated integer channels.
    ///
    /// Channels are clamped to [0, 255]. Callers (HUD code, script
    /// bindings) routinely pass animated values that overshoot; clamping
    /// is the documented policy rather than wrapping or erroring.
    pub fn from_i32(r: i32, g: i32, b: i32, a: i32) -> Self {
        #[inline]
        fn clamp_channel(v: i32) -> u8 {
            v.clamp(0, 255) as u8
        }
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
            a: clamp_channel(a),
        }
    }

    /// Pack into ARGB8888 (0xAARRGGBB), the composite destination format.
    #[inline]
    pub fn to_argb32(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpack from ARGB8888 (0xAARRGGBB).
    #[inline]
    pub fn from_argb32(px: u32) -> Self {
        Self {
            a: ((px >> 24) & 0xFF) as u8,
            r: ((px >> 16) & 0xFF) as u8,
            g: ((px >> 8) & 0xFF) as u8,
            b: (px & 0xFF) as u8,
        }
    }

    /// Source-over blend of `self` onto `dst`, with `cover` (0-255)
    /// multiplied into the source alpha first.
    ///
    /// Arithmetic is the usual integer approximation of `c/255` with
    /// round-to-nearest (`+127`).
    #[inline]
    pub fn over(self, dst: Color, cover: u8) -> Color {
        let a = (self.a as u32 * cover as u32 + 127) / 255;
        if a == 0 {
            return dst;
        }
        if a == 255 {
            return Color::new(self.r, self.g, self.b, 255);
        }
        let inv = 255 - a;
        let mix = |s: u8, d: u8| -> u8 { ((s as u32 * a + d as u32 * inv + 127) / 255) as u8 };
        let out_a = (a + (dst.a as u32 * inv + 127) / 255).min(255) as u8;
        Color {
            r: mix(self.r, dst.r),
            g: mix(self.g, dst.g),
            b: mix(self.b, dst.b),
            a: out_a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq!(Color::default(), Color::new(0, 0, 0, 255));
    }

    #[test]
    fn test_from_i32_clamps() {
        let c = Color::from_i32(-10, 300, 128, 256);
        assert_eq!(c, Color::new(0, 255, 128, 255));
    }

    #[test]
    fn test_argb32_roundtrip() {
        let c = Color::new(0xBB, 0xCC, 0xDD, 0xAA);
        assert_eq!(c.to_argb32(), 0xAABBCCDD);
        assert_eq!(Color::from_argb32(0xAABBCCDD), c);
    }

    #[test]
    fn test_over_opaque_source_replaces() {
        let src = Color::new(200, 10, 20, 255);
        let dst = Color::new(1, 2, 3, 255);
        let out = src.over(dst, 255);
        assert_eq!((out.r, out.g, out.b), (200, 10, 20));
        assert_eq!(out.a, 255);
    }

    #[test]
    fn test_over_zero_cover_is_identity() {
        let src = Color::new(200, 10, 20, 255);
        let dst = Color::new(1, 2, 3, 40);
        assert_eq!(src.over(dst, 0), dst);
    }

    #[test]
    fn test_over_half_cover_mixes() {
        let src = Color::new(255, 255, 255, 255);
        let dst = Color::new(0, 0, 0, 255);
        let out = src.over(dst, 128);
        // 128/255 coverage of white over black
        assert!((out.r as i32 - 128).abs() <= 1);
        assert_eq!(out.a, 255);
    }

    #[test]
    fn test_serde_roundtrip() {
        let c = Color::new(1, 2, 3, 4);
        let json = serde_json::to_string(&c).expect("serialize");
        let back: Color = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, c);
    }
}
