//! The polymorphic draw target and its per-pixel-layout implementation.
//!
//! [`DrawTarget`] is the contract consumed by HUD code and script
//! bindings: state setters plus primitive draws, none of which take the
//! surface as a parameter. [`PixelTarget`] is the one generic
//! implementation; a concrete instantiation exists per supported pixel
//! layout and is exposed behind the trait for runtime selection, so the
//! per-format inner loops stay monomorphized while call sites remain
//! layout-agnostic.

use emu_raster::primitives::{
    draw_marker, fill_ellipse, fill_rect, fill_triangle_aa, stroke_line_aa,
};
use emu_raster::text::draw_text;
use emu_raster::{BitmapFont, Color, MarkerKind, PixelLayout, Surface, SurfaceError};

use crate::fonts;

/// Gamma value meaning "never set": high enough that the triangle
/// rasterizer's power curve crushes all partial coverage, i.e. hard
/// edges until a script explicitly softens them.
pub const UNSET_GAMMA: i32 = 99999;

/// The persistent drawing context of one target.
///
/// Mutated only through the target's state setters and read by every
/// primitive at call time; nothing resets it between calls.
#[derive(Debug, Clone, Copy)]
pub struct RenderState {
    pub color: Color,
    pub gamma: i32,
    pub font: Option<&'static BitmapFont>,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            gamma: UNSET_GAMMA,
            font: None,
        }
    }
}

/// A drawing surface with persistent render state, polymorphic over the
/// underlying pixel layout.
///
/// Every operation mutates the target's own surface in place. Draw-time
/// failure modes (out-of-bounds coordinates, no font set, out-of-range
/// marker kinds) are silent no-ops; see the crate docs for the
/// rationale.
pub trait DrawTarget {
    /// Store the drawing color. Channels are clamped to [0, 255].
    fn set_color(&mut self, r: i32, g: i32, b: i32, a: i32);

    /// Store the gamma control. Only the filled-triangle rasterizer
    /// consumes it; all other primitives ignore gamma.
    fn set_gamma(&mut self, gamma: i32);

    /// Resolve `name` against the font table and store the handle. An
    /// unknown name stores no font, which makes `render_text` a no-op.
    fn set_font(&mut self, name: &str);

    /// Store the current color exactly at (x, y); no blending.
    fn set_pixel(&mut self, x: i32, y: i32);

    /// Reset every pixel to transparent black, ignoring the current
    /// color.
    fn clear(&mut self);

    /// Draw `text` with the current font and color, top-left anchored at
    /// (x, y). No-op when no font is resolved.
    fn render_text(&mut self, x: i32, y: i32, text: &str);

    /// Aliased filled ellipse in the current color.
    fn solid_ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32);

    /// Aliased filled rectangle in the current color, corners inclusive.
    fn solid_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    /// Anti-aliased filled triangle; edge softness follows the stored
    /// gamma.
    fn solid_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32);

    /// Anti-aliased stroked line with round caps; safe with endpoints
    /// outside the surface.
    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, width: f64);

    /// Marker glyph centered at (x, y); `kind` wraps modulo the marker
    /// kind count, so any integer is valid.
    fn marker(&mut self, x: i32, y: i32, size: i32, kind: i32);

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Decode the pixel at (x, y), or `None` outside the surface. This
    /// is the read-back used by compositing.
    fn read_pixel(&self, x: i32, y: i32) -> Option<Color>;

    /// Pixel layout name, for logs and debugging.
    fn name(&self) -> &'static str;
}

/// The generic [`DrawTarget`] implementation over one pixel layout `L`
/// and byte container `C`.
pub struct PixelTarget<L: PixelLayout, C> {
    surface: Surface<L, C>,
    state: RenderState,
}

impl<L: PixelLayout> PixelTarget<L, Vec<u8>> {
    /// Allocate a target owning a zeroed, packed-stride surface.
    pub fn alloc(width: u32, height: u32) -> Self {
        Self::new(Surface::alloc(width, height))
    }
}

impl<L: PixelLayout, C: AsRef<[u8]> + AsMut<[u8]>> PixelTarget<L, C> {
    /// Wrap an existing surface with fresh render state.
    pub fn new(surface: Surface<L, C>) -> Self {
        Self {
            surface,
            state: RenderState::default(),
        }
    }

    /// Bind a caller-owned buffer as a target. The buffer's actual pixel
    /// format matching `L` is the caller's contract; only dimensions and
    /// stride are checked.
    pub fn with_buffer(data: C, width: u32, height: u32, stride: usize) -> Result<Self, SurfaceError> {
        Ok(Self::new(Surface::new(data, width, height, stride)?))
    }

    /// The current render state, for inspection.
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn surface(&self) -> &Surface<L, C> {
        &self.surface
    }
}

impl<L: PixelLayout, C: AsRef<[u8]> + AsMut<[u8]>> DrawTarget for PixelTarget<L, C> {
    fn set_color(&mut self, r: i32, g: i32, b: i32, a: i32) {
        self.state.color = Color::from_i32(r, g, b, a);
    }

    fn set_gamma(&mut self, gamma: i32) {
        self.state.gamma = gamma;
    }

    fn set_font(&mut self, name: &str) {
        // A lookup miss stores no font (and logs in the font table);
        // render_text then degrades to a no-op.
        self.state.font = fonts::lookup(name);
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        self.surface.put_pixel(x, y, self.state.color);
    }

    fn clear(&mut self) {
        self.surface.clear();
    }

    fn render_text(&mut self, x: i32, y: i32, text: &str) {
        if let Some(font) = self.state.font {
            // flip is always asserted: the text primitive reconciles
            // logical y-down space against bottom-up row storage.
            draw_text(&mut self.surface, font, x, y, text, self.state.color, true);
        }
    }

    fn solid_ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32) {
        fill_ellipse(&mut self.surface, cx, cy, rx, ry, self.state.color);
    }

    fn solid_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        fill_rect(&mut self.surface, x1, y1, x2, y2, self.state.color);
    }

    fn solid_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32) {
        fill_triangle_aa(
            &mut self.surface,
            x1,
            y1,
            x2,
            y2,
            x3,
            y3,
            self.state.color,
            self.state.gamma,
        );
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, width: f64) {
        stroke_line_aa(&mut self.surface, x1, y1, x2, y2, width, self.state.color);
    }

    fn marker(&mut self, x: i32, y: i32, size: i32, kind: i32) {
        draw_marker(
            &mut self.surface,
            x,
            y,
            size,
            MarkerKind::from_index(kind),
            self.state.color,
        );
    }

    fn width(&self) -> u32 {
        self.surface.width()
    }

    fn height(&self) -> u32 {
        self.surface.height()
    }

    fn read_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.surface.get_pixel(x, y)
    }

    fn name(&self) -> &'static str {
        L::NAME
    }
}

/// A defined do-nothing target.
///
/// The registry hands this out before any real target is registered, so
/// HUD code that draws early (or a script that selects a target the
/// frontend never created) degrades to no pixels instead of a crash.
#[derive(Debug, Default)]
pub struct NullTarget;

impl DrawTarget for NullTarget {
    fn set_color(&mut self, _r: i32, _g: i32, _b: i32, _a: i32) {}
    fn set_gamma(&mut self, _gamma: i32) {}
    fn set_font(&mut self, _name: &str) {}
    fn set_pixel(&mut self, _x: i32, _y: i32) {}
    fn clear(&mut self) {}
    fn render_text(&mut self, _x: i32, _y: i32, _text: &str) {}
    fn solid_ellipse(&mut self, _cx: i32, _cy: i32, _rx: i32, _ry: i32) {}
    fn solid_rectangle(&mut self, _x1: i32, _y1: i32, _x2: i32, _y2: i32) {}
    fn solid_triangle(&mut self, _x1: i32, _y1: i32, _x2: i32, _y2: i32, _x3: i32, _y3: i32) {}
    fn line(&mut self, _x1: i32, _y1: i32, _x2: i32, _y2: i32, _width: f64) {}
    fn marker(&mut self, _x: i32, _y: i32, _size: i32, _kind: i32) {}

    fn width(&self) -> u32 {
        0
    }

    fn height(&self) -> u32 {
        0
    }

    fn read_pixel(&self, _x: i32, _y: i32) -> Option<Color> {
        None
    }

    fn name(&self) -> &'static str {
        "null"
    }
}
