//! Low-level software rasterization primitives for OSD/HUD rendering.
//!
//! This crate is the trusted pixel-pushing layer: it knows how to encode,
//! decode and blend colors for each supported pixel layout, and how to turn
//! simple shapes (rectangles, ellipses, triangles, stroked lines, markers,
//! bitmap glyphs) into pixels on a [`Surface`]. It has no notion of render
//! state, fonts-by-name, or target switching; that policy lives in the
//! `emu_osd` crate.

pub mod color;
pub mod layout;
pub mod primitives;
pub mod surface;
pub mod text;

pub use color::Color;
pub use layout::{Bgra8888, PixelLayout, Rgb565, Rgba8888};
pub use primitives::MarkerKind;
pub use surface::{Surface, SurfaceError};
pub use text::BitmapFont;
