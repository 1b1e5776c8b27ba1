//! On-screen-display drawing layer for the emulator's HUD and scripting
//! subsystems.
//!
//! This crate exposes a pixel-format-agnostic [`DrawTarget`] contract over
//! the `emu_raster` primitives: callers set a small persistent render
//! state (color, gamma, font) and issue primitive draws without knowing
//! the pixel layout of the buffer underneath. A [`TargetRegistry`] holds
//! the screen and overlay targets, switches which one is active, and
//! composites the active target over the emulator's output framebuffer.
//!
//! Error philosophy: drawing is driven by real-time HUD/script code with
//! no recovery path, so every draw-time problem (out-of-bounds
//! coordinates, unknown fonts, out-of-range marker kinds, drawing before
//! a target exists) degrades to a silent no-op. Errors only surface at
//! construction time, when a buffer is bound to a surface.

pub mod fonts;
pub mod registry;
pub mod target;

pub use emu_raster::{Color, MarkerKind, SurfaceError};
pub use registry::{TargetId, TargetRegistry};
pub use target::{DrawTarget, NullTarget, PixelTarget, RenderState};
