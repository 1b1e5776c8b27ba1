//! Target registry: which draw target is active, and compositing.
//!
//! The registry is explicit state owned by the rendering subsystem and
//! passed to HUD and scripting call sites; there is no process-wide
//! singleton, which keeps initialization order visible. It holds one
//! slot per [`TargetId`], switches the active slot, and composites the
//! active target's pixels over the emulator's output framebuffer once
//! per frame.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use emu_raster::{Color, Rgba8888};

use crate::target::{DrawTarget, NullTarget, PixelTarget};

/// The fixed identifier space for drawing surfaces.
///
/// `Screen` is the primary HUD surface composited over emulator output;
/// `Overlay` is the auxiliary surface scripts draw into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetId {
    Screen,
    Overlay,
}

impl TargetId {
    const COUNT: usize = 2;

    fn index(self) -> usize {
        match self {
            TargetId::Screen => 0,
            TargetId::Overlay => 1,
        }
    }
}

/// Holds the registered draw targets and tracks which one is active.
///
/// All access happens on the rendering/script thread; the registry makes
/// no provision for concurrent use. Selecting a target never touches the
/// other targets' buffers or render state, and a target keeps its
/// contents across arbitrarily many select calls.
pub struct TargetRegistry {
    targets: [Option<Box<dyn DrawTarget>>; TargetId::COUNT],
    active: TargetId,
    null: NullTarget,
}

impl TargetRegistry {
    /// An empty registry with `Screen` active. Draw calls issued before
    /// any registration hit the inert null target.
    pub fn new() -> Self {
        Self {
            targets: [None, None],
            active: TargetId::Screen,
            null: NullTarget,
        }
    }

    /// The standard emulator setup: RGBA8888 screen and overlay targets
    /// of the given size, with `Screen` active.
    pub fn with_screen_and_overlay(width: u32, height: u32) -> Self {
        let mut registry = Self::new();
        registry.register(
            TargetId::Screen,
            Box::new(PixelTarget::<Rgba8888, _>::alloc(width, height)),
        );
        registry.register(
            TargetId::Overlay,
            Box::new(PixelTarget::<Rgba8888, _>::alloc(width, height)),
        );
        registry
    }

    /// Put a target into the slot for `id`, replacing any previous
    /// occupant of that slot only.
    pub fn register(&mut self, id: TargetId, target: Box<dyn DrawTarget>) {
        debug!(
            "registering {:?} target: {} {}x{}",
            id,
            target.name(),
            target.width(),
            target.height()
        );
        self.targets[id.index()] = Some(target);
    }

    /// Switch the active target. Idempotent; never destroys or resets
    /// any target. Selecting an id with no registered target is allowed
    /// and routes subsequent draws to the null target.
    pub fn select(&mut self, id: TargetId) {
        if self.targets[id.index()].is_none() {
            warn!("selecting {:?} target with nothing registered; draws will be dropped", id);
        }
        if self.active != id {
            debug!("active target {:?} -> {:?}", self.active, id);
        }
        self.active = id;
    }

    pub fn active(&self) -> TargetId {
        self.active
    }

    /// The active target, or the inert null target while the active slot
    /// is unregistered.
    pub fn current(&self) -> &dyn DrawTarget {
        match &self.targets[self.active.index()] {
            Some(target) => target.as_ref(),
            None => &self.null,
        }
    }

    /// Mutable access to the active target; the handle HUD and script
    /// code draws through.
    pub fn current_mut(&mut self) -> &mut dyn DrawTarget {
        match &mut self.targets[self.active.index()] {
            Some(target) => target.as_mut(),
            None => &mut self.null,
        }
    }

    /// Source-over composite the active target onto an ARGB8888
    /// (0xAARRGGBB) destination framebuffer of the given dimensions.
    ///
    /// The blend honors the alpha the drawing calls wrote, so a cleared
    /// (fully transparent) target leaves `dest` untouched. Overlap is
    /// clipped to the common extent of target and destination; format
    /// agreement beyond that is the caller's contract.
    pub fn composite(&self, dest: &mut [u32], dest_width: u32, dest_height: u32) {
        let target = self.current();
        if target.width() != dest_width || target.height() != dest_height {
            debug!(
                "compositing {}x{} target into {}x{} destination; clipping to common extent",
                target.width(),
                target.height(),
                dest_width,
                dest_height
            );
        }
        let width = target.width().min(dest_width) as i32;
        let height = target.height().min(dest_height) as i32;
        for y in 0..height {
            for x in 0..width {
                let src = match target.read_pixel(x, y) {
                    Some(c) if c.a > 0 => c,
                    _ => continue,
                };
                let idx = y as usize * dest_width as usize + x as usize;
                // A destination slice shorter than its claimed dimensions
                // degrades to a partial composite, like every other
                // draw-time mismatch.
                let Some(px) = dest.get_mut(idx) else { continue };
                let dst = Color::from_argb32(*px);
                *px = src.over(dst, 255).to_argb32();
            }
        }
    }
}

impl Default for TargetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
