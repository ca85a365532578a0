//! The boundary with the drawing layer.
//!
//! The physics core never draws anything itself. It hands a
//! [`RenderTarget`] to each visible object and lets the object decide what
//! to do with it.

use tracing::debug;

use crate::collision::AABB;
use crate::error::{PhysicsError, PhysicsResult};

/// Opaque drawing surface supplied by the caller.
pub trait RenderTarget {
    /// Called once before a camera's objects are drawn.
    fn begin_view(&mut self, _view: &AABB, _scale: f64) {}

    fn end_view(&mut self) {}
}

/// Something that can draw itself onto a [`RenderTarget`].
pub trait Drawable {
    fn draw(&self, target: &mut dyn RenderTarget);
}

/// Pixel dimensions of the world's back buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSurface {
    width_px: u32,
    height_px: u32,
}

impl RenderSurface {
    /// Sizes a surface for a `width` x `height` world drawn at `scale`
    /// pixels per unit.
    pub fn for_world(width: f64, height: f64, scale: f64) -> PhysicsResult<Self> {
        let width_px = (width * scale).floor();
        let height_px = (height * scale).floor();
        if !(width_px.is_finite() && height_px.is_finite()) {
            return Err(PhysicsError::invalid_state(format!(
                "render surface for {width}x{height} at scale {scale} is not finite"
            )));
        }
        if width_px < 1.0 || height_px < 1.0 {
            return Err(PhysicsError::invalid_argument(format!(
                "world of {width}x{height} at scale {scale} is smaller than one pixel"
            )));
        }
        if width_px > u32::MAX as f64 || height_px > u32::MAX as f64 {
            return Err(PhysicsError::invalid_state(format!(
                "render surface of {width_px}x{height_px} pixels cannot be allocated"
            )));
        }
        let surface = Self {
            width_px: width_px as u32,
            height_px: height_px as u32,
        };
        debug!(width_px = surface.width_px, height_px = surface.height_px, "sized render surface");
        Ok(surface)
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }
}
