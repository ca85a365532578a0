use crate::world::render::{Drawable, RenderTarget};

use super::rigid_body::RigidBody;

/// Anything the world can own and step.
///
/// Objects without a body are kept but skipped by the physics pipeline and
/// by camera rendering.
pub trait GameObject {
    fn body(&self) -> Option<&RigidBody>;

    fn body_mut(&mut self) -> Option<&mut RigidBody>;

    /// Per-tick hook. The default integrates the body.
    fn update(&mut self, dt: f64) {
        if let Some(body) = self.body_mut() {
            body.update(dt);
        }
    }

    fn draw(&self, _target: &mut dyn RenderTarget) {}
}

/// A plain object: an optional body plus an optional visual.
#[derive(Default)]
pub struct SimObject {
    body: Option<RigidBody>,
    visual: Option<Box<dyn Drawable>>,
}

impl SimObject {
    pub fn new(body: RigidBody) -> Self {
        Self {
            body: Some(body),
            visual: None,
        }
    }

    /// An object with no physical presence.
    pub fn bodiless() -> Self {
        Self::default()
    }

    pub fn with_visual(mut self, visual: Box<dyn Drawable>) -> Self {
        self.visual = Some(visual);
        self
    }

    pub fn take_body(&mut self) -> Option<RigidBody> {
        self.body.take()
    }
}

impl GameObject for SimObject {
    fn body(&self) -> Option<&RigidBody> {
        self.body.as_ref()
    }

    fn body_mut(&mut self) -> Option<&mut RigidBody> {
        self.body.as_mut()
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        if let Some(visual) = self.visual.as_ref() {
            visual.draw(target);
        }
    }
}

impl std::fmt::Debug for SimObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimObject")
            .field("body", &self.body)
            .field("has_visual", &self.visual.is_some())
            .finish()
    }
}
