pub mod body_state;
pub mod game_object;
pub mod rigid_body;

pub use body_state::{BodyState, TimedForce, DEFAULT_DAMPER};
pub use game_object::{GameObject, SimObject};
pub use rigid_body::{RigidBody, DEFAULT_MASS_TOLERANCE};

use serde::{Deserialize, Serialize};

/// Stable identity of an object inside a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
