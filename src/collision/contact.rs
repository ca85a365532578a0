use std::hash::{Hash, Hasher};

use crate::math::vec2::Vec2;
use crate::objects::ObjectId;

/// An unordered pair of bodies that may be touching.
///
/// `ContactPair::new(a, b)` and `ContactPair::new(b, a)` are the same pair.
#[derive(Debug, Clone, Copy)]
pub struct ContactPair {
    first: ObjectId,
    second: ObjectId,
}

impl ContactPair {
    pub fn new(a: ObjectId, b: ObjectId) -> Self {
        Self { first: a, second: b }
    }

    /// The pair as (lower id, higher id).
    pub fn ids(&self) -> (ObjectId, ObjectId) {
        if self.first <= self.second {
            (self.first, self.second)
        } else {
            (self.second, self.first)
        }
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.first == id || self.second == id
    }

    /// The other member of the pair, if `id` is a member.
    pub fn other(&self, id: ObjectId) -> Option<ObjectId> {
        if self.first == id {
            Some(self.second)
        } else if self.second == id {
            Some(self.first)
        } else {
            None
        }
    }
}

impl PartialEq for ContactPair {
    fn eq(&self, other: &Self) -> bool {
        self.ids() == other.ids()
    }
}

impl Eq for ContactPair {}

impl Hash for ContactPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ids().hash(state);
    }
}

/// One side of a resolved contact.
///
/// `normal` is a unit vector pointing from `other` toward `body`, so moving
/// `body` along it by `penetration` separates the two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactData {
    pub point: Vec2,
    pub normal: Vec2,
    pub penetration: f64,
    pub body: ObjectId,
    pub other: ObjectId,
}

impl ContactData {
    /// Builds the two mirrored records for a contact as seen from `a`.
    pub fn mirrored(
        a: ObjectId,
        point_a: Vec2,
        b: ObjectId,
        point_b: Vec2,
        normal_a: Vec2,
        penetration: f64,
    ) -> [ContactData; 2] {
        let penetration = penetration.max(0.0);
        [
            ContactData {
                point: point_a,
                normal: normal_a,
                penetration,
                body: a,
                other: b,
            },
            ContactData {
                point: point_b,
                normal: -normal_a,
                penetration,
                body: b,
                other: a,
            },
        ]
    }
}
