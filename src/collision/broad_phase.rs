//! Candidate pair generation.

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::math::vec2::Vec2;
use crate::objects::ObjectId;

use super::contact::ContactPair;
use super::spatial_index::{IndexEntry, SpatialIndex};
use super::AABB;

/// What the broad phase needs to know about one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BroadPhaseBody {
    pub id: ObjectId,
    pub position: Vec2,
    /// Axis-aligned hull of the body's bounding box, if it has one.
    pub bounds: Option<AABB>,
}

/// Rebuilds `index` from `bodies` and returns every pair that shares a
/// bucket and whose bounding boxes overlap, sorted by id.
pub fn find_pairs(index: &mut dyn SpatialIndex, bodies: &[BroadPhaseBody]) -> Vec<ContactPair> {
    index.clear();
    let entries: Vec<IndexEntry> = bodies.iter().map(|b| IndexEntry::new(b.id, b.position)).collect();
    index.add(&entries);

    let bounds: HashMap<ObjectId, Option<AABB>> = bodies.iter().map(|b| (b.id, b.bounds)).collect();
    let mut pairs: HashSet<ContactPair> = HashSet::new();

    for body in bodies {
        let candidates = index.neighbours(body.position);
        for (i, first) in candidates.iter().enumerate() {
            for second in &candidates[i + 1..] {
                let pair = ContactPair::new(first.id, second.id);
                if pairs.contains(&pair) {
                    continue;
                }
                let (Some(Some(a)), Some(Some(b))) = (bounds.get(&first.id), bounds.get(&second.id)) else {
                    continue;
                };
                if a.overlaps(b) {
                    trace!(a = %first.id, b = %second.id, "broad-phase candidate");
                    pairs.insert(pair);
                }
            }
        }
    }

    let mut pairs: Vec<ContactPair> = pairs.into_iter().collect();
    pairs.sort_by_key(ContactPair::ids);
    pairs
}
