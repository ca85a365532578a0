//! Spatial indices over body positions.
//!
//! Indices bucket the reference *position* of each body, not its extent.
//! Every entry carries the owning [`ObjectId`], so a match maps straight
//! back to its body without scanning the world.

use crate::math::vec2::Vec2;
use crate::objects::ObjectId;

use super::AABB;

/// One indexed body position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexEntry {
    pub id: ObjectId,
    pub position: Vec2,
}

impl IndexEntry {
    pub fn new(id: ObjectId, position: Vec2) -> Self {
        Self { id, position }
    }
}

/// A leaf bucket of an index.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    bounds: AABB,
    entries: Vec<IndexEntry>,
}

impl Partition {
    pub fn new(bounds: AABB) -> Self {
        Self {
            bounds,
            entries: Vec::new(),
        }
    }

    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    /// Every entry stored in this bucket.
    pub fn elements(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, entry: IndexEntry) {
        self.entries.push(entry);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn take_entries(&mut self) -> Vec<IndexEntry> {
        std::mem::take(&mut self.entries)
    }
}

/// Common interface of the grid and the quadtree.
///
/// Positions outside the index bounds are kept and filed under the nearest
/// edge bucket.
pub trait SpatialIndex {
    fn bounds(&self) -> &AABB;

    /// Removes every entry, keeping the layout.
    fn clear(&mut self);

    fn insert(&mut self, entry: IndexEntry);

    fn add(&mut self, entries: &[IndexEntry]) {
        for entry in entries {
            self.insert(*entry);
        }
    }

    /// Number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All leaf buckets whose bounds contain `point` (boundaries inclusive).
    fn nodes_by_location(&self, point: Vec2) -> Vec<&Partition>;

    /// All entries whose position lies inside `region` (inclusive).
    fn query(&self, region: &AABB) -> Vec<IndexEntry>;

    /// Every entry sharing a bucket with `point`.
    fn neighbours(&self, point: Vec2) -> Vec<IndexEntry> {
        let mut found: Vec<IndexEntry> = Vec::new();
        for node in self.nodes_by_location(point) {
            for entry in node.elements() {
                if !found.iter().any(|e| e.id == entry.id) {
                    found.push(*entry);
                }
            }
        }
        found
    }
}

/// Inclusive overlap, so zero-area regions still select buckets.
pub(crate) fn touches(a: &AABB, b: &AABB) -> bool {
    a.min.x <= b.max.x && a.max.x >= b.min.x && a.min.y <= b.max.y && a.max.y >= b.min.y
}

pub(crate) fn clamp_point(bounds: &AABB, point: Vec2) -> Vec2 {
    Vec2::new(
        point.x.clamp(bounds.min.x, bounds.max.x),
        point.y.clamp(bounds.min.y, bounds.max.y),
    )
}

/// Pulls `region` inside `bounds` so that regions lying off the edge still
/// reach the edge buckets holding out-of-bounds entries.
pub(crate) fn clamp_region(bounds: &AABB, region: &AABB) -> AABB {
    AABB::new(clamp_point(bounds, region.min), clamp_point(bounds, region.max))
}
