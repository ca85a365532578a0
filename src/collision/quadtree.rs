//! Region quadtree over body positions.

use tracing::debug;

use crate::error::{PhysicsError, PhysicsResult};
use crate::math::vec2::Vec2;

use super::spatial_index::{clamp_point, clamp_region, touches, IndexEntry, Partition, SpatialIndex};
use super::AABB;

#[derive(Debug, Clone)]
struct QuadNode {
    partition: Partition,
    depth: usize,
    children: Option<Box<[QuadNode; 4]>>,
}

impl QuadNode {
    fn new(bounds: AABB, depth: usize) -> Self {
        Self {
            partition: Partition::new(bounds),
            depth,
            children: None,
        }
    }

    fn bounds(&self) -> &AABB {
        self.partition.bounds()
    }

    /// Child quadrant for a point already clamped to this node.
    /// Order: top-left, top-right, bottom-left, bottom-right.
    fn quadrant(&self, point: Vec2) -> usize {
        let center = self.bounds().center();
        let right = usize::from(point.x >= center.x);
        let bottom = usize::from(point.y >= center.y);
        right + 2 * bottom
    }

    fn split(&mut self) {
        let b = *self.bounds();
        let c = b.center();
        let depth = self.depth + 1;
        let mut children = Box::new([
            QuadNode::new(AABB::new(b.min, c), depth),
            QuadNode::new(AABB::new(Vec2::new(c.x, b.min.y), Vec2::new(b.max.x, c.y)), depth),
            QuadNode::new(AABB::new(Vec2::new(b.min.x, c.y), Vec2::new(c.x, b.max.y)), depth),
            QuadNode::new(AABB::new(c, b.max), depth),
        ]);
        for entry in self.partition.take_entries() {
            let point = clamp_point(&b, entry.position);
            children[self.quadrant(point)].partition.push(entry);
        }
        self.children = Some(children);
    }

    fn insert(&mut self, entry: IndexEntry, point: Vec2, max_depth: usize, capacity: usize) {
        if self.children.is_none() {
            self.partition.push(entry);
            if self.partition.len() > capacity && self.depth < max_depth {
                self.split();
            }
            return;
        }
        let quadrant = self.quadrant(point);
        if let Some(children) = self.children.as_mut() {
            children[quadrant].insert(entry, point, max_depth, capacity);
        }
    }

    fn leaves_containing<'a>(&'a self, point: Vec2, out: &mut Vec<&'a Partition>) {
        if !self.bounds().contains_point(point) {
            return;
        }
        match self.children.as_ref() {
            None => out.push(&self.partition),
            Some(children) => {
                for child in children.iter() {
                    child.leaves_containing(point, out);
                }
            }
        }
    }

    fn collect(&self, search: &AABB, region: &AABB, out: &mut Vec<IndexEntry>) {
        if !touches(self.bounds(), search) {
            return;
        }
        match self.children.as_ref() {
            None => out.extend(
                self.partition
                    .elements()
                    .iter()
                    .filter(|e| region.contains_point(e.position)),
            ),
            Some(children) => {
                for child in children.iter() {
                    child.collect(search, region, out);
                }
            }
        }
    }

    fn leaf_count(&self) -> usize {
        match self.children.as_ref() {
            None => 1,
            Some(children) => children.iter().map(QuadNode::leaf_count).sum(),
        }
    }
}

/// A quadtree whose leaves split once they hold more than `capacity`
/// entries, down to `max_depth` levels below the root.
#[derive(Debug, Clone)]
pub struct QuadTree {
    root: QuadNode,
    max_depth: usize,
    capacity: usize,
    len: usize,
}

/// Deepest subdivision a quadtree may be configured with.
pub const MAX_QUADTREE_DEPTH: usize = 32;

impl QuadTree {
    pub fn new(bounds: AABB, max_depth: usize, capacity: usize) -> PhysicsResult<Self> {
        if capacity == 0 {
            return Err(PhysicsError::invalid_argument("quadtree leaf capacity must be at least 1"));
        }
        if max_depth > MAX_QUADTREE_DEPTH {
            return Err(PhysicsError::invalid_argument(format!(
                "quadtree depth {max_depth} exceeds the limit of {MAX_QUADTREE_DEPTH}"
            )));
        }
        debug!(?bounds, max_depth, capacity, "created quadtree");
        Ok(Self {
            root: QuadNode::new(bounds, 0),
            max_depth,
            capacity,
            len: 0,
        })
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
}

impl SpatialIndex for QuadTree {
    fn bounds(&self) -> &AABB {
        self.root.bounds()
    }

    /// Drops every entry and collapses the tree back to its root.
    fn clear(&mut self) {
        let bounds = *self.root.bounds();
        self.root = QuadNode::new(bounds, 0);
        self.len = 0;
    }

    fn insert(&mut self, entry: IndexEntry) {
        let point = clamp_point(self.root.bounds(), entry.position);
        self.root.insert(entry, point, self.max_depth, self.capacity);
        self.len += 1;
    }

    fn len(&self) -> usize {
        self.len
    }

    fn nodes_by_location(&self, point: Vec2) -> Vec<&Partition> {
        let mut nodes = Vec::new();
        self.root.leaves_containing(clamp_point(self.root.bounds(), point), &mut nodes);
        nodes
    }

    fn query(&self, region: &AABB) -> Vec<IndexEntry> {
        let search = clamp_region(self.root.bounds(), region);
        let mut found = Vec::new();
        self.root.collect(&search, region, &mut found);
        found
    }
}
