//! Spatial Index Module
//!
//! R-tree over label rectangles in percentage space, used to resolve which
//! label sits under the pointer when the host asks for an edit click.

use rstar::{AABB, RTree, RTreeObject};

use crate::types::{BoundingBox, Label, PercentPoint};

/// A label's rectangle, keyed by its position in render order.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub order: usize,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(order: usize, bbox: BoundingBox) -> Self {
        Self {
            order,
            min_x: bbox.x,
            min_y: bbox.y,
            max_x: bbox.x + bbox.width,
            max_y: bbox.y + bbox.height,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

/// Point lookup over a fixed set of labels. Rebuilt whenever the labels change.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Index labels in render order; later labels draw on top.
    pub fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a Label>,
    {
        let entries: Vec<SpatialEntry> = labels
            .into_iter()
            .enumerate()
            .map(|(order, label)| SpatialEntry::new(order, label.bbox()))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Render-order positions of every label containing the point.
    pub fn query_point(&self, point: PercentPoint) -> Vec<usize> {
        let envelope = AABB::from_point([point.x, point.y]);

        let mut hits: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains_point(point.x, point.y))
            .map(|entry| entry.order)
            .collect();
        hits.sort_unstable();
        hits
    }

    /// Topmost label containing the point
    pub fn topmost_at(&self, point: PercentPoint) -> Option<usize> {
        self.query_point(point).last().copied()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
