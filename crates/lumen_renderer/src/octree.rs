//! Octree acceleration structure.
//!
//! Spatial index over primitive ids that prunes intersection candidates per
//! ray. Built once after the scene is finalized and read-only afterwards,
//! so render workers share it without locking.

use lumen_math::{Aabb, Interval, Ray};

use crate::ObjectId;

/// Maximum primitives per node before subdividing.
const LEAF_MAX_SIZE: usize = 8;

/// Maximum subdivision depth; bounds tree size when primitives straddle
/// octant boundaries at every level.
const MAX_DEPTH: u32 = 8;

/// Octree node - either a branch with eight equal octants or a leaf
/// holding the ids of every primitive whose bounds overlap it.
enum OctreeNode {
    Branch {
        bounds: Aabb,
        children: Box<[OctreeNode; 8]>,
    },
    Leaf {
        bounds: Aabb,
        objects: Vec<ObjectId>,
    },
}

/// Spatial index over primitive bounds.
///
/// A primitive straddling an octant boundary is stored in every leaf it
/// overlaps; [`Octree::candidates`] deduplicates, so callers test each
/// returned id exactly once.
pub struct Octree {
    root: OctreeNode,
}

impl Octree {
    /// Build an octree over `(id, bounds)` pairs.
    pub fn build(items: Vec<(ObjectId, Aabb)>) -> Self {
        let bounds = items
            .iter()
            .map(|(_, b)| *b)
            .reduce(|acc, b| Aabb::surrounding(&acc, &b))
            .unwrap_or(Aabb::EMPTY);

        let root = build_node(bounds, items, 0);
        let tree = Self { root };
        log::debug!(
            "octree built: {} nodes over bounds {:?}..{:?}",
            tree.node_count(),
            bounds.min(),
            bounds.max()
        );
        tree
    }

    /// Primitive ids whose leaves the ray passes through, sorted and
    /// deduplicated.
    pub fn candidates(&self, ray: &Ray) -> Vec<ObjectId> {
        let mut out = Vec::new();
        collect(&self.root, ray, &mut out);
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Total node count, branches and leaves.
    pub fn node_count(&self) -> usize {
        fn count(node: &OctreeNode) -> usize {
            match node {
                OctreeNode::Leaf { .. } => 1,
                OctreeNode::Branch { children, .. } => {
                    1 + children.iter().map(count).sum::<usize>()
                }
            }
        }
        count(&self.root)
    }
}

fn build_node(bounds: Aabb, items: Vec<(ObjectId, Aabb)>, depth: u32) -> OctreeNode {
    if items.len() <= LEAF_MAX_SIZE || depth >= MAX_DEPTH {
        return OctreeNode::Leaf {
            bounds,
            objects: items.into_iter().map(|(id, _)| id).collect(),
        };
    }

    let children = Box::new(std::array::from_fn(|i| {
        let octant = bounds.octant(i);
        let child_items: Vec<_> = items
            .iter()
            .filter(|(_, b)| b.overlaps(&octant))
            .copied()
            .collect();
        build_node(octant, child_items, depth + 1)
    }));

    OctreeNode::Branch { bounds, children }
}

fn collect(node: &OctreeNode, ray: &Ray, out: &mut Vec<ObjectId>) {
    let span = Interval::new(0.0, f32::MAX);
    match node {
        OctreeNode::Leaf { bounds, objects } => {
            if !objects.is_empty() && bounds.hit(ray, span) {
                out.extend_from_slice(objects);
            }
        }
        OctreeNode::Branch { bounds, children } => {
            if bounds.hit(ray, span) {
                for child in children.iter() {
                    collect(child, ray, out);
                }
            }
        }
    }
}
