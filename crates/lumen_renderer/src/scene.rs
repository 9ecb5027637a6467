//! Scene model: primitives, lights, camera, background, octree root.

use lumen_math::{Aabb, Camera};

use crate::{Color, Light, ObjectId, Octree, Sphere, Triangle};

/// A renderable scene.
///
/// Owns the primitive and light collections; the octree references
/// primitives by [`ObjectId`] and never copies their data. The scene is
/// read-only during rendering - building or destroying the octree takes
/// `&mut self`, so neither can overlap an in-flight render.
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub triangles: Vec<Triangle>,
    pub lights: Vec<Light>,
    pub camera: Camera,
    pub background: Color,
    octree: Option<Octree>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(camera: Camera, background: Color) -> Self {
        Self {
            spheres: Vec::new(),
            triangles: Vec::new(),
            lights: Vec::new(),
            camera,
            background,
            octree: None,
        }
    }

    pub fn primitive_count(&self) -> usize {
        self.spheres.len() + self.triangles.len()
    }

    /// Ids of every primitive, spheres first, in index order.
    pub fn object_ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        (0..self.spheres.len())
            .map(ObjectId::Sphere)
            .chain((0..self.triangles.len()).map(ObjectId::Triangle))
    }

    /// Bounds of a single primitive.
    pub fn object_bounds(&self, id: ObjectId) -> Aabb {
        match id {
            ObjectId::Sphere(i) => self.spheres[i].bounds(),
            ObjectId::Triangle(i) => self.triangles[i].bounds(),
        }
    }

    /// Build the octree over the current primitive set.
    ///
    /// Call once after the scene contents are finalized and before the
    /// first render; primitives added afterwards are invisible to
    /// accelerated queries until the octree is rebuilt.
    pub fn build_octree(&mut self) {
        let items: Vec<_> = self
            .object_ids()
            .map(|id| (id, self.object_bounds(id)))
            .collect();
        log::debug!("building octree over {} primitives", items.len());
        self.octree = Some(Octree::build(items));
    }

    /// Release the octree. Queries fall back to exhaustive iteration.
    pub fn destroy_octree(&mut self) {
        self.octree = None;
    }

    pub fn octree(&self) -> Option<&Octree> {
        self.octree.as_ref()
    }
}
