//! Nearest-object query over the scene's primitives.

use std::sync::Arc;

use lumen_math::{Ray, Vec2, Vec3};

use crate::{Material, Scene};

/// Identifies which primitive a ray hit: type tag plus index into the
/// scene's collections.
///
/// A per-ray self-intersection guard - a reflected or shadow ray must not
/// re-hit the surface it just left due to floating-point grazing. Scoped
/// to a single ray evaluation, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectId {
    Sphere(usize),
    Triangle(usize),
}

/// Result of a nearest-hit query.
pub struct Hit<'a> {
    pub id: ObjectId,
    /// Distance from the ray origin (direction is unit length)
    pub distance: f32,
    pub point: Vec3,
    /// Outward surface normal
    pub normal: Vec3,
    pub material: &'a Arc<Material>,
    /// True only for sphere hits whose ray origin lies strictly inside
    pub inside: bool,
    /// Surface coordinate for texture lookup, when available
    pub uv: Option<Vec2>,
}

/// Find the closest primitive hit by the ray.
///
/// Candidates come from the scene's octree when `use_octree` is set and one
/// has been built, else every primitive is tested. `exclude` skips the
/// surface the ray originated on; `skip_refractive` skips transmissive
/// materials (used by shadow rays). Ties go to the first candidate in
/// iteration order, which is deterministic for a fixed scene.
pub fn find_nearest<'a>(
    scene: &'a Scene,
    ray: &Ray,
    exclude: Option<ObjectId>,
    skip_refractive: bool,
    use_octree: bool,
) -> Option<Hit<'a>> {
    match scene.octree() {
        Some(tree) if use_octree => {
            nearest_of(scene, ray, tree.candidates(ray), exclude, skip_refractive)
        }
        _ => nearest_of(scene, ray, scene.object_ids(), exclude, skip_refractive),
    }
}

/// Shadow test: is anything opaque between `from` and the light along `dir`?
///
/// Refractive surfaces are skipped on purpose - glass casts no hard shadow
/// in this model.
pub fn is_occluded(
    scene: &Scene,
    from: Vec3,
    dir: Vec3,
    exclude: Option<ObjectId>,
    use_octree: bool,
) -> bool {
    find_nearest(scene, &Ray::new(from, dir), exclude, true, use_octree).is_some()
}

fn nearest_of<'a>(
    scene: &'a Scene,
    ray: &Ray,
    candidates: impl IntoIterator<Item = ObjectId>,
    exclude: Option<ObjectId>,
    skip_refractive: bool,
) -> Option<Hit<'a>> {
    let mut nearest: Option<Hit<'a>> = None;

    for id in candidates {
        if exclude == Some(id) {
            continue;
        }
        if let Some(hit) = test_candidate(scene, ray, id, skip_refractive) {
            if nearest.as_ref().map_or(true, |n| hit.distance < n.distance) {
                nearest = Some(hit);
            }
        }
    }

    nearest
}

fn test_candidate<'a>(
    scene: &'a Scene,
    ray: &Ray,
    id: ObjectId,
    skip_refractive: bool,
) -> Option<Hit<'a>> {
    match id {
        ObjectId::Sphere(i) => {
            let sphere = &scene.spheres[i];
            if skip_refractive && sphere.material.is_refractive() {
                return None;
            }
            let distance = sphere.intersect(ray)?;
            let point = ray.at(distance);
            // Spherical coordinates only matter to textured materials
            let uv = sphere.material.texture.is_some().then(|| sphere.uv_at(point));
            Some(Hit {
                id,
                distance,
                point,
                normal: sphere.normal_at(point),
                material: &sphere.material,
                inside: sphere.contains(ray.origin),
                uv,
            })
        }
        ObjectId::Triangle(i) => {
            let triangle = &scene.triangles[i];
            if skip_refractive && triangle.material.is_refractive() {
                return None;
            }
            let tri_hit = triangle.intersect(ray)?;
            Some(Hit {
                id,
                distance: tri_hit.t,
                point: ray.at(tri_hit.t),
                normal: triangle.normal,
                material: &triangle.material,
                inside: false,
                uv: triangle.uv_at(&tri_hit),
            })
        }
    }
}
