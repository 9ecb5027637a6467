//! Recursive shading: local Phong illumination plus mirror reflection and
//! dielectric refraction.

use lumen_math::{Ray, Vec3};

use crate::query::{find_nearest, is_occluded};
use crate::{Color, ObjectId, Scene};

/// Offset applied to a refraction ray's origin to escape the surface it is
/// leaving.
const SURFACE_EPSILON: f32 = 1e-5;

/// Per-frame shading context.
///
/// Holds the scene reference and the render options the recursion needs;
/// cheap to copy into render workers.
#[derive(Clone, Copy)]
pub struct Shader<'a> {
    pub scene: &'a Scene,
    /// Maximum recursion depth for reflection/refraction rays
    pub depth_limit: u32,
    /// Query the octree instead of every primitive
    pub use_octree: bool,
}

impl Shader<'_> {
    /// Color seen along a ray.
    ///
    /// `exclude` guards against re-hitting the surface the ray left,
    /// `medium_index` is the refractive index of the medium the ray
    /// travels in (1.0 for the primary ray). Recursion stops at
    /// `depth_limit`; rays that hit nothing return the background color.
    pub fn shade(
        &self,
        ray: &Ray,
        exclude: Option<ObjectId>,
        depth: u32,
        medium_index: f32,
    ) -> Color {
        let Some(hit) = find_nearest(self.scene, ray, exclude, false, self.use_octree) else {
            return self.scene.background;
        };
        let material = hit.material;

        // Background stands in for ambient light
        let mut color = self.scene.background * material.ambient;

        let reflection_dir = reflect(ray.direction, hit.normal).normalize();

        // Transmissive surfaces get no direct lighting; transmission and
        // reflection dominate
        if !material.is_refractive() {
            for light in &self.scene.lights {
                let Some(light_dir) = light.direction_from(hit.point) else {
                    continue;
                };
                let tint = light.intensity() * light.color();
                // One shadow ray per light gates both terms
                let shadowed = self.shadowed(hit.point, light_dir, hit.id);

                let s = hit.normal.dot(light_dir);
                if s > 0.0 && !shadowed {
                    color += s * tint * material.diffuse_at(hit.uv);
                }

                let t = light_dir.dot(reflection_dir);
                if t > 0.0 && !shadowed {
                    color += t.powf(material.shininess) * tint * material.specular;
                }
            }
        }

        if depth < self.depth_limit {
            if material.reflectivity > 0.0 {
                let reflected = Ray::new(hit.point, reflection_dir);
                color += material.reflectivity
                    * self.shade(&reflected, Some(hit.id), depth + 1, medium_index);
            }

            if let Some(refraction) = material.refraction {
                let n = medium_index / refraction.index;
                let normal = if hit.inside { -hit.normal } else { hit.normal };
                let cos_i = -normal.dot(ray.direction);
                let cos_t2 = 1.0 - n * n * (1.0 - cos_i * cos_i);
                // cos_t2 <= 0 is total internal reflection: no transmission
                if cos_t2 > 0.0 {
                    let dir =
                        (n * ray.direction + (n * cos_i - cos_t2.sqrt()) * normal).normalize();
                    // No exclusion id: the ray must be able to re-hit this
                    // object from the inside to exit the far side
                    let transmitted = Ray::new(hit.point + dir * SURFACE_EPSILON, dir);
                    color += refraction.weight
                        * self.shade(&transmitted, None, depth + 1, refraction.index);
                }
            }
        }

        color
    }

    fn shadowed(&self, point: Vec3, light_dir: Vec3, id: ObjectId) -> bool {
        is_occluded(self.scene, point, light_dir, Some(id), self.use_octree)
    }
}

/// Mirror a direction about a surface normal.
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
