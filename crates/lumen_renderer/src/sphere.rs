//! Sphere primitive for ray tracing.

use std::f32::consts::PI;
use std::sync::Arc;

use lumen_math::{Aabb, Ray, Vec2, Vec3};

use crate::{GeometryError, Material};

/// Minimum accepted ray parameter, rejects grazing self-intersections.
const T_MIN: f32 = 1e-4;

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere. The radius must be strictly positive.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Result<Self, GeometryError> {
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    /// Ray-sphere intersection, returning the hit distance.
    ///
    /// Solves the quadratic for a unit-direction ray and accepts the
    /// smaller positive root, falling back to the larger one when the ray
    /// starts inside the sphere. Returns `None` when the discriminant is
    /// non-positive or both roots lie behind the origin.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = self.center - ray.origin;
        // a == 1 for unit directions
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let mut root = h - sqrtd;
        if root <= T_MIN {
            root = h + sqrtd;
            if root <= T_MIN {
                return None;
            }
        }
        Some(root)
    }

    /// Outward unit normal at a surface point.
    ///
    /// Always points away from the center; refraction flips it for rays
    /// exiting the sphere.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center) / self.radius
    }

    /// True when the point lies strictly inside the sphere.
    pub fn contains(&self, point: Vec3) -> bool {
        point.distance(self.center) < self.radius
    }

    /// Spherical surface coordinates at a surface point.
    pub fn uv_at(&self, point: Vec3) -> Vec2 {
        let p = self.normal_at(point);
        // theta: angle down from +Y; phi: angle around Y from +X
        let theta = (-p.y).acos();
        let phi = (-p.z).atan2(p.x) + PI;
        Vec2::new(phi / (2.0 * PI), theta / PI)
    }

    /// Axis-aligned bounds, used to place the sphere in the octree.
    pub fn bounds(&self) -> Aabb {
        let rvec = Vec3::splat(self.radius);
        Aabb::from_points(self.center - rvec, self.center + rvec)
    }
}
