//! Triangle primitive for ray tracing.
//!
//! Uses the Möller-Trumbore algorithm for ray-triangle intersection.

use std::sync::Arc;

use lumen_math::{Aabb, Ray, Vec2, Vec3};

use crate::{GeometryError, Material};

/// Minimum accepted ray parameter, rejects grazing self-intersections.
const T_MIN: f32 = 1e-4;

/// Determinant threshold below which the ray is treated as parallel.
const DET_EPSILON: f32 = 1e-8;

/// Barycentric coordinates and distance of a ray-triangle intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    pub t: f32,
    pub u: f32,
    pub v: f32,
}

/// A triangle primitive with a precomputed face normal (flat shading).
#[derive(Debug, Clone)]
pub struct Triangle {
    vertices: [Vec3; 3],
    /// Unit face normal, computed at construction
    pub normal: Vec3,
    /// Optional per-vertex texture coordinates
    pub tex_coords: Option<[Vec2; 3]>,
    pub material: Arc<Material>,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The face normal is `normalize(cross(v1 - v0, v2 - v0))`; collinear
    /// vertices are rejected since they have no normal.
    pub fn new(
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        material: Arc<Material>,
    ) -> Result<Self, GeometryError> {
        let cross = (v1 - v0).cross(v2 - v0);
        if cross.length_squared() < DET_EPSILON {
            return Err(GeometryError::DegenerateTriangle);
        }
        Ok(Self {
            vertices: [v0, v1, v2],
            normal: cross.normalize(),
            tex_coords: None,
            material,
        })
    }

    /// Attach per-vertex texture coordinates.
    pub fn with_tex_coords(mut self, tex_coords: [Vec2; 3]) -> Self {
        self.tex_coords = Some(tex_coords);
        self
    }

    pub fn vertices(&self) -> &[Vec3; 3] {
        &self.vertices
    }

    /// Möller-Trumbore ray-triangle intersection.
    ///
    /// Valid only when both barycentric coordinates are >= 0, their sum is
    /// <= 1, and the distance exceeds a small epsilon. A near-zero
    /// determinant (parallel ray) yields `None` without dividing.
    pub fn intersect(&self, ray: &Ray) -> Option<TriangleHit> {
        let [v0, v1, v2] = self.vertices;
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        let h = ray.direction.cross(edge2);
        let det = edge1.dot(h);
        if det.abs() < DET_EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let s = ray.origin - v0;
        let u = inv_det * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = inv_det * ray.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = inv_det * edge2.dot(q);
        if t <= T_MIN {
            return None;
        }

        Some(TriangleHit { t, u, v })
    }

    /// Interpolated texture coordinate for a hit, when coordinates exist.
    pub fn uv_at(&self, hit: &TriangleHit) -> Option<Vec2> {
        self.tex_coords.map(|tc| {
            let w = 1.0 - hit.u - hit.v;
            tc[0] * w + tc[1] * hit.u + tc[2] * hit.v
        })
    }

    /// Axis-aligned bounds, used to place the triangle in the octree.
    pub fn bounds(&self) -> Aabb {
        let [v0, v1, v2] = self.vertices;
        Aabb::from_points(v0.min(v1).min(v2), v0.max(v1).max(v2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn test_material() -> Arc<Material> {
        Arc::new(Material::new(
            Color::ZERO,
            Color::splat(0.5),
            Color::ONE,
            10.0,
            0.0,
        ))
    }

    fn xy_triangle() -> Triangle {
        // Triangle in the XY plane at z = -1
        Triangle::new(
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            test_material(),
        )
        .unwrap()
    }

    #[test]
    fn test_triangle_hit() {
        let tri = xy_triangle();

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = tri.intersect(&ray).unwrap();
        assert!((hit.t - 1.0).abs() < 0.001);
        assert!(hit.u >= 0.0 && hit.v >= 0.0 && hit.u + hit.v <= 1.0);
    }

    #[test]
    fn test_triangle_miss() {
        let tri = xy_triangle();

        // Pointing away
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(tri.intersect(&ray).is_none());

        // Outside the edges
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_parallel_ray() {
        let tri = xy_triangle();

        // Ray in the triangle's plane: near-zero determinant, no hit
        let ray = Ray::new(Vec3::new(-5.0, 0.0, -1.0), Vec3::X);
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_triangle_rejects_collinear_vertices() {
        let result = Triangle::new(
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            test_material(),
        );
        assert_eq!(result.unwrap_err(), GeometryError::DegenerateTriangle);
    }

    #[test]
    fn test_triangle_normal() {
        let tri = xy_triangle();
        // Counter-clockwise winding seen from +Z
        assert!((tri.normal - Vec3::Z).length() < 0.001);
    }

    #[test]
    fn test_triangle_uv_interpolation() {
        let tri = xy_triangle().with_tex_coords([
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        ]);

        // At barycentric (u, v) the interpolated coordinate equals (u, v)
        // for this coordinate assignment
        let hit = TriangleHit {
            t: 1.0,
            u: 0.25,
            v: 0.5,
        };
        let uv = tri.uv_at(&hit).unwrap();
        assert!((uv - Vec2::new(0.25, 0.5)).length() < 1e-6);

        // No coordinates attached: no interpolation
        assert!(xy_triangle().uv_at(&hit).is_none());
    }
}
