//! Lumen - CPU Whitted-style ray tracing
//!
//! A recursive ray tracer with Phong local illumination, hard shadows,
//! mirror reflection, and dielectric refraction. Scenes are collections of
//! spheres and triangles with shared materials; an octree over primitive
//! bounds prunes intersection candidates. Presentation, scene files, and
//! windowing are the caller's concern: the renderer consumes a [`Scene`]
//! and produces a flat [`Frame`] of colors.

mod error;
mod light;
mod material;
mod octree;
mod query;
mod renderer;
mod scene;
mod shading;
mod sphere;
mod triangle;

pub use error::GeometryError;
pub use light::Light;
pub use material::{Color, Material, Refraction, TextureFn};
pub use octree::Octree;
pub use query::{find_nearest, is_occluded, Hit, ObjectId};
pub use renderer::{render, Frame, RenderParams};
pub use scene::Scene;
pub use shading::Shader;
pub use sphere::Sphere;
pub use triangle::{Triangle, TriangleHit};

/// Re-export common math types from lumen_math
pub use lumen_math::{Aabb, Camera, Interval, Ray, Vec2, Vec3};
