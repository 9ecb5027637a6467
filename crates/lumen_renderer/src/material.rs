//! Phong material description shared by primitives.

use std::fmt;
use std::sync::Arc;

use lumen_math::{Vec2, Vec3};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Pluggable surface color function: 2D surface coordinate -> color.
pub type TextureFn = Arc<dyn Fn(Vec2) -> Color + Send + Sync>;

/// Snell refraction parameters, present only on transmissive materials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refraction {
    /// Index of refraction (1.0 = vacuum, ~1.5 = glass)
    pub index: f32,
    /// Weight of the transmitted contribution, in [0, 1]
    pub weight: f32,
}

/// Surface material for Phong-style shading.
///
/// Materials are immutable after scene construction and shared across
/// primitives by `Arc` - never copied per-primitive. Coefficients are
/// per-channel factors in [0, 1]; `reflectivity` weighs the recursive
/// mirror term and `refraction` (when present) the transmitted term.
#[derive(Clone)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    /// Phong exponent, >= 0
    pub shininess: f32,
    /// Mirror contribution weight, in [0, 1]
    pub reflectivity: f32,
    pub refraction: Option<Refraction>,
    /// Optional texture lookup replacing the flat diffuse coefficient
    pub texture: Option<TextureFn>,
}

impl Material {
    /// Create an opaque Phong material.
    pub fn new(
        ambient: Color,
        diffuse: Color,
        specular: Color,
        shininess: f32,
        reflectivity: f32,
    ) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
            reflectivity,
            refraction: None,
            texture: None,
        }
    }

    /// Make the material transmissive with the given index of refraction
    /// and transmission weight.
    pub fn with_refraction(mut self, index: f32, weight: f32) -> Self {
        self.refraction = Some(Refraction { index, weight });
        self
    }

    /// Attach a texture function sampled for the diffuse coefficient.
    pub fn with_texture(mut self, texture: TextureFn) -> Self {
        self.texture = Some(texture);
        self
    }

    /// True when the material transmits light.
    pub fn is_refractive(&self) -> bool {
        self.refraction.is_some()
    }

    /// Diffuse coefficient at a surface coordinate.
    ///
    /// Falls back to the flat diffuse color when the material has no
    /// texture or the hit carries no surface coordinate.
    pub fn diffuse_at(&self, uv: Option<Vec2>) -> Color {
        match (&self.texture, uv) {
            (Some(tex), Some(uv)) => tex(uv),
            _ => self.diffuse,
        }
    }
}

impl fmt::Debug for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Material")
            .field("ambient", &self.ambient)
            .field("diffuse", &self.diffuse)
            .field("specular", &self.specular)
            .field("shininess", &self.shininess)
            .field("reflectivity", &self.reflectivity)
            .field("refraction", &self.refraction)
            .field("texture", &self.texture.as_ref().map(|_| "fn"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refractive_flag() {
        let opaque = Material::new(Color::ZERO, Color::ONE, Color::ONE, 10.0, 0.0);
        assert!(!opaque.is_refractive());

        let glass = opaque.clone().with_refraction(1.5, 1.0);
        assert!(glass.is_refractive());
        assert_eq!(glass.refraction.unwrap().index, 1.5);
    }

    #[test]
    fn test_diffuse_at_falls_back_to_flat_color() {
        let m = Material::new(
            Color::ZERO,
            Color::new(0.8, 0.6, 0.1),
            Color::ONE,
            10.0,
            0.0,
        );

        assert_eq!(m.diffuse_at(None), Color::new(0.8, 0.6, 0.1));
        assert_eq!(m.diffuse_at(Some(Vec2::new(0.5, 0.5))), Color::new(0.8, 0.6, 0.1));
    }

    #[test]
    fn test_diffuse_at_samples_texture() {
        let m = Material::new(Color::ZERO, Color::ONE, Color::ONE, 10.0, 0.0)
            .with_texture(Arc::new(|uv: Vec2| Color::new(uv.x, uv.y, 0.0)));

        // Texture needs a surface coordinate to be sampled
        assert_eq!(m.diffuse_at(None), Color::ONE);
        assert_eq!(
            m.diffuse_at(Some(Vec2::new(0.25, 0.75))),
            Color::new(0.25, 0.75, 0.0)
        );
    }
}
