//! Light sources for local illumination.

use lumen_math::Vec3;

use crate::Color;

/// A light source.
///
/// Directional and spot light directions are stored unit-length; the
/// constructors normalize them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Point {
        position: Vec3,
        intensity: f32,
        color: Color,
    },
    Directional {
        /// Unit direction the light travels in
        direction: Vec3,
        intensity: f32,
        color: Color,
    },
    Spot {
        position: Vec3,
        /// Unit direction of the cone axis
        direction: Vec3,
        /// Half-angle of the cone, radians
        cutoff: f32,
        intensity: f32,
        color: Color,
    },
}

impl Light {
    pub fn point(position: Vec3, intensity: f32, color: Color) -> Self {
        Light::Point {
            position,
            intensity,
            color,
        }
    }

    pub fn directional(direction: Vec3, intensity: f32, color: Color) -> Self {
        Light::Directional {
            direction: direction.normalize(),
            intensity,
            color,
        }
    }

    pub fn spot(position: Vec3, direction: Vec3, cutoff: f32, intensity: f32, color: Color) -> Self {
        Light::Spot {
            position,
            direction: direction.normalize(),
            cutoff,
            intensity,
            color,
        }
    }

    /// Unit direction from a shaded point toward the light.
    ///
    /// Returns `None` when the point lies outside a spot light's cone, in
    /// which case the light contributes nothing there.
    pub fn direction_from(&self, point: Vec3) -> Option<Vec3> {
        match *self {
            Light::Point { position, .. } => Some((position - point).normalize()),
            Light::Directional { direction, .. } => Some(-direction),
            Light::Spot {
                position,
                direction,
                cutoff,
                ..
            } => {
                let to_light = (position - point).normalize();
                // Cone test: angle at the light between its axis and the point
                if (-to_light).dot(direction) >= cutoff.cos() {
                    Some(to_light)
                } else {
                    None
                }
            }
        }
    }

    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Point { intensity, .. }
            | Light::Directional { intensity, .. }
            | Light::Spot { intensity, .. } => intensity,
        }
    }

    pub fn color(&self) -> Color {
        match *self {
            Light::Point { color, .. }
            | Light::Directional { color, .. }
            | Light::Spot { color, .. } => color,
        }
    }
}
