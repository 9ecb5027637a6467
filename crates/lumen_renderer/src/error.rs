use thiserror::Error;

/// Errors reported when constructing degenerate primitives.
///
/// Intersection routines tolerate near-degenerate input (they return no hit
/// rather than dividing by zero), but constructors reject geometry that can
/// never produce a valid surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("sphere radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("triangle vertices are collinear")]
    DegenerateTriangle,
}
