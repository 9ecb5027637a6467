use glam::{Mat4, Vec3};

/// Pinhole camera for ray generation.
///
/// Stores the look-at parameters and clip planes; rays are generated by
/// unprojecting screen coordinates through the inverse view-projection
/// matrix, so the renderer and any rasterized preview agree on the frustum.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Create a new camera.
    pub fn new(position: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fov_y: 45.0_f32.to_radians(),
            aspect,
            near: 0.01,
            far: 100.0,
        }
    }

    /// Get the view matrix (world -> camera space)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get the projection matrix (camera -> clip space)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Get the combined view-projection matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update aspect ratio (e.g., on output resize)
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Unproject a screen-space pixel center to a world-space point on the
    /// near plane.
    ///
    /// `(0, 0)` is the top-left pixel; y grows downward, matching row-major
    /// image buffers. `inv_view_proj` must be the inverse of
    /// [`Self::view_projection_matrix`], computed once per frame.
    pub fn unproject(inv_view_proj: &Mat4, x: u32, y: u32, width: u32, height: u32) -> Vec3 {
        let ndc_x = (x as f32 + 0.5) / width as f32 * 2.0 - 1.0;
        let ndc_y = 1.0 - (y as f32 + 0.5) / height as f32 * 2.0;
        // perspective_rh maps the near plane to NDC z = 0
        inv_view_proj.project_point3(Vec3::new(ndc_x, ndc_y, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 16.0 / 9.0);

        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(camera.target, Vec3::ZERO);
        assert_eq!(camera.aspect, 16.0 / 9.0);
    }

    #[test]
    fn test_view_matrix() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 1.0);

        let view = camera.view_matrix();
        // View matrix should translate camera to origin
        assert!(view.w_axis.z < 0.0);
    }

    #[test]
    fn test_unproject_center_pixel() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 1.0);
        camera.near = 0.1;
        let inv = camera.view_projection_matrix().inverse();

        // An odd resolution puts a pixel center exactly on the view axis
        let p = Camera::unproject(&inv, 50, 50, 101, 101);
        assert!(p.x.abs() < 1e-4);
        assert!(p.y.abs() < 1e-4);
        assert!((p.z - (-0.1)).abs() < 1e-4);
    }

    #[test]
    fn test_unproject_orientation() {
        let camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 1.0);
        let inv = camera.view_projection_matrix().inverse();

        // Row 0 is the top of the image: higher world-space y
        let top = Camera::unproject(&inv, 50, 0, 101, 101);
        let bottom = Camera::unproject(&inv, 50, 100, 101, 101);
        assert!(top.y > bottom.y);

        // Column 0 is the left of the image: lower world-space x
        let left = Camera::unproject(&inv, 0, 50, 101, 101);
        let right = Camera::unproject(&inv, 100, 50, 101, 101);
        assert!(left.x < right.x);
    }

    #[test]
    fn test_aspect_update() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), 1.0);

        camera.set_aspect(16.0 / 9.0);
        assert_eq!(camera.aspect, 16.0 / 9.0);
    }
}
