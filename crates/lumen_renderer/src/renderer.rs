//! Parallel frame renderer.
//!
//! Partitions the image into horizontal bands, one per worker, and shades
//! every pixel by unprojecting it through the camera and tracing a primary
//! ray. Bands write disjoint slices of the output buffer, so the only
//! synchronization is the final join.

use lumen_math::{Camera, Mat4, Ray, Vec3};

use crate::{Color, Scene, Shader};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderParams {
    /// Output resolution in pixels
    pub width: u32,
    pub height: u32,
    /// Number of parallel horizontal bands
    pub threads: usize,
    /// Maximum recursion depth for reflection/refraction rays
    pub depth_limit: u32,
    /// Use the scene's octree instead of testing every primitive
    pub use_octree: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            threads: 4,
            depth_limit: 4,
            use_octree: true,
        }
    }
}

/// A rendered image: row-major colors, row 0 at the top.
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Frame {
    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Convert to 8-bit RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for color in &self.pixels {
            let c = color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0;
            bytes.extend_from_slice(&[c.x as u8, c.y as u8, c.z as u8, 255]);
        }
        bytes
    }
}

/// Render the scene into a frame.
///
/// Degenerate parameters are normalized rather than rejected: zero
/// dimensions and `threads == 0` become 1. The scene is only read, so a
/// frame can render while the caller holds other shared references.
pub fn render(scene: &Scene, params: &RenderParams) -> Frame {
    let width = params.width.max(1);
    let height = params.height.max(1);
    let threads = params.threads.max(1);

    let mut camera = scene.camera;
    camera.set_aspect(width as f32 / height as f32);
    let inv_view_proj = camera.view_projection_matrix().inverse();

    let shader = Shader {
        scene,
        depth_limit: params.depth_limit,
        use_octree: params.use_octree,
    };

    let mut pixels = vec![Color::ZERO; (width * height) as usize];
    let rows_per_band = height / threads as u32;
    log::debug!(
        "rendering {}x{} in {} bands, depth limit {}, octree {}",
        width,
        height,
        threads,
        params.depth_limit,
        params.use_octree && scene.octree().is_some()
    );

    rayon::scope(|s| {
        let mut rest = pixels.as_mut_slice();
        for band in 0..threads {
            let start = band as u32 * rows_per_band;
            // Last band absorbs the remainder rows
            let end = if band == threads - 1 {
                height
            } else {
                start + rows_per_band
            };
            let (slice, tail) = rest.split_at_mut(((end - start) * width) as usize);
            rest = tail;
            s.spawn(move |_| {
                render_band(&shader, &camera, &inv_view_proj, slice, start, end, width, height);
            });
        }
    });

    Frame {
        width,
        height,
        pixels,
    }
}

/// Shade one horizontal band of rows `[start_row, end_row)` into `out`.
fn render_band(
    shader: &Shader<'_>,
    camera: &Camera,
    inv_view_proj: &Mat4,
    out: &mut [Color],
    start_row: u32,
    end_row: u32,
    width: u32,
    height: u32,
) {
    for y in start_row..end_row {
        for x in 0..width {
            let near_point = Camera::unproject(inv_view_proj, x, y, width, height);
            let ray = Ray::towards(camera.position, near_point);
            out[((y - start_row) * width + x) as usize] = shader.shade(&ray, None, 0, 1.0);
        }
    }
}
