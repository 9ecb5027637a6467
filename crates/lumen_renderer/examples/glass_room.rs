//! Demo: copper and glass spheres in an open chrome-floored room.
//!
//! Renders the scene with the octree enabled and saves a PNG.

use std::sync::Arc;

use anyhow::Context;
use lumen_renderer::{
    render, Camera, Color, Light, Material, RenderParams, Scene, Sphere, Triangle, Vec3,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = std::time::Instant::now();
    let mut scene = build_scene()?;
    scene.build_octree();
    println!("Scene built in {:?}", start.elapsed());

    let params = RenderParams {
        width: 1280,
        height: 720,
        threads: 4,
        depth_limit: 4,
        use_octree: true,
    };

    println!(
        "Rendering {}x{} with depth limit {}...",
        params.width, params.height, params.depth_limit
    );
    let start = std::time::Instant::now();
    let frame = render(&scene, &params);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "glass_room.png";
    image::RgbaImage::from_raw(frame.width, frame.height, frame.to_rgba())
        .context("frame buffer size mismatch")?
        .save(filename)
        .with_context(|| format!("failed to save {filename}"))?;
    println!("Saved to {filename}");

    scene.destroy_octree();
    Ok(())
}

fn build_scene() -> anyhow::Result<Scene> {
    let copper = Arc::new(Material::new(
        Color::new(0.329412, 0.223529, 0.027451),
        Color::new(0.780392, 0.568627, 0.113725),
        Color::new(0.992157, 0.941176, 0.807843),
        27.8974,
        0.2,
    ));
    let chrome = Arc::new(Material::new(
        Color::splat(0.25),
        Color::splat(0.4),
        Color::splat(0.774597),
        76.8,
        0.3,
    ));
    let glass = Arc::new(
        Material::new(
            Color::splat(0.25),
            Color::splat(0.4),
            Color::splat(0.774597),
            76.8,
            0.0,
        )
        .with_refraction(1.53, 1.0),
    );

    let mut camera = Camera::new(
        Vec3::new(0.0, 0.2, 0.5),
        Vec3::new(0.0, 0.1, 0.0),
        16.0 / 9.0,
    );
    camera.up = Vec3::Y;
    camera.fov_y = 60.0_f32.to_radians();
    camera.near = 0.01;
    camera.far = 10.0;

    let mut scene = Scene::new(camera, Color::ZERO);

    scene
        .spheres
        .push(Sphere::new(Vec3::new(-0.35, 0.15, 0.0), 0.1, glass)?);
    scene
        .spheres
        .push(Sphere::new(Vec3::new(-0.45, 0.1, -0.25), 0.05, copper.clone())?);

    // Floor and two walls of an open box
    let (w, front, back, h) = (0.5, 0.3, -0.3, 0.5);
    let quads = [
        // floor (chrome)
        (
            [
                Vec3::new(-w, 0.0, back),
                Vec3::new(-w, 0.0, front),
                Vec3::new(w, 0.0, back),
            ],
            [
                Vec3::new(w, 0.0, back),
                Vec3::new(-w, 0.0, front),
                Vec3::new(w, 0.0, front),
            ],
            &chrome,
        ),
        // back wall (copper)
        (
            [
                Vec3::new(-w, h, back),
                Vec3::new(-w, 0.0, back),
                Vec3::new(w, 0.0, back),
            ],
            [
                Vec3::new(w, h, back),
                Vec3::new(-w, h, back),
                Vec3::new(w, 0.0, back),
            ],
            &copper,
        ),
        // left wall (copper)
        (
            [
                Vec3::new(-w, h, back),
                Vec3::new(-w, 0.0, front),
                Vec3::new(-w, 0.0, back),
            ],
            [
                Vec3::new(-w, h, front),
                Vec3::new(-w, 0.0, front),
                Vec3::new(-w, h, back),
            ],
            &copper,
        ),
    ];
    for (a, b, material) in quads {
        scene
            .triangles
            .push(Triangle::new(a[0], a[1], a[2], Arc::clone(material))?);
        scene
            .triangles
            .push(Triangle::new(b[0], b[1], b[2], Arc::clone(material))?);
    }

    scene.lights.extend([
        Light::point(Vec3::new(0.0, 5.0, 0.0), 1.0, Color::ONE),
        Light::point(Vec3::new(0.5, 0.5, 0.5), 0.5, Color::new(1.0, 0.0, 0.0)),
        Light::directional(Vec3::new(0.5, -0.5, 1.0), 1.0, Color::new(0.0, 1.0, 1.0)),
        Light::directional(Vec3::new(0.5, -0.5, -1.0), 1.0, Color::new(1.0, 0.0, 1.0)),
        Light::directional(Vec3::new(-0.5, -0.5, 0.0), 1.0, Color::new(1.0, 1.0, 0.0)),
        Light::directional(Vec3::new(-0.5, -0.5, -1.0), 1.0, Color::new(1.0, 1.0, 0.0)),
    ]);

    Ok(scene)
}
