//! Single sphere example.
//!
//! Renders a lit sphere in front of the camera and saves it as a PNG.
//! Set RUST_LOG=debug to see render progress.

use anyhow::Context;
use tryffeli_renderer::{
    shoot, CameraSettings, Color, Material, MaterialType, PointLight, RenderConfig, Scene, Sphere,
    Vector3,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let scene = Scene::new()
        .with_primitive(Sphere::new(
            Vector3::new(0.0, 0.0, 200.0),
            50.0,
            Material::new(MaterialType::Lambertian),
        )?)
        .with_primitive(Sphere::new(
            Vector3::new(70.0, 40.0, 300.0),
            30.0,
            Material::lambertian(),
        )?)
        .with_light(PointLight::new(Vector3::new(-100.0, 100.0, 0.0), 1.0)?)
        .with_light(PointLight::new(Vector3::new(150.0, -50.0, 120.0), 0.4)?);

    let antialiasing = std::env::args().any(|arg| arg == "--aa");
    let mut settings = CameraSettings::new()
        .with_resolution(640, 480)
        .with_position(Vector3::ZERO, Vector3::Z)
        .with_background(Color::BLACK);
    if antialiasing {
        settings = settings.with_antialiasing(1);
    }
    let mut camera = settings.build()?;

    shoot(camera.as_mut(), &scene, &RenderConfig::default());

    let film = camera.film();
    let filename = "tryffeli.png";
    image::save_buffer(
        filename,
        &film.to_rgb8(),
        film.width(),
        film.height(),
        image::ColorType::Rgb8,
    )
    .with_context(|| format!("failed to save {}", filename))?;

    log::info!("Saved to {}", filename);
    Ok(())
}
