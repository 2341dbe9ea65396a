use anyhow::Result;
use cubic_noise::utils::{HeightMap2D, normalize2};
use cubic_noise::{CubicNoiseConfig, seamless2};
use image::{Rgb, RgbImage};
use log::info;
use palette::{Gradient, LinSrgb};
use std::path::Path;

// Compute simple hillshade for a height-map
// `z_scale` adjusts vertical exaggeration
fn hillshade(map: &HeightMap2D, z_scale: f32) -> Vec<Vec<f32>> {
    let h = map.len();
    let w = map[0].len();
    let mut shade = vec![vec![0.0; w]; h];
    let azimuth = std::f32::consts::PI / 4.0; // 45°
    let altitude = std::f32::consts::PI / 4.0; // 45°
    let (sin_alt, cos_alt) = altitude.sin_cos();
    let lx = azimuth.cos() * cos_alt;
    let ly = azimuth.sin() * cos_alt;
    let lz = sin_alt;

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            // Central differences
            let dzdx = ((map[y][x + 1] - map[y][x - 1]) / 2.0) * z_scale;
            let dzdy = ((map[y + 1][x] - map[y - 1][x]) / 2.0) * z_scale;
            let (nx, ny, nz) = (-dzdx, -dzdy, 1.0);
            let len = (nx * nx + ny * ny + nz * nz).sqrt();
            // Lambertian dot
            shade[y][x] = ((nx * lx + ny * ly + nz * lz) / len).max(0.0);
        }
    }
    shade
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let size = 512;
    let config = CubicNoiseConfig::try_new_2d(2025, 64, 512, 512)?;

    // One period of the noise, so the image tiles
    let mut terrain = seamless2(&config);
    normalize2(&mut terrain);

    let shade = hillshade(&terrain, 40.0);

    // Create a color gradient - deep water to beach to grass to rock to snow
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)), // deep blue
        (0.30, LinSrgb::new(0.8, 0.8, 0.5)), // sand
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)), // green
        (0.75, LinSrgb::new(0.5, 0.4, 0.3)), // rock
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)), // snow
    ]);

    let mut img = RgbImage::new(size as u32, size as u32);
    for y in 0..size {
        for x in 0..size {
            let col: LinSrgb = gradient.get(terrain[y][x]);
            let rgb = col.into_format::<u8>();
            let light = (shade[y][x] * 0.5 + 0.5).clamp(0.0, 1.0);
            let pixel = Rgb([
                (rgb.red as f32 * light) as u8,
                (rgb.green as f32 * light) as u8,
                (rgb.blue as f32 * light) as u8,
            ]);
            img.put_pixel(x as u32, y as u32, pixel);
        }
    }

    let path = Path::new("cubic_terrain.png");
    img.save(path)?;
    info!("Saved final terrain image to {:?}", path);
    Ok(())
}
