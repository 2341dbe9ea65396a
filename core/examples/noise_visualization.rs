use anyhow::Result;
use cubic_noise::utils::{HeightMap2D, normalize2};
use cubic_noise::{CubicNoiseConfig, generate2, seamless2};
use image::{GrayImage, Luma};
use log::info;
use std::path::Path;

fn save_grayscale(map: &HeightMap2D, filename: &str) -> Result<()> {
    let h = map.len();
    let w = map.first().map_or(0, Vec::len);
    let mut img = GrayImage::new(w as u32, h as u32);
    for (y, row) in map.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let gray = (v * 255.0).round() as u8;
            img.put_pixel(x as u32, y as u32, Luma([gray]));
        }
    }
    img.save(Path::new(filename))?;
    info!("Saved {}", filename);
    Ok(())
}

// Lay a tile out 2×2 so any seam would show up in the middle of the image
fn repeat2x2(tile: &HeightMap2D) -> HeightMap2D {
    tile.iter()
        .chain(tile.iter())
        .map(|row| row.iter().chain(row.iter()).cloned().collect())
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = CubicNoiseConfig::try_new_2d(42, 16, 256, 256)?;

    // Plain sampling from the origin
    let mut plain = generate2(&config, 256, 256);
    normalize2(&mut plain);
    save_grayscale(&plain, "cubic2d.png")?;

    // One seamless period, tiled
    let mut tile = seamless2(&config);
    normalize2(&mut tile);
    save_grayscale(&repeat2x2(&tile), "cubic2d_tiled.png")?;

    // Coarser octave over the same period
    let coarse = CubicNoiseConfig::try_new_2d(42, 64, 256, 256)?;
    let mut tile = seamless2(&coarse);
    normalize2(&mut tile);
    save_grayscale(&repeat2x2(&tile), "cubic2d_coarse_tiled.png")?;

    Ok(())
}
