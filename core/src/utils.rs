use crate::NoiseGenerator;
use crate::config::CubicNoiseConfig;

// 2D height map: row‐major Vec<Vec<f32>> of size height×width
// access as `map[y][x]`.
pub type HeightMap2D = Vec<Vec<f32>>;

// Sample `get1` at the integer coordinates 0..len
pub fn generate1(noise: &dyn NoiseGenerator, len: usize) -> Vec<f32> {
    (0..len).map(|x| noise.get1(x as f32)).collect()
}

// Sample `get2` at every integer coordinate of a width×height grid
pub fn generate2(noise: &dyn NoiseGenerator, width: usize, height: usize) -> HeightMap2D {
    let mut map = vec![vec![0.0; width]; height];
    for (y, row) in map.iter_mut().enumerate() {
        for (x, v) in row.iter_mut().enumerate() {
            *v = noise.get2(x as f32, y as f32);
        }
    }
    map
}

// One full period of 1D noise, extent_x() samples long, that repeats without a seam.
// Sampling starts one period in: tiling keeps negative lattice indices
// negative, so the cells left of the origin do not wrap onto the period's end.
pub fn seamless1(config: &CubicNoiseConfig) -> Vec<f32> {
    let extent = config.extent_x().max(0);
    (extent..extent * 2).map(|x| config.get1(x as f32)).collect()
}

// One full period of 2D noise, extent_y() rows of extent_x() samples.
// Offset by one period on both axes for the same reason as `seamless1`.
pub fn seamless2(config: &CubicNoiseConfig) -> HeightMap2D {
    let ex = config.extent_x().max(0);
    let ey = config.extent_y().max(0);
    (ey..ey * 2)
        .map(|y| (ex..ex * 2).map(|x| config.get2(x as f32, y as f32)).collect())
        .collect()
}

// flatten a 2D height map (row‐major) into a single Vec<f32>
// For converting to an image buffer (e.g. grayscale u8)
pub fn flatten2(map: &HeightMap2D) -> Vec<f32> {
    map.iter().flat_map(|row| row.iter().cloned()).collect()
}

// Rescale a height map in place to [0, 1].
// Cubic noise is not strictly inside [0, 1], so this is needed before turning
// samples into pixels. A flat map becomes all zeros.
pub fn normalize2(map: &mut HeightMap2D) {
    let mut min = f32::MAX;
    let mut max = f32::MIN;

    for row in map.iter() {
        for &val in row.iter() {
            min = min.min(val);
            max = max.max(val);
        }
    }

    let range = max - min;
    for row in map.iter_mut() {
        for val in row.iter_mut() {
            *val = if range > 0.0 { (*val - min) / range } else { 0.0 };
        }
    }
}
