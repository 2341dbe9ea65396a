use crate::NoiseGenerator;
use crate::config::CubicNoiseConfig;
use crate::hash::lattice_hash;
use crate::interpolate::cubic;
use crate::tile::tile;

// Maps the interpolated hash (about [-1, 1]) towards [0, 1]. Not clamped.
#[inline]
fn remap(v: f32) -> f32 {
    v * 0.5 + 0.25
}

// Four horizontally adjacent lattice samples around `xi` on row `y`
#[inline]
fn row(config: &CubicNoiseConfig, xi: i32, y: i32, lerp: f32) -> f32 {
    let seed = config.seed();
    let period = config.period_x();
    cubic(
        lattice_hash(seed, tile(xi.wrapping_sub(1), period), y),
        lattice_hash(seed, tile(xi, period), y),
        lattice_hash(seed, tile(xi.wrapping_add(1), period), y),
        lattice_hash(seed, tile(xi.wrapping_add(2), period), y),
        lerp,
    )
}

// 1D cubic noise at `x`.
// The lattice cell comes from truncating x / octave toward zero (the 2D path
// floors instead), so for negative x the fraction runs in (-1, 0].
//
// Panics if the config's x period is 0.
pub fn sample_1d(config: CubicNoiseConfig, x: f32) -> f32 {
    let scaled = x / config.octave() as f32;
    let xi = scaled as i32;
    let lerp = scaled - xi as f32;

    remap(row(&config, xi, 0, lerp))
}

// 2D cubic noise at (x, y): four rows interpolated along x, then the row
// results interpolated along y.
//
// Panics if either period of the config is 0, which includes every 1D config.
pub fn sample_2d(config: CubicNoiseConfig, x: f32, y: f32) -> f32 {
    let octave = config.octave() as f32;
    let xi = (x / octave).floor() as i32;
    let lerp_x = x / octave - xi as f32;
    let yi = (y / octave).floor() as i32;
    let lerp_y = y / octave - yi as f32;

    let mut rows = [0.0f32; 4];
    for (i, sample) in rows.iter_mut().enumerate() {
        let ty = tile(yi.wrapping_sub(1).wrapping_add(i as i32), config.period_y());
        *sample = row(&config, xi, ty, lerp_x);
    }

    remap(cubic(rows[0], rows[1], rows[2], rows[3], lerp_y))
}

impl NoiseGenerator for CubicNoiseConfig {
    fn get1(&self, x: f32) -> f32 {
        sample_1d(*self, x)
    }

    fn get2(&self, x: f32, y: f32) -> f32 {
        sample_2d(*self, x, y)
    }
}
