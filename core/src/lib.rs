// cubic_noise: hash-based lattice noise with cubic interpolation, in 1D and 2D,
// tileable on a configurable period
pub mod config;
pub mod hash;
pub mod interpolate;
pub mod sample;
pub mod tile;
pub mod utils;

pub use config::{ConfigError, CubicNoiseConfig, config_1d, config_2d};
pub use hash::lattice_hash;
pub use interpolate::cubic;
pub use sample::{sample_1d, sample_2d};
pub use tile::tile;
pub use utils::{HeightMap2D, flatten2, generate1, generate2, normalize2, seamless1, seamless2};

// Noise source that can be sampled along a line or over a plane
pub trait NoiseGenerator {
    // Sample 1D noise at x
    fn get1(&self, x: f32) -> f32;

    // Sample 2D noise at (x, y)
    fn get2(&self, x: f32, y: f32) -> f32;
}
