use log::{debug, warn};
use thiserror::Error;

// Reasons a checked constructor refuses a config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("octave must be positive, got {0}")]
    NonPositiveOctave(i32),
    #[error("{axis} period {period} is smaller than octave {octave}, no lattice cell to tile")]
    EmptyPeriod { axis: char, period: i32, octave: i32 },
}

// Sampling parameters for cubic noise.
// Periods are stored in lattice cells (requested period / octave), so the
// pattern repeats every `period * octave` units of input coordinate.
// Plain `Copy` value: build once, share freely, nothing mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubicNoiseConfig {
    seed: u32,
    octave: i32,
    period_x: i32,
    period_y: i32,
}

impl CubicNoiseConfig {
    // 1D config. `period_y` is left at 0, so a 1D config only feeds `sample_1d`.
    //
    // No validation: octave == 0 panics on the integer division, and an
    // octave larger than `period` leaves a zero period that panics at sample time.
    pub fn new_1d(seed: u32, octave: i32, period: i32) -> Self {
        let config = Self {
            seed,
            octave,
            period_x: period.wrapping_div(octave),
            period_y: 0,
        };
        debug!("cubic noise 1D config {:?}", config);
        if config.period_x <= 0 {
            warn!(
                "cubic noise period {} with octave {} leaves lattice period {}",
                period, octave, config.period_x
            );
        }
        config
    }

    pub fn new_2d(seed: u32, octave: i32, period_x: i32, period_y: i32) -> Self {
        let config = Self {
            seed,
            octave,
            period_x: period_x.wrapping_div(octave),
            period_y: period_y.wrapping_div(octave),
        };
        debug!("cubic noise 2D config {:?}", config);
        if config.period_x <= 0 || config.period_y <= 0 {
            warn!(
                "cubic noise periods ({}, {}) with octave {} leave lattice periods ({}, {})",
                period_x, period_y, octave, config.period_x, config.period_y
            );
        }
        config
    }

    // Same as `new_1d` but rejects parameters that cannot tile
    pub fn try_new_1d(seed: u32, octave: i32, period: i32) -> Result<Self, ConfigError> {
        check_octave(octave)?;
        check_period('x', period, octave)?;
        Ok(Self::new_1d(seed, octave, period))
    }

    pub fn try_new_2d(
        seed: u32,
        octave: i32,
        period_x: i32,
        period_y: i32,
    ) -> Result<Self, ConfigError> {
        check_octave(octave)?;
        check_period('x', period_x, octave)?;
        check_period('y', period_y, octave)?;
        Ok(Self::new_2d(seed, octave, period_x, period_y))
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    // Period along x in lattice cells
    pub fn period_x(&self) -> i32 {
        self.period_x
    }

    // Period along y in lattice cells (0 for 1D configs)
    pub fn period_y(&self) -> i32 {
        self.period_y
    }

    // Distance in input coordinates after which the pattern repeats along x.
    // May be smaller than the requested period when it is not a multiple of octave.
    pub fn extent_x(&self) -> i32 {
        self.period_x.wrapping_mul(self.octave)
    }

    pub fn extent_y(&self) -> i32 {
        self.period_y.wrapping_mul(self.octave)
    }
}

fn check_octave(octave: i32) -> Result<(), ConfigError> {
    if octave <= 0 {
        return Err(ConfigError::NonPositiveOctave(octave));
    }
    Ok(())
}

fn check_period(axis: char, period: i32, octave: i32) -> Result<(), ConfigError> {
    if period / octave <= 0 {
        return Err(ConfigError::EmptyPeriod {
            axis,
            period,
            octave,
        });
    }
    Ok(())
}

pub fn config_1d(seed: u32, octave: i32, period: i32) -> CubicNoiseConfig {
    CubicNoiseConfig::new_1d(seed, octave, period)
}

pub fn config_2d(seed: u32, octave: i32, period_x: i32, period_y: i32) -> CubicNoiseConfig {
    CubicNoiseConfig::new_2d(seed, octave, period_x, period_y)
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CubicNoiseConfig, config_1d, config_2d};

    #[test]
    fn config1_divides_period_by_octave() {
        let c = config_1d(5, 4, 64);
        assert_eq!(c.seed(), 5);
        assert_eq!(c.octave(), 4);
        assert_eq!(c.period_x(), 16);
        assert_eq!(c.period_y(), 0);
        assert_eq!(c.extent_x(), 64);
    }

    #[test]
    fn config2_truncates_both_periods() {
        let c = config_2d(0, 3, 10, 20);
        assert_eq!(c.period_x(), 3);
        assert_eq!(c.period_y(), 6);
        // 10 is not a multiple of 3, so the real repeat is 9
        assert_eq!(c.extent_x(), 9);
        assert_eq!(c.extent_y(), 18);
    }

    #[test]
    fn config_truncates_toward_zero() {
        let c = config_1d(0, 4, -7);
        assert_eq!(c.period_x(), -1);
    }

    #[test]
    fn config_octave_larger_than_period_is_kept() {
        let c = config_2d(1, 32, 16, 64);
        assert_eq!(c.period_x(), 0);
        assert_eq!(c.period_y(), 2);
    }

    #[test]
    #[should_panic]
    fn config_zero_octave_panics() {
        let _ = config_1d(1, 0, 16);
    }

    #[test]
    fn try_config_matches_unchecked() {
        assert_eq!(
            CubicNoiseConfig::try_new_2d(9, 8, 128, 64),
            Ok(config_2d(9, 8, 128, 64))
        );
        assert_eq!(
            CubicNoiseConfig::try_new_1d(9, 8, 128),
            Ok(config_1d(9, 8, 128))
        );
    }

    #[test]
    fn try_config_rejects_bad_octave() {
        assert_eq!(
            CubicNoiseConfig::try_new_1d(0, 0, 16),
            Err(ConfigError::NonPositiveOctave(0))
        );
        assert_eq!(
            CubicNoiseConfig::try_new_2d(0, -2, 16, 16),
            Err(ConfigError::NonPositiveOctave(-2))
        );
    }

    #[test]
    fn try_config_rejects_empty_period() {
        assert_eq!(
            CubicNoiseConfig::try_new_2d(0, 8, 64, 7),
            Err(ConfigError::EmptyPeriod {
                axis: 'y',
                period: 7,
                octave: 8
            })
        );
        let err = CubicNoiseConfig::try_new_1d(0, 8, 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "x period 4 is smaller than octave 8, no lattice cell to tile"
        );
    }
}
