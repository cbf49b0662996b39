// config.rs - Compile-time defaults for the simulation and its window

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::LifeError;

pub const GRID_WIDTH: usize = 80;                             // Cells per row
pub const GRID_HEIGHT: usize = 55;                            // Rows
pub const CELL_SIZE: f32 = 10.0;                              // Pixels per cell side
pub const DEFAULT_FILL_RATE: f64 = 0.25;                      // Share of cells alive after randomize
pub const DEFAULT_TICK_DELAY: Duration = Duration::from_millis(1);

/// Probability that a cell comes up alive when the grid is randomized.
///
/// Always within `[0, 1]`; construction from a float or from user text
/// rejects anything else with [`LifeError::InvalidInput`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FillRate(f64);

impl FillRate {
    pub const EMPTY: FillRate = FillRate(0.0);
    pub const FULL: FillRate = FillRate(1.0);

    pub fn new(rate: f64) -> Result<Self, LifeError> {
        if rate.is_finite() && (0.0..=1.0).contains(&rate) {
            Ok(Self(rate))
        } else {
            Err(LifeError::InvalidInput(format!(
                "fill rate must be between 0 and 1, got {rate}"
            )))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for FillRate {
    fn default() -> Self {
        Self(DEFAULT_FILL_RATE)
    }
}

impl FromStr for FillRate {
    type Err = LifeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let rate: f64 = text
            .parse()
            .map_err(|_| LifeError::InvalidInput(format!("'{text}' is not a number")))?;
        Self::new(rate)
    }
}

impl fmt::Display for FillRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the front end needs to lay out a window and build a controller.
#[derive(Clone, Debug)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: f32,
    pub fill_rate: FillRate,
    pub tick_delay: Duration,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cell_size: CELL_SIZE,
            fill_rate: FillRate::default(),
            tick_delay: DEFAULT_TICK_DELAY,
        }
    }
}

impl LifeConfig {
    /// Size of the painted canvas in pixels, `(width, height)`.
    pub fn canvas_size(&self) -> (f32, f32) {
        (
            self.width as f32 * self.cell_size,
            self.height as f32 * self.cell_size,
        )
    }

    /// Cell under a point given relative to the canvas' top left corner.
    ///
    /// Points on or past the far edges, or left/above the canvas, hit nothing.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let (row, col) = ((y / self.cell_size) as usize, (x / self.cell_size) as usize);
        (row < self.height && col < self.width).then_some((row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_user_text() {
        assert_eq!("0.25".parse::<FillRate>().unwrap().get(), 0.25);
        assert_eq!("  1 ".parse::<FillRate>().unwrap(), FillRate::FULL);
        assert_eq!("0".parse::<FillRate>().unwrap(), FillRate::EMPTY);
    }

    #[test]
    fn rejects_non_numeric_text() {
        let err = "a quarter".parse::<FillRate>().unwrap_err();
        assert!(matches!(err, LifeError::InvalidInput(_)));
        assert!("".parse::<FillRate>().is_err());
    }

    #[test]
    fn rejects_out_of_range_rates() {
        assert!(FillRate::new(-0.1).is_err());
        assert!(FillRate::new(1.5).is_err());
        assert!(FillRate::new(f64::NAN).is_err());
        assert!("inf".parse::<FillRate>().is_err());
    }

    #[test]
    fn default_config_matches_constants() {
        let config = LifeConfig::default();
        assert_eq!((config.width, config.height), (GRID_WIDTH, GRID_HEIGHT));
        assert_eq!(config.fill_rate.get(), DEFAULT_FILL_RATE);
        assert_eq!(config.canvas_size(), (800.0, 550.0));
    }

    #[test]
    fn clicks_map_to_cells_inside_the_canvas() {
        let config = LifeConfig::default();
        assert_eq!(config.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(config.cell_at(25.0, 9.9), Some((0, 2)));
        assert_eq!(config.cell_at(799.9, 549.9), Some((54, 79)));
        // Far edges and beyond
        assert_eq!(config.cell_at(800.0, 10.0), None);
        assert_eq!(config.cell_at(10.0, 550.0), None);
        assert_eq!(config.cell_at(-1.0, 10.0), None);
        assert_eq!(config.cell_at(10.0, f32::NAN), None);
    }
}
