use thiserror::Error;

/// Everything that can go wrong while driving the simulation.
///
/// None of these are fatal: the grid keeps its last valid state and the
/// caller is expected to report the message to the user.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LifeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Pattern cell ({row}, {col}) does not fit in the {height}x{width} grid.")]
    PatternOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
    #[error("Unknown pattern: {0:?}.")]
    UnknownPattern(String),
    #[error("Cell ({row}, {col}) is outside the {height}x{width} grid.")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
    #[error("Grid width and height must be positive, got {width}x{height}.")]
    InvalidDimensions { width: usize, height: usize },
    #[error("Cells can only be edited while the animation is stopped.")]
    AnimationRunning,
}
