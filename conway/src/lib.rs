//! Conway's Game of Life on a fixed, bounded grid.
//!
//! [`Grid`] holds the cells and applies the rule; [`Controller`] drives it
//! from user actions and an animation loop, reporting every changed cell to a
//! [`DrawingSurface`] and asking a [`Scheduler`] for the next tick.
//!
//! ```
//! use conway::{CellCanvas, Controller, LifeConfig, ManualScheduler};
//!
//! let config = LifeConfig::default();
//! let mut life = Controller::new(&config, CellCanvas::new(), ManualScheduler::new()).unwrap();
//! life.seed_named_pattern("Gosper Glider Gun").unwrap();
//! life.begin_animation();
//! while let Some(token) = life.scheduler_mut().next_tick() {
//!     life.tick(token);
//!     if life.generation() == 30 {
//!         life.stop_animation();
//!     }
//! }
//! assert_eq!(life.grid().live_count(), 41);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod scheduler;
pub mod surface;

pub use config::{FillRate, LifeConfig};
pub use controller::{AnimationState, Controller};
pub use error::LifeError;
pub use grid::{Cell, Grid, Transition};
pub use patterns::{PATTERNS, Pattern, find_pattern};
pub use scheduler::{FrameScheduler, ManualScheduler, Scheduler, TickToken};
pub use surface::{CellCanvas, DrawingSurface};
