// controller.rs - Turns user actions into grid mutations and redraws
//
// The controller owns the grid, the animation flag and the two collaborators
// it talks to: a drawing surface for cells and a scheduler for ticks. Window
// event handlers only ever call the public methods below.

use std::time::Duration;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{FillRate, LifeConfig};
use crate::error::LifeError;
use crate::grid::{Cell, Grid, Transition};
use crate::patterns::{self, Pattern};
use crate::scheduler::{Scheduler, TickToken};
use crate::surface::DrawingSurface;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    #[default]
    Stopped,
}

pub struct Controller<D, S> {
    grid: Grid,
    state: AnimationState,
    surface: D,
    scheduler: S,
    rng: StdRng,
    tick_delay: Duration,
    generation: u64,
    run: u64,            // Bumped by every begin_animation; ticks from older runs are ignored
}

impl<D: DrawingSurface, S: Scheduler> Controller<D, S> {
    /// Builds a stopped controller over an empty grid, with an OS-seeded random source.
    pub fn new(config: &LifeConfig, surface: D, scheduler: S) -> Result<Self, LifeError> {
        Self::with_rng(config, surface, scheduler, StdRng::from_os_rng())
    }

    /// Same as [`Controller::new`] but with a caller-supplied random source.
    pub fn with_rng(
        config: &LifeConfig,
        mut surface: D,
        scheduler: S,
        rng: StdRng,
    ) -> Result<Self, LifeError> {
        let grid = Grid::new(config.width, config.height)?;
        surface.clear_all();
        Ok(Self {
            grid,
            state: AnimationState::Stopped,
            surface,
            scheduler,
            rng,
            tick_delay: config.tick_delay,
            generation: 0,
            run: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AnimationState::Running
    }

    /// Steps applied since the grid was last randomized, cleared or seeded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tick_delay(&self) -> Duration {
        self.tick_delay
    }

    /// Delay between consecutive ticks; takes effect from the next scheduled tick.
    pub fn set_tick_delay(&mut self, delay: Duration) {
        self.tick_delay = delay;
    }

    pub fn set_random_state(&mut self, fill_rate: FillRate) {
        info!("randomizing grid with fill rate {fill_rate}");
        self.stop_animation();
        self.grid.randomize(fill_rate, &mut self.rng);
        self.generation = 0;
        self.redraw_all();
    }

    /// Parses the fill rate typed by the user and randomizes the grid with it.
    ///
    /// Bad input leaves both the grid and the animation untouched.
    pub fn set_random_state_from_input(&mut self, text: &str) -> Result<(), LifeError> {
        let fill_rate = text.parse::<FillRate>().inspect_err(|err| warn!("{err}"))?;
        self.set_random_state(fill_rate);
        Ok(())
    }

    pub fn take_one_step(&mut self) -> usize {
        let changed = self.advance();
        self.stop_animation();
        changed
    }

    /// Starts the tick loop. Does nothing if the animation is already running.
    pub fn begin_animation(&mut self) {
        if self.is_running() {
            debug!("animation already running");
            return;
        }
        self.run += 1;
        self.state = AnimationState::Running;
        info!("animation started (run {})", self.run);
        self.scheduler.schedule(Duration::ZERO, TickToken(self.run));
    }

    pub fn stop_animation(&mut self) {
        if self.is_running() {
            info!("animation stopped at generation {}", self.generation);
        }
        self.state = AnimationState::Stopped;
    }

    pub fn clear_window(&mut self) {
        info!("clearing grid");
        self.stop_animation();
        self.grid.clear();
        self.generation = 0;
        self.surface.clear_all();
    }

    pub fn seed_named_pattern(&mut self, name: &str) -> Result<&'static Pattern, LifeError> {
        self.stop_animation();
        let pattern = patterns::apply_named_pattern(&mut self.grid, name)
            .inspect_err(|err| warn!("cannot seed {name:?}: {err}"))?;
        info!("seeded {} ({} cells)", pattern.name, pattern.cells.len());
        self.generation = 0;
        self.redraw_all();
        Ok(pattern)
    }

    /// Flips a single cell. Editing is refused while the animation runs.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<Cell, LifeError> {
        if self.is_running() {
            return Err(LifeError::AnimationRunning);
        }
        let state = self.grid.toggle(row, col)?;
        self.redraw_cell(Transition { row, col, state });
        Ok(state)
    }

    /// One iteration of the animation loop.
    ///
    /// Returns `false` without touching anything when the animation has been
    /// stopped, or restarted, since the tick was scheduled.
    pub fn tick(&mut self, token: TickToken) -> bool {
        if !self.is_running() || token != TickToken(self.run) {
            debug!("dropping stale tick {token:?}");
            return false;
        }
        self.advance();
        self.scheduler.schedule(self.tick_delay, token);
        true
    }

    fn advance(&mut self) -> usize {
        let transitions = self.grid.step();
        self.generation += 1;
        for &transition in &transitions {
            self.redraw_cell(transition);
        }
        debug!("generation {}: {} cells changed", self.generation, transitions.len());
        transitions.len()
    }

    fn redraw_cell(&mut self, Transition { row, col, state }: Transition) {
        match state {
            Cell::Alive => self.surface.draw_cell(row, col),
            Cell::Dead => self.surface.erase_cell(row, col),
        }
    }

    fn redraw_all(&mut self) {
        self.surface.clear_all();
        for (row, col) in self.grid.live_cells() {
            self.surface.draw_cell(row, col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use crate::surface::CellCanvas;

    fn controller(width: usize, height: usize) -> Controller<CellCanvas, ManualScheduler> {
        let config = LifeConfig { width, height, ..LifeConfig::default() };
        Controller::with_rng(&config, CellCanvas::new(), ManualScheduler::new(), StdRng::seed_from_u64(11))
            .unwrap()
    }

    fn canvas_matches_grid(c: &Controller<CellCanvas, ManualScheduler>) -> bool {
        c.surface().cells().eq(c.grid().live_cells())
    }

    #[test]
    fn starts_stopped_and_empty() {
        let c = controller(10, 10);
        assert_eq!(c.state(), AnimationState::Stopped);
        assert_eq!(c.generation(), 0);
        assert_eq!(c.scheduler().pending(), 0);
        assert!(c.surface().is_empty());
    }

    #[test]
    fn begin_twice_schedules_once() {
        let mut c = controller(10, 10);
        c.begin_animation();
        c.begin_animation();
        assert!(c.is_running());
        assert_eq!(c.scheduler().pending(), 1);
        assert_eq!(c.scheduler().delays().next(), Some(Duration::ZERO));
    }

    #[test]
    fn tick_steps_and_reschedules() {
        let mut c = controller(10, 10);
        c.seed_named_pattern("Glider").unwrap();
        c.set_tick_delay(Duration::from_millis(5));
        c.begin_animation();

        let token = c.scheduler_mut().next_tick().unwrap();
        assert!(c.tick(token));
        assert_eq!(c.generation(), 1);
        assert_eq!(c.scheduler().delays().collect::<Vec<_>>(), vec![Duration::from_millis(5)]);
        assert!(canvas_matches_grid(&c));
    }

    #[test]
    fn queued_tick_after_stop_does_nothing() {
        let mut c = controller(10, 10);
        c.set_random_state(FillRate::new(0.5).unwrap());
        let before = c.grid().clone();

        c.begin_animation();
        c.stop_animation();
        let token = c.scheduler_mut().next_tick().unwrap();
        assert!(!c.tick(token));
        assert_eq!(c.grid(), &before);
        assert_eq!(c.scheduler().pending(), 0);
    }

    #[test]
    fn restart_does_not_double_the_loop() {
        let mut c = controller(10, 10);
        c.begin_animation();
        c.stop_animation();
        c.begin_animation();
        assert_eq!(c.scheduler().pending(), 2);

        let stale = c.scheduler_mut().next_tick().unwrap();
        let live = c.scheduler_mut().next_tick().unwrap();
        assert!(!c.tick(stale));
        assert!(c.tick(live));
        assert_eq!(c.scheduler().pending(), 1);
    }

    #[test]
    fn step_stops_the_animation() {
        let mut c = controller(10, 10);
        c.grid.apply_pattern(&[(4, 5), (5, 5), (6, 5)]).unwrap();
        c.begin_animation();

        assert_eq!(c.take_one_step(), 4);
        assert!(!c.is_running());
        let token = c.scheduler_mut().next_tick().unwrap();
        assert!(!c.tick(token));
        assert_eq!(c.generation(), 1);
    }

    #[test]
    fn clear_erases_everything() {
        let mut c = controller(12, 12);
        c.set_random_state(FillRate::FULL);
        assert_eq!(c.surface().len(), 144);
        c.begin_animation();

        c.clear_window();
        assert!(!c.is_running());
        assert_eq!(c.grid().live_count(), 0);
        assert!(c.surface().is_empty());
    }

    #[test]
    fn randomize_redraws_from_scratch() {
        let mut c = controller(20, 20);
        c.set_random_state(FillRate::FULL);
        c.take_one_step();
        c.set_random_state(FillRate::new(0.3).unwrap());
        assert_eq!(c.generation(), 0);
        assert!(canvas_matches_grid(&c));
    }

    #[test]
    fn bad_fill_rate_leaves_everything_alone() {
        let mut c = controller(10, 10);
        c.set_random_state(FillRate::new(0.5).unwrap());
        c.begin_animation();
        let before = c.grid().clone();

        let err = c.set_random_state_from_input("lots").unwrap_err();
        assert!(matches!(err, LifeError::InvalidInput(_)));
        assert!(c.is_running());
        assert_eq!(c.grid(), &before);

        c.set_random_state_from_input("1.0").unwrap();
        assert!(!c.is_running());
        assert_eq!(c.grid().live_count(), 100);
    }

    #[test]
    fn unknown_pattern_is_reported() {
        let mut c = controller(50, 50);
        assert_eq!(
            c.seed_named_pattern("Loafer").unwrap_err(),
            LifeError::UnknownPattern("Loafer".to_string())
        );
    }

    #[test]
    fn toggle_only_while_stopped() {
        let mut c = controller(10, 10);
        assert_eq!(c.toggle_cell(2, 3).unwrap(), Cell::Alive);
        assert_eq!(c.surface().cells().collect::<Vec<_>>(), vec![(2, 3)]);
        assert_eq!(c.toggle_cell(2, 3).unwrap(), Cell::Dead);
        assert!(c.surface().is_empty());

        c.begin_animation();
        assert_eq!(c.toggle_cell(2, 3).unwrap_err(), LifeError::AnimationRunning);
        c.stop_animation();
        assert!(matches!(c.toggle_cell(10, 0), Err(LifeError::OutOfBounds { .. })));
    }
}
