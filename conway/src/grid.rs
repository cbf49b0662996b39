// grid.rs - Grid types for Conway's Game of Life
//
// Cells live in a flat buffer with a one-cell border that is always dead, so
// the neighbor scan of an edge cell reads the border instead of wrapping.

use log::debug;
use rand::Rng;

use crate::config::FillRate;
use crate::error::LifeError;

/// Relative positions of the eight neighbors of a cell.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Conway's rule, given the number of live neighbors.
    #[must_use]
    pub fn next_state(self, live_neighbors: u8) -> Self {
        match (self, live_neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,   // Survival
            (Cell::Dead, 3)                     => Cell::Alive,   // Birth
            _                                   => Cell::Dead,    // Death or stays dead
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// A single cell that changed state during a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    pub row: usize,
    pub col: usize,
    pub state: Cell,
}

#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    next_cells: Vec<Cell>,
}

// The scratch buffer holds whatever the previous step left behind.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl Grid {
    /// Creates an all-dead grid. Both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }
        let size = width
            .checked_add(2)
            .zip(height.checked_add(2))
            .and_then(|(w, h)| w.checked_mul(h))
            .ok_or(LifeError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; size],
            next_cells: vec![Cell::Dead; size],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    // Position of (row, col) inside the bordered buffer.
    fn index(&self, row: usize, col: usize) -> usize {
        (row + 1) * (self.width + 2) + (col + 1)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, LifeError> {
        if self.contains(row, col) {
            Ok(self.index(row, col))
        } else {
            Err(LifeError::OutOfBounds { row, col, height: self.height, width: self.width })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col).then(|| self.cells[self.index(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), LifeError> {
        let idx = self.check_bounds(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell, LifeError> {
        let idx = self.check_bounds(row, col)?;
        self.cells[idx] = self.cells[idx].toggled();
        Ok(self.cells[idx])
    }

    /// Number of live cells among the in-bounds neighbors of (row, col).
    ///
    /// Edge and corner cells have fewer than eight neighbors; nothing wraps.
    /// Returns 0 for coordinates outside the grid.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        if !self.contains(row, col) {
            return 0;
        }
        Self::count_around(&self.cells, self.width + 2, self.index(row, col))
    }

    fn count_around(cells: &[Cell], stride: usize, idx: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBORS {
            let offset = dr * stride as isize + dc;
            if cells[idx.wrapping_add_signed(offset)].is_alive() {
                count += 1;
            }
        }
        count
    }

    /// Advances one generation and returns the cells that changed.
    ///
    /// Every cell of the next generation is computed from the current one;
    /// the result is written to a scratch buffer and swapped in afterwards.
    pub fn step(&mut self) -> Vec<Transition> {
        let stride = self.width + 2;
        let mut transitions = Vec::new();

        for row in 0..self.height {
            for col in 0..self.width {
                let idx = self.index(row, col);
                let current = self.cells[idx];
                let next = current.next_state(Self::count_around(&self.cells, stride, idx));
                self.next_cells[idx] = next;
                if next != current {
                    transitions.push(Transition { row, col, state: next });
                }
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next_cells);
        debug!("step changed {} cells", transitions.len());
        transitions
    }

    /// Brings each cell to life independently with probability `fill_rate`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, fill_rate: FillRate, rng: &mut R) {
        let rate = fill_rate.get();
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = self.index(row, col);
                self.cells[idx] = Cell::from(rng.random::<f64>() < rate);
            }
        }
        debug!("randomized {}x{} grid at fill rate {}", self.height, self.width, fill_rate);
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Clears the grid and brings every listed `(row, col)` to life.
    ///
    /// All coordinates are checked first; if any falls outside the grid the
    /// grid is left untouched.
    pub fn apply_pattern(&mut self, coords: &[(usize, usize)]) -> Result<(), LifeError> {
        if let Some(&(row, col)) = coords.iter().find(|&&(row, col)| !self.contains(row, col)) {
            return Err(LifeError::PatternOutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }

        self.clear();
        for &(row, col) in coords {
            let idx = self.index(row, col);
            self.cells[idx] = Cell::Alive;
        }
        Ok(())
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width)
                .filter(move |&col| self.cells[self.index(row, col)].is_alive())
                .map(move |col| (row, col))
        })
    }
}
