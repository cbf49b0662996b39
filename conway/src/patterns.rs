use crate::error::LifeError;
use crate::grid::Grid;

#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Smallest grid, as `(rows, cols)`, that holds every cell of the pattern.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(rows, cols), &(row, col)| (rows.max(row + 1), cols.max(col + 1)))
    }

    pub fn fits(&self, grid: &Grid) -> bool {
        let (rows, cols) = self.extent();
        rows <= grid.height() && cols <= grid.width()
    }
}

pub const GOSPER_GLIDER_GUN: &str = "Gosper Glider Gun";

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(6, 7), (7, 8), (8, 6), (8, 7), (8, 8)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(25, 24), (25, 25), (25, 26)],
    },
    Pattern {
        name: "Toad",
        cells: &[(24, 25), (24, 26), (24, 27), (25, 24), (25, 25), (25, 26)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(10, 10), (10, 11), (11, 10), (11, 11), (12, 12), (12, 13), (13, 12), (13, 13)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (20, 24), (20, 25), (20, 26), (20, 30), (20, 31), (20, 32),
            (22, 22), (22, 27), (22, 29), (22, 34),
            (23, 22), (23, 27), (23, 29), (23, 34),
            (24, 22), (24, 27), (24, 29), (24, 34),
            (25, 24), (25, 25), (25, 26), (25, 30), (25, 31), (25, 32),
            // Bottom half (mirrored)
            (27, 24), (27, 25), (27, 26), (27, 30), (27, 31), (27, 32),
            (28, 22), (28, 27), (28, 29), (28, 34),
            (29, 22), (29, 27), (29, 29), (29, 34),
            (30, 22), (30, 27), (30, 29), (30, 34),
            (32, 24), (32, 25), (32, 26), (32, 30), (32, 31), (32, 32),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(25, 25), (25, 26), (24, 26), (26, 25), (26, 24)],
    },
    // Top left corner; emits a glider towards the bottom right every 30 generations.
    Pattern {
        name: GOSPER_GLIDER_GUN,
        cells: &[
            (5, 1), (5, 2), (6, 1), (6, 2),
            (5, 11), (6, 11), (7, 11), (4, 12), (8, 12), (3, 13), (9, 13),
            (3, 14), (9, 14), (6, 15), (4, 16), (8, 16), (5, 17), (6, 17),
            (7, 17), (6, 18), (3, 21), (4, 21), (5, 21), (3, 22), (4, 22),
            (5, 22), (2, 23), (6, 23), (1, 25), (2, 25), (6, 25), (7, 25),
            (3, 35), (4, 35), (3, 36), (4, 36),
        ],
    },
];

/// Looks a pattern up by name, ignoring case.
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    let name = name.trim();
    PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

/// Clears the grid and draws the named pattern into it.
pub fn apply_named_pattern(grid: &mut Grid, name: &str) -> Result<&'static Pattern, LifeError> {
    let pattern = find_pattern(name).ok_or_else(|| LifeError::UnknownPattern(name.to_string()))?;
    grid.apply_pattern(pattern.cells)?;
    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GRID_HEIGHT, GRID_WIDTH};
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = PATTERNS.iter().map(|p| p.name.to_ascii_lowercase()).collect();
        assert_eq!(names.len(), PATTERNS.len());
    }

    #[test]
    fn every_pattern_fits_the_default_grid() {
        let grid = Grid::new(GRID_WIDTH, GRID_HEIGHT).unwrap();
        for pattern in PATTERNS {
            assert!(pattern.fits(&grid), "{} does not fit", pattern.name);
        }
    }

    #[test]
    fn gosper_gun_extent() {
        let gun = find_pattern(GOSPER_GLIDER_GUN).unwrap();
        assert_eq!(gun.cells.len(), 36);
        assert_eq!(gun.extent(), (10, 37));
        assert!(!gun.fits(&Grid::new(36, 10).unwrap()));
        assert!(gun.fits(&Grid::new(37, 10).unwrap()));
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(find_pattern("gosper glider gun").unwrap().name, GOSPER_GLIDER_GUN);
        assert_eq!(find_pattern(" Blinker ").unwrap().name, "Blinker");
        assert!(find_pattern("Spaceship").is_none());
    }

    #[test]
    fn unknown_name_is_an_error() {
        let mut grid = Grid::new(10, 10).unwrap();
        assert_eq!(
            apply_named_pattern(&mut grid, "Spaceship").err(),
            Some(LifeError::UnknownPattern("Spaceship".to_string()))
        );
    }

    #[test]
    fn gun_does_not_fit_a_small_grid() {
        let mut grid = Grid::new(20, 20).unwrap();
        grid.set(0, 0, crate::grid::Cell::Alive).unwrap();
        let err = apply_named_pattern(&mut grid, GOSPER_GLIDER_GUN).err().unwrap();
        assert!(matches!(err, LifeError::PatternOutOfBounds { .. }));
        assert_eq!(grid.live_count(), 1);
    }
}
