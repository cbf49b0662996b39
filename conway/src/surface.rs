use std::collections::BTreeSet;

/// Something cells can be painted on, addressed one cell at a time.
///
/// All three operations are idempotent: drawing a cell that is already drawn
/// or erasing one that is not changes nothing.
pub trait DrawingSurface {
    fn draw_cell(&mut self, row: usize, col: usize);
    fn erase_cell(&mut self, row: usize, col: usize);
    fn clear_all(&mut self);
}

/// The set of cells currently drawn, kept in row-major order.
///
/// The window paints exactly this set every frame; tests inspect it to see
/// what the controller asked to be drawn.
#[derive(Clone, Debug, Default)]
pub struct CellCanvas {
    drawn: BTreeSet<(usize, usize)>,
}

impl CellCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.drawn.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawn.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.drawn.iter().copied()
    }
}

impl DrawingSurface for CellCanvas {
    fn draw_cell(&mut self, row: usize, col: usize) {
        self.drawn.insert((row, col));
    }

    fn erase_cell(&mut self, row: usize, col: usize) {
        self.drawn.remove(&(row, col));
    }

    fn clear_all(&mut self) {
        self.drawn.clear();
    }
}
