use super::Cell;

/// Row-major grid of terminal cells. Two of these back the terminal's
/// double buffering; `diff` yields only the cells that changed between
/// frames.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Writers mutate cells in place; out-of-bounds coordinates yield `None`.
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    /// Reset every cell for the next frame.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Cells in `self` that differ from `previous`, in row-major order.
    pub fn diff<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = self.width as usize;
        self.cells
            .iter()
            .zip(&previous.cells)
            .enumerate()
            .filter_map(move |(i, (current, prev))| {
                (current != prev).then(|| ((i % width) as u16, (i / width) as u16, current))
            })
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}
