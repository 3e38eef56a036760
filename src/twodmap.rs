use std::ops::{Index, IndexMut};

/// A flat, row-major two-dimensional field addressed by (x, y)
/// tuples.  One allocation per map, stride arithmetic in exactly one
/// place.  Holds a plain f64 per cell for the energy map, or a
/// cost-plus-parent record for the seam search's cumulative table.
#[derive(Debug)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A new map with every cell at its type's default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major cell vector.  Handy for injecting
    /// hand-written grids in tests.
    pub fn from_raw(width: u32, height: u32, cells: Vec<P>) -> Self {
        assert_eq!(
            cells.len(),
            width as usize * height as usize,
            "cell vector does not match {}x{}",
            width,
            height
        );
        TwoDimensionalMap { width, height, cells }
    }

    // Keep the index math in a single location and never, ever mess
    // with it.
    fn cell_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// The whole field as one row-major slice.
    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.cell_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.cell_index(x, y);
        &mut self.cells[index]
    }
}
