//! Static street layout of the city
//!
//! A cell is a street when its row is a multiple of five or its column is a
//! multiple of ten. Row 0 and column 0 are therefore always streets, so any
//! non-empty grid has at least one street cell.

use super::error::{SimError, SimResult};
use super::types::{
    EMPTY_GLYPH, STREET_COLUMN_SPACING, STREET_GLYPH, STREET_ROW_SPACING,
};

/// Boolean street map stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetGrid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl StreetGrid {
    /// Build the street map for a `width` x `height` city
    pub fn build(width: i32, height: i32) -> SimResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(SimError::InvalidDimensions { width, height });
        }

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(y % STREET_ROW_SPACING == 0 || x % STREET_COLUMN_SPACING == 0);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    /// Whether `(x, y)` is a street. Out-of-bounds cells are not.
    pub fn is_street(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && self.cells[(y * self.width + x) as usize]
    }

    pub fn street_count(&self) -> usize {
        self.cells.iter().filter(|&&street| street).count()
    }

    /// Street/empty glyph rows, indexed `[y][x]`
    pub fn base_layer(&self) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| {
                row.iter()
                    .map(|&street| if street { STREET_GLYPH } else { EMPTY_GLYPH })
                    .collect()
            })
            .collect()
    }
}

/// Join glyph rows into newline-terminated text
pub fn render_grid(grid: &[Vec<char>]) -> String {
    let mut out = String::with_capacity(grid.iter().map(|row| row.len() + 1).sum());
    for row in grid {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}
