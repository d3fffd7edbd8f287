//! Grid of layer stores
//!
//! A grid is a fixed `width x height` matrix of [`CellStore`]s, addressed
//! as `grid[x][y]`, plus the shared brush radius. Every cell uses the same
//! compositing strategy, chosen at construction.

use std::ops::{Index, IndexMut};

use log::debug;
use sha2::{Digest, Sha256};

use crate::config::{EngineConfig, MAX_BRUSH, MIN_BRUSH};
use crate::error::{Result, TesseraError};
use crate::layers::Color;
use crate::store::{CellStore, DrawStyle, LayerStore};

#[derive(Debug, Clone)]
pub struct Grid {
    draw_style: DrawStyle,
    width: usize,
    height: usize,
    cells: Vec<Vec<CellStore>>,
    brush_size: usize,
}

impl Grid {
    /// Create a grid with default capacities and brush size
    pub fn new(draw_style: DrawStyle, width: usize, height: usize) -> Self {
        Self::build(&EngineConfig::new(draw_style, width, height))
    }

    /// Create a grid from a validated configuration
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: &EngineConfig) -> Self {
        let cells = (0..config.width)
            .map(|_| {
                (0..config.height)
                    .map(|_| CellStore::for_style(config.draw_style, config))
                    .collect()
            })
            .collect();

        Self {
            draw_style: config.draw_style,
            width: config.width,
            height: config.height,
            cells,
            brush_size: config.brush_size.clamp(MIN_BRUSH, MAX_BRUSH),
        }
    }

    pub fn draw_style(&self) -> DrawStyle {
        self.draw_style
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn brush_size(&self) -> usize {
        self.brush_size
    }

    /// Grow the brush by one, stopping at `MAX_BRUSH`
    pub fn increase_brush_size(&mut self) {
        if self.brush_size < MAX_BRUSH {
            self.brush_size += 1;
        }
    }

    /// Shrink the brush by one, stopping at `MIN_BRUSH`
    pub fn decrease_brush_size(&mut self) {
        if self.brush_size > MIN_BRUSH {
            self.brush_size -= 1;
        }
    }

    /// Run `special` on every cell, row by row
    pub fn special(&mut self) {
        debug!(
            "grid special over {}x{} {} cells",
            self.width, self.height, self.draw_style
        );
        for row in &mut self.cells {
            for cell in row.iter_mut() {
                cell.special();
            }
        }
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Column of cells at `x`
    pub fn row(&self, x: usize) -> Result<&[CellStore]> {
        self.cells
            .get(x)
            .map(Vec::as_slice)
            .ok_or(TesseraError::RowOutOfBounds {
                x,
                width: self.width,
            })
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<&CellStore> {
        self.cells
            .get(x)
            .and_then(|row| row.get(y))
            .ok_or(TesseraError::CellOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
    }

    pub fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut CellStore> {
        let (width, height) = (self.width, self.height);
        self.cells
            .get_mut(x)
            .and_then(|row| row.get_mut(y))
            .ok_or(TesseraError::CellOutOfBounds {
                x,
                y,
                width,
                height,
            })
    }

    /// Composite every cell over `start`; indexed `[x][y]`
    pub fn render(&self, start: Color, timestamp: u64) -> Vec<Vec<Color>> {
        self.cells
            .iter()
            .enumerate()
            .map(|(x, row)| {
                row.iter()
                    .enumerate()
                    .map(|(y, cell)| cell.get_color(start, timestamp, x, y))
                    .collect()
            })
            .collect()
    }

    /// SHA-256 over the dimensions and rendered colours, as lowercase hex
    pub fn fingerprint(&self, start: Color, timestamp: u64) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.width as u64).to_le_bytes());
        hasher.update((self.height as u64).to_le_bytes());
        for row in self.render(start, timestamp) {
            for color in row {
                hasher.update(color.to_bytes());
            }
        }
        format!("{:x}", hasher.finalize())
    }
}

impl Index<usize> for Grid {
    type Output = [CellStore];

    /// Panics when `x` is outside the grid; use [`Grid::row`] to get an error instead.
    fn index(&self, x: usize) -> &Self::Output {
        &self.cells[x]
    }
}

impl IndexMut<usize> for Grid {
    fn index_mut(&mut self, x: usize) -> &mut Self::Output {
        &mut self.cells[x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BRUSH;
    use crate::layers::layer_by_name;

    const START: Color = Color::rgb(0, 0, 0);

    #[test]
    fn test_new_grid_dimensions() {
        let grid = Grid::new(DrawStyle::Add, 4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.brush_size(), DEFAULT_BRUSH);
        assert_eq!(grid[3].len(), 3);
        assert!(grid[0].iter().all(|cell| cell.draw_style() == DrawStyle::Add));
    }

    #[test]
    fn test_brush_clamps() {
        let mut grid = Grid::new(DrawStyle::Set, 2, 2);
        for _ in 0..10 {
            grid.increase_brush_size();
        }
        assert_eq!(grid.brush_size(), MAX_BRUSH);
        for _ in 0..10 {
            grid.decrease_brush_size();
        }
        assert_eq!(grid.brush_size(), MIN_BRUSH);
    }

    #[test]
    fn test_out_of_range_access() {
        let grid = Grid::new(DrawStyle::Set, 2, 3);
        assert!(matches!(
            grid.row(2),
            Err(TesseraError::RowOutOfBounds { x: 2, width: 2 })
        ));
        assert!(matches!(
            grid.cell(1, 3),
            Err(TesseraError::CellOutOfBounds { .. })
        ));
        assert!(grid.cell(1, 2).is_ok());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let grid = Grid::new(DrawStyle::Set, 2, 2);
        let _ = &grid[5];
    }

    #[test]
    fn test_special_reaches_every_cell_of_non_square_grid() {
        let mut grid = Grid::new(DrawStyle::Set, 2, 5);
        grid.special();
        let rendered = grid.render(START, 0);
        assert!(rendered.iter().flatten().all(|&c| c == Color::WHITE));
    }

    #[test]
    fn test_fingerprint_tracks_state() {
        let mut grid = Grid::new(DrawStyle::Sequence, 3, 3);
        let blank = grid.fingerprint(START, 0);
        assert_eq!(blank.len(), 64);

        grid.cell_mut(1, 1).unwrap().add(layer_by_name("red").unwrap());
        let painted = grid.fingerprint(START, 0);
        assert_ne!(blank, painted);

        grid[1][1].erase(layer_by_name("red").unwrap());
        assert_eq!(grid.fingerprint(START, 0), blank);
    }

    #[test]
    fn test_from_config_validates() {
        let config = EngineConfig::new(DrawStyle::Add, 0, 2);
        assert!(Grid::from_config(&config).is_err());
    }
}
