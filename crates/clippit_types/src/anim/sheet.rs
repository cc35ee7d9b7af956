//! Sprite sheet geometry.
//!
//! The sheet is a grid of equally sized cells addressed row-major. Catalog
//! construction turns `(row, column)` offsets into flat indices, and a renderer
//! turns flat indices back into pixel rectangles with [`SheetLayout::cell_rect`].

use serde::{Deserialize, Serialize};

use super::constants;

/// Pixel rectangle of one sheet cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
	/// Left edge in pixels
	pub x: u32,
	/// Top edge in pixels
	pub y: u32,
	/// Width in pixels
	pub width: u32,
	/// Height in pixels
	pub height: u32,
}

/// Grid layout of a sprite sheet.
///
/// # Examples
///
/// ```
/// use clippit_types::anim::SheetLayout;
///
/// let layout = SheetLayout::default();
/// assert_eq!(layout.index(1, 3), Some(30));
///
/// let rect = layout.cell_rect(30).unwrap();
/// assert_eq!((rect.x, rect.y), (3 * 124, 93));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetLayout {
	/// Cells per row
	pub columns: u32,
	/// Number of rows
	pub rows: u32,
	/// Cell width in pixels
	pub cell_width: u32,
	/// Cell height in pixels
	pub cell_height: u32,
}

impl Default for SheetLayout {
	fn default() -> Self {
		Self {
			columns: constants::SHEET_COLUMNS,
			rows: constants::SHEET_ROWS,
			cell_width: constants::CELL_WIDTH,
			cell_height: constants::CELL_HEIGHT,
		}
	}
}

impl SheetLayout {
	/// Creates a layout with the given grid and cell size
	pub fn new(columns: u32, rows: u32, cell_width: u32, cell_height: u32) -> Self {
		Self {
			columns,
			rows,
			cell_width,
			cell_height,
		}
	}

	/// Flat index of the cell at `(row, column)`, `None` when it does not fit in a `u32`
	pub fn index(&self, row: u32, column: u32) -> Option<u32> {
		row.checked_mul(self.columns)?.checked_add(column)
	}

	/// Total number of cells on the sheet
	pub fn cell_count(&self) -> u64 {
		u64::from(self.columns) * u64::from(self.rows)
	}

	/// Pixel rectangle of the cell at flat `index`, `None` when off the sheet
	pub fn cell_rect(&self, index: u32) -> Option<CellRect> {
		if self.columns == 0 || u64::from(index) >= self.cell_count() {
			return None;
		}

		Some(CellRect {
			x: (index % self.columns).checked_mul(self.cell_width)?,
			y: (index / self.columns).checked_mul(self.cell_height)?,
			width: self.cell_width,
			height: self.cell_height,
		})
	}
}
