//! 2D toroidal grid shared by both automata.

use automata_core::{Error, GridConfig, Position, Result};
use serde::{Deserialize, Serialize};

/// A fixed-size 2D toroidal grid, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridSnapshot<T>")]
pub struct ToroidalGrid<T> {
    width: i32,
    height: i32,
    cells: Vec<T>,
}

/// Unchecked serialized form; dimensions are validated on the way in
#[derive(Deserialize)]
pub struct GridSnapshot<T> {
    pub width: i32,
    pub height: i32,
    pub cells: Vec<T>,
}

impl<T> TryFrom<GridSnapshot<T>> for ToroidalGrid<T> {
    type Error = Error;

    fn try_from(snapshot: GridSnapshot<T>) -> Result<Self> {
        Self::from_cells(snapshot.width, snapshot.height, snapshot.cells)
    }
}

impl<T: Clone> ToroidalGrid<T> {
    /// Create a grid with every cell set to `fill`
    pub fn new(width: i32, height: i32, fill: T) -> Result<Self> {
        GridConfig::new(width, height).validate()?;
        let size = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![fill; size],
        })
    }

    pub fn from_config(config: &GridConfig, fill: T) -> Result<Self> {
        Self::new(config.width, config.height, fill)
    }
}

impl<T> ToroidalGrid<T> {
    /// Build a grid by evaluating `f` for every position
    pub fn from_fn<F>(width: i32, height: i32, mut f: F) -> Result<Self>
    where
        F: FnMut(Position) -> T,
    {
        GridConfig::new(width, height).validate()?;
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Position::new(x, y)))
            .map(&mut f)
            .collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Wrap an existing row-major cell vector
    pub fn from_cells(width: i32, height: i32, cells: Vec<T>) -> Result<Self> {
        GridConfig::new(width, height).validate()?;
        let expected = (width as usize) * (height as usize);
        if cells.len() != expected {
            return Err(Error::Validation(format!(
                "expected {} cells for a {}x{} grid, got {}",
                expected,
                width,
                height,
                cells.len()
            )));
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

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `other` has the same dimensions, so the two can be swapped
    pub fn same_shape<U>(&self, other: &ToroidalGrid<U>) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Get cell at position (with toroidal wrapping)
    pub fn get_ref(&self, pos: Position) -> &T {
        let index = self.index_of(pos);
        &self.cells[index]
    }

    /// Get mutable cell at position (with toroidal wrapping)
    pub fn get_mut(&mut self, pos: Position) -> &mut T {
        let index = self.index_of(pos);
        &mut self.cells[index]
    }

    /// Set cell at (x, y), wrapping out-of-range coordinates
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        let index = self.index_of(Position::new(x, y));
        self.cells[index] = value;
    }

    /// Storage index for any position; total over all integer coordinates
    pub fn index_of(&self, pos: Position) -> usize {
        let wrapped = pos.wrap(self.width, self.height);
        (wrapped.y * self.width + wrapped.x) as usize
    }

    /// Get position from index
    pub fn index_to_pos(&self, index: usize) -> Position {
        let x = (index as i32) % self.width;
        let y = (index as i32) / self.width;
        Position::new(x, y)
    }

    /// Iterator over all positions
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(move |i| self.index_to_pos(i))
    }

    /// Iterator over all cells with positions
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (self.index_to_pos(i), cell))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }
}

impl<T: Copy> ToroidalGrid<T> {
    /// Get cell at (x, y), wrapping out-of-range coordinates
    pub fn get(&self, x: i32, y: i32) -> T {
        *self.get_ref(Position::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_grid_creation() {
        let grid = ToroidalGrid::new(10, 8, false).unwrap();
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 8);
        assert_eq!(grid.len(), 80);
        assert!(grid.values().all(|alive| !alive));
    }

    #[test]
    fn test_degenerate_dimensions() {
        assert!(matches!(
            ToroidalGrid::new(0, 4, 0u8),
            Err(Error::InvalidDimensions { width: 0, height: 4 })
        ));
        assert!(ToroidalGrid::new(4, -2, 0u8).is_err());
        assert!(ToroidalGrid::from_fn(-1, 1, |_| 0u8).is_err());
    }

    #[test]
    fn test_toroidal_wrapping() {
        let mut grid = ToroidalGrid::new(10, 10, 0u32).unwrap();
        grid.set(9, 9, 7);
        assert_eq!(grid.get(-1, -1), 7);
        assert_eq!(grid.get(19, -11), 7);

        grid.set(10, 10, 3);
        assert_eq!(grid.get(0, 0), 3);
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let grid = ToroidalGrid::from_fn(3, 2, |pos| pos.y * 10 + pos.x).unwrap();
        let values: Vec<_> = grid.values().copied().collect();
        assert_eq!(values, vec![0, 1, 2, 10, 11, 12]);
        assert_eq!(grid.index_to_pos(4), Position::new(1, 1));
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(positions[2], Position::new(2, 0));
        assert_eq!(positions[3], Position::new(0, 1));
    }

    #[test]
    fn test_from_cells_length_checked() {
        assert!(ToroidalGrid::from_cells(2, 2, vec![1, 2, 3]).is_err());
        let grid = ToroidalGrid::from_cells(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(grid.get(1, 1), 4);
    }

    #[test]
    fn test_swap_without_copy() {
        let mut front = ToroidalGrid::new(4, 4, false).unwrap();
        let mut back = ToroidalGrid::new(4, 4, true).unwrap();
        assert!(front.same_shape(&back));
        std::mem::swap(&mut front, &mut back);
        assert!(front.get(0, 0));
        assert!(!back.get(0, 0));
    }

    #[test]
    fn test_json_snapshot() {
        let grid = ToroidalGrid::from_fn(2, 2, |pos| pos.x == pos.y).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let restored: ToroidalGrid<bool> = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, restored);

        let truncated = r#"{"width":3,"height":3,"cells":[true,false]}"#;
        assert!(serde_json::from_str::<ToroidalGrid<bool>>(truncated).is_err());
    }

    proptest! {
        #[test]
        fn prop_access_is_total(
            width in 1i32..40,
            height in 1i32..40,
            x in -1000i32..1000,
            y in -1000i32..1000,
        ) {
            let grid = ToroidalGrid::from_fn(width, height, |pos| pos).unwrap();
            let resolved = grid.get(x, y);
            prop_assert_eq!(resolved.x, ((x % width) + width) % width);
            prop_assert_eq!(resolved.y, ((y % height) + height) % height);
            prop_assert_eq!(grid.get(x + width, y - height), resolved);
        }
    }
}
