//! Common driving interface for both engines.

/// A cellular automaton stepped one generation at a time by an external driver
pub trait Automaton {
    /// Value reported for a single cell
    type Cell;

    /// Advance every cell by exactly one generation
    fn advance(&mut self);

    /// Number of completed `advance` calls
    fn generation(&self) -> u64;

    fn width(&self) -> i32;

    fn height(&self) -> i32;

    /// Cell at (x, y); coordinates wrap
    fn cell_at(&self, x: i32, y: i32) -> Self::Cell;

    /// Advance `generations` times
    fn advance_by(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }
}
