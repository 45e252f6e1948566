//! Fixed-order eight-neighbour scan.
//!
//! Every walk yields neighbours in [`Direction::ALL`] order: N, S, W, E, then
//! NW, NE, SW, SE. The battle automaton resolves combat in exactly this order,
//! so the order is part of its observable behaviour.

use crate::grid::ToroidalGrid;
use automata_core::{Direction, Position};

/// Raw neighbour positions of `center`, before any wrapping
pub fn offsets(center: Position) -> [Position; 8] {
    Direction::ALL.map(|d| {
        let (dx, dy) = d.to_delta();
        center.add(dx, dy)
    })
}

/// Neighbour positions of (x, y) resolved onto the torus
pub fn wrapped<T>(grid: &ToroidalGrid<T>, x: i32, y: i32) -> [Position; 8] {
    offsets(Position::new(x, y)).map(|p| p.wrap(grid.width(), grid.height()))
}

/// Neighbour positions of (x, y), with those past the grid edge left out
pub fn clamped<T>(grid: &ToroidalGrid<T>, x: i32, y: i32) -> [Option<Position>; 8] {
    offsets(Position::new(x, y)).map(|p| p.in_bounds(grid.width(), grid.height()).then_some(p))
}

/// Neighbour values of (x, y) read from the torus
pub fn values<T: Copy>(grid: &ToroidalGrid<T>, x: i32, y: i32) -> [T; 8] {
    wrapped(grid, x, y).map(|p| *grid.get_ref(p))
}

/// Number of neighbours of (x, y) matching `predicate`
pub fn count<T, F>(grid: &ToroidalGrid<T>, x: i32, y: i32, predicate: F) -> usize
where
    F: Fn(&T) -> bool,
{
    wrapped(grid, x, y)
        .iter()
        .filter(|p| predicate(grid.get_ref(**p)))
        .count()
}
