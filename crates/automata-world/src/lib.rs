//! Automaton update engines.
//!
//! This crate implements the toroidal grid, the fixed-order neighbour scan and
//! the two engines that step it: double-buffered Life and in-place
//! Rock-Scissors-Paper.

pub mod automaton;
pub mod battle;
pub mod grid;
pub mod life;
pub mod neighbors;

pub use automaton::Automaton;
pub use battle::{battle, BattleEngine};
pub use grid::ToroidalGrid;
pub use life::LifeEngine;
