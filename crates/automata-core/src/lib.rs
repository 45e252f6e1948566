//! Core types and configuration for the toroidal Life and Rock-Scissors-Paper automata.

pub mod types;
pub mod config;
pub mod error;
pub mod population;

pub use error::{Error, Result};
pub use types::*;
pub use config::*;
pub use population::Population;
