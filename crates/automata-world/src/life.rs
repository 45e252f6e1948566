//! Double-buffered Game of Life engine.

use crate::automaton::Automaton;
use crate::grid::ToroidalGrid;
use crate::neighbors;
use automata_core::{LifeConfig, Position, Result};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Next state of a single cell given its alive-neighbour count
pub fn next_state(alive: bool, neighbors: usize) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

pub struct LifeEngine {
    front: ToroidalGrid<bool>,
    back: ToroidalGrid<bool>,
    generation: u64,
}

impl LifeEngine {
    /// Create an engine with a randomized grid seeded from the configuration
    pub fn new(config: &LifeConfig) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, &mut rng)
    }

    /// Create an engine, drawing the initial grid from `rng`
    pub fn with_rng<R: Rng>(config: &LifeConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let mut grid = ToroidalGrid::from_config(&config.grid, false)?;
        randomize(&mut grid, config.probability_of_life, rng);

        let engine = Self::from_grid(grid);
        debug!(
            event = "life_initialized",
            width = config.grid.width,
            height = config.grid.height,
            alive = engine.alive_count(),
            "Life grid randomized"
        );
        Ok(engine)
    }

    /// Wrap an explicit starting grid
    pub fn from_grid(grid: ToroidalGrid<bool>) -> Self {
        let back = grid.clone();
        Self {
            front: grid,
            back,
            generation: 0,
        }
    }

    /// Empty grid with the given cells alive
    pub fn with_alive<I>(width: i32, height: i32, alive: I) -> Result<Self>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut grid = ToroidalGrid::new(width, height, false)?;
        for pos in alive {
            *grid.get_mut(pos) = true;
        }
        Ok(Self::from_grid(grid))
    }

    pub fn grid(&self) -> &ToroidalGrid<bool> {
        &self.front
    }

    pub fn set_cell(&mut self, x: i32, y: i32, alive: bool) {
        self.front.set(x, y, alive);
    }

    pub fn alive_count(&self) -> usize {
        self.front.values().filter(|alive| **alive).count()
    }

    /// Positions of every alive cell, row-major
    pub fn alive_cells(&self) -> Vec<Position> {
        self.front
            .iter()
            .filter(|(_, alive)| **alive)
            .map(|(pos, _)| pos)
            .collect()
    }
}

impl Automaton for LifeEngine {
    type Cell = bool;

    /// Evaluate every cell against the front buffer into the back buffer, then swap.
    #[instrument(level = "trace", skip(self), fields(generation = self.generation))]
    fn advance(&mut self) {
        for y in 0..self.front.height() {
            for x in 0..self.front.width() {
                let n = neighbors::count(&self.front, x, y, |alive| *alive);
                self.back.set(x, y, next_state(self.front.get(x, y), n));
            }
        }
        std::mem::swap(&mut self.front, &mut self.back);
        self.generation += 1;
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn width(&self) -> i32 {
        self.front.width()
    }

    fn height(&self) -> i32 {
        self.front.height()
    }

    fn cell_at(&self, x: i32, y: i32) -> bool {
        self.front.get(x, y)
    }
}

/// A cell starts alive when its draw is strictly greater than `threshold`.
/// Draws are taken column by column (x outer, y inner).
fn randomize<R: Rng>(grid: &mut ToroidalGrid<bool>, threshold: f64, rng: &mut R) {
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let draw = rng.gen::<f64>();
            grid.set(x, y, draw > threshold);
        }
    }
}
