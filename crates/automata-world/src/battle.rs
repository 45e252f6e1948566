//! In-place Rock-Scissors-Paper engine.
//!
//! The grid is a single buffer mutated while it is scanned. Cells are visited
//! column by column (x outer, y inner) and each cell fights its neighbours in
//! scan order, so a conversion is seen by every later battle in the same
//! generation, including the remaining battles of the converted cell itself.

use crate::automaton::Automaton;
use crate::grid::ToroidalGrid;
use crate::neighbors;
use automata_core::{
    BattleCell, BattleConfig, CellType, EdgeMode, Error, Population, Position, Result, MAX_HP,
};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument, trace};

/// Resolve one attack of `attacker` against `defender`, mutating the defender.
///
/// A dominated defender loses one hit point. A defender left without hit
/// points, or an empty one, takes the attacker's type at full health.
pub fn battle(defender: &mut BattleCell, attacker: BattleCell) {
    if defender.is_empty() && attacker.is_empty() {
        return;
    }

    if attacker.cell_type.beats(defender.cell_type) {
        defender.hp -= 1;
    }

    if defender.hp <= 0 || defender.is_empty() {
        defender.cell_type = attacker.cell_type;
        defender.hp = MAX_HP;
    }
}

pub struct BattleEngine {
    grid: ToroidalGrid<BattleCell>,
    edges: EdgeMode,
    generation: u64,
    population: Population,
    conversions: usize,
}

impl BattleEngine {
    /// Create an engine with a randomized grid seeded from the configuration
    pub fn new(config: &BattleConfig) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, &mut rng)
    }

    /// Create an engine, drawing the initial types from `rng`
    pub fn with_rng<R: Rng>(config: &BattleConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let mut grid = ToroidalGrid::from_config(&config.grid, BattleCell::default())?;
        randomize(&mut grid, rng);

        let engine = Self::from_grid(grid, config.edges)?;
        debug!(
            event = "battle_initialized",
            width = config.grid.width,
            height = config.grid.height,
            edges = ?config.edges,
            population = %engine.population,
            "Battle grid randomized"
        );
        Ok(engine)
    }

    /// Wrap an explicit starting grid. Every living cell must have 0 < hp <= 10.
    pub fn from_grid(grid: ToroidalGrid<BattleCell>, edges: EdgeMode) -> Result<Self> {
        if let Some((pos, cell)) = grid
            .iter()
            .find(|(_, cell)| !cell.is_empty() && !(1..=MAX_HP).contains(&cell.hp))
        {
            return Err(Error::Validation(format!(
                "{} cell at ({}, {}) has hp {}, expected 1..={}",
                cell.cell_type, pos.x, pos.y, cell.hp, MAX_HP
            )));
        }

        let population = Population::tally(grid.values().map(|cell| cell.cell_type));
        Ok(Self {
            grid,
            edges,
            generation: 0,
            population,
            conversions: 0,
        })
    }

    pub fn grid(&self) -> &ToroidalGrid<BattleCell> {
        &self.grid
    }

    pub fn edges(&self) -> EdgeMode {
        self.edges
    }

    /// Cell counts per type as of the last completed generation
    pub fn population_by_type(&self) -> Population {
        self.population
    }

    /// Number of cells whose type changed during the last generation
    pub fn last_conversions(&self) -> usize {
        self.conversions
    }

    /// Let the cell at (x, y) fight each of its neighbours in scan order.
    /// Returns whether its type changed.
    fn fight(&mut self, x: i32, y: i32) -> bool {
        let pos = Position::new(x, y);
        let before = self.grid.get_ref(pos).cell_type;

        match self.edges {
            EdgeMode::Wrap => {
                for attacker_pos in neighbors::wrapped(&self.grid, x, y) {
                    self.engage(pos, attacker_pos);
                }
            }
            EdgeMode::Clamp => {
                for attacker_pos in neighbors::clamped(&self.grid, x, y).into_iter().flatten() {
                    self.engage(pos, attacker_pos);
                }
            }
        }

        self.grid.get_ref(pos).cell_type != before
    }

    fn engage(&mut self, defender_pos: Position, attacker_pos: Position) {
        let attacker = *self.grid.get_ref(attacker_pos);
        battle(self.grid.get_mut(defender_pos), attacker);
    }
}

impl Automaton for BattleEngine {
    type Cell = BattleCell;

    #[instrument(level = "trace", skip(self), fields(generation = self.generation))]
    fn advance(&mut self) {
        let mut conversions = 0;
        for x in 0..self.grid.width() {
            for y in 0..self.grid.height() {
                if self.fight(x, y) {
                    conversions += 1;
                }
            }
        }

        self.population = Population::tally(self.grid.values().map(|cell| cell.cell_type));
        self.conversions = conversions;
        self.generation += 1;

        trace!(
            generation = self.generation,
            conversions,
            population = %self.population,
            "Battle generation complete"
        );
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn width(&self) -> i32 {
        self.grid.width()
    }

    fn height(&self) -> i32 {
        self.grid.height()
    }

    fn cell_at(&self, x: i32, y: i32) -> BattleCell {
        self.grid.get(x, y)
    }
}

/// Every cell gets a uniformly drawn type (empty included) at full health.
/// Draws are taken column by column (x outer, y inner).
fn randomize<R: Rng>(grid: &mut ToroidalGrid<BattleCell>, rng: &mut R) {
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let cell_type = CellType::ALL[rng.gen_range(0..CellType::ALL.len())];
            grid.set(x, y, BattleCell::spawn(cell_type));
        }
    }
}
