//! Configuration types for the automata and the runner.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Width of the grid in cells
    pub width: i32,
    /// Height of the grid in cells
    pub height: i32,
}

impl GridConfig {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// How the battle automaton treats neighbours past the grid edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeMode {
    /// Neighbours wrap around the torus
    #[default]
    Wrap,
    /// Neighbours past the edge are skipped
    Clamp,
}

/// Game of Life parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeConfig {
    pub grid: GridConfig,
    /// Threshold for the initial draw: a cell starts alive when a uniform
    /// draw in [0, 1) is strictly greater than this value
    pub probability_of_life: f64,
    /// Random seed for reproducibility
    pub seed: u64,
}

impl LifeConfig {
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        if !(0.0..=1.0).contains(&self.probability_of_life) {
            return Err(Error::Validation(format!(
                "probability_of_life must be within [0, 1], got {}",
                self.probability_of_life
            )));
        }
        Ok(())
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::new(410, 370), // 1640x1480 screen at 4px cells
            probability_of_life: 0.55,
            seed: 0,
        }
    }
}

/// Rock-Scissors-Paper parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleConfig {
    pub grid: GridConfig,
    /// Random seed for reproducibility
    pub seed: u64,
    /// Edge handling for combat neighbours
    #[serde(default)]
    pub edges: EdgeMode,
}

impl BattleConfig {
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::new(320, 240), // 640x480 screen at 2px cells
            seed: 0,
            edges: EdgeMode::Wrap,
        }
    }
}

/// Which automaton the runner drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutomatonKind {
    Life,
    Battle,
}

/// Headless runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub automaton: AutomatonKind,
    /// Number of generations to advance
    pub generations: u64,
    /// Log progress every this many generations (0 disables)
    pub log_interval: u64,
    /// Print per-generation population fractions for the battle automaton
    pub print_convergence_stats: bool,
    pub life: LifeConfig,
    pub battle: BattleConfig,
}

impl RunConfig {
    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.automaton {
            AutomatonKind::Life => self.life.validate(),
            AutomatonKind::Battle => self.battle.validate(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            automaton: AutomatonKind::Battle,
            generations: 1_000,
            log_interval: 100,
            print_convergence_stats: true,
            life: LifeConfig::default(),
            battle: BattleConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let life = LifeConfig::default();
        assert_eq!(life.grid, GridConfig::new(410, 370));
        assert_eq!(life.probability_of_life, 0.55);

        let battle = BattleConfig::default();
        assert_eq!(battle.grid, GridConfig::new(320, 240));
        assert_eq!(battle.edges, EdgeMode::Wrap);

        let run = RunConfig::default();
        assert_eq!(run.automaton, AutomatonKind::Battle);
        assert!(run.validate().is_ok());
    }

    #[test]
    fn test_degenerate_grid_rejected() {
        assert!(matches!(
            GridConfig::new(0, 10).validate(),
            Err(Error::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(GridConfig::new(10, -1).validate().is_err());
        assert!(GridConfig::new(1, 1).validate().is_ok());
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        let config = LifeConfig {
            probability_of_life: 1.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_partial_run_config_json() {
        let json = r#"{
            "automaton": "life",
            "generations": 25,
            "life": { "grid": { "width": 8, "height": 6 }, "probability_of_life": 0.3, "seed": 7 }
        }"#;
        let config: RunConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.automaton, AutomatonKind::Life);
        assert_eq!(config.generations, 25);
        assert_eq!(config.life.grid.area(), 48);
        assert_eq!(config.log_interval, 100);
        assert_eq!(config.battle.edges, EdgeMode::Wrap);
    }

    #[test]
    fn test_edge_mode_serialization() {
        let json = serde_json::to_string(&EdgeMode::Clamp).unwrap();
        assert_eq!(json, "\"clamp\"");
        let config: BattleConfig =
            serde_json::from_str(r#"{ "grid": { "width": 4, "height": 4 }, "seed": 1 }"#).unwrap();
        assert_eq!(config.edges, EdgeMode::Wrap);
    }
}
