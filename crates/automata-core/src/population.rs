//! Per-type population statistics for the battle automaton.

use crate::types::CellType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cell counts keyed by type, built fresh once per generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Population {
    counts: [usize; 4],
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally an iterator of cell types
    pub fn tally<I>(types: I) -> Self
    where
        I: IntoIterator<Item = CellType>,
    {
        let mut population = Self::new();
        for t in types {
            population.record(t);
        }
        population
    }

    pub fn record(&mut self, cell_type: CellType) {
        self.counts[cell_type.index()] += 1;
    }

    pub fn get(&self, cell_type: CellType) -> usize {
        self.counts[cell_type.index()]
    }

    /// Total over every type, empty cells included
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Share of all cells held by `cell_type`
    pub fn fraction(&self, cell_type: CellType) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(cell_type) as f32 / total as f32
    }

    /// The only living type left, if exactly one remains
    pub fn sole_survivor(&self) -> Option<CellType> {
        let mut living = [CellType::Scissors, CellType::Rock, CellType::Paper]
            .into_iter()
            .filter(|t| self.get(*t) > 0);
        match (living.next(), living.next()) {
            (Some(t), None) => Some(t),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellType, usize)> + '_ {
        CellType::ALL.iter().map(move |t| (*t, self.get(*t)))
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scissors={} rock={} paper={} none={}",
            self.get(CellType::Scissors),
            self.get(CellType::Rock),
            self.get(CellType::Paper),
            self.get(CellType::None)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_and_total() {
        let population = Population::tally([
            CellType::Rock,
            CellType::Rock,
            CellType::Paper,
            CellType::None,
        ]);
        assert_eq!(population.get(CellType::Rock), 2);
        assert_eq!(population.get(CellType::Paper), 1);
        assert_eq!(population.get(CellType::Scissors), 0);
        assert_eq!(population.get(CellType::None), 1);
        assert_eq!(population.total(), 4);
        assert_eq!(population.fraction(CellType::Rock), 0.5);
    }

    #[test]
    fn test_empty_population_fraction() {
        assert_eq!(Population::new().fraction(CellType::Paper), 0.0);
    }

    #[test]
    fn test_sole_survivor() {
        let population = Population::tally([CellType::Paper, CellType::Paper, CellType::None]);
        assert_eq!(population.sole_survivor(), Some(CellType::Paper));

        let population = Population::tally([CellType::Paper, CellType::Rock]);
        assert_eq!(population.sole_survivor(), None);

        let population = Population::tally([CellType::None]);
        assert_eq!(population.sole_survivor(), None);
    }

    #[test]
    fn test_iter_covers_all_types() {
        let population = Population::tally([CellType::Scissors]);
        let entries: Vec<_> = population.iter().collect();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], (CellType::Scissors, 1));
    }
}
