//! Headless driver: builds the configured engine and steps it.

use anyhow::Result;
use automata_core::{AutomatonKind, CellType, Population, RunConfig};
use automata_world::{Automaton, BattleEngine, LifeEngine};
use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Outcome of a finished run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub automaton: AutomatonKind,
    pub width: i32,
    pub height: i32,
    pub generations: u64,
    /// Alive cells at the end of a Life run
    pub alive: Option<usize>,
    /// Final per-type counts of a battle run
    pub population: Option<Population>,
    pub elapsed_secs: f64,
}

/// One convergence line: `index, scissors, rock, paper` as fractions of the grid,
/// where `index` is the zero-based number of the completed generation.
pub fn convergence_line(index: u64, population: &Population) -> String {
    format!(
        "{}, {}, {}, {}",
        index,
        population.fraction(CellType::Scissors),
        population.fraction(CellType::Rock),
        population.fraction(CellType::Paper)
    )
}

/// Advance `engine` for `generations` steps, calling `observe` after each one
/// and logging progress every `log_interval` generations.
pub fn drive<A, F>(engine: &mut A, generations: u64, log_interval: u64, mut observe: F) -> Result<()>
where
    A: Automaton,
    F: FnMut(&A) -> Result<()>,
{
    for _ in 0..generations {
        engine.advance();
        observe(engine)?;

        let generation = engine.generation();
        if log_interval > 0 && generation % log_interval == 0 {
            info!("Generation {}/{}", generation, generations);
        }
    }
    Ok(())
}

/// Run the configured automaton, writing convergence statistics to `out`
#[instrument(skip(config, out), fields(automaton = ?config.automaton, generations = config.generations))]
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<RunSummary> {
    config.validate()?;
    let start = Instant::now();

    let summary = match config.automaton {
        AutomatonKind::Life => {
            let mut engine = LifeEngine::new(&config.life)?;
            info!(
                event = "run_started",
                width = engine.width(),
                height = engine.height(),
                alive = engine.alive_count(),
                "Starting Life run for {} generations",
                config.generations
            );

            drive(&mut engine, config.generations, config.log_interval, |engine| {
                debug!(generation = engine.generation(), alive = engine.alive_count());
                Ok(())
            })?;

            RunSummary {
                automaton: AutomatonKind::Life,
                width: engine.width(),
                height: engine.height(),
                generations: engine.generation(),
                alive: Some(engine.alive_count()),
                population: None,
                elapsed_secs: start.elapsed().as_secs_f64(),
            }
        }
        AutomatonKind::Battle => {
            let mut engine = BattleEngine::new(&config.battle)?;
            info!(
                event = "run_started",
                width = engine.width(),
                height = engine.height(),
                edges = ?engine.edges(),
                population = %engine.population_by_type(),
                "Starting battle run for {} generations",
                config.generations
            );

            let print_stats = config.print_convergence_stats;
            drive(&mut engine, config.generations, config.log_interval, |engine| {
                let population = engine.population_by_type();
                debug!(
                    generation = engine.generation(),
                    conversions = engine.last_conversions(),
                    population = %population
                );
                if print_stats {
                    writeln!(out, "{}", convergence_line(engine.generation() - 1, &population))?;
                }
                Ok(())
            })?;

            let population = engine.population_by_type();
            if let Some(survivor) = population.sole_survivor() {
                info!(event = "converged", survivor = %survivor, "Only {} remains", survivor);
            }

            RunSummary {
                automaton: AutomatonKind::Battle,
                width: engine.width(),
                height: engine.height(),
                generations: engine.generation(),
                alive: None,
                population: Some(population),
                elapsed_secs: start.elapsed().as_secs_f64(),
            }
        }
    };

    out.flush()?;
    info!(
        event = "run_complete",
        summary = %serde_json::to_string(&summary)?,
        "Run finished in {:.2}s",
        summary.elapsed_secs
    );
    Ok(summary)
}
