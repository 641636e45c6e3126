//! The search strategy: evolve placements generation by generation.
//!
//! A run seeds a random population, evaluates it, then loops: deep-clone the
//! elites, fill the rest of the next generation with tournament-selected,
//! crossed-over, mutated and freshly evaluated children, and fold the result
//! into the global best. The loop is single-threaded; only the two evaluation
//! fan-outs (genesis and offspring) run on the rayon pool, and each joins
//! before the next generation starts.
//!
//! A run is bounded by [max_duration]; the budget is checked at the top of
//! every generation and exceeding it surfaces a
//! [TimeoutError](crate::errors::TimeoutError).
mod builder;
pub mod prelude;
mod reporter;

pub use self::builder::Builder as EvolveBuilder;
pub use self::reporter::{EvolveReporter, EvolveReporterLog, EvolveReporterNoop};

use crate::crossover::UniformCrossover;
use crate::domain::{Domain, Rect};
use crate::errors::TimeoutError;
use crate::fitness::{self, PlacementFitness};
use crate::individual::Individual;
use crate::inventory::Inventory;
use crate::mutate::CreepMutation;
use crate::population::Population;
use crate::select::{Elite, Tournament};
use rayon::prelude::*;
use std::fmt;
use std::time::{Duration, Instant};

pub const DEFAULT_POPULATION_SIZE: usize = 100;
pub const DEFAULT_MAX_GENERATIONS: usize = 800;
pub const DEFAULT_TOURNAMENT_SIZE: usize = 3;
pub const DEFAULT_ELITE_FRACTION: f64 = 0.05;
pub const DEFAULT_CROSSOVER_RATE: f64 = 0.9;
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.02;
pub const DEFAULT_MUTATION_STRENGTH: f64 = 1.0;

const BASE_TIME_BUDGET_MS: u64 = 5_000;
const TIME_BUDGET_PER_GENE_MS: u64 = 100;

/// The adaptive time budget of a run: `5000 + 100 * K` milliseconds for a
/// genome of K genes.
pub fn max_duration(genes_size: usize) -> Duration {
    Duration::from_millis(BASE_TIME_BUDGET_MS + TIME_BUDGET_PER_GENE_MS * genes_size as u64)
}

/// Hyperparameters of a run. The defaults are the tuned values; override them
/// through the [builder](EvolveBuilder).
#[derive(Clone, Debug)]
pub struct EvolveConfig {
    pub population_size: usize,
    pub max_generations: usize,
    pub tournament_size: usize,
    pub elite_fraction: f64,
    pub crossover_rate: f64,
    pub mutation_probability: f64,
    pub mutation_strength: f64,
    pub domain_penalty: f64,
    pub overlap_weight: f64,
    pub hashing_threshold: usize,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            max_generations: DEFAULT_MAX_GENERATIONS,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            elite_fraction: DEFAULT_ELITE_FRACTION,
            crossover_rate: DEFAULT_CROSSOVER_RATE,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            mutation_strength: DEFAULT_MUTATION_STRENGTH,
            domain_penalty: fitness::DOMAIN_PENALTY,
            overlap_weight: fitness::OVERLAP_WEIGHT,
            hashing_threshold: fitness::HASHING_THRESHOLD,
        }
    }
}

/// Mutable progress of a run, readable after [Evolve::call] returns.
///
/// The best individual is held outside the population and only ever replaced
/// by a strictly fitter one, so its score is non-decreasing over a run.
#[derive(Clone, Debug, Default)]
pub struct EvolveState {
    pub current_generation: usize,
    pub best_generation: usize,
    pub best_individual: Option<Individual>,
}

impl EvolveState {
    pub fn best_fitness_score(&self) -> Option<f64> {
        self.best_individual
            .as_ref()
            .and_then(|individual| individual.fitness_score())
    }
}

/// One optimization run. Built via [Evolve::builder], consumed by
/// [call](Evolve::call).
pub struct Evolve<SR: EvolveReporter = EvolveReporterNoop> {
    pub domain: Domain,
    pub inventory: Inventory,
    pub config: EvolveConfig,
    pub state: EvolveState,
    pub reporter: SR,
    fitness: PlacementFitness,
    crossover: UniformCrossover,
    mutate: CreepMutation,
    tournament: Tournament,
    elite: Elite,
}

impl Evolve {
    pub fn builder() -> EvolveBuilder {
        EvolveBuilder::new()
    }
}

impl<SR: EvolveReporter> Evolve<SR> {
    /// Run the full generational loop and return a deep clone of the best
    /// individual ever observed.
    pub fn call(&mut self) -> Result<Individual, TimeoutError> {
        self.state = EvolveState::default();
        let bounds = self.domain.bounding_box();

        let mut population =
            Population::random(&self.inventory, &bounds, self.config.population_size);
        self.fitness.call_for_population(&mut population);
        self.update_best_individual(&population);
        self.reporter.on_start(&population, &self.state);

        let limit = max_duration(self.inventory.genes_size());
        let started_at = Instant::now();

        for generation in 0..self.config.max_generations {
            let elapsed = started_at.elapsed();
            if elapsed > limit {
                return Err(TimeoutError {
                    elapsed,
                    limit,
                    generations_completed: generation,
                });
            }
            self.state.current_generation = generation;

            let mut next_individuals = self.elite.select(&population);
            let offspring_size = self.config.population_size - next_individuals.len();
            next_individuals.extend(self.offspring(&population, &bounds, generation, offspring_size));
            population = Population::new(next_individuals);

            self.update_best_individual(&population);
            self.reporter.on_new_generation(&population, &self.state);
        }

        self.reporter.on_finish(&self.state);
        let best = self
            .state
            .best_individual
            .clone()
            .expect("population is never empty");
        Ok(best)
    }

    /// Produce `amount` children in parallel. The current population is only
    /// read; every worker owns the child it builds until the join.
    fn offspring(
        &self,
        population: &Population,
        bounds: &Rect,
        generation: usize,
        amount: usize,
    ) -> Vec<Individual> {
        let tournament = &self.tournament;
        let crossover = &self.crossover;
        let mutate = &self.mutate;
        let fitness = &self.fitness;
        let max_generations = self.config.max_generations;

        (0..amount)
            .into_par_iter()
            .map(move |_| {
                let father = tournament.pick(population);
                let mut mother = tournament.pick(population);
                // with tournament_size == population_size the tournament is
                // deterministic, so give up after a few identical draws and
                // let the crossover degrade to a clone
                let mut redraws = 0;
                while std::ptr::eq(father, mother) && redraws < 3 {
                    mother = tournament.pick(population);
                    redraws += 1;
                }

                let mut child = crossover.call(father, mother);
                mutate.call(&mut child, bounds, generation, max_generations);
                if child.fitness_score().is_none() {
                    fitness.call_for_individual(&mut child);
                }
                child
            })
            .collect()
    }

    fn update_best_individual(&mut self, population: &Population) {
        if let Some(contender) = population.best_individual() {
            let contending_score = contender.fitness_score().unwrap_or(f64::NEG_INFINITY);
            let current_score = self
                .state
                .best_fitness_score()
                .unwrap_or(f64::NEG_INFINITY);
            if self.state.best_individual.is_none() || contending_score > current_score {
                self.state.best_individual = Some(contender.clone());
                self.state.best_generation = self.state.current_generation;
                self.reporter.on_new_best(&self.state);
            }
        }
    }
}

impl<SR: EvolveReporter> fmt::Display for Evolve<SR> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "evolve:")?;
        writeln!(f, "  domain: {}", self.domain)?;
        writeln!(f, "  genes_size: {}", self.inventory.genes_size())?;
        writeln!(f, "  population_size: {}", self.config.population_size)?;
        writeln!(f, "  max_generations: {}", self.config.max_generations)?;
        writeln!(f, "  best_generation: {}", self.state.best_generation)?;
        write!(
            f,
            "  best_fitness_score: {:?}",
            self.state.best_fitness_score()
        )
    }
}
