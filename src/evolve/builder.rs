use super::reporter::{EvolveReporter, EvolveReporterNoop};
use super::{Evolve, EvolveConfig, EvolveState};
use crate::crossover::UniformCrossover;
use crate::domain::Domain;
use crate::errors::{ConfigError, EvolveError};
use crate::fitness::PlacementFitness;
use crate::individual::Individual;
use crate::inventory::Inventory;
use crate::mutate::CreepMutation;
use crate::select::{Elite, Tournament};

/// The builder for an [Evolve] run.
///
/// Domain and inventory are required; every hyperparameter has a tuned
/// default. All validation happens in [build](Builder::build), so a
/// constructed [Evolve] is always runnable.
#[derive(Clone, Debug)]
pub struct Builder<SR: EvolveReporter = EvolveReporterNoop> {
    pub domain: Option<Domain>,
    pub inventory: Option<Inventory>,
    pub config: EvolveConfig,
    pub reporter: SR,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            domain: None,
            inventory: None,
            config: EvolveConfig::default(),
            reporter: EvolveReporterNoop,
        }
    }
}

impl<SR: EvolveReporter> Builder<SR> {
    pub fn build(self) -> Result<Evolve<SR>, ConfigError> {
        let domain = self.domain.ok_or(ConfigError::MissingField("domain"))?;
        let inventory = self
            .inventory
            .ok_or(ConfigError::MissingField("inventory"))?;
        let config = self.config;

        if config.population_size < 2 {
            return Err(out_of_range(
                "population_size",
                config.population_size as f64,
                "at least 2",
            ));
        }
        if config.max_generations == 0 {
            return Err(out_of_range("max_generations", 0.0, "at least 1"));
        }
        if config.tournament_size == 0 || config.tournament_size > config.population_size {
            return Err(out_of_range(
                "tournament_size",
                config.tournament_size as f64,
                "in 1..=population_size",
            ));
        }
        if !config.elite_fraction.is_finite()
            || !(0.0..1.0).contains(&config.elite_fraction)
        {
            return Err(out_of_range(
                "elite_fraction",
                config.elite_fraction,
                "in [0, 1)",
            ));
        }
        if !config.crossover_rate.is_finite() || !(0.0..=1.0).contains(&config.crossover_rate) {
            return Err(out_of_range(
                "crossover_rate",
                config.crossover_rate,
                "in [0, 1]",
            ));
        }
        if !config.mutation_probability.is_finite()
            || !(0.0..=1.0).contains(&config.mutation_probability)
        {
            return Err(out_of_range(
                "mutation_probability",
                config.mutation_probability,
                "in [0, 1]",
            ));
        }
        if !config.mutation_strength.is_finite() || config.mutation_strength <= 0.0 {
            return Err(out_of_range(
                "mutation_strength",
                config.mutation_strength,
                "strictly positive",
            ));
        }
        if !config.domain_penalty.is_finite() || config.domain_penalty <= 0.0 {
            return Err(out_of_range(
                "domain_penalty",
                config.domain_penalty,
                "strictly positive",
            ));
        }
        if !config.overlap_weight.is_finite() || config.overlap_weight <= 0.0 {
            return Err(out_of_range(
                "overlap_weight",
                config.overlap_weight,
                "strictly positive",
            ));
        }
        if config.hashing_threshold == 0 {
            return Err(out_of_range("hashing_threshold", 0.0, "at least 1"));
        }

        let bounds = domain.bounding_box();
        let fit_limit = bounds.width().min(bounds.height()) / 2.0;
        if inventory.max_radius() > fit_limit {
            return Err(ConfigError::OversizedPlant {
                radius: inventory.max_radius(),
                width: bounds.width(),
                height: bounds.height(),
            });
        }

        Ok(Evolve {
            fitness: PlacementFitness::with_weights(
                domain,
                inventory.max_radius(),
                config.domain_penalty,
                config.overlap_weight,
                config.hashing_threshold,
            ),
            crossover: UniformCrossover::new(config.crossover_rate),
            mutate: CreepMutation::new(config.mutation_probability, config.mutation_strength),
            tournament: Tournament::new(config.tournament_size),
            elite: Elite::new(config.elite_fraction),
            domain,
            inventory,
            config,
            state: EvolveState::default(),
            reporter: self.reporter,
        })
    }

    /// Build and run in one step.
    pub fn call(self) -> Result<Individual, EvolveError> {
        let mut evolve = self.build()?;
        Ok(evolve.call()?)
    }

    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }
    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = Some(inventory);
        self
    }
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.config.population_size = population_size;
        self
    }
    pub fn with_max_generations(mut self, max_generations: usize) -> Self {
        self.config.max_generations = max_generations;
        self
    }
    pub fn with_tournament_size(mut self, tournament_size: usize) -> Self {
        self.config.tournament_size = tournament_size;
        self
    }
    pub fn with_elite_fraction(mut self, elite_fraction: f64) -> Self {
        self.config.elite_fraction = elite_fraction;
        self
    }
    pub fn with_crossover_rate(mut self, crossover_rate: f64) -> Self {
        self.config.crossover_rate = crossover_rate;
        self
    }
    pub fn with_mutation_probability(mut self, mutation_probability: f64) -> Self {
        self.config.mutation_probability = mutation_probability;
        self
    }
    pub fn with_mutation_strength(mut self, mutation_strength: f64) -> Self {
        self.config.mutation_strength = mutation_strength;
        self
    }
    pub fn with_domain_penalty(mut self, domain_penalty: f64) -> Self {
        self.config.domain_penalty = domain_penalty;
        self
    }
    pub fn with_overlap_weight(mut self, overlap_weight: f64) -> Self {
        self.config.overlap_weight = overlap_weight;
        self
    }
    pub fn with_hashing_threshold(mut self, hashing_threshold: usize) -> Self {
        self.config.hashing_threshold = hashing_threshold;
        self
    }
    pub fn with_reporter<SR2: EvolveReporter>(self, reporter: SR2) -> Builder<SR2> {
        Builder {
            domain: self.domain,
            inventory: self.inventory,
            config: self.config,
            reporter,
        }
    }
}

fn out_of_range(parameter: &'static str, value: f64, expected: &'static str) -> ConfigError {
    ConfigError::HyperparameterOutOfRange {
        parameter,
        value,
        expected,
    }
}
