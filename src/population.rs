//! The population is a container for [Individuals](Individual).
use crate::domain::Rect;
use crate::individual::Individual;
use crate::inventory::Inventory;
use ordered_float::OrderedFloat;

#[derive(Clone, Debug)]
pub struct Population {
    pub individuals: Vec<Individual>,
}

impl Population {
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// The initial generation: `size` independently seeded individuals.
    pub fn random(inventory: &Inventory, bounds: &Rect, size: usize) -> Self {
        Self::new(
            (0..size)
                .map(|_| inventory.seed_individual(bounds))
                .collect(),
        )
    }

    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// The fittest individual; unevaluated ones order below every evaluated
    /// score.
    pub fn best_individual(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .max_by_key(|individual| {
                OrderedFloat(individual.fitness_score().unwrap_or(f64::NEG_INFINITY))
            })
    }
}
