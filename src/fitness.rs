//! The search goal: a normalized placement quality in `(0, 1]`.
//!
//! Two penalties are summed: a flat [DOMAIN_PENALTY] per gene whose center
//! lies outside the domain shape, and the pairwise overlap penalty scaled by
//! [OVERLAP_WEIGHT]. The fitness is `1 / (1 + penalty)`, so 1.0 means a
//! perfect placement and every extra penalty strictly lowers the score.
//!
//! Evaluation is pure and thread-safe; the population sweep fans out over a
//! rayon pool and only touches individuals that have no cached score yet.
use crate::domain::Domain;
use crate::individual::Individual;
use crate::overlap::{BruteForce, OverlapStrategy, UniformGrid};
use crate::population::Population;
use rayon::prelude::*;

pub const DOMAIN_PENALTY: f64 = 10_000.0;
pub const OVERLAP_WEIGHT: f64 = 100.0;
/// Genome sizes above this use the [UniformGrid] strategy instead of
/// [BruteForce].
pub const HASHING_THRESHOLD: usize = 80;

#[derive(Clone, Debug)]
pub struct PlacementFitness {
    domain: Domain,
    domain_penalty: f64,
    overlap_weight: f64,
    hashing_threshold: usize,
    grid: UniformGrid,
}

impl PlacementFitness {
    pub fn new(domain: Domain, max_radius: f64) -> Self {
        Self::with_weights(
            domain,
            max_radius,
            DOMAIN_PENALTY,
            OVERLAP_WEIGHT,
            HASHING_THRESHOLD,
        )
    }

    pub fn with_weights(
        domain: Domain,
        max_radius: f64,
        domain_penalty: f64,
        overlap_weight: f64,
        hashing_threshold: usize,
    ) -> Self {
        Self {
            domain,
            domain_penalty,
            overlap_weight,
            hashing_threshold,
            grid: UniformGrid::new(max_radius),
        }
    }

    pub fn calculate_for_individual(&self, individual: &Individual) -> f64 {
        let genes = individual.genes();
        let outside_count = genes
            .iter()
            .filter(|gene| self.domain.is_point_outside(gene.x(), gene.y()))
            .count();
        let boundary_penalty = outside_count as f64 * self.domain_penalty;
        let overlap_penalty = if genes.len() <= self.hashing_threshold {
            BruteForce.penalty(genes, self.overlap_weight)
        } else {
            self.grid.penalty(genes, self.overlap_weight)
        };
        1.0 / (1.0 + boundary_penalty + overlap_penalty)
    }

    pub fn call_for_individual(&self, individual: &mut Individual) {
        individual.set_fitness_score(Some(self.calculate_for_individual(individual)));
    }

    pub fn call_for_population(&self, population: &mut Population) {
        population
            .individuals
            .par_iter_mut()
            .filter(|individual| individual.fitness_score().is_none())
            .for_each(|individual| self.call_for_individual(individual));
    }
}
