//! The chromosome of this engine: a fixed-length placement of all plants.
use crate::point::Point;

/// An ordered, fixed-length sequence of [Point] genes plus a cached fitness.
///
/// The gene sequence is owned; cloning an individual deep-copies it, so elites
/// and returned results can never be degraded by later mutation. `None`
/// fitness means "not evaluated yet" and orders below every evaluated score.
///
/// The genes are only reachable as a read-only slice; the single mutation
/// entry point is [replace_gene](Individual::replace_gene), which substitutes
/// a whole gene at one locus. The sequence length never changes during an
/// individual's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Individual {
    genes: Vec<Point>,
    fitness_score: Option<f64>,
}

impl Individual {
    pub fn new(genes: Vec<Point>) -> Self {
        Self {
            genes,
            fitness_score: None,
        }
    }

    pub fn genes(&self) -> &[Point] {
        &self.genes
    }

    pub fn genes_size(&self) -> usize {
        self.genes.len()
    }

    /// Substitute the gene at `index`, invalidating the cached fitness.
    pub fn replace_gene(&mut self, index: usize, gene: Point) {
        self.genes[index] = gene;
        self.fitness_score = None;
    }

    pub fn fitness_score(&self) -> Option<f64> {
        self.fitness_score
    }

    pub fn set_fitness_score(&mut self, fitness_score: Option<f64>) {
        self.fitness_score = fitness_score;
    }
}
