//! Parent and survivor selection.
use crate::individual::Individual;
use crate::population::Population;
use crate::random;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Run a tournament between distinct, uniformly sampled contestants and pick
/// the fittest. Keeps a level of diversity that strict fitness ranking would
/// destroy. Ties go to the first sampled contestant.
#[derive(Clone, Debug)]
pub struct Tournament {
    pub tournament_size: usize,
}

impl Tournament {
    pub fn new(tournament_size: usize) -> Self {
        Self { tournament_size }
    }

    pub fn pick<'a>(&self, population: &'a Population) -> &'a Individual {
        let tournament_size = self.tournament_size.min(population.size());
        let indices = random::unique_indices(tournament_size, population.size());

        let mut winner = &population.individuals[indices[0]];
        let mut winning_score = winner.fitness_score().unwrap_or(f64::NEG_INFINITY);
        for &index in &indices[1..] {
            let contender = &population.individuals[index];
            let score = contender.fitness_score().unwrap_or(f64::NEG_INFINITY);
            if score > winning_score {
                winner = contender;
                winning_score = score;
            }
        }
        winner
    }
}

/// Keep the fittest slice of the population across generations, as deep
/// clones, so downstream mutation cannot degrade them.
///
/// Uses a bounded min-heap instead of a full sort: O(N log E) for E elites.
#[derive(Clone, Debug)]
pub struct Elite {
    pub elite_fraction: f64,
}

impl Elite {
    pub fn new(elite_fraction: f64) -> Self {
        Self { elite_fraction }
    }

    /// `max(1, floor(N * elite_fraction))`
    pub fn elite_size(&self, population_size: usize) -> usize {
        ((population_size as f64 * self.elite_fraction).floor() as usize).max(1)
    }

    pub fn select(&self, population: &Population) -> Vec<Individual> {
        let size = self.elite_size(population.size()).min(population.size());
        let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>> =
            BinaryHeap::with_capacity(size + 1);
        for (index, individual) in population.individuals.iter().enumerate() {
            let score = OrderedFloat(individual.fitness_score().unwrap_or(f64::NEG_INFINITY));
            if heap.len() < size {
                heap.push(Reverse((score, index)));
            } else if let Some(Reverse((lowest, _))) = heap.peek() {
                if score > *lowest {
                    heap.pop();
                    heap.push(Reverse((score, index)));
                }
            }
        }
        heap.into_iter()
            .map(|Reverse((_, index))| population.individuals[index].clone())
            .collect()
    }
}
