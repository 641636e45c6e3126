use super::{pair_penalty, OverlapStrategy};
use crate::point::Point;

/// Upper-triangle sweep over all gene pairs, O(K²). The better choice for
/// small genomes, where grid bookkeeping costs more than it saves.
#[derive(Clone, Debug, Default)]
pub struct BruteForce;

impl OverlapStrategy for BruteForce {
    fn penalty(&self, genes: &[Point], weight: f64) -> f64 {
        let mut total = 0.0;
        for (index, gene) in genes.iter().enumerate() {
            for other in &genes[index + 1..] {
                total += pair_penalty(gene, other, weight);
            }
        }
        total
    }
}
