//! Creep mutation with annealed strength.
use crate::domain::Rect;
use crate::individual::Individual;
use crate::random;
use rand::distributions::Bernoulli;

/// With probability `mutation_probability` per locus, displace the gene by a
/// uniform step of annealed magnitude, clamped to the domain bounding box.
/// Radius and variety identity are preserved.
///
/// Clamping targets the bounding box, not the exact shape; a position inside
/// the box but outside the shape is priced by the boundary penalty.
#[derive(Clone, Debug)]
pub struct CreepMutation {
    pub mutation_probability: f64,
    pub base_strength: f64,
    mutation_sampler: Bernoulli,
}

impl CreepMutation {
    pub fn new(mutation_probability: f64, base_strength: f64) -> Self {
        let mutation_sampler = Bernoulli::new(mutation_probability).unwrap();
        Self {
            mutation_probability,
            base_strength,
            mutation_sampler,
        }
    }

    /// `S(g) = S0 / (1 + 5g/G)`: full strength at genesis, a sixth of it in
    /// the final generation.
    pub fn strength(&self, generation: usize, max_generations: usize) -> f64 {
        self.base_strength / (1.0 + 5.0 * generation as f64 / max_generations as f64)
    }

    pub fn call(
        &self,
        individual: &mut Individual,
        bounds: &Rect,
        generation: usize,
        max_generations: usize,
    ) {
        let strength = self.strength(generation, max_generations);
        for index in 0..individual.genes_size() {
            if random::sample_bernoulli(&self.mutation_sampler) {
                let moved = {
                    let gene = &individual.genes()[index];
                    let x = (gene.x() + (2.0 * random::gen::<f64>() - 1.0) * strength)
                        .clamp(bounds.min_x(), bounds.max_x());
                    let y = (gene.y() + (2.0 * random::gen::<f64>() - 1.0) * strength)
                        .clamp(bounds.min_y(), bounds.max_y());
                    gene.with_position(x, y)
                };
                individual.replace_gene(index, moved);
            }
        }
    }
}
