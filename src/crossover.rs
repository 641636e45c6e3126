//! Recombination of two parents into one child.
use crate::individual::Individual;
use crate::random;
use rand::distributions::Bernoulli;

/// Uniform crossover: each locus taken from either parent with a fair coin.
/// With probability `1 - crossover_rate` the crossover is bypassed and the
/// child is a structural clone of one parent instead.
///
/// The child always owns a fresh gene sequence, never an alias of a parent's,
/// so mutating it later cannot corrupt an ancestor. Homologous locus order
/// across parents (same variety slot at the same index) is assumed.
#[derive(Clone, Debug)]
pub struct UniformCrossover {
    pub crossover_rate: f64,
    crossover_sampler: Bernoulli,
}

impl UniformCrossover {
    pub fn new(crossover_rate: f64) -> Self {
        let crossover_sampler = Bernoulli::new(crossover_rate).unwrap();
        Self {
            crossover_rate,
            crossover_sampler,
        }
    }

    pub fn call(&self, father: &Individual, mother: &Individual) -> Individual {
        debug_assert_eq!(father.genes_size(), mother.genes_size());
        if random::sample_bernoulli(&self.crossover_sampler) {
            let genes = father
                .genes()
                .iter()
                .zip(mother.genes())
                .map(|(from_father, from_mother)| {
                    if random::gen::<bool>() {
                        from_father.clone()
                    } else {
                        from_mother.clone()
                    }
                })
                .collect();
            Individual::new(genes)
        } else if random::gen::<bool>() {
            father.clone()
        } else {
            mother.clone()
        }
    }
}
