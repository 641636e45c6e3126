use flowerbed::evolve::prelude::*;

#[allow(dead_code)]
pub fn positions(individual: &Individual) -> Vec<(f64, f64)> {
    individual
        .genes()
        .iter()
        .map(|gene| (gene.x(), gene.y()))
        .collect()
}

#[allow(dead_code)]
pub fn variety_loci(individual: &Individual) -> Vec<(PlantKind, i32)> {
    individual
        .genes()
        .iter()
        .map(|gene| (gene.kind(), gene.variety_id()))
        .collect()
}

#[allow(dead_code)]
pub fn fitness_scores(population: &Population) -> Vec<Option<f64>> {
    population
        .individuals
        .iter()
        .map(|individual| individual.fitness_score())
        .collect()
}
