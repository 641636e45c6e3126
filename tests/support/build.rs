use flowerbed::evolve::prelude::*;

#[allow(dead_code)]
pub fn point(x: f64, y: f64, radius: f64) -> Point {
    Point::new(x, y, radius, PlantKind::Flower, 1, "test").unwrap()
}

#[allow(dead_code)]
pub fn point_with_variety(
    x: f64,
    y: f64,
    radius: f64,
    kind: PlantKind,
    variety_id: i32,
    variety_name: &str,
) -> Point {
    Point::new(x, y, radius, kind, variety_id, variety_name).unwrap()
}

#[allow(dead_code)]
pub fn individual(positions: Vec<(f64, f64)>, radius: f64) -> Individual {
    Individual::new(
        positions
            .into_iter()
            .map(|(x, y)| point(x, y, radius))
            .collect(),
    )
}

#[allow(dead_code)]
pub fn individual_with_fitness(positions: Vec<(f64, f64)>, radius: f64, fitness: f64) -> Individual {
    let mut individual = individual(positions, radius);
    individual.set_fitness_score(Some(fitness));
    individual
}

/// A population of one-gene individuals carrying the given fitness scores.
#[allow(dead_code)]
pub fn population_with_fitness(scores: Vec<f64>) -> Population {
    Population::new(
        scores
            .into_iter()
            .map(|score| individual_with_fitness(vec![(0.0, 0.0)], 1.0, score))
            .collect(),
    )
}
