mod support;

#[cfg(test)]
mod select_tests {
    use crate::support::build;
    use flowerbed::select::{Elite, Tournament};

    #[test]
    fn elite_size_keeps_at_least_one() {
        let elite = Elite::new(0.05);
        assert_eq!(elite.elite_size(100), 5);
        assert_eq!(elite.elite_size(40), 2);
        assert_eq!(elite.elite_size(10), 1);
        assert_eq!(elite.elite_size(3), 1);
    }

    #[test]
    fn elites_are_the_fittest_individuals() {
        let population =
            build::population_with_fitness(vec![0.1, 0.9, 0.3, 0.8, 0.2, 0.7, 0.4, 0.6, 0.5, 0.05]);
        let elites = Elite::new(0.3).select(&population);

        let mut scores: Vec<f64> = elites
            .iter()
            .map(|individual| individual.fitness_score().unwrap())
            .collect();
        scores.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(scores, vec![0.7, 0.8, 0.9]);
    }

    #[test]
    fn elites_order_unevaluated_individuals_last() {
        let mut population = build::population_with_fitness(vec![0.1, 0.9]);
        population
            .individuals
            .push(build::individual(vec![(0.0, 0.0)], 1.0));
        let elites = Elite::new(0.4).select(&population);
        assert_eq!(elites.len(), 1);
        assert_eq!(elites[0].fitness_score(), Some(0.9));
    }

    #[test]
    fn elites_are_deep_clones() {
        let population = build::population_with_fitness(vec![0.1, 0.9]);
        let mut elites = Elite::new(0.4).select(&population);

        elites[0].replace_gene(0, build::point(42.0, 42.0, 1.0));
        // the population member is untouched
        assert_eq!(population.individuals[1].fitness_score(), Some(0.9));
        assert_eq!(population.individuals[1].genes()[0].x(), 0.0);
    }

    #[test]
    fn full_size_tournament_is_deterministic() {
        let population = build::population_with_fitness(vec![0.3, 0.2, 0.9, 0.1, 0.5]);
        let tournament = Tournament::new(5);
        for _ in 0..20 {
            assert_eq!(tournament.pick(&population).fitness_score(), Some(0.9));
        }
    }

    #[test]
    fn tournament_samples_the_population() {
        let population = build::population_with_fitness(vec![0.3, 0.2, 0.9, 0.1, 0.5]);
        let tournament = Tournament::new(1);
        for _ in 0..20 {
            let picked = tournament.pick(&population).fitness_score().unwrap();
            assert!(population
                .individuals
                .iter()
                .any(|individual| individual.fitness_score() == Some(picked)));
        }
    }

    #[test]
    fn oversized_tournaments_are_capped_at_the_population() {
        let population = build::population_with_fitness(vec![0.3, 0.9]);
        let tournament = Tournament::new(10);
        assert_eq!(tournament.pick(&population).fitness_score(), Some(0.9));
    }
}
