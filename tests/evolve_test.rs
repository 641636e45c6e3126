mod support;

#[cfg(test)]
mod evolve_tests {
    use crate::support::inspect;
    use flowerbed::evolve::prelude::*;
    use std::time::Duration;

    fn single_variety(quantity: usize, radius: f64) -> Inventory {
        Inventory::new(vec![InventoryEntry::new(
            1,
            "aster",
            PlantKind::Flower,
            quantity,
            radius,
        )])
        .unwrap()
    }

    /// Records per-generation observations for invariant checks.
    #[derive(Debug, Default)]
    struct Recorder {
        population_sizes: Vec<usize>,
        best_scores: Vec<f64>,
        last_population: Option<Population>,
    }

    impl EvolveReporter for Recorder {
        fn on_new_generation(&mut self, population: &Population, state: &EvolveState) {
            self.population_sizes.push(population.size());
            self.best_scores
                .push(state.best_fitness_score().unwrap_or(0.0));
            self.last_population = Some(population.clone());
        }
    }

    #[test]
    fn single_plant_in_unit_circle_is_perfectly_placed() {
        let domain = Domain::circle(1.0).unwrap();
        let best = Evolve::builder()
            .with_domain(domain)
            .with_inventory(single_variety(1, 0.1))
            .call()
            .unwrap();

        assert_eq!(best.fitness_score(), Some(1.0));
        let gene = &best.genes()[0];
        assert!(gene.x() * gene.x() + gene.y() * gene.y() <= 1.0);
    }

    #[test]
    fn two_discs_in_a_roomy_rectangle_end_up_disjoint() {
        let domain = Domain::rectangle(10.0, 10.0).unwrap();
        let best = Evolve::builder()
            .with_domain(domain)
            .with_inventory(single_variety(2, 1.0))
            .call()
            .unwrap();

        assert_eq!(best.fitness_score(), Some(1.0));
        let genes = best.genes();
        assert!(genes[0].distance_to(&genes[1]) >= 2.0);
    }

    #[test]
    fn overcrowded_beds_stay_imperfect_but_finish_in_budget() {
        // ten discs of radius 0.5 cannot fit a 2x2 square without overlap
        let domain = Domain::square(2.0).unwrap();
        let best = Evolve::builder()
            .with_domain(domain)
            .with_inventory(single_variety(10, 0.5))
            .call()
            .unwrap();

        let score = best.fitness_score().unwrap();
        assert!(score > 0.0);
        assert!(score < 1.0);
    }

    #[test]
    fn annulus_packings_keep_centers_in_the_ring() {
        let domain = Domain::annulus(1.0, 3.0).unwrap();
        let best = Evolve::builder()
            .with_domain(domain)
            .with_inventory(single_variety(6, 0.4))
            .call()
            .unwrap();

        assert_eq!(best.fitness_score(), Some(1.0));
        for gene in best.genes() {
            let distance = gene.x().hypot(gene.y());
            assert!((1.0..=3.0).contains(&distance));
        }
    }

    #[test]
    fn oversized_plants_are_rejected_at_build_time() {
        let domain = Domain::square(1.0).unwrap();
        let result = Evolve::builder()
            .with_domain(domain)
            .with_inventory(single_variety(1, 1.0))
            .build();
        assert!(matches!(result, Err(ConfigError::OversizedPlant { .. })));
    }

    #[test]
    fn best_fitness_is_monotonic_and_population_size_is_stable() {
        let domain = Domain::square(6.0).unwrap();
        let mut evolve = Evolve::builder()
            .with_domain(domain)
            .with_inventory(single_variety(8, 0.5))
            .with_population_size(40)
            .with_max_generations(120)
            .with_reporter(Recorder::default())
            .build()
            .unwrap();

        let best = evolve.call().unwrap();
        let recorder = &evolve.reporter;

        assert_eq!(recorder.population_sizes.len(), 120);
        assert!(recorder.population_sizes.iter().all(|&size| size == 40));
        assert!(recorder
            .best_scores
            .windows(2)
            .all(|pair| pair[1] >= pair[0]));
        assert_eq!(
            best.fitness_score(),
            evolve.state.best_fitness_score()
        );
    }

    #[test]
    fn every_individual_keeps_the_genome_shape() {
        let inventory = Inventory::new(vec![
            InventoryEntry::new(3, "rose", PlantKind::Shrub, 2, 0.5),
            InventoryEntry::new(1, "aster", PlantKind::Flower, 3, 0.3),
        ])
        .unwrap();
        let domain = Domain::circle(5.0).unwrap();
        let mut evolve = Evolve::builder()
            .with_domain(domain)
            .with_inventory(inventory)
            .with_population_size(30)
            .with_max_generations(60)
            .with_reporter(Recorder::default())
            .build()
            .unwrap();

        let best = evolve.call().unwrap();
        assert_eq!(best.genes_size(), 5);

        // shrubs order before flowers, quantities expand per locus
        let expected_loci = vec![
            (PlantKind::Shrub, 3),
            (PlantKind::Shrub, 3),
            (PlantKind::Flower, 1),
            (PlantKind::Flower, 1),
            (PlantKind::Flower, 1),
        ];
        assert_eq!(inspect::variety_loci(&best), expected_loci);

        let last_population = evolve.reporter.last_population.as_ref().unwrap();
        let reference = inspect::variety_loci(&last_population.individuals[0]);
        for individual in &last_population.individuals {
            assert_eq!(individual.genes_size(), 5);
            assert!(individual.fitness_score().is_some());
            assert_eq!(inspect::variety_loci(individual), reference);
        }
    }

    #[test]
    fn reporter_logging_can_be_attached() {
        let _ = env_logger::builder().is_test(true).try_init();
        let domain = Domain::circle(2.0).unwrap();
        let best = Evolve::builder()
            .with_domain(domain)
            .with_inventory(single_variety(2, 0.2))
            .with_population_size(20)
            .with_max_generations(20)
            .with_reporter(EvolveReporterLog::new(10))
            .build()
            .unwrap()
            .call()
            .unwrap();
        assert!(best.fitness_score().unwrap() > 0.0);
    }

    #[test]
    fn time_budget_grows_with_the_genome() {
        assert_eq!(max_duration(0), Duration::from_millis(5_000));
        assert_eq!(max_duration(10), Duration::from_millis(6_000));
        assert_eq!(max_duration(100), Duration::from_millis(15_000));
    }

    #[test]
    fn hyperparameters_are_validated_at_build_time() {
        let domain = Domain::circle(5.0).unwrap();
        let builder = || {
            Evolve::builder()
                .with_domain(domain)
                .with_inventory(single_variety(2, 0.2))
        };

        assert!(matches!(
            builder().with_population_size(1).build(),
            Err(ConfigError::HyperparameterOutOfRange { parameter: "population_size", .. })
        ));
        assert!(matches!(
            builder().with_max_generations(0).build(),
            Err(ConfigError::HyperparameterOutOfRange { parameter: "max_generations", .. })
        ));
        assert!(matches!(
            builder().with_tournament_size(0).build(),
            Err(ConfigError::HyperparameterOutOfRange { parameter: "tournament_size", .. })
        ));
        assert!(matches!(
            builder()
                .with_population_size(10)
                .with_tournament_size(11)
                .build(),
            Err(ConfigError::HyperparameterOutOfRange { parameter: "tournament_size", .. })
        ));
        assert!(matches!(
            builder().with_elite_fraction(1.0).build(),
            Err(ConfigError::HyperparameterOutOfRange { parameter: "elite_fraction", .. })
        ));
        assert!(matches!(
            builder().with_crossover_rate(1.5).build(),
            Err(ConfigError::HyperparameterOutOfRange { parameter: "crossover_rate", .. })
        ));
        assert!(matches!(
            builder().with_mutation_probability(-0.1).build(),
            Err(ConfigError::HyperparameterOutOfRange { parameter: "mutation_probability", .. })
        ));
        assert!(matches!(
            builder().with_mutation_strength(0.0).build(),
            Err(ConfigError::HyperparameterOutOfRange { parameter: "mutation_strength", .. })
        ));
        assert!(matches!(
            builder().with_hashing_threshold(0).build(),
            Err(ConfigError::HyperparameterOutOfRange { parameter: "hashing_threshold", .. })
        ));
    }

    #[test]
    fn missing_builder_fields_are_reported() {
        assert!(matches!(
            Evolve::builder().build(),
            Err(ConfigError::MissingField("domain"))
        ));
        assert!(matches!(
            Evolve::builder()
                .with_domain(Domain::circle(1.0).unwrap())
                .build(),
            Err(ConfigError::MissingField("inventory"))
        ));
    }
}
