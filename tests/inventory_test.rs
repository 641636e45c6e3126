mod support;

#[cfg(test)]
mod inventory_tests {
    use crate::support::inspect;
    use flowerbed::domain::Rect;
    use flowerbed::errors::ConfigError;
    use flowerbed::inventory::{Inventory, InventoryEntry};
    use flowerbed::point::PlantKind;

    fn entry(variety_id: i32, kind: PlantKind, quantity: usize, radius: f64) -> InventoryEntry {
        InventoryEntry::new(variety_id, format!("variety-{}", variety_id), kind, quantity, radius)
    }

    #[test]
    fn empty_inventories_are_rejected() {
        assert!(matches!(
            Inventory::new(vec![]),
            Err(ConfigError::EmptyInventory)
        ));
    }

    #[test]
    fn zero_quantities_are_rejected() {
        assert!(matches!(
            Inventory::new(vec![entry(1, PlantKind::Flower, 0, 0.5)]),
            Err(ConfigError::NonPositiveQuantity { .. })
        ));
    }

    #[test]
    fn non_positive_radii_are_rejected() {
        assert!(matches!(
            Inventory::new(vec![entry(1, PlantKind::Flower, 2, -0.5)]),
            Err(ConfigError::InvalidEntryRadius { .. })
        ));
        assert!(matches!(
            Inventory::new(vec![entry(1, PlantKind::Flower, 2, f64::NAN)]),
            Err(ConfigError::InvalidEntryRadius { .. })
        ));
    }

    #[test]
    fn derived_sizes_sum_over_entries() {
        let inventory = Inventory::new(vec![
            entry(1, PlantKind::Flower, 3, 0.5),
            entry(2, PlantKind::Tree, 2, 1.5),
        ])
        .unwrap();
        assert_eq!(inventory.genes_size(), 5);
        assert_eq!(inventory.max_radius(), 1.5);
    }

    #[test]
    fn entries_are_canonically_ordered() {
        let inventory = Inventory::new(vec![
            entry(9, PlantKind::Flower, 1, 0.5),
            entry(2, PlantKind::Flower, 1, 0.5),
            entry(5, PlantKind::Tree, 1, 1.0),
        ])
        .unwrap();
        let order: Vec<(PlantKind, i32)> = inventory
            .entries()
            .iter()
            .map(|entry| (entry.kind(), entry.variety_id()))
            .collect();
        assert_eq!(
            order,
            vec![
                (PlantKind::Tree, 5),
                (PlantKind::Flower, 2),
                (PlantKind::Flower, 9),
            ]
        );
    }

    #[test]
    fn seeded_individuals_share_locus_order() {
        let inventory = Inventory::new(vec![
            entry(9, PlantKind::Flower, 2, 0.5),
            entry(5, PlantKind::Tree, 1, 1.0),
        ])
        .unwrap();
        let bounds = Rect::new(-5.0, -5.0, 5.0, 5.0);

        let first = inventory.seed_individual(&bounds);
        let second = inventory.seed_individual(&bounds);
        assert_eq!(first.genes_size(), 3);
        assert_eq!(inspect::variety_loci(&first), inspect::variety_loci(&second));
        assert_eq!(
            inspect::variety_loci(&first),
            vec![
                (PlantKind::Tree, 5),
                (PlantKind::Flower, 9),
                (PlantKind::Flower, 9),
            ]
        );
    }

    #[test]
    fn seeded_genes_stay_inside_the_bounds() {
        let inventory = Inventory::new(vec![entry(1, PlantKind::Flower, 50, 0.5)]).unwrap();
        let bounds = Rect::new(-2.0, -1.0, 2.0, 1.0);

        let individual = inventory.seed_individual(&bounds);
        for gene in individual.genes() {
            assert!(bounds.contains(gene.x(), gene.y()));
            assert_eq!(gene.radius(), 0.5);
            assert_eq!(gene.variety_name(), "variety-1");
        }
        assert_eq!(individual.fitness_score(), None);
    }
}
