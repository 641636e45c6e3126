//! A genetic-algorithm engine that packs disc-shaped plants into a planar
//! garden bed.
//!
//! Three elements drive a run:
//! * the [Domain](crate::domain::Domain) — where plants may stand
//! * the [Inventory](crate::inventory::Inventory) — which plants must be placed
//! * the [Evolve](crate::evolve::Evolve) strategy — how placements improve
//!
//! ## Quick Usage
//!
//! ```rust
//! use flowerbed::evolve::prelude::*;
//!
//! // the bed
//! let domain = Domain::circle(5.0).unwrap();
//!
//! // the plants that must fit into it
//! let inventory = Inventory::new(vec![
//!     InventoryEntry::new(1, "lavender", PlantKind::Shrub, 4, 0.4),
//!     InventoryEntry::new(2, "marigold", PlantKind::Flower, 6, 0.2),
//! ])
//! .unwrap();
//!
//! // the search strategy
//! let mut evolve = Evolve::builder()
//!     .with_domain(domain)
//!     .with_inventory(inventory)
//!     .with_population_size(50)
//!     .with_max_generations(50)
//!     .build()
//!     .unwrap();
//!
//! let best = evolve.call().unwrap();
//! assert_eq!(best.genes_size(), 10);
//! assert!(best.fitness_score().unwrap() > 0.0);
//! ```
//!
//! Fitness is `1 / (1 + penalty)`, so 1.0 means every plant stands inside the
//! bed and no two discs overlap. See [fitness](crate::fitness) for the
//! penalty model and [overlap](crate::overlap) for the two collision
//! strategies.

pub mod crossover;
pub mod domain;
pub mod errors;
pub mod evolve;
pub mod fitness;
pub mod individual;
pub mod inventory;
pub mod mutate;
pub mod overlap;
pub mod point;
pub mod population;
pub mod random;
pub mod select;
