//! A one-stop import for everything an evolve run needs.
pub use crate::crossover::UniformCrossover;
pub use crate::domain::{Domain, DomainKind, Rect};
pub use crate::errors::{ConfigError, EvolveError, PointError, TimeoutError};
pub use crate::evolve::{
    max_duration, Evolve, EvolveBuilder, EvolveConfig, EvolveReporter, EvolveReporterLog,
    EvolveReporterNoop, EvolveState,
};
pub use crate::fitness::PlacementFitness;
pub use crate::individual::Individual;
pub use crate::inventory::{Inventory, InventoryEntry};
pub use crate::mutate::CreepMutation;
pub use crate::overlap::{BruteForce, OverlapStrategy, UniformGrid};
pub use crate::point::{PlantKind, Point};
pub use crate::population::Population;
pub use crate::select::{Elite, Tournament};
