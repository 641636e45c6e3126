//! The fixed plant composition of a run: which varieties, how many, how big.
//!
//! The inventory determines the genome: one gene per requested plant, K genes
//! in total. Entries are canonically ordered by `(kind, variety_id)` at
//! construction, so locus i refers to the same variety slot in every
//! individual the inventory seeds. Uniform crossover depends on that.
use crate::domain::Rect;
use crate::errors::ConfigError;
use crate::individual::Individual;
use crate::point::{PlantKind, Point};
use crate::random;
use std::sync::Arc;

/// One variety line: identity, requested quantity and disc radius.
#[derive(Clone, Debug, PartialEq)]
pub struct InventoryEntry {
    variety_id: i32,
    variety_name: Arc<str>,
    kind: PlantKind,
    quantity: usize,
    radius: f64,
}

impl InventoryEntry {
    pub fn new(
        variety_id: i32,
        variety_name: impl Into<Arc<str>>,
        kind: PlantKind,
        quantity: usize,
        radius: f64,
    ) -> Self {
        Self {
            variety_id,
            variety_name: variety_name.into(),
            kind,
            quantity,
            radius,
        }
    }

    pub fn variety_id(&self) -> i32 {
        self.variety_id
    }
    pub fn variety_name(&self) -> &str {
        &self.variety_name
    }
    pub fn kind(&self) -> PlantKind {
        self.kind
    }
    pub fn quantity(&self) -> usize {
        self.quantity
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Validated multiset of [InventoryEntry], the genome blueprint of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Inventory {
    entries: Vec<InventoryEntry>,
    prototypes: Vec<Point>,
    genes_size: usize,
    max_radius: f64,
}

impl Inventory {
    /// Validate and canonicalize the entries. Fails on an empty list, a zero
    /// quantity or a non-positive radius.
    pub fn new(mut entries: Vec<InventoryEntry>) -> Result<Self, ConfigError> {
        if entries.is_empty() {
            return Err(ConfigError::EmptyInventory);
        }
        entries.sort_by(|a, b| (a.kind, a.variety_id).cmp(&(b.kind, b.variety_id)));

        let mut prototypes = Vec::with_capacity(entries.len());
        let mut genes_size = 0;
        let mut max_radius = 0.0_f64;
        for entry in &entries {
            if entry.quantity == 0 {
                return Err(ConfigError::NonPositiveQuantity {
                    variety_name: entry.variety_name.to_string(),
                });
            }
            let prototype = Point::new(
                0.0,
                0.0,
                entry.radius,
                entry.kind,
                entry.variety_id,
                Arc::clone(&entry.variety_name),
            )
            .map_err(|source| ConfigError::InvalidEntryRadius {
                variety_name: entry.variety_name.to_string(),
                source,
            })?;
            prototypes.push(prototype);
            genes_size += entry.quantity;
            max_radius = max_radius.max(entry.radius);
        }

        Ok(Self {
            entries,
            prototypes,
            genes_size,
            max_radius,
        })
    }

    /// Entries in canonical `(kind, variety_id)` order.
    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    /// K, the genome length: the sum of all quantities.
    pub fn genes_size(&self) -> usize {
        self.genes_size
    }

    /// The largest disc radius in the inventory.
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// One random individual: every requested plant placed uniformly inside
    /// `bounds`, genes emitted in canonical entry order.
    pub fn seed_individual(&self, bounds: &Rect) -> Individual {
        let mut genes = Vec::with_capacity(self.genes_size);
        for (entry, prototype) in self.entries.iter().zip(&self.prototypes) {
            for _ in 0..entry.quantity {
                genes.push(random::point_in_rect(bounds, prototype));
            }
        }
        Individual::new(genes)
    }
}
