//! The gene of this engine: one disc-shaped plant at a fixed position.
//!
//! A [Point] is an immutable value. Operators never move a point; they build a
//! new one (see [Point::with_position]), so points can be shared freely
//! between individuals and across threads.
use crate::errors::PointError;
use std::fmt;
use std::sync::Arc;

/// Coarse plant category, part of the variety identity of a gene.
///
/// Ordering is significant: together with the variety id it defines the
/// canonical locus order of every individual.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlantKind {
    Tree,
    Shrub,
    Flower,
    Herb,
    Grass,
}

impl fmt::Display for PlantKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PlantKind::Tree => "TREE",
            PlantKind::Shrub => "SHRUB",
            PlantKind::Flower => "FLOWER",
            PlantKind::Herb => "HERB",
            PlantKind::Grass => "GRASS",
        };
        write!(f, "{}", name)
    }
}

/// A placed plant: center position, disc radius and variety identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
    radius: f64,
    kind: PlantKind,
    variety_id: i32,
    variety_name: Arc<str>,
}

impl Point {
    /// Build a validated point. Coordinates must be finite and the radius
    /// strictly positive.
    pub fn new(
        x: f64,
        y: f64,
        radius: f64,
        kind: PlantKind,
        variety_id: i32,
        variety_name: impl Into<Arc<str>>,
    ) -> Result<Self, PointError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(PointError::NonFiniteCoordinates { x, y });
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PointError::NonPositiveRadius { radius });
        }
        Ok(Self {
            x,
            y,
            radius,
            kind,
            variety_id,
            variety_name: variety_name.into(),
        })
    }

    /// A new point at the given position, keeping radius and variety identity.
    pub fn with_position(&self, x: f64, y: f64) -> Self {
        debug_assert!(x.is_finite() && y.is_finite());
        Self {
            x,
            y,
            radius: self.radius,
            kind: self.kind,
            variety_id: self.variety_id,
            variety_name: Arc::clone(&self.variety_name),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }
    pub fn y(&self) -> f64 {
        self.y
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
    pub fn kind(&self) -> PlantKind {
        self.kind
    }
    pub fn variety_id(&self) -> i32 {
        self.variety_id
    }
    pub fn variety_name(&self) -> &str {
        &self.variety_name
    }

    /// Euclidean distance between two centers, stable for large coordinates.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}
