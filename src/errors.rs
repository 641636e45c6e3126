//! Error types surfaced by the engine.
//!
//! Configuration problems are reported once, at construction time
//! ([ConfigError]). The only runtime failure is the time budget
//! ([TimeoutError]), raised at the top of a generation. The engine never
//! recovers internally; callers may catch and retry with other parameters.
use std::time::Duration;
use thiserror::Error;

/// Invalid gene data at [Point](crate::point::Point) construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PointError {
    #[error("point coordinates must be finite, got ({x}, {y})")]
    NonFiniteCoordinates { x: f64, y: f64 },
    #[error("point radius must be strictly positive, got {radius}")]
    NonPositiveRadius { radius: f64 },
}

/// Invalid domain parameters, inventory or hyperparameters, rejected before
/// the evolution loop starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("domain parameter `{parameter}` must be a strictly positive finite number, got {value}")]
    NonPositiveDimension { parameter: &'static str, value: f64 },
    #[error("frame inner dimensions {inner_width}x{inner_height} must be smaller than outer dimensions {outer_width}x{outer_height}")]
    FrameInnerExceedsOuter {
        inner_width: f64,
        inner_height: f64,
        outer_width: f64,
        outer_height: f64,
    },
    #[error("annulus inner radius {inner_radius} must be smaller than outer radius {outer_radius}")]
    AnnulusInnerExceedsOuter {
        inner_radius: f64,
        outer_radius: f64,
    },
    #[error("unknown domain kind `{0}`")]
    UnknownDomainKind(String),
    #[error("domain kind {kind} expects {expected} parameters, got {actual}")]
    DomainParameterCount {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("inventory contains no entries")]
    EmptyInventory,
    #[error("inventory entry `{variety_name}` must have a positive quantity")]
    NonPositiveQuantity { variety_name: String },
    #[error("inventory entry `{variety_name}` has an invalid radius: {source}")]
    InvalidEntryRadius {
        variety_name: String,
        source: PointError,
    },
    #[error("plant radius {radius} does not fit the domain: bounding box is {width}x{height}")]
    OversizedPlant {
        radius: f64,
        width: f64,
        height: f64,
    },
    #[error("missing required builder field `{0}`")]
    MissingField(&'static str),
    #[error("hyperparameter `{parameter}` is out of range: {value} (expected {expected})")]
    HyperparameterOutOfRange {
        parameter: &'static str,
        value: f64,
        expected: &'static str,
    },
}

/// The generational time budget was exceeded.
///
/// Checked at the start of every generation, so a run overshoots its limit by
/// at most one generation of work before this surfaces.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("evolution timed out after {generations_completed} generations: {elapsed:?} elapsed, budget was {limit:?}")]
pub struct TimeoutError {
    pub elapsed: Duration,
    pub limit: Duration,
    pub generations_completed: usize,
}

/// Umbrella error for the build-and-run convenience path
/// ([EvolveBuilder::call](crate::evolve::EvolveBuilder::call)).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvolveError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Timeout(#[from] TimeoutError),
}
