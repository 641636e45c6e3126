//! Collision penalty strategies.
//!
//! Both strategies honor the same contract: deterministic for identical
//! inputs, no side effects, and a zero result exactly when no pair of discs
//! interpenetrates. [BruteForce] scans every pair; [UniformGrid] buckets genes
//! into cells of twice the largest radius so only the 3x3 Moore neighborhood
//! has to be inspected per gene.
pub mod brute_force;
pub mod uniform_grid;

pub use self::brute_force::BruteForce;
pub use self::uniform_grid::UniformGrid;

use crate::point::Point;

pub trait OverlapStrategy {
    fn penalty(&self, genes: &[Point], weight: f64) -> f64;
}

/// `w * (r1 + r2 - d)^2` when the discs interpenetrate (`d < r1 + r2`),
/// 0 otherwise. Quadratic in the overlap depth.
pub fn pair_penalty(a: &Point, b: &Point, weight: f64) -> f64 {
    let distance = a.distance_to(b);
    let reach = a.radius() + b.radius();
    if distance < reach {
        weight * (reach - distance) * (reach - distance)
    } else {
        0.0
    }
}
