//! Thread-local randomness façade.
//!
//! Every thread owns its own [SmallRng], so the rayon fan-outs in fitness
//! evaluation and offspring production never contend on a shared generator.
//! Tests can pin the calling thread's generator with [set_small_rng].
use crate::domain::Rect;
use crate::point::Point;
use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::distributions::{Bernoulli, Distribution, Standard};
use rand::prelude::*;
use rand::rngs::SmallRng;
use std::cell::RefCell;

thread_local!(static SMALL_RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_entropy()));

pub fn sample_bernoulli(dist: &Bernoulli) -> bool {
    SMALL_RNG.with(|rng| dist.sample(&mut *rng.borrow_mut()))
}

pub fn gen<T>() -> T
where
    Standard: Distribution<T>,
{
    SMALL_RNG.with(|rng| rng.borrow_mut().gen::<T>())
}

pub fn gen_range<T, R>(range: R) -> T
where
    T: SampleUniform,
    R: SampleRange<T>,
{
    SMALL_RNG.with(|rng| rng.borrow_mut().gen_range(range))
}

/// `amount` distinct indices in `0..length`, uniformly drawn without
/// replacement.
///
/// Panics when `amount > length`; callers validate their sizes up front
/// (tournament size is capped by the population size at build time), so
/// hitting this is a programming error.
pub fn unique_indices(amount: usize, length: usize) -> Vec<usize> {
    assert!(
        amount <= length,
        "cannot draw {} distinct indices from 0..{}",
        amount,
        length
    );
    SMALL_RNG.with(|rng| rand::seq::index::sample(&mut *rng.borrow_mut(), length, amount).into_vec())
}

/// A copy of `prototype` placed uniformly at random inside `rect`.
pub fn point_in_rect(rect: &Rect, prototype: &Point) -> Point {
    let x = gen_range(rect.min_x()..rect.max_x());
    let y = gen_range(rect.min_y()..rect.max_y());
    prototype.with_position(x, y)
}

/// Replace the calling thread's generator, e.g. with a seeded one in tests.
pub fn set_small_rng(new_rng: SmallRng) {
    SMALL_RNG.with(|rng| *rng.borrow_mut() = new_rng);
}
