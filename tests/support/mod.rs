pub mod build;
pub mod inspect;

#[allow(unused_imports)]
pub use flowerbed::evolve::prelude::*;
#[allow(unused_imports)]
pub use rand::rngs::SmallRng;
#[allow(unused_imports)]
pub use rand::SeedableRng;
