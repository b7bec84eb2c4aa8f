//! Random source used by the simulation
//!
//! Every random draw the engine makes goes through [`SimRng::below`], so a
//! test can script exact outcomes and a run can be reproduced from a seed.

use rand::rngs::StdRng;
use rand::Rng;

/// A source of uniform indices
pub trait SimRng {
    /// Return a uniformly distributed value in `0..upper`. `upper` is never 0.
    fn below(&mut self, upper: usize) -> usize;
}

impl SimRng for StdRng {
    fn below(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

impl<R: SimRng + ?Sized> SimRng for Box<R> {
    fn below(&mut self, upper: usize) -> usize {
        (**self).below(upper)
    }
}
