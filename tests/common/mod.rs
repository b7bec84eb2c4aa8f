//! Shared helpers for integration tests

use std::collections::VecDeque;

use grid_traffic::simulation::SimRng;

/// Random source that replays a fixed list of draws
pub struct ScriptedRng {
    draws: VecDeque<usize>,
}

impl ScriptedRng {
    pub fn new(draws: &[usize]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }
}

impl SimRng for ScriptedRng {
    fn below(&mut self, upper: usize) -> usize {
        let value = self
            .draws
            .pop_front()
            .expect("scripted random draws exhausted");
        assert!(value < upper, "scripted draw {} not below {}", value, upper);
        value
    }
}
