//! Runtime engine configuration.
//!
//! Built once at startup (from the command line in the binary) and passed by
//! reference to the components that need it.

use crate::constants::N_PLAYOUTS;
use crate::error::EngineError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Random playouts per candidate move.
    pub playouts: usize,
    /// Search threads; 0 lets rayon pick (one per available core).
    pub workers: usize,
    /// Seed for the AI's random source; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            playouts: N_PLAYOUTS,
            workers: 0,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.playouts == 0 {
            return Err(EngineError::NoPlayouts);
        }
        Ok(())
    }

    /// A random source seeded according to this configuration.
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }
}
