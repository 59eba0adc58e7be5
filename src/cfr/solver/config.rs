use serde::Deserialize;
use serde::Serialize;

/// How long and how wide a solve runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// total CFR iterations
    pub iterations: usize,
    /// size of the worker pool
    pub workers: usize,
    /// iterations run between two joins of the pool
    pub batch: usize,
    /// base seed for chance sampling
    pub seed: u64,
}

impl SolverConfig {
    pub fn new(iterations: usize, workers: usize) -> Self {
        Self {
            iterations,
            workers,
            batch: workers * crate::CFR_BATCH_PER_WORKER,
            seed: crate::CFR_SEED,
        }
    }
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }
    pub fn with_batch(self, batch: usize) -> Self {
        Self { batch, ..self }
    }
    /// reject configurations that cannot make progress
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.workers > 0, "solver needs at least one worker");
        anyhow::ensure!(self.batch > 0, "solver batch must be positive");
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(crate::CFR_ITERATIONS, rayon::current_num_threads())
    }
}
