//! Solver configuration.

/// Which dynamic-programming strategy [`RodCutter`](crate::RodCutter) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Top-down evaluation with a per-length memo.
    #[default]
    Memoized,

    /// Bottom-up table fill.
    Tabulated,
}

impl Strategy {
    /// Short lowercase name, as used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Memoized => "memoized",
            Strategy::Tabulated => "tabulated",
        }
    }
}

/// Configuration for [`RodCutter`](crate::RodCutter).
///
/// # Examples
///
/// ```
/// use u_rodcut::{RodCutConfig, Strategy};
///
/// let config = RodCutConfig::default()
///     .with_strategy(Strategy::Tabulated)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RodCutConfig {
    /// Strategy used for each solve.
    pub strategy: Strategy,

    /// Whether batches are solved on the rayon thread pool.
    ///
    /// Only takes effect with the `parallel` feature. Each instance is still
    /// solved on a single thread.
    pub parallel: bool,

    /// Batches with fewer instances than this are solved sequentially.
    pub min_parallel_batch: usize,
}

impl Default for RodCutConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            parallel: true,
            min_parallel_batch: 8,
        }
    }
}

impl RodCutConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_min_parallel_batch(mut self, n: usize) -> Self {
        self.min_parallel_batch = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_parallel_batch == 0 {
            return Err("min_parallel_batch must be at least 1".into());
        }
        Ok(())
    }

    /// Whether a batch of `len` instances should fan out across threads.
    pub(crate) fn use_parallel(&self, len: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && len >= self.min_parallel_batch
    }
}
