//! Strategy dispatch, batch solving and cross-checking.
//!
//! [`RodCutter`] is the configured entry point on top of the free functions
//! [`solve_memo`] and [`solve_table`].

use crate::config::{RodCutConfig, Strategy};
use crate::error::RodCutError;
use crate::memo::solve_memo;
use crate::table::solve_table;
use crate::types::{Price, RodCutResult};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One rod to solve: a length and its price table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RodInstance<P> {
    /// Optional label carried through to reports.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,

    /// Rod length. Negative values are rejected by the solvers.
    pub length: i64,

    /// `prices[k - 1]` is the price of a piece of length `k`.
    pub prices: Vec<P>,
}

impl<P> RodInstance<P> {
    pub fn new(length: i64, prices: Vec<P>) -> Self {
        Self {
            name: None,
            length,
            prices,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Results of solving one instance with both strategies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossCheck<P> {
    /// Top-down result.
    pub memoized: RodCutResult<P>,

    /// Bottom-up result.
    pub tabulated: RodCutResult<P>,
}

impl<P: Price> CrossCheck<P> {
    /// Whether both strategies produced the same revenue and cut sequence.
    pub fn agrees(&self) -> bool {
        self.memoized == self.tabulated
    }

    /// Returns the shared result, or `None` if the strategies diverged.
    pub fn into_result(self) -> Option<RodCutResult<P>> {
        if self.agrees() {
            Some(self.memoized)
        } else {
            None
        }
    }
}

/// Runs rod-cutting solves according to a [`RodCutConfig`].
///
/// # Usage
///
/// ```
/// use u_rodcut::{RodCutConfig, RodCutter, Strategy};
///
/// let config = RodCutConfig::default().with_strategy(Strategy::Tabulated);
/// let result = RodCutter::run(5, &[2u32, 5, 7, 8, 10], &config).unwrap();
/// assert_eq!(result.max_profit, 12);
/// ```
pub struct RodCutter;

impl RodCutter {
    /// Solves one rod with the configured strategy.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`RodCutConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P: Price>(
        length: i64,
        prices: &[P],
        config: &RodCutConfig,
    ) -> Result<RodCutResult<P>, RodCutError> {
        config.validate().expect("invalid RodCutConfig");
        solve_with(config.strategy, length, prices)
    }

    /// Solves many independent rods, returning results in input order.
    ///
    /// With the `parallel` feature and `config.parallel` set, batches of at
    /// least `config.min_parallel_batch` instances are spread over rayon's
    /// thread pool. A failing instance does not affect the others.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn run_batch<P: Price>(
        instances: &[RodInstance<P>],
        config: &RodCutConfig,
    ) -> Vec<Result<RodCutResult<P>, RodCutError>> {
        config.validate().expect("invalid RodCutConfig");

        let strategy = config.strategy;
        let parallel = config.use_parallel(instances.len());
        tracing::debug!(
            instances = instances.len(),
            strategy = strategy.name(),
            parallel,
            "batch solve"
        );

        #[cfg(feature = "parallel")]
        if parallel {
            return instances
                .par_iter()
                .map(|inst| solve_with(strategy, inst.length, &inst.prices))
                .collect();
        }

        instances
            .iter()
            .map(|inst| solve_with(strategy, inst.length, &inst.prices))
            .collect()
    }

    /// Solves one rod with both strategies so their results can be compared.
    ///
    /// Input errors are identical for both strategies and are returned once.
    pub fn cross_check<P: Price>(
        length: i64,
        prices: &[P],
    ) -> Result<CrossCheck<P>, RodCutError> {
        let check = CrossCheck {
            memoized: solve_memo(length, prices)?,
            tabulated: solve_table(length, prices)?,
        };
        if !check.agrees() {
            tracing::warn!(
                length,
                memoized = ?check.memoized,
                tabulated = ?check.tabulated,
                "strategies disagree"
            );
        }
        Ok(check)
    }
}

fn solve_with<P: Price>(
    strategy: Strategy,
    length: i64,
    prices: &[P],
) -> Result<RodCutResult<P>, RodCutError> {
    match strategy {
        Strategy::Memoized => solve_memo(length, prices),
        Strategy::Tabulated => solve_table(length, prices),
    }
}
