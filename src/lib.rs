//! Rod-cutting revenue optimizer.
//!
//! Given a rod of integer length `L` and a price for every piece length
//! `1..=L`, finds the maximum revenue obtainable by cutting the rod and one
//! partition that achieves it. Two dynamic-programming strategies share one
//! contract:
//!
//! - **Memoized** ([`solve_memo`]): top-down evaluation with a dense
//!   per-length memo, driven by an explicit stack.
//! - **Tabulated** ([`solve_table`]): bottom-up fill of the optimum and
//!   first-cut tables ([`tabulate`] exposes them).
//!
//! Both scan candidate first pieces in ascending order and keep the first
//! strictly better one, so for any input they return the same revenue and
//! the same cut sequence. [`RodCutter::cross_check`] runs both and compares.
//!
//! # Example
//!
//! ```
//! use u_rodcut::{solve_memo, solve_table};
//!
//! let prices = [2u32, 5, 7, 8, 10];
//! let memo = solve_memo(5, &prices).unwrap();
//! let table = solve_table(5, &prices).unwrap();
//!
//! assert_eq!(memo.max_profit, 12);
//! assert_eq!(memo.cuts, vec![1, 2, 2]);
//! assert_eq!(memo.number_of_cuts, 2);
//! assert_eq!(memo, table);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for results, tables, instances and config.
//! - `parallel`: solve batches of independent rods on rayon.
//! - `cli`: the `rodcut` command-line harness.

mod config;
mod error;
pub mod generate;
mod memo;
mod partition;
mod runner;
mod table;
mod types;

pub use config::{RodCutConfig, Strategy};
pub use error::{InvalidInput, RodCutError};
pub use memo::solve_memo;
pub use runner::{CrossCheck, RodCutter, RodInstance};
pub use table::{solve_table, tabulate};
pub use types::{CutTables, Price, RodCutResult};
