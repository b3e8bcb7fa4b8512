//! Bottom-up tabulated solver.

use crate::error::RodCutError;
use crate::partition::{assemble, best_first_cut, validate};
use crate::types::{CutTables, Price, RodCutResult};

/// Builds the optimum and first-cut tables for every length in `0..=length`.
///
/// Lengths are filled in increasing order, so every sub-problem a length
/// depends on is final before it is read.
///
/// # Errors
///
/// Same conditions as [`solve_table`].
///
/// # Examples
///
/// ```
/// use u_rodcut::tabulate;
///
/// let tables = tabulate(3, &[1u32, 3, 8]).unwrap();
/// assert_eq!(tables.optimum, vec![0, 1, 3, 8]);
/// assert_eq!(tables.first_cut, vec![0, 1, 2, 3]);
/// ```
pub fn tabulate<P: Price>(length: i64, prices: &[P]) -> Result<CutTables<P>, RodCutError> {
    let length = validate(length, prices)?;
    fill(length, prices)
}

fn fill<P: Price>(length: usize, prices: &[P]) -> Result<CutTables<P>, RodCutError> {
    let mut optimum = vec![P::zero(); length + 1];
    let mut first_cut = vec![0usize; length + 1];

    for n in 1..=length {
        let (value, piece) = best_first_cut(n, prices, |rest| optimum[rest])?;
        optimum[n] = value;
        first_cut[n] = piece;
    }

    Ok(CutTables { optimum, first_cut })
}

/// Solves the rod-cutting problem by bottom-up tabulation.
///
/// Identical contract to [`solve_memo`](crate::solve_memo): for the same
/// input both return the same revenue and the same cut sequence.
///
/// # Errors
///
/// Returns [`RodCutError::InvalidInput`] for a negative length, a price table
/// shorter than `length`, a negative or non-finite price, or a revenue that
/// overflows `P`.
///
/// # Examples
///
/// ```
/// use u_rodcut::solve_table;
///
/// let result = solve_table(4, &[3u32, 5, 6, 7]).unwrap();
/// assert_eq!(result.max_profit, 12);
/// assert_eq!(result.cuts, vec![1, 1, 1, 1]);
/// assert_eq!(result.number_of_cuts, 3);
/// ```
pub fn solve_table<P: Price>(length: i64, prices: &[P]) -> Result<RodCutResult<P>, RodCutError> {
    let length = validate(length, prices)?;
    tracing::debug!(length, strategy = "tabulated", "solve started");

    let tables = fill(length, prices)?;
    let max_profit = tables.optimum[length];
    let result = assemble(length, max_profit, &tables.first_cut);

    tracing::debug!(
        length,
        strategy = "tabulated",
        max_profit = max_profit.to_f64(),
        pieces = result.cuts.len(),
        "solve finished"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInput;

    #[test]
    fn test_table_base_case() {
        let result = solve_table(5, &[2u32, 5, 7, 8, 10]).unwrap();
        assert_eq!(result.max_profit, 12);
        assert_eq!(result.cuts, vec![1, 2, 2]);
        assert_eq!(result.number_of_cuts, 2);
    }

    #[test]
    fn test_table_no_cut_optimal() {
        let result = solve_table(3, &[1u32, 3, 8]).unwrap();
        assert_eq!(result.max_profit, 8);
        assert_eq!(result.cuts, vec![3]);
        assert_eq!(result.number_of_cuts, 0);
    }

    #[test]
    fn test_table_zero_length() {
        let result = solve_table(0, &[5i64, 6]).unwrap();
        assert_eq!(result.max_profit, 0);
        assert!(result.cuts.is_empty());
        assert_eq!(result.number_of_cuts, -1);
    }

    #[test]
    fn test_table_short_table() {
        let err = solve_table(4, &[1u32, 2]).unwrap_err();
        assert_eq!(
            err.reason(),
            &InvalidInput::PriceTableTooShort {
                required: 4,
                available: 2
            }
        );
    }

    #[test]
    fn test_table_negative_length() {
        let err = solve_table(-1, &[1u32]).unwrap_err();
        assert_eq!(err.reason(), &InvalidInput::NegativeLength { length: -1 });
    }

    #[test]
    fn test_tabulate_recurrence() {
        let prices = [2u32, 5, 7, 8, 10];
        let tables = tabulate(5, &prices).unwrap();

        assert_eq!(tables.optimum, vec![0, 2, 5, 7, 10, 12]);
        assert_eq!(tables.first_cut, vec![0, 1, 2, 1, 2, 1]);
        assert_eq!(tables.length(), 5);

        for n in 1..=5 {
            let best = (1..=n)
                .map(|i| prices[i - 1] + tables.optimum[n - i])
                .max()
                .unwrap();
            assert_eq!(tables.optimum[n], best, "recurrence broken at n={n}");
            let i = tables.first_cut[n];
            assert_eq!(prices[i - 1] + tables.optimum[n - i], best);
        }
    }

    #[test]
    fn test_tabulate_zero_length() {
        let tables = tabulate::<f64>(0, &[]).unwrap();
        assert_eq!(tables.optimum, vec![0.0]);
        assert_eq!(tables.first_cut, vec![0]);
    }

    #[test]
    fn test_table_superadditive_prices_never_cut() {
        let prices: Vec<u64> = (1..=12u64).map(|i| i * i).collect();
        let result = solve_table(12, &prices).unwrap();
        assert_eq!(result.max_profit, 144);
        assert_eq!(result.cuts, vec![12]);
        assert_eq!(result.number_of_cuts, 0);
    }
}
