//! Top-down memoized solver.
//!
//! Evaluates `revenue(n) = max_{1<=i<=n} price(i) + revenue(n - i)` on
//! demand, caching each length in a dense memo. The recursion is driven by an
//! explicit frame stack, so deep rods never grow the call stack.

use crate::error::RodCutError;
use crate::partition::{assemble, best_first_cut, validate};
use crate::types::{Price, RodCutResult};

/// A pending evaluation of `revenue(n)`.
struct Frame {
    n: usize,
    /// Next piece length to check for a cached sub-problem `n - piece`.
    piece: usize,
}

/// Solves the rod-cutting problem by memoized top-down evaluation.
///
/// `prices[k - 1]` is the price of a piece of length `k`; at least `length`
/// entries are required. Ties between equally profitable first pieces go to
/// the shortest piece.
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
/// use u_rodcut::solve_memo;
///
/// let result = solve_memo(3, &[1u32, 3, 8]).unwrap();
/// assert_eq!(result.max_profit, 8);
/// assert_eq!(result.cuts, vec![3]);
/// assert_eq!(result.number_of_cuts, 0);
/// ```
pub fn solve_memo<P: Price>(length: i64, prices: &[P]) -> Result<RodCutResult<P>, RodCutError> {
    let length = validate(length, prices)?;
    tracing::debug!(length, strategy = "memoized", "solve started");

    let mut memo: Vec<Option<P>> = vec![None; length + 1];
    let mut first_cut = vec![0usize; length + 1];
    memo[0] = Some(P::zero());

    let mut stack = Vec::new();
    if length > 0 {
        stack.push(Frame { n: length, piece: 1 });
    }

    while let Some(frame) = stack.last_mut() {
        let n = frame.n;
        if memo[n].is_some() {
            stack.pop();
            continue;
        }

        // Advance past sub-problems that are already cached.
        while frame.piece <= n && memo[n - frame.piece].is_some() {
            frame.piece += 1;
        }

        if frame.piece <= n {
            let sub = n - frame.piece;
            stack.push(Frame { n: sub, piece: 1 });
            continue;
        }

        // Every shorter length is cached now.
        let (value, piece) = best_first_cut(n, prices, |rest| memo[rest].unwrap_or_else(P::zero))?;
        memo[n] = Some(value);
        first_cut[n] = piece;
        stack.pop();
    }

    let max_profit = memo[length].unwrap_or_else(P::zero);
    let result = assemble(length, max_profit, &first_cut);
    tracing::debug!(
        length,
        strategy = "memoized",
        max_profit = max_profit.to_f64(),
        pieces = result.cuts.len(),
        "solve finished"
    );
    Ok(result)
}
