//! Logic shared by both solvers: input validation, the per-length
//! best-first-cut scan, and partition reconstruction.

use crate::error::{InvalidInput, RodCutError};
use crate::types::{Price, RodCutResult};

/// Checks a solve request and returns the rod length as an index.
///
/// Only the first `length` prices are inspected; extra entries are ignored.
pub(crate) fn validate<P: Price>(length: i64, prices: &[P]) -> Result<usize, RodCutError> {
    let required = usize::try_from(length).map_err(|_| InvalidInput::NegativeLength { length })?;

    if prices.len() < required {
        return Err(InvalidInput::PriceTableTooShort {
            required,
            available: prices.len(),
        }
        .into());
    }

    if let Some(index) = prices[..required].iter().position(|p| !p.is_admissible()) {
        return Err(InvalidInput::InadmissiblePrice { piece: index + 1 }.into());
    }

    Ok(required)
}

/// Finds the best revenue for a rod of length `n >= 1` and the first piece
/// that achieves it.
///
/// Candidates `price(i) + optimum(n - i)` are scanned for `i = 1..=n`. A
/// candidate replaces the running best only when strictly greater, so the
/// smallest maximizing `i` wins. `optimum` must already be final for every
/// length below `n`.
pub(crate) fn best_first_cut<P, F>(
    n: usize,
    prices: &[P],
    optimum: F,
) -> Result<(P, usize), RodCutError>
where
    P: Price,
    F: Fn(usize) -> P,
{
    debug_assert!(n >= 1 && n <= prices.len());

    let candidate = |piece: usize| -> Result<P, RodCutError> {
        prices[piece - 1]
            .checked_add(optimum(n - piece))
            .ok_or_else(|| InvalidInput::RevenueOverflow { length: n }.into())
    };

    let mut best = (candidate(1)?, 1);
    for piece in 2..=n {
        let value = candidate(piece)?;
        if value > best.0 {
            best = (value, piece);
        }
    }
    Ok(best)
}

/// Walks the decision table from `length` down to zero, emitting the piece
/// cut at each step.
pub(crate) fn reconstruct(length: usize, first_cut: &[usize]) -> Vec<usize> {
    let mut cuts = Vec::new();
    let mut remaining = length;
    while remaining > 0 {
        let piece = first_cut[remaining];
        debug_assert!(piece >= 1 && piece <= remaining);
        cuts.push(piece);
        remaining -= piece;
    }
    cuts
}

/// Builds the public result from a completed decision table.
pub(crate) fn assemble<P: Price>(
    length: usize,
    max_profit: P,
    first_cut: &[usize],
) -> RodCutResult<P> {
    let cuts = reconstruct(length, first_cut);
    let number_of_cuts = cuts.len() as i64 - 1;
    RodCutResult {
        max_profit,
        cuts,
        number_of_cuts,
    }
}
