//! Core value and result types shared by both solvers.

/// Numeric type usable as a piece price and as accumulated revenue.
///
/// Revenue is built by summing prices, so the type needs a zero, an addition
/// that reports overflow, and an ordering. Prices must be non-negative;
/// [`is_admissible`](Price::is_admissible) enforces that (and finiteness for
/// floating point types).
///
/// Built-in implementations exist for `u32`, `u64`, `usize`, `i32`, `i64`,
/// `f32` and `f64`.
pub trait Price: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Revenue of an empty rod.
    fn zero() -> Self;

    /// Adds two values, returning `None` if the sum is not representable.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Whether this value is a valid price.
    fn is_admissible(self) -> bool;

    /// Converts the value to `f64` for logging.
    fn to_f64(self) -> f64;
}

macro_rules! impl_price_unsigned {
    ($($t:ty),*) => {$(
        impl Price for $t {
            fn zero() -> Self {
                0
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            fn is_admissible(self) -> bool {
                true
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! impl_price_signed {
    ($($t:ty),*) => {$(
        impl Price for $t {
            fn zero() -> Self {
                0
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            fn is_admissible(self) -> bool {
                self >= 0
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! impl_price_float {
    ($($t:ty),*) => {$(
        impl Price for $t {
            fn zero() -> Self {
                0.0
            }

            fn checked_add(self, rhs: Self) -> Option<Self> {
                let sum = self + rhs;
                sum.is_finite().then_some(sum)
            }

            fn is_admissible(self) -> bool {
                self.is_finite() && self >= 0.0
            }

            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_price_unsigned!(u32, u64, usize);
impl_price_signed!(i32, i64);
impl_price_float!(f32, f64);

/// Outcome of a rod-cutting solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RodCutResult<P> {
    /// Maximum revenue obtainable for the rod.
    pub max_profit: P,

    /// Piece lengths of one optimal partition, in reconstruction order.
    ///
    /// Every entry is positive and the entries sum to the rod length.
    pub cuts: Vec<usize>,

    /// Number of cut operations: `cuts.len() - 1`.
    ///
    /// An empty rod has no pieces, so this is `-1` for length zero.
    pub number_of_cuts: i64,
}

impl<P: Price> RodCutResult<P> {
    /// Number of pieces the rod is split into.
    pub fn piece_count(&self) -> usize {
        self.cuts.len()
    }

    /// Total rod length covered by the cuts.
    pub fn total_length(&self) -> usize {
        self.cuts.iter().sum()
    }
}

/// Completed dynamic-programming tables for one rod length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CutTables<P> {
    /// `optimum[n]` is the best revenue for a rod of length `n`, for `n` in `0..=length`.
    pub optimum: Vec<P>,

    /// `first_cut[n]` is the first piece cut off an optimal rod of length `n`.
    ///
    /// Index 0 holds the sentinel `0`.
    pub first_cut: Vec<usize>,
}

impl<P: Price> CutTables<P> {
    /// Rod length the tables were built for.
    pub fn length(&self) -> usize {
        self.optimum.len().saturating_sub(1)
    }
}
