//! Price table generators for demos, tests and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a reproducible table of `length` integer prices in `1..=max_price`.
///
/// The same `seed` always yields the same table. A `max_price` of zero is
/// treated as one.
///
/// # Examples
///
/// ```
/// use u_rodcut::generate::random_prices;
///
/// let a = random_prices(10, 50, 7);
/// let b = random_prices(10, 50, 7);
/// assert_eq!(a, b);
/// assert!(a.iter().all(|&p| (1..=50).contains(&p)));
/// ```
pub fn random_prices(length: usize, max_price: u64, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let upper = max_price.max(1);
    (0..length).map(|_| rng.random_range(1..=upper)).collect()
}

/// Generates a linear price table: a piece of length `k` sells for `k * unit`.
///
/// Under linear pricing every partition earns the same revenue.
pub fn linear_prices(length: usize, unit: u64) -> Vec<u64> {
    (1..=length as u64).map(|k| k * unit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_prices_in_range() {
        let prices = random_prices(200, 9, 42);
        assert_eq!(prices.len(), 200);
        assert!(prices.iter().all(|&p| (1..=9).contains(&p)));
    }

    #[test]
    fn test_random_prices_seeded() {
        assert_eq!(random_prices(30, 100, 1), random_prices(30, 100, 1));
        assert_ne!(random_prices(30, 100, 1), random_prices(30, 100, 2));
    }

    #[test]
    fn test_random_prices_zero_max() {
        assert_eq!(random_prices(3, 0, 5), vec![1, 1, 1]);
    }

    #[test]
    fn test_linear_prices() {
        assert_eq!(linear_prices(4, 3), vec![3, 6, 9, 12]);
        assert!(linear_prices(0, 3).is_empty());
    }
}
