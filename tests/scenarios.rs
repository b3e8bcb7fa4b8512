//! Worked scenarios for both solvers.

use u_rodcut::generate::random_prices;
use u_rodcut::{
    solve_memo, solve_table, InvalidInput, RodCutConfig, RodCutResult, RodCutter, RodInstance,
    Strategy,
};

fn both(length: i64, prices: &[u32]) -> RodCutResult<u32> {
    let memo = solve_memo(length, prices).unwrap();
    let table = solve_table(length, prices).unwrap();
    assert_eq!(memo, table, "strategies disagree for length {length}");
    memo
}

#[test]
fn test_base_case() {
    // first_cut(5) = 1, first_cut(4) = 2, first_cut(2) = 2
    let result = both(5, &[2, 5, 7, 8, 10]);
    assert_eq!(result.max_profit, 12);
    assert_eq!(result.cuts, vec![1, 2, 2]);
    assert_eq!(result.number_of_cuts, 2);
}

#[test]
fn test_cutting_not_optimal() {
    let result = both(3, &[1, 3, 8]);
    assert_eq!(result.max_profit, 8);
    assert_eq!(result.cuts, vec![3]);
    assert_eq!(result.number_of_cuts, 0);
}

#[test]
fn test_uniform_cuts() {
    let result = both(4, &[3, 5, 6, 7]);
    assert_eq!(result.max_profit, 12);
    assert_eq!(result.cuts, vec![1, 1, 1, 1]);
    assert_eq!(result.number_of_cuts, 3);
}

#[test]
fn test_clrs_price_table() {
    let prices = [1, 5, 8, 9, 10, 17, 17, 20, 24, 30];
    let expected = [0, 1, 5, 8, 10, 13, 17, 18, 22, 25, 30];
    for (n, &revenue) in expected.iter().enumerate() {
        assert_eq!(both(n as i64, &prices).max_profit, revenue, "length {n}");
    }
    assert_eq!(both(10, &prices).cuts, vec![10]);
    assert_eq!(both(7, &prices).cuts, vec![1, 6]);
}

#[test]
fn test_superadditive_prices_never_cut() {
    let prices: Vec<u32> = (1..=15u32).map(|i| i * i).collect();
    let result = both(15, &prices);
    assert_eq!(result.cuts, vec![15]);
    assert_eq!(result.number_of_cuts, 0);
}

#[test]
fn test_short_table_rejected() {
    for err in [
        solve_memo(4, &[1u32, 2]).unwrap_err(),
        solve_table(4, &[1u32, 2]).unwrap_err(),
    ] {
        assert_eq!(
            err.reason(),
            &InvalidInput::PriceTableTooShort {
                required: 4,
                available: 2
            }
        );
    }
}

#[test]
fn test_negative_length_rejected() {
    assert!(solve_memo(-1, &[1u32]).is_err());
    assert!(solve_table(-1, &[1u32]).is_err());
}

#[test]
fn test_random_instances_cross_check() {
    for seed in 0..20 {
        let prices = random_prices(60, 100, seed);
        let check = RodCutter::cross_check(60, &prices).unwrap();
        assert!(check.agrees(), "seed {seed} diverged");
    }
}

#[test]
fn test_batch_with_both_strategies() {
    let instances: Vec<RodInstance<u64>> = (0..25)
        .map(|seed| RodInstance::new(30, random_prices(30, 40, seed)))
        .collect();

    let memo = RodCutter::run_batch(&instances, &RodCutConfig::default());
    let table = RodCutter::run_batch(
        &instances,
        &RodCutConfig::default().with_strategy(Strategy::Tabulated),
    );
    assert_eq!(memo, table);
    assert!(memo.iter().all(|r| r.as_ref().unwrap().total_length() == 30));
}

#[test]
fn test_float_prices() {
    let prices = [0.5f64, 1.25, 1.5];
    let memo = solve_memo(3, &prices).unwrap();
    let table = solve_table(3, &prices).unwrap();
    assert_eq!(memo, table);
    assert!((memo.max_profit - 1.75).abs() < 1e-12);
    assert_eq!(memo.cuts, vec![1, 2]);
}
