use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing::info;
use u_rodcut::generate::random_prices;
use u_rodcut::{RodCutConfig, RodCutter, RodInstance, Strategy};

#[derive(Parser)]
#[command(name = "rodcut")]
#[command(about = "Maximize rod-cutting revenue and print the optimal partition as JSON")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Memoized,
    Tabulated,
    /// Run both strategies and report whether they agree
    Both,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a single rod
    Solve {
        #[arg(long, allow_negative_numbers = true)]
        length: i64,
        /// Comma-separated prices; the k-th value is the price of a piece of length k
        #[arg(long, value_delimiter = ',')]
        prices: Vec<u64>,
        #[arg(long, value_enum, default_value_t = StrategyArg::Both)]
        strategy: StrategyArg,
    },
    /// Solve every instance in a JSON file: [{"name"?, "length", "prices"}, ...]
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = StrategyArg::Memoized)]
        strategy: StrategyArg,
        /// Disable multi-threaded batch solving
        #[arg(long)]
        sequential: bool,
    },
    /// Run the built-in demonstration scenarios with both strategies
    Demo,
    /// Generate a random price table and solve it
    Random {
        #[arg(long)]
        length: usize,
        #[arg(long, default_value_t = 20)]
        max_price: u64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = StrategyArg::Both)]
        strategy: StrategyArg,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cmd = Cmd::parse();
    let report = match cmd.action {
        Action::Solve {
            length,
            prices,
            strategy,
        } => solve(length, &prices, strategy)?,
        Action::Batch {
            input,
            strategy,
            sequential,
        } => batch(&input, strategy, sequential)?,
        Action::Demo => demo()?,
        Action::Random {
            length,
            max_price,
            seed,
            strategy,
        } => random(length, max_price, seed, strategy)?,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn solve(length: i64, prices: &[u64], strategy: StrategyArg) -> Result<Value> {
    info!(length, prices = prices.len(), "solve");
    let report = match strategy {
        StrategyArg::Both => {
            let check = RodCutter::cross_check(length, prices)
                .with_context(|| format!("failed to solve rod of length {length}"))?;
            json!({
                "agrees": check.agrees(),
                "memoized": check.memoized,
                "tabulated": check.tabulated,
            })
        }
        StrategyArg::Memoized | StrategyArg::Tabulated => {
            let config = config_for(strategy, false);
            let result = RodCutter::run(length, prices, &config)
                .with_context(|| format!("failed to solve rod of length {length}"))?;
            serde_json::to_value(result)?
        }
    };
    Ok(report)
}

fn batch(input: &Path, strategy: StrategyArg, sequential: bool) -> Result<Value> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let instances: Vec<RodInstance<u64>> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse instances from {}", input.display()))?;
    info!(instances = instances.len(), sequential, "batch");

    let reports: Vec<Value> = match strategy {
        StrategyArg::Both => instances
            .iter()
            .map(|inst| match RodCutter::cross_check(inst.length, &inst.prices) {
                Ok(check) => json!({
                    "name": inst.name,
                    "length": inst.length,
                    "agrees": check.agrees(),
                    "memoized": check.memoized,
                    "tabulated": check.tabulated,
                }),
                Err(err) => error_entry(inst, &err),
            })
            .collect(),
        StrategyArg::Memoized | StrategyArg::Tabulated => {
            let config = config_for(strategy, !sequential);
            RodCutter::run_batch(&instances, &config)
                .into_iter()
                .zip(&instances)
                .map(|(outcome, inst)| match outcome {
                    Ok(result) => json!({
                        "name": inst.name,
                        "length": inst.length,
                        "result": result,
                    }),
                    Err(err) => error_entry(inst, &err),
                })
                .collect()
        }
    };
    Ok(Value::Array(reports))
}

fn demo() -> Result<Value> {
    let scenarios = [
        RodInstance::new(5, vec![2u64, 5, 7, 8, 10]).with_name("base case"),
        RodInstance::new(3, vec![1, 3, 8]).with_name("cutting is not optimal"),
        RodInstance::new(4, vec![3, 5, 6, 7]).with_name("uniform cuts"),
    ];

    let mut reports = Vec::with_capacity(scenarios.len());
    for inst in &scenarios {
        let check = RodCutter::cross_check(inst.length, &inst.prices)
            .with_context(|| format!("demo scenario {:?} failed", inst.name))?;
        info!(
            scenario = inst.name.as_deref().unwrap_or(""),
            agrees = check.agrees(),
            "demo"
        );
        reports.push(json!({
            "name": inst.name,
            "length": inst.length,
            "prices": inst.prices,
            "agrees": check.agrees(),
            "memoized": check.memoized,
            "tabulated": check.tabulated,
        }));
    }
    Ok(Value::Array(reports))
}

fn random(length: usize, max_price: u64, seed: Option<u64>, strategy: StrategyArg) -> Result<Value> {
    let seed = seed.unwrap_or_else(rand::random);
    info!(length, max_price, seed, "random");
    let prices = random_prices(length, max_price, seed);
    let rod_length = i64::try_from(length).context("rod length does not fit in i64")?;
    let solved = solve(rod_length, &prices, strategy)?;
    Ok(json!({
        "seed": seed,
        "prices": prices,
        "solution": solved,
    }))
}

fn config_for(strategy: StrategyArg, parallel: bool) -> RodCutConfig {
    let strategy = match strategy {
        StrategyArg::Tabulated => Strategy::Tabulated,
        StrategyArg::Memoized | StrategyArg::Both => Strategy::Memoized,
    };
    RodCutConfig::default()
        .with_strategy(strategy)
        .with_parallel(parallel)
}

fn error_entry(inst: &RodInstance<u64>, err: &u_rodcut::RodCutError) -> Value {
    tracing::error!(name = ?inst.name, length = inst.length, %err, "instance rejected");
    json!({
        "name": inst.name,
        "length": inst.length,
        "error": err.to_string(),
    })
}
