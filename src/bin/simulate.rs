//! Simulation Binary
//!
//! Plays the exploitation and latency experiments, prints their summaries
//! and text charts, and exports every generated transaction.
//!
//! Options: --rounds, --delay-factor, --capital-limit, --block-limit,
//! --pool-size, --leader-share, --seed, --skip-infeasible, --output,
//! --config, --no-export
//!
//! `--config` and the option flags are mutually exclusive.

use clap::Parser;
use colored::Colorize;
use stackelberg::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Stackelberg block-building simulation", long_about = None)]
struct Args {
    #[arg(
        long,
        conflicts_with_all = [
            "rounds",
            "delay_factor",
            "capital_limit",
            "block_limit",
            "pool_size",
            "leader_share",
            "seed",
            "skip_infeasible",
            "output",
        ],
        help = "JSON options file (cannot be combined with the option flags below)"
    )]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = ROUNDS, help = "Rounds per experiment")]
    rounds: usize,
    #[arg(long, default_value_t = DELAY_FACTOR, allow_negative_numbers = true, help = "Probability that the follower responds at random")]
    delay_factor: f64,
    #[arg(long, allow_negative_numbers = true, help = "Follower capital ceiling for the capital-limited run")]
    capital_limit: Option<i64>,
    #[arg(long, default_value_t = BLOCK_LIMIT as i64, allow_negative_numbers = true, help = "Block gas capacity")]
    block_limit: i64,
    #[arg(long, default_value_t = POOL_SIZE, help = "Transactions generated per round")]
    pool_size: usize,
    #[arg(long, default_value_t = LEADER_SHARE, help = "Leading transactions owned by the leader")]
    leader_share: usize,
    #[arg(long, help = "Seed for reproducible runs")]
    seed: Option<u64>,
    #[arg(long, help = "Skip rounds where the leader cannot move instead of aborting")]
    skip_infeasible: bool,
    #[arg(long, default_value = EXPORT_DIR, help = "Directory for exported transactions")]
    output: String,
    #[arg(long, help = "Do not write transaction files")]
    no_export: bool,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            delay_factor: args.delay_factor,
            capital_limit: args.capital_limit,
            rounds: args.rounds,
            block_limit: args.block_limit,
            pool_size: args.pool_size,
            leader_share: args.leader_share,
            seed: args.seed,
            on_infeasible: match args.skip_infeasible {
                true => Infeasibility::Skip,
                false => Infeasibility::Abort,
            },
            output: args.output.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::from(&args),
    };
    let settings = Settings::try_from(config)?;
    let study = Study::run(&settings)?;
    report(&study);
    if !args.no_export {
        let (csv, json) = study.pools().collect::<Export>().save(settings.output())?;
        println!(
            "\nAll transaction data saved to {} and {}",
            csv.display(),
            json.display()
        );
    }
    Ok(())
}

fn floats<T: Into<i64> + Copy>(values: &[T]) -> Vec<f64> {
    values.iter().map(|&v| Into::<i64>::into(v) as f64).collect()
}

fn report(study: &Study) {
    let ref empty = Series::default();
    let latency = study.series(Experiment::Latency).unwrap_or(empty);
    let capital = study.series(Experiment::LatencyCapital).unwrap_or(empty);
    let with = study.series(Experiment::WithLatency).unwrap_or(empty);
    let without = study.series(Experiment::WithoutLatency).unwrap_or(empty);

    println!("\n{}", "Leader vs Follower Earnings (With Latency)".bold());
    println!("leader   {}", Sparkline::from(floats(&latency.leader()).as_slice()));
    println!("follower {}", Sparkline::from(floats(&latency.follower()).as_slice()));

    println!("\n{}", "Distribution of Leader Exploitation (Latency)".bold());
    if let Some(h) = Histogram::new(&floats(&latency.advantage()), HISTOGRAM_BINS) {
        print!("{}", h);
    }

    println!("\n{}", "Leader Exploitation with Capital Constraint".bold());
    println!("{}", Sparkline::from(floats(&capital.advantage()).as_slice()));

    println!("\n{}", format!("Moving Average of Leader Earnings ({})", ROLLING_WINDOW).bold());
    for (label, s) in [("latency   ", with), ("no latency", without)] {
        let values = floats(&s.leader());
        let means = Rolling::from((values.as_slice(), ROLLING_WINDOW)).collect::<Vec<_>>();
        println!("{} {}", label, Sparkline::from(means));
    }

    for (experiment, s) in [(Experiment::WithLatency, with), (Experiment::WithoutLatency, without)] {
        println!("\n{}", format!("Histogram of Leader Earnings ({})", experiment).bold());
        if let Some(h) = Histogram::new(&floats(&s.leader()), HISTOGRAM_BINS) {
            print!("{}", h);
        }
    }

    let exploitation = Table::new("Leader Exploitation Summary:")
        .column(Experiment::Latency.label(), &floats(&latency.advantage()))
        .column(Experiment::LatencyCapital.label(), &floats(&capital.advantage()));
    let earnings = Table::new("Leader Earnings Summary:")
        .column(Experiment::WithLatency.label(), &floats(&with.leader()))
        .column(Experiment::WithoutLatency.label(), &floats(&without.leader()));
    println!("\n{}", exploitation.to_string().green());
    println!("{}", earnings.to_string().green());

    for (experiment, s) in study.experiments() {
        if s.skipped() > 0 {
            log::warn!("{}: {} rounds skipped", experiment, s.skipped());
        }
    }
}
