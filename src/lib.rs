//! Stackelberg block-building game.
//!
//! A block-building leader commits to a bundle of transactions first; a
//! follower then fills whatever capacity remains, either optimally or, with
//! some probability, with an arbitrary feasible bundle. Repeating the game
//! over random transaction pools measures the leader's first-mover advantage.
//!
//! # Module Structure
//!
//! - `pool`: Transactions and per-round transaction pools
//! - `auction`: Feasible bundle enumeration, follower response, round solver
//! - `config`: Raw options and validated settings
//! - `driver`: Multi-round experiments and payoff series
//! - `report`: Summary statistics, text charts, transaction export

mod auction;
mod config;
mod driver;
mod pool;
mod report;

pub use auction::*;
pub use config::*;
pub use driver::*;
pub use pool::*;
pub use report::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Resource cost of a transaction against the block capacity.
pub type Gas = u32;
/// Payoff of a transaction to whichever player includes it.
pub type Tip = u32;
/// Latency and sampling probabilities.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TRANSACTION POOL PARAMETERS
// ============================================================================
/// Transactions generated per round.
pub const POOL_SIZE: usize = 10;
/// Leading transactions of each pool visible to the leader.
pub const LEADER_SHARE: usize = 6;
/// Widest pool representable by a [`Bundle`] bitmask.
pub const POOL_CEILING: usize = 32;
/// Inclusive gas range of a generated transaction.
pub const GAS_MIN: Gas = 5;
pub const GAS_MAX: Gas = 15;
/// Inclusive tip range of a generated transaction.
pub const TIP_MIN: Tip = 1;
pub const TIP_MAX: Tip = 7;

// ============================================================================
// AUCTION PARAMETERS
// ============================================================================
/// Shared block capacity consumed by leader and follower together.
pub const BLOCK_LIMIT: Gas = 30;
/// Probability that the follower reacts too slowly to best-respond.
pub const DELAY_FACTOR: Probability = 0.3;
/// Capital ceiling applied in the capital-constrained exploitation study.
pub const CAPITAL_LIMIT: Tip = 10;
/// Maximum candidates per side for exhaustive enumeration (2^16 subsets).
pub const ENUMERATION_CEILING: usize = 16;

// ============================================================================
// DRIVER & REPORTING
// ============================================================================
/// Rounds played per experiment.
pub const ROUNDS: usize = 100;
/// Window of the moving average over leader earnings.
pub const ROLLING_WINDOW: usize = 10;
/// Bins of the text histograms.
pub const HISTOGRAM_BINS: usize = 10;
/// Directory receiving exported transactions.
pub const EXPORT_DIR: &str = "auction_data";
/// File stem of exported transactions.
pub const EXPORT_STEM: &str = "auction_transactions";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
