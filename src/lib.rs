//! Counterfactual regret minimization for two-player zero-sum games
//! of imperfect information.
//!
//! The [`cfr`] module holds the game-tree contract, the information-set
//! codec and the solver. [`kuhn`] and [`rhodeisland`] are concrete games
//! built on the card primitives in [`cards`] and the betting bookkeeping
//! in [`poker`].
pub mod cards;
pub mod cfr;
pub mod kuhn;
pub mod poker;
pub mod rhodeisland;
pub mod settings;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Expected values, regrets, and payoffs.
pub type Utility = f64;
/// Strategy weights, sampling distributions, and reach probabilities.
pub type Probability = f64;
/// Stack sizes, antes, bets and pots.
pub type Chips = i32;

// ============================================================================
// KUHN POKER PARAMETERS
// ============================================================================
/// Forced contribution from each player when the cards are dealt.
pub const KUHN_ANTE: Chips = 1;
/// The only bet size available.
pub const KUHN_BET: Chips = 1;
/// Starting stack for either player.
pub const KUHN_STACK: Chips = 1000;

// ============================================================================
// RHODE ISLAND POKER PARAMETERS
// ============================================================================
/// Forced contribution from each player when the private cards are dealt.
pub const RHODE_ISLAND_ANTE: Chips = 5;
/// Bet size before the flop. A raise puts twice this amount.
pub const RHODE_ISLAND_PREFLOP_BET: Chips = 10;
/// Bet size on the flop and the turn.
pub const RHODE_ISLAND_POSTFLOP_BET: Chips = 20;
/// Consecutive raises permitted within one betting round.
pub const RHODE_ISLAND_MAX_RAISES: usize = 3;
/// Starting stack for either player.
pub const RHODE_ISLAND_STACK: Chips = 1000;

// ============================================================================
// SOLVER PARAMETERS
// ============================================================================
/// Default number of CFR iterations.
pub const CFR_ITERATIONS: usize = 50_000;
/// Iterations per worker between two synchronization points.
pub const CFR_BATCH_PER_WORKER: usize = 16;
/// Base seed mixed into every per-iteration sampler.
pub const CFR_SEED: u64 = 0x5eed;

/// initialize logging and create logs/ directory
#[cfg(feature = "native")]
pub fn logs() {
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
