//! Solve Binary
//!
//! Runs chance-sampled CFR on Kuhn or Rhode Island poker, reports player
//! one's value under the resulting strategy and optionally saves it.
//!
//! Options: --game, --iterations, --workers, --seed, --config, --output

use clap::Parser;
use clap::ValueEnum;
use regretful::cfr::*;
use regretful::kuhn::*;
use regretful::rhodeisland::*;
use regretful::settings::Settings;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

/// strategies larger than this are summarized rather than printed
const PRINT_LIMIT: usize = 64;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Game {
    Kuhn,
    RhodeIsland,
}

#[derive(Parser)]
#[command(author, version, about = "Approximate a Nash equilibrium with CFR", long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value = "kuhn")]
    game: Game,
    #[arg(long, help = "number of CFR iterations")]
    iterations: Option<usize>,
    #[arg(long, help = "size of the worker pool, defaults to the number of CPUs")]
    workers: Option<usize>,
    #[arg(long, help = "base seed for chance sampling")]
    seed: Option<u64>,
    #[arg(long, help = "JSON settings file")]
    config: Option<PathBuf>,
    #[arg(long, help = "write the equilibrium to this JSON file")]
    output: Option<PathBuf>,
}

impl Args {
    /// settings file, if any, overridden by flags
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match self.config {
            Some(ref path) => Settings::load(path)?,
            None => Settings {
                solver: SolverConfig::new(regretful::CFR_ITERATIONS, num_cpus::get()),
                ..Settings::default()
            },
        };
        if let Some(workers) = self.workers {
            settings.solver = SolverConfig::new(settings.solver.iterations, workers)
                .with_seed(settings.solver.seed);
        }
        if let Some(iterations) = self.iterations {
            settings.solver.iterations = iterations;
        }
        if let Some(seed) = self.seed {
            settings.solver.seed = seed;
        }
        settings.validate()?;
        Ok(settings)
    }
}

fn main() -> anyhow::Result<()> {
    regretful::logs();
    let args = Args::parse();
    let settings = args.settings()?;
    let output = args.output.as_deref();
    match args.game {
        Game::Kuhn => run(
            Kuhn::root(settings.kuhn),
            settings.solver,
            output,
            Kuhn::describe,
            true,
        ),
        Game::RhodeIsland => run(
            RhodeIsland::root(settings.rhodeisland),
            settings.solver,
            output,
            RhodeIsland::describe,
            false,
        ),
    }
}

/// solve, report and persist. exact evaluation enumerates every chance
/// outcome, so it is only requested for games small enough to afford it.
fn run<G: TreeGame>(
    root: Arc<G>,
    config: SolverConfig,
    output: Option<&Path>,
    describe: fn(&G::I) -> String,
    exact: bool,
) -> anyhow::Result<()> {
    let start = std::time::Instant::now();
    let strategy = Routine::new(root.clone(), config).solve()?;
    log::info!("solved in {:.2?}", start.elapsed());
    if strategy.len() <= PRINT_LIMIT {
        for (info, policy) in strategy.iter() {
            println!("{:<32} {}", describe(info), policy);
        }
    }
    if exact {
        log::info!("player one value {:+.5}", evaluate(&root, &strategy));
    }
    if let Some(path) = output {
        strategy.save(path)?;
    }
    Ok(())
}
