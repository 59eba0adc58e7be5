use crate::Utility;
use crate::cfr::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::Arc;

/// Chance-sampled CFR over a shared game tree.
///
/// Each iteration walks the tree once from the root. Chance nodes sample a
/// single outcome, player nodes expand every legal edge. Three
/// [`Accumulator`]s are shared by all workers:
///
/// - `regret`: cumulative counterfactual regret
/// - `current`: regret-matched strategy, refreshed after each regret update
/// - `average`: strategy mass weighted by the mover's own reach
///
/// Regret is accumulated only when the opponent's reach is positive, since
/// it is weighted by that reach. Strategy mass is accumulated only when the
/// mover's own reach is positive, for the same reason.
pub struct Routine<G: TreeGame> {
    root: Arc<G>,
    config: SolverConfig,
    regret: Accumulator<G::I>,
    current: Accumulator<G::I>,
    average: Accumulator<G::I>,
}

impl<G: TreeGame> Routine<G> {
    pub fn new(root: Arc<G>, config: SolverConfig) -> Self {
        Self {
            root,
            config,
            regret: Accumulator::default(),
            current: Accumulator::default(),
            average: Accumulator::default(),
        }
    }

    /// cumulative counterfactual regret
    pub fn regret(&self) -> &Accumulator<G::I> {
        &self.regret
    }
    /// regret-matched strategy of the latest iterations
    pub fn current(&self) -> &Accumulator<G::I> {
        &self.current
    }
    /// reach-weighted cumulative strategy
    pub fn average(&self) -> &Accumulator<G::I> {
        &self.average
    }

    /// run every configured iteration on a fixed pool of workers,
    /// joining the pool after each batch, then extract the equilibrium
    pub fn solve(&self) -> anyhow::Result<Strategy<G::I>> {
        self.config.validate()?;
        let SolverConfig {
            iterations,
            workers,
            batch,
            seed,
        } = self.config;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("cfr-worker-{}", i))
            .build()?;
        log::info!(
            "solving {} iterations on {} workers (batch {}, seed {:#x})",
            iterations,
            workers,
            batch,
            seed
        );
        let mut done = 0;
        while done < iterations {
            let n = batch.min(iterations - done);
            pool.install(|| {
                (done..done + n).into_par_iter().for_each(|i| {
                    self.iterate(i);
                })
            });
            done += n;
            log::debug!(
                "{:>10} / {} iterations  {:>8} information sets",
                done,
                iterations,
                self.regret.len()
            );
        }
        let strategy = self.equilibrium();
        log::info!("equilibrium covers {} information sets", strategy.len());
        Ok(strategy)
    }

    /// one chance-sampled walk from the root, returning player one's
    /// value under the current strategy
    pub fn iterate(&self, iteration: usize) -> Utility {
        let ref mut rng = self.rng(iteration);
        self.walk(&self.root, Reach::default(), rng)
    }

    /// normalized cumulative strategy of every information set visited
    pub fn equilibrium(&self) -> Strategy<G::I> {
        self.average
            .snapshot()
            .into_iter()
            .map(|(info, mass)| (info, Policy::averaged(&mass)))
            .collect()
    }

    /// current strategy at `info`, uniform over `choices` before any
    /// regret has been recorded there
    pub fn policy(&self, info: &G::I, choices: &[G::E]) -> Policy {
        match self.current.row(info) {
            Some(row) => row.into_iter().collect(),
            None => Policy::uniform(choices.iter().map(TreeEdge::tag)),
        }
    }

    /// deterministic per-iteration sampler so that runs are
    /// reproducible for a fixed seed and a single worker
    fn rng(&self, iteration: usize) -> SmallRng {
        let ref mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.config.seed.hash(hasher);
        iteration.hash(hasher);
        SmallRng::seed_from_u64(hasher.finish())
    }

    fn walk(&self, node: &Arc<G>, reach: Reach, rng: &mut SmallRng) -> Utility {
        if node.is_terminal() {
            return node.payoff(Turn::P1);
        }
        match node.turn() {
            Turn::Chance => self.sample(node, reach, rng),
            turn => self.expand(node, turn, reach, rng),
        }
    }

    fn sample(&self, node: &Arc<G>, reach: Reach, rng: &mut SmallRng) -> Utility {
        let choices = node.choices();
        assert!(!choices.is_empty(), "chance node without outcomes");
        let ref edge = choices[rng.random_range(0..choices.len())];
        self.walk(&node.apply(edge), reach, rng)
    }

    fn expand(&self, node: &Arc<G>, turn: Turn, reach: Reach, rng: &mut SmallRng) -> Utility {
        let ref info = node.info();
        let choices = node.choices();
        let policy = self.policy(info, &choices);
        let outcomes = choices
            .iter()
            .map(|edge| {
                let tag = edge.tag();
                let p = policy.weight(&tag);
                let v = self.walk(&node.apply(edge), reach.after(turn, p), rng);
                (tag, p, v)
            })
            .collect::<Vec<_>>();
        let value = outcomes.iter().map(|(_, p, v)| p * v).sum::<Utility>();
        let counterfactual = reach.counterfactual(turn);
        if counterfactual > 0. {
            for (tag, _, v) in outcomes.iter() {
                let regret = turn.sign() * counterfactual * (v - value);
                self.regret.add(info, *tag, regret);
            }
            self.refresh(info);
        }
        let own = reach.own(turn);
        if own > 0. {
            for (tag, p, _) in outcomes.iter() {
                self.average.add(info, *tag, own * p);
            }
        }
        value
    }

    /// regret matching over the cumulative regret at `info`
    fn refresh(&self, info: &G::I) {
        if let Some(ref regrets) = self.regret.row(info) {
            self.current.set(info, Policy::matching(regrets).into());
        }
    }
}

/// Approximate an equilibrium of the game rooted at `root`.
pub fn solve<G: TreeGame>(
    root: Arc<G>,
    iterations: usize,
    workers: usize,
) -> anyhow::Result<Strategy<G::I>> {
    Routine::new(root, SolverConfig::new(iterations, workers)).solve()
}
