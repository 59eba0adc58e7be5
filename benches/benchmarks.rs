criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        iterating_cfr_kuhn,
        iterating_cfr_rhode_island,
        solving_cfr_kuhn,
        evaluating_kuhn_equilibrium,
        packing_rhode_island_info,
        ranking_showdown_strength,
}

fn iterating_cfr_kuhn(c: &mut criterion::Criterion) {
    let routine = Routine::new(Kuhn::root(KuhnConfig::default()), SolverConfig::new(1, 1));
    let mut i = 0;
    c.bench_function("walk one Kuhn CFR iteration", |b| {
        b.iter(|| {
            i += 1;
            routine.iterate(i)
        })
    });
}

fn iterating_cfr_rhode_island(c: &mut criterion::Criterion) {
    let config = RhodeIslandConfig {
        max_raises: 1,
        lowest: Rank::Ten,
        ..RhodeIslandConfig::default()
    };
    let routine = Routine::new(RhodeIsland::root(config), SolverConfig::new(1, 1));
    let mut i = 0;
    c.bench_function("walk one Rhode Island CFR iteration", |b| {
        b.iter(|| {
            i += 1;
            routine.iterate(i)
        })
    });
}

fn solving_cfr_kuhn(c: &mut criterion::Criterion) {
    c.bench_function("solve Kuhn with 1000 iterations on 4 workers", |b| {
        b.iter(|| solve(Kuhn::root(KuhnConfig::default()), 1_000, 4))
    });
}

fn evaluating_kuhn_equilibrium(c: &mut criterion::Criterion) {
    let root = Kuhn::root(KuhnConfig::default());
    let strategy = solve(root.clone(), 1_000, 4).expect("solve kuhn");
    c.bench_function("evaluate a Kuhn equilibrium exactly", |b| {
        b.iter(|| evaluate(&root, &strategy))
    });
}

fn packing_rhode_island_info(c: &mut criterion::Criterion) {
    let card = |s: &str| Card::try_from(s).expect("card");
    let node = [
        RhodeIslandEdge::Deal(card("Ah"), card("Kc")),
        RhodeIslandEdge::Bet,
        RhodeIslandEdge::Raise,
        RhodeIslandEdge::Call,
        RhodeIslandEdge::Reveal(card("Qc")),
        RhodeIslandEdge::Check,
        RhodeIslandEdge::Bet,
    ]
    .iter()
    .fold(RhodeIsland::root(RhodeIslandConfig::default()), |n, e| n.apply(e));
    c.bench_function("pack a Rhode Island information set", |b| {
        b.iter(|| node.info())
    });
}

fn ranking_showdown_strength(c: &mut criterion::Criterion) {
    let card = |s: &str| Card::try_from(s).expect("card");
    let (hole, board) = (card("Kh"), [card("Qh"), card("Jh")]);
    c.bench_function("rank a Rhode Island showdown", |b| {
        b.iter(|| Strength::from((hole, board)))
    });
}

use regretful::cards::*;
use regretful::cfr::*;
use regretful::kuhn::*;
use regretful::rhodeisland::*;
