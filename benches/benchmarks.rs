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
        sampling_transaction_pool,
        exhausting_leader_bundles,
        exhausting_ceiling_bundles,
        responding_follower_latency,
        solving_stackelberg_round,
        driving_hundred_rounds,
}

fn sampling_transaction_pool(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("sample a 10-transaction Pool", |b| {
        b.iter(|| Pool::sample(rng, POOL_SIZE))
    });
}

fn exhausting_leader_bundles(c: &mut criterion::Criterion) {
    let pool = Pool::random();
    let (leader, _) = pool.partition(LEADER_SHARE);
    c.bench_function("exhaust all 6-transaction leader Bundles", |b| {
        b.iter(|| Feasible::moves(&pool, &leader, BLOCK_LIMIT).map(|moves| moves.len()))
    });
}

fn exhausting_ceiling_bundles(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let pool = Pool::sample(rng, ENUMERATION_CEILING);
    let ids = pool.ids().collect::<Vec<_>>();
    c.bench_function("exhaust all 16-transaction Bundles", |b| {
        b.iter(|| Feasible::moves(&pool, &ids, 60).map(|moves| moves.len()))
    });
}

fn responding_follower_latency(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let pool = Pool::random();
    let (_, follower) = pool.partition(LEADER_SHARE);
    let reaction = Follower::new(DELAY_FACTOR, Some(CAPITAL_LIMIT));
    c.bench_function("respond as a latency-perturbed Follower", |b| {
        b.iter(|| reaction.respond(&pool, &follower, BLOCK_LIMIT / 2, rng))
    });
}

fn solving_stackelberg_round(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let pool = Pool::random();
    let game = Stackelberg::default();
    c.bench_function("solve a Stackelberg round", |b| {
        b.iter(|| game.solve(&pool, rng))
    });
}

fn driving_hundred_rounds(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let driver = Driver::from(Settings::default());
    c.bench_function("drive 100 rounds", |b| {
        b.iter(|| driver.run(rng))
    });
}

use rand::SeedableRng;
use rand::rngs::SmallRng;
use stackelberg::*;
