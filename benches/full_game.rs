criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .sample_size(20)
        .measurement_time(std::time::Duration::from_secs(2));
    targets =
        dealing_seeded_game,
        playing_seeded_game,
        shuffling_deck,
}

fn dealing_seeded_game(c: &mut criterion::Criterion) {
    c.bench_function("deal a seeded War game", |b| {
        b.iter(|| WarGameBuilder::new("bench").seed(42).build())
    });
}

fn playing_seeded_game(c: &mut criterion::Criterion) {
    c.bench_function("play a seeded War game to the end", |b| {
        b.iter_batched(
            || WarGameBuilder::new("bench").seed(42).build().expect("valid config"),
            |mut game| game.play_to_end(),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn shuffling_deck(c: &mut criterion::Criterion) {
    c.bench_function("shuffle a 52-card deck", |b| {
        let mut rng = GameRng::new(7);
        let mut deck = Deck::new();
        b.iter(|| deck.shuffle(&mut rng).len())
    });
}

use war_engine::{Deck, GameRng, WarGameBuilder};
