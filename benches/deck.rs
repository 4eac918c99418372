use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tarot_encounters::cards::{Card, Rank, Suite};
use tarot_encounters::core::DeckRng;
use tarot_encounters::deck::Deck;
use tarot_encounters::encounter::deal_spread;

fn building_full_deck(c: &mut Criterion) {
    c.bench_function("build a 78-card deck", |b| b.iter(Deck::full));
}

fn shuffling_full_deck(c: &mut Criterion) {
    let deck = Deck::full();
    let mut rng = DeckRng::new(7);
    c.bench_function("shuffle a 78-card deck", |b| {
        b.iter(|| black_box(&deck).shuffled(&mut rng))
    });
}

fn drawing_and_snapshotting(c: &mut Criterion) {
    let mut rng = DeckRng::new(7);
    let deck = Deck::full().shuffled(&mut rng);
    c.bench_function("draw 3 and keep the old snapshot", |b| {
        b.iter(|| {
            let snapshot = deck.clone();
            let draw = black_box(&deck).draw(3, &mut rng);
            (snapshot, draw)
        })
    });
}

fn dealing_spreads_to_empty(c: &mut Criterion) {
    let pc = Card::minor(Suite::Wands, Rank::Four);
    let mut rng = DeckRng::new(7);
    c.bench_function("deal 26 spreads from a fresh deck", |b| {
        b.iter(|| {
            let mut deck = Deck::full().shuffled(&mut rng);
            while let Ok((spread, remaining)) = deal_spread(pc, &deck, &mut rng, 0.5) {
                black_box(spread);
                deck = remaining;
            }
            deck
        })
    });
}

criterion_group!(
    benches,
    building_full_deck,
    shuffling_full_deck,
    drawing_and_snapshotting,
    dealing_spreads_to_empty
);
criterion_main!(benches);
