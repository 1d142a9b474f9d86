use criterion::{black_box, criterion_group, criterion_main, Criterion};

use jade_banquet::core::{create_initial_state, GameRng};
use jade_banquet::scoring::standings;

fn setup(c: &mut Criterion) {
    c.bench_function("create_initial_state/4p", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| create_initial_state(black_box(4), &mut rng))
    });
}

fn refill_and_advance(c: &mut Criterion) {
    let base = create_initial_state(4, &mut GameRng::new(42));
    c.bench_function("take_refill_advance", |b| {
        b.iter(|| {
            let mut state = base.clone();
            for i in 0..9 {
                let _ = state.public_area.take_tableware(i);
                state.refresh_grid_tableware(i);
                let _ = state.public_area.take_snack(i);
                state.refresh_grid_snacks(i);
                state.advance_turn();
            }
            black_box(state.is_game_over())
        })
    });
}

fn scoring(c: &mut Criterion) {
    let state = create_initial_state(6, &mut GameRng::new(7));
    c.bench_function("standings/6p", |b| b.iter(|| standings(black_box(&state))));
}

criterion_group!(benches, setup, refill_and_advance, scoring);
criterion_main!(benches);
