use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reversi::prelude::*;

fn search_from_opening(depth: u8, preset: EnginePreset) -> ScoreMove {
    let config = EngineConfig::preset(preset, depth);
    let mut engine = Engine::with_config(config);
    let board = Board::starting_position();
    engine.best_move(black_box(&board), Side::White, board.occupied_count())
}

/// Plays a short engine-vs-engine opening so later searches see a busier board.
fn self_play_opening(plies: usize) -> GameSession {
    let config = SessionConfig {
        engine: EngineConfig::preset(EnginePreset::Full, 2),
        mode: SessionMode::SelfPlay,
    };
    let mut session = GameSession::new(config).expect("default config is valid");
    for _ in 0..plies {
        if session.request_ai_move().is_err() {
            break;
        }
        session.wait_for_ai_move().expect("engine thread should answer");
    }
    session
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search From Opening");
    group.sample_size(10);
    for depth in 2..=6u8 {
        for &preset in [EnginePreset::Full, EnginePreset::Classic].iter() {
            group.bench_with_input(
                BenchmarkId::new(preset.to_string(), depth),
                &depth,
                |b, &depth| b.iter(|| search_from_opening(depth, preset)),
            );
        }
    }
    group.finish();

    let session = self_play_opening(16);
    let board = *session.board();
    let side = session.current_side();
    let moves_played = session.moves_played();
    c.bench_function("search midgame depth 5", |b| {
        b.iter(|| {
            let mut engine = Engine::with_config(EngineConfig::preset(EnginePreset::Full, 5));
            engine.best_move(black_box(&board), side, moves_played)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
