use criterion::{black_box, criterion_group, criterion_main, Criterion};

use entropy_engine::board::Board;
use entropy_engine::core::{GameConfig, BOARD_SIZE};
use entropy_engine::rules::{Player, RulesEngine, SilentPresenter};
use entropy_engine::scoring::score;
use entropy_engine::{Color, Coord, Result};

struct FirstFit;

impl Player for FirstFit {
    fn choose_placement(&mut self, board: &Board, _piece: Color) -> Result<Coord> {
        Ok(board.empty_cells().next().unwrap_or(Coord::new(0, 0)))
    }

    fn choose_relocation(&mut self, board: &Board) -> Result<(Coord, Coord)> {
        let any = board.occupied_cells().next().unwrap_or(Coord::new(0, 0));
        Ok((any, any))
    }
}

fn full_board() -> Board {
    let grid: Vec<Vec<Option<u8>>> = (0..BOARD_SIZE)
        .map(|r| (0..BOARD_SIZE).map(|c| Some(((r * 3 + c) % 7) as u8)).collect())
        .collect();
    Board::from_layout(&grid).unwrap_or_default()
}

fn bench_score(c: &mut Criterion) {
    let board = full_board();
    c.bench_function("score_full_board", |b| b.iter(|| score(black_box(&board))));
}

fn bench_game(c: &mut Criterion) {
    c.bench_function("play_full_game", |b| {
        b.iter(|| {
            let mut engine = RulesEngine::new(GameConfig::new(black_box(42))).ok()?;
            engine.play_game(&mut FirstFit, &mut SilentPresenter).ok()
        })
    });
}

criterion_group!(benches, bench_score, bench_game);
criterion_main!(benches);
