use std::time::Instant;

use grid_snake::{
    board::{Board, Custom},
    config::GameConfig,
    game::{ClassicGame, Game, Input},
    types::{
        Direction, FoodGettableGame, HeadGettableGame, PositionGettableGame,
        VictorDeterminableGame, WallQueryableGame,
    },
};
use rand::{rngs::SmallRng, SeedableRng};

trait BenchableGame:
    HeadGettableGame + FoodGettableGame + WallQueryableGame + VictorDeterminableGame
{
    fn feed(&mut self, input: Option<Input>);

    fn run(&mut self, total_iterations: &mut u64) {
        if self.is_over() {
            self.feed(Some(Input::Acknowledge));
            self.feed(Some(Input::Start));
        } else {
            let next = autopilot_direction(self).map(Input::Turn);
            self.feed(black_box(next));
            *total_iterations += 1;
        }
    }
}

impl BenchableGame for ClassicGame<SmallRng> {
    fn feed(&mut self, input: Option<Input>) {
        self.update(input, 1);
    }
}

impl BenchableGame for Game<u8, Custom, SmallRng> {
    fn feed(&mut self, input: Option<Input>) {
        self.update(input, 1);
    }
}

fn autopilot_direction<G>(game: &G) -> Option<Direction>
where
    G: HeadGettableGame + FoodGettableGame + WallQueryableGame + ?Sized,
{
    let head = game.get_head_as_position();
    let food = game.get_all_food_as_positions();
    Direction::all()
        .iter()
        .filter_map(|d| {
            let next = head.add_vec(d.to_vector());
            let native = game.native_from_position(next).ok()?;
            if game.is_wall(&native) || game.position_is_snake_body(native) {
                return None;
            }
            let distance = food
                .iter()
                .map(|f| (f.x - next.x).abs() + (f.y - next.y).abs())
                .min()
                .unwrap_or(0);
            Some((distance, *d))
        })
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, d)| d)
}

fn bench_game<G: BenchableGame>(b: &mut Bencher, make: impl Fn() -> G) {
    b.iter_custom(|iter_count| {
        let mut game = make();
        game.feed(Some(Input::Start));
        let mut total_iterations = 0;

        let start = Instant::now();

        while total_iterations < iter_count {
            game.run(&mut total_iterations);
        }

        start.elapsed()
    });
}

use criterion::{black_box, criterion_group, criterion_main, Bencher, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let mut g = c.benchmark_group("Autopilot");
    g.bench_function("Classic 32x24", |b| {
        bench_game(b, || ClassicGame::classic(SmallRng::seed_from_u64(0)).unwrap());
    });
    g.bench_function("Custom 12x12", |b| {
        bench_game(b, || {
            let board = Board::<u8, Custom>::from_dimensions(12, 12).unwrap();
            Game::new(board, GameConfig::default(), SmallRng::seed_from_u64(0)).unwrap()
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
