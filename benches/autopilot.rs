use grid_snake::{
    game::{ClassicGame, Input},
    types::{
        Direction, FoodGettableGame, HeadGettableGame, LengthGettableGame, PositionGettableGame,
        VictorDeterminableGame, WallQueryableGame,
    },
};
use rand::{rngs::SmallRng, SeedableRng};

const MAX_TICKS: u64 = 100_000;

fn autopilot_direction<G>(game: &G) -> Option<Direction>
where
    G: HeadGettableGame + FoodGettableGame + WallQueryableGame,
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

fn run_till_end(game: &mut ClassicGame<SmallRng>) -> u64 {
    game.update(Some(Input::Start), 1);
    let mut ticks = 0;
    while !game.is_over() && ticks < MAX_TICKS {
        let input = autopilot_direction(game).map(Input::Turn);
        game.update(input, 1);
        ticks += 1;
    }
    ticks
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut game = ClassicGame::classic(SmallRng::seed_from_u64(0)).unwrap();
    let ticks = run_till_end(&mut game);

    println!("{}", game);
    println!(
        "{} ticks, length {}, ended with {:?}",
        ticks,
        game.get_length(),
        game.get_termination()
    );
}
