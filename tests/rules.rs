use grid_snake::{
    board::{CellIndex, ClassicBoard},
    config::GameConfig,
    engine::{classify_move, next_head, MoveOutcome},
    food::FoodSet,
    game::{ClassicGame, Game, Input, RoundState},
    snake::Snake,
    types::{Direction, TerminationCause, VictorDeterminableGame},
    wire_representation::Snapshot,
};
use rand::{rngs::SmallRng, SeedableRng};

fn cells(cells: &[u16]) -> Vec<CellIndex<u16>> {
    cells.iter().map(|c| CellIndex(*c)).collect()
}

/// interior cells of the classic board, snaking left to right then right to left
fn serpentine(board: &ClassicBoard) -> Vec<CellIndex<u16>> {
    let mut path = vec![];
    for y in 1..board.height() as i32 - 1 {
        let row: Vec<i32> = if y % 2 == 1 {
            (1..board.width() as i32 - 1).collect()
        } else {
            (1..board.width() as i32 - 1).rev().collect()
        };
        for x in row {
            path.push(board.to_index(x, y).unwrap());
        }
    }
    path
}

#[test]
fn snake_heading_comes_from_its_front_cells() {
    let snake = Snake::new(cells(&[124, 125, 126, 127, 128, 129, 130]), 32).unwrap();
    assert_eq!(snake.direction(32), Ok(Direction::West));
}

#[test]
fn moving_north_from_the_corner_hits_the_wall() {
    let board = ClassicBoard::classic();
    let snake = Snake::new(cells(&[33, 65]), 32).unwrap();
    let food = FoodSet::with_cells(cells(&[34, 66, 97]), 3);

    let next = next_head(&board, snake.head(), Direction::North).unwrap();
    assert_eq!(next, CellIndex(1));
    assert_eq!(
        classify_move(next, &snake, |c| board.is_wall(c), &food),
        MoveOutcome::HitWall
    );
}

#[test]
fn turning_back_into_the_neck_ends_the_round() {
    for direction in Direction::all() {
        let mut game = ClassicGame::classic(SmallRng::seed_from_u64(11)).unwrap();
        game.update(Some(Input::Start), 1);
        game.update(Some(Input::Turn(direction)), 1);
        if game.is_over() {
            continue;
        }
        let reverse = game.direction().unwrap().opposite();
        let result = game.update(Some(Input::Turn(reverse)), 1);
        assert_eq!(result.state, RoundState::End);
        assert_eq!(result.termination, Some(TerminationCause::AteSelf));
    }
}

#[test]
fn filling_the_classic_board_is_a_win() {
    let board = ClassicBoard::classic();
    let path = serpentine(&board);
    assert_eq!(path.len(), board.interior_cell_count());

    let last = path.len() - 1;
    let snapshot = Snapshot {
        width: board.width(),
        height: board.height(),
        state: RoundState::Playing,
        snake: path[..last - 1].iter().rev().map(|c| c.as_usize()).collect(),
        food: vec![path[last - 1].as_usize()],
        direction: None,
        offset: 0,
        score: 0,
        termination: None,
    };
    // a single pellet, so restoring doesn't top the food up onto the last free cell
    let config = GameConfig {
        food_count: 1,
        ..GameConfig::default()
    };
    let mut game = Game::from_snapshot(
        board,
        config,
        SmallRng::seed_from_u64(3),
        &snapshot,
    )
    .unwrap();

    for _ in 0..2 {
        let head = board.to_coord(game.snake().head()).unwrap();
        let food = board
            .to_coord(*game.food().iter().next().unwrap())
            .unwrap();
        let towards_food = Direction::between(head, food).unwrap();
        game.update(Some(Input::Turn(towards_food)), 1);
    }

    assert_eq!(game.state(), RoundState::End);
    assert_eq!(game.termination(), Some(TerminationCause::Win));
    assert_eq!(game.snake().len(), 660);
    assert!(game.food().is_empty());
    assert_eq!(game.score(), 658 * 100 * 660);
}

#[test]
fn restores_from_a_json_fixture() {
    let fixture = r#"{
        "width": 32,
        "height": 24,
        "state": "Playing",
        "snake": [399, 400, 401],
        "food": [398, 100, 200],
        "offset": 19
    }"#;
    let snapshot = Snapshot::from_json(fixture).unwrap();
    let mut game = Game::from_snapshot(
        ClassicBoard::classic(),
        GameConfig::default(),
        SmallRng::seed_from_u64(0),
        &snapshot,
    )
    .unwrap();

    // one more tick completes the cell and the snake walks onto the pellet
    let result = game.update(None, 1);
    assert_eq!(result.state, RoundState::Playing);
    assert_eq!(game.snake().cells(), cells(&[398, 399, 400, 401]));
    assert_eq!(result.score, 2 * 100 * 4);
    assert_eq!(game.food().len(), 3);
    assert!(game.food().contains(CellIndex(100)));
    assert!(game.food().contains(CellIndex(200)));
}
