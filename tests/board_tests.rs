use battlegeek::{
    Board, BoardError, CellState, Coord, Fleet, GameConfig, Orientation, Outcome, ShipType,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn cruiser_board(with_escort: bool) -> Board {
    let mut fleet = Fleet::new(10, 10);
    fleet
        .place(
            ShipType::new("Cruiser", 3),
            Coord::new(2, 2),
            Orientation::Horizontal,
        )
        .unwrap();
    if with_escort {
        fleet
            .place(
                ShipType::new("Destroyer", 2),
                Coord::new(7, 7),
                Orientation::Vertical,
            )
            .unwrap();
    }
    Board::new(fleet)
}

#[test]
fn test_touched_then_drown_with_shape() {
    let mut board = cruiser_board(true);

    let r = board.shoot(2, 2).unwrap();
    assert_eq!(r.outcome, Outcome::Touched);
    assert_eq!(r.shape, vec![Coord::new(2, 2)]);

    let r = board.shoot(2, 3).unwrap();
    assert_eq!(r.outcome, Outcome::Touched);
    assert_eq!(r.shape, vec![Coord::new(2, 2), Coord::new(2, 3)]);

    let r = board.shoot(2, 4).unwrap();
    assert_eq!(r.outcome, Outcome::Drown);
    assert_eq!(
        r.shape,
        vec![Coord::new(2, 2), Coord::new(2, 3), Coord::new(2, 4)]
    );
    assert!(!board.all_sunk());
    assert_eq!(board.fleet().remaining(), 1);
}

#[test]
fn test_last_ship_reports_victory_not_drown() {
    let mut board = cruiser_board(false);
    assert_eq!(board.shoot(2, 2).unwrap().outcome, Outcome::Touched);
    assert_eq!(board.shoot(2, 3).unwrap().outcome, Outcome::Touched);
    let r = board.shoot(2, 4).unwrap();
    assert_eq!(r.outcome, Outcome::Victory);
    assert_eq!(
        r.shape,
        vec![Coord::new(2, 2), Coord::new(2, 3), Coord::new(2, 4)]
    );
    assert!(board.all_sunk());
}

#[test]
fn test_miss_in_open_water() {
    let mut board = cruiser_board(true);
    let r = board.shoot(5, 5).unwrap();
    assert_eq!(r.outcome, Outcome::Missed);
    assert!(r.shape.is_empty());
    assert!(!r.outcome.grants_extra_shot());
    assert_eq!(board.cell_state(Coord::new(5, 5)).unwrap(), CellState::Missed);
}

#[test]
fn test_out_of_bounds_leaves_board_unchanged() {
    let mut board = cruiser_board(true);
    let before = board.clone();
    assert_eq!(
        board.shoot(-1, 0).unwrap_err(),
        BoardError::OutOfBounds { x: -1, y: 0 }
    );
    assert_eq!(
        board.shoot(0, 10).unwrap_err(),
        BoardError::OutOfBounds { x: 0, y: 10 }
    );
    assert_eq!(board, before);
    assert_eq!(board.shots_fired(), 0);
}

#[test]
fn test_repeat_shot_rejected() {
    let mut board = cruiser_board(true);
    board.shoot(2, 2).unwrap();
    board.shoot(0, 0).unwrap();
    let after_first = board.clone();

    assert_eq!(
        board.shoot(2, 2).unwrap_err(),
        BoardError::AlreadyPlayed { x: 2, y: 2 }
    );
    assert_eq!(
        board.shoot(0, 0).unwrap_err(),
        BoardError::AlreadyPlayed { x: 0, y: 0 }
    );
    assert_eq!(board, after_first);
    assert!(board.is_played(Coord::new(2, 2)));
    assert!(!board.is_played(Coord::new(2, 3)));
}

#[test]
fn test_bonus_cell() {
    let mut board = cruiser_board(true);
    board.place_bonus(Coord::new(0, 9)).unwrap();
    assert_eq!(
        board.place_bonus(Coord::new(2, 3)).unwrap_err(),
        BoardError::PlacementOverlap
    );

    let r = board.shoot(0, 9).unwrap();
    assert_eq!(r.outcome, Outcome::Bonus);
    assert_eq!(r.shape, vec![Coord::new(0, 9)]);
    assert!(r.outcome.grants_extra_shot());
    assert_eq!(board.cell_state(Coord::new(0, 9)).unwrap(), CellState::Bonus);
    assert_eq!(
        board.shoot(0, 9).unwrap_err(),
        BoardError::AlreadyPlayed { x: 0, y: 9 }
    );
}

#[test]
fn test_random_board_with_bonuses() {
    let config = GameConfig {
        bonus_cells: 3,
        ..GameConfig::default()
    };
    let board = Board::random(&config, &mut SmallRng::seed_from_u64(9)).unwrap();
    assert_eq!(board.bonuses().count_ones(), 3);
    assert!(!board.bonuses().intersects(board.fleet().ship_map()));
}

#[test]
fn test_sink_whole_random_fleet() {
    let mut board = Board::random(&GameConfig::default(), &mut SmallRng::seed_from_u64(3)).unwrap();
    let mut victories = 0;
    for r in 0..10 {
        for c in 0..10 {
            if board.shoot(r, c).unwrap().outcome == Outcome::Victory {
                victories += 1;
            }
        }
    }
    assert_eq!(victories, 1);
    assert!(board.all_sunk());
    assert_eq!(board.shots_fired(), 100);
}
