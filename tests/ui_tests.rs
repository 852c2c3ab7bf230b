use battlegeek::{
    coord_to_string, parse_coord, render_board, render_guess_board, Board, Coord, Fleet,
    GameController, Orientation, Outcome, ShipType, ShotResult,
};

fn cells(rendered: &str, row: usize) -> Vec<String> {
    let line = rendered.lines().nth(row + 1).unwrap();
    line.split_whitespace().skip(1).map(String::from).collect()
}

#[test]
fn test_parse_coord() {
    assert_eq!(parse_coord("A1", 10, 10).unwrap(), Coord::new(0, 0));
    assert_eq!(parse_coord("c5", 10, 10).unwrap(), Coord::new(4, 2));
    assert_eq!(parse_coord(" J10 ", 10, 10).unwrap(), Coord::new(9, 9));
}

#[test]
fn test_parse_coord_errors() {
    assert!(parse_coord("", 10, 10).is_err());
    assert!(parse_coord("K1", 10, 10).is_err());
    assert!(parse_coord("A0", 10, 10).is_err());
    assert!(parse_coord("A11", 10, 10).is_err());
    assert!(parse_coord("5A", 10, 10).is_err());
}

#[test]
fn test_coord_label_roundtrip() {
    let c = Coord::new(6, 1);
    assert_eq!(coord_to_string(c), "B7");
    assert_eq!(parse_coord(&coord_to_string(c), 10, 10).unwrap(), c);
}

#[test]
fn test_own_board_shows_bonus_cells() {
    let mut fleet = Fleet::new(10, 10);
    fleet
        .place(ShipType::new("Destroyer", 2), Coord::new(0, 0), Orientation::Horizontal)
        .unwrap();
    let mut board = Board::new(fleet);
    board.place_bonus(Coord::new(5, 5)).unwrap();
    board.place_bonus(Coord::new(5, 6)).unwrap();
    assert_eq!(board.shoot(5, 6).unwrap().outcome, Outcome::Bonus);
    board.shoot(0, 0).unwrap();
    board.shoot(9, 9).unwrap();

    let out = render_board(&board);
    assert_eq!(&cells(&out, 0)[..3], ["X", "S", "."]);
    assert_eq!(&cells(&out, 5)[5..7], ["b", "B"]);
    assert_eq!(cells(&out, 9)[9], "o");
}

#[test]
fn test_guess_board_shows_claimed_bonus() {
    let mut controller = GameController::new(Board::new(Fleet::new(10, 10)), 10, 10);
    controller
        .set_play_result(2, 3, &ShotResult::bonus(Coord::new(2, 3)))
        .unwrap();
    controller
        .set_play_result(2, 4, &ShotResult::missed())
        .unwrap();
    assert!(controller.already_played(2, 3));
    assert_eq!(controller.play_misses().count_ones(), 1);

    let out = render_guess_board(
        controller.play_hits(),
        controller.play_misses(),
        controller.play_bonuses(),
    );
    assert_eq!(&cells(&out, 2)[3..5], ["B", "o"]);
}
