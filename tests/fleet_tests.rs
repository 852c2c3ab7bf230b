use battlegeek::{
    BoardError, Coord, Difficulty, Fleet, GameConfig, Orientation, ShipType, STANDARD_FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_place_overlap_rejected() {
    let mut fleet = Fleet::new(10, 10);
    let cruiser = ShipType::new("Cruiser", 3);
    assert_eq!(
        fleet
            .place(cruiser, Coord::new(2, 2), Orientation::Horizontal)
            .unwrap(),
        0
    );
    let err = fleet
        .place(cruiser, Coord::new(1, 3), Orientation::Vertical)
        .unwrap_err();
    assert_eq!(err, BoardError::PlacementOverlap);
    assert_eq!(fleet.ships().len(), 1);
    assert_eq!(fleet.ship_map().count_ones(), 3);
}

#[test]
fn test_place_out_of_bounds_rejected() {
    let mut fleet = Fleet::new(10, 10);
    let err = fleet
        .place(ShipType::new("Carrier", 5), Coord::new(7, 0), Orientation::Vertical)
        .unwrap_err();
    assert_eq!(err, BoardError::PlacementOutOfBounds);
    assert!(fleet.ship_map().is_empty());
}

#[test]
fn test_random_placement_standard_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let fleet = Fleet::random_placement(&GameConfig::default(), &mut rng).unwrap();
    let expected: usize = STANDARD_FLEET.iter().map(|s| s.length()).sum();
    assert_eq!(fleet.ships().len(), STANDARD_FLEET.len());
    assert_eq!(
        fleet.ship_map().count_ones(),
        expected,
        "all ships should be placed without overlap"
    );
    // largest first
    assert_eq!(fleet.ships()[0].ship_type().length(), 5);
    assert_eq!(fleet.remaining(), STANDARD_FLEET.len());
    assert!(!fleet.all_sunk());
}

#[test]
fn test_random_placement_is_reproducible() {
    let config = GameConfig::default();
    let a = Fleet::random_placement(&config, &mut SmallRng::seed_from_u64(7)).unwrap();
    let b = Fleet::random_placement(&config, &mut SmallRng::seed_from_u64(7)).unwrap();
    assert_eq!(a.layout(), b.layout());
}

#[test]
fn test_random_placement_exhausted() {
    // a 4-long ship never fits on a 3x3 board
    let config = GameConfig {
        width: 3,
        height: 3,
        fleet: vec![ShipType::new("Long", 4)],
        bonus_cells: 0,
        placement_attempts: 25,
    };
    let err = Fleet::random_placement(&config, &mut SmallRng::seed_from_u64(1)).unwrap_err();
    assert_eq!(
        err,
        BoardError::RandomPlacementExhausted {
            ship: "Long",
            attempts: 25
        }
    );
}

#[test]
fn test_config_validation() {
    assert!(GameConfig::default().validate().is_ok());

    let empty = GameConfig {
        fleet: vec![],
        ..GameConfig::default()
    };
    assert!(matches!(empty.validate(), Err(BoardError::InvalidConfig(_))));

    let crowded = GameConfig {
        width: 2,
        height: 2,
        fleet: vec![ShipType::new("A", 2), ShipType::new("B", 2)],
        bonus_cells: 1,
        placement_attempts: 10,
    };
    assert!(matches!(crowded.validate(), Err(BoardError::InvalidConfig(_))));
    assert!(Fleet::random_placement(&crowded, &mut SmallRng::seed_from_u64(0)).is_err());
}

#[test]
fn test_difficulty_parsing() {
    assert_eq!("Impossible".parse::<Difficulty>().unwrap(), Difficulty::Impossible);
    assert_eq!("standard".parse::<Difficulty>().unwrap(), Difficulty::Standard);
    assert_eq!("DIRECTED".parse::<Difficulty>().unwrap(), Difficulty::Directed);
    assert!("nightmare".parse::<Difficulty>().is_err());
    assert!(Difficulty::Impossible.perfect_information());
    assert!(!Difficulty::Directed.perfect_information());
    assert_eq!(Difficulty::Directed.to_string(), "directed");
}
