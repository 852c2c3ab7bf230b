use battlegeek::{Board, BoardError, Coord, GameConfig, Outcome};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> (Board, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let board = Board::random(&GameConfig::default(), &mut rng).unwrap();
    (board, rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn reshoot_is_rejected_without_mutation(seed in any::<u64>(), x in 0..10i32, y in 0..10i32) {
        let (mut board, mut rng) = random_board(seed);
        for _ in 0..rng.random_range(0..30) {
            let _ = board.shoot(rng.random_range(0..10), rng.random_range(0..10));
        }
        let _ = board.shoot(x, y);
        let after_first = board.clone();
        let err = board.shoot(x, y).unwrap_err();
        prop_assert_eq!(err, BoardError::AlreadyPlayed { x, y });
        prop_assert_eq!(board, after_first);
    }

    #[test]
    fn sunk_iff_all_cells_hit_and_never_reverts(seed in any::<u64>()) {
        let (mut board, mut rng) = random_board(seed);
        let mut was_sunk = vec![false; board.fleet().ships().len()];
        for _ in 0..150 {
            let _ = board.shoot(rng.random_range(0..10), rng.random_range(0..10));
            for (i, ship) in board.fleet().ships().iter().enumerate() {
                let all_hit = ship.cells().iter().all(|c| ship.is_hit(*c));
                prop_assert_eq!(ship.is_sunk(), all_hit);
                if was_sunk[i] {
                    prop_assert!(ship.is_sunk());
                }
                was_sunk[i] = ship.is_sunk();
            }
        }
    }

    #[test]
    fn victory_exactly_once_with_last_ship_shape(seed in any::<u64>()) {
        let (mut board, mut rng) = random_board(seed);
        let mut cells: Vec<Coord> = (0..10)
            .flat_map(|x| (0..10).map(move |y| Coord::new(x, y)))
            .collect();
        // shuffle
        for i in (1..cells.len()).rev() {
            let j = rng.random_range(0..=i);
            cells.swap(i, j);
        }
        let mut victories = 0;
        for c in cells {
            let res = board.shoot(c.x, c.y).unwrap();
            if res.outcome == Outcome::Victory {
                victories += 1;
                let ship = &board.fleet().ships()[board.fleet().ship_at(c).unwrap()];
                prop_assert_eq!(res.shape.as_slice(), ship.cells());
            }
        }
        prop_assert_eq!(victories, 1);
    }
}
