use battlegeek::{AiOpponent, Board, Difficulty, GameConfig, GameController, Outcome};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <standard|directed|impossible> <seed>", args[0]);
        std::process::exit(1);
    }
    let difficulty: Difficulty = args[1].parse()?;
    let seed: u64 = args[2].parse()?;

    let config = GameConfig::default();
    let mut rng = SmallRng::seed_from_u64(seed);
    let target = Board::random(&config, &mut rng)?;
    let own = Board::random(&config, &mut rng)?;
    let layout = difficulty.perfect_information().then(|| target.layout());

    let mut controller = GameController::new(target, config.width, config.height);
    let mut ai = AiOpponent::new(
        difficulty,
        own,
        config.width,
        config.height,
        layout,
        SmallRng::from_rng(&mut rng),
    );

    let mut shots = 0usize;
    let mut hits = 0usize;
    while let Some(coord) = ai.play() {
        let result = controller.shot(coord.x, coord.y)?;
        ai.set_result(&result);
        shots += 1;
        if result.outcome.is_hit() {
            hits += 1;
        }
        if result.outcome == Outcome::Victory {
            break;
        }
    }

    let result = json!({
        "difficulty": difficulty,
        "seed": seed,
        "shots": shots,
        "hits": hits,
        "won": controller.board().all_sunk(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
