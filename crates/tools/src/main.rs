use anyhow::{Context, Result, anyhow};
use clap::Parser;
use delve_core::{Direction, Game, GenConfig, RunOutcome, SessionPhase, SilentCues};
use serde::Serialize;

/// Headless session runner: plays one scripted move per frame against a
/// seeded world and prints a JSON summary of where the run ended.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for world generation
    #[arg(short, long)]
    seed: u64,

    /// Move script, one of U/D/L/R per frame (e.g. "RRDDL"); frames past the
    /// end of the script apply no input
    #[arg(short, long, default_value = "")]
    moves: String,

    /// Maximum frames to simulate
    #[arg(short, long, default_value_t = 400)]
    frames: u32,
}

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    outcome: &'static str,
    frames_simulated: u32,
    health: u32,
    score: u32,
    keys: u32,
    snapshot_hash: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let script = parse_moves(&args.moves).context("invalid --moves script")?;

    let mut game = Game::new(args.seed, &GenConfig::default());
    let mut cues = SilentCues;

    let mut frames_simulated = 0;
    for frame in 0..args.frames {
        if game.finished() {
            break;
        }
        if let Some(dir) = script.get(frame as usize) {
            game.apply_move(*dir, &mut cues);
        }
        game.advance_enemies(&mut cues);
        frames_simulated = frame + 1;
    }

    let player = &game.state().player;
    let summary = RunSummary {
        seed: args.seed,
        outcome: match game.phase() {
            SessionPhase::Running => "running",
            SessionPhase::Finished(RunOutcome::Victory) => "victory",
            SessionPhase::Finished(RunOutcome::Defeat) => "defeat",
        },
        frames_simulated,
        health: player.health,
        score: player.score,
        keys: player.keys,
        snapshot_hash: format!("0x{:016x}", game.snapshot_hash()),
    };

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

fn parse_moves(script: &str) -> Result<Vec<Direction>> {
    script
        .chars()
        .map(|step| match step.to_ascii_uppercase() {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(anyhow!("unrecognized move '{other}', expected one of U/D/L/R")),
        })
        .collect()
}
