use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quoridor_ai::ai::{Agent, AgentController, RandomAgent};
use quoridor_ai::arena::{play_match, MatchStats};
use quoridor_ai::config::AppConfig;
use quoridor_ai::game::{GameState, Seat, Side};

/// Pit the minimax agent against an opponent on a headless board.
#[derive(Parser)]
#[command(name = "quoridor_ai", about = "Run minimax Quoridor matches")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "quoridor.toml")]
    config: PathBuf,

    /// Opponent for the minimax agent: minimax or random
    #[arg(long, default_value = "random")]
    opponent: String,

    /// Override number of matches
    #[arg(long)]
    games: Option<usize>,

    /// Override search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override board size (5, 7, 9 or 11)
    #[arg(long)]
    size: Option<usize>,

    /// Seed every agent's RNG for reproducible matches
    #[arg(long)]
    seed: Option<u64>,

    /// Print each match record as a JSON line
    #[arg(long)]
    json: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    match cli.opponent.as_str() {
        "minimax" | "random" => {}
        other => bail!("unknown opponent '{}' (expected 'minimax' or 'random')", other),
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        config.arena.games = games;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(size) = cli.size {
        config.board.size = size;
    }
    if cli.seed.is_some() {
        config.arena.seed = cli.seed;
    }
    config.validate().context("invalid configuration")?;

    let mut stats = MatchStats::new();
    for game in 0..config.arena.games {
        let seed = config.arena.seed.map(|s| s.wrapping_add(game as u64));
        let (mut one, seat_one) = opponent(&cli.opponent, &config, seed);
        let mut two = match seed {
            Some(s) => AgentController::from_seed(Side::Two, config.search.clone(), s),
            None => AgentController::new(Side::Two, config.search.clone(), StdRng::from_os_rng()),
        };

        let state = GameState::new(&config.board, seat_one, Seat::Computer);
        let record = play_match(state, one.as_mut(), &mut two, config.arena.max_turns)
            .with_context(|| format!("match {} aborted", game + 1))?;

        if cli.json {
            println!("{}", serde_json::to_string(&record)?);
        }
        stats.record(&record);
    }

    info!(
        games = stats.games(),
        opponent_wins = stats.wins(Side::One),
        minimax_wins = stats.wins(Side::Two),
        unfinished = stats.unfinished(),
        avg_turns = stats.average_length(),
        opponent_walls = stats.walls_placed(Side::One),
        minimax_walls = stats.walls_placed(Side::Two),
        "all matches finished"
    );
    println!(
        "Minimax won {}/{} ({:.0}%) | opponent {} | unfinished {} | avg length {:.1} turns | walls {} vs {}",
        stats.wins(Side::Two),
        stats.games(),
        stats.win_rate(Side::Two) * 100.0,
        stats.wins(Side::One),
        stats.unfinished(),
        stats.average_length(),
        stats.walls_placed(Side::Two),
        stats.walls_placed(Side::One),
    );

    Ok(())
}

/// Build the Side One agent and its seat.
fn opponent(kind: &str, config: &AppConfig, seed: Option<u64>) -> (Box<dyn Agent>, Seat) {
    let seed = seed.map(|s| s.wrapping_mul(31));
    if kind == "minimax" {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        let agent = AgentController::new(Side::One, config.search.clone(), rng);
        return (Box::new(agent), Seat::Computer);
    }

    let radius = config.search.wall_radius;
    let agent = match seed {
        Some(s) => RandomAgent::from_seed(radius, s),
        None => RandomAgent::new(radius),
    };
    (Box::new(agent), Seat::HumanSeat1)
}
