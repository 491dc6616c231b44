//! Headless auto-play: the opponent's greedy policy against a chosen policy
//! on the human seat, reporting tallies.

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use domino_duel::{
    EndReason, FirstPlayable, GreedyDoubles, MatchConfig, MatchError, MatchResult, MovePolicy,
    Seat, SeatMap, TurnController,
};

/// Play domino matches between two policies
#[derive(Parser, Debug)]
#[command(name = "domino-sim")]
#[command(about = "Auto-play domino matches and report tallies", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of matches to play
    #[arg(short, long, default_value = "100")]
    games: u64,

    /// Seed of the first match; match `i` uses `seed + i`
    #[arg(short, long, default_value = "0")]
    seed: u64,

    /// Highest pip on a tile (6 for double-six)
    #[arg(long, default_value = "6")]
    max_pip: u8,

    /// Policy driving the human seat
    #[arg(long, value_enum, default_value = "first")]
    human_policy: HumanPolicy,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HumanPolicy {
    Greedy,
    First,
}

impl HumanPolicy {
    fn policy(self) -> Box<dyn MovePolicy> {
        match self {
            HumanPolicy::Greedy => Box::new(GreedyDoubles),
            HumanPolicy::First => Box::new(FirstPlayable),
        }
    }
}

#[derive(Debug, Default)]
struct Tally {
    wins: SeatMap<u64>,
    ties: u64,
    blocked: u64,
    turns: u64,
}

fn main() -> Result<(), MatchError> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = MatchConfig::default().with_max_pip(cli.max_pip);
    config.validate()?;

    let human = cli.human_policy.policy();
    info!(games = cli.games, seed = cli.seed, human = human.name(), "starting simulation");

    let mut tally = Tally::default();
    for game in 0..cli.games {
        let mut controller = TurnController::new(config, cli.seed.wrapping_add(game), GreedyDoubles)?;
        let outcome = controller.play_out(human.as_ref())?;

        match outcome.result {
            MatchResult::Winner(seat) => tally.wins[seat] += 1,
            MatchResult::Tie => tally.ties += 1,
        }
        if outcome.reason == EndReason::Blocked {
            tally.blocked += 1;
        }
        tally.turns += u64::from(controller.engine().turn_number());
    }

    report(&cli, human.name(), &tally);
    Ok(())
}

fn report(cli: &Cli, human: &str, tally: &Tally) {
    let games = cli.games.max(1) as f64;
    println!("{} matches, double-{} set, seed {}", cli.games, cli.max_pip, cli.seed);
    println!(
        "  {:<10} {:<16} {:>6} ({:.1}%)",
        Seat::Human.to_string(),
        human,
        tally.wins[Seat::Human],
        100.0 * tally.wins[Seat::Human] as f64 / games
    );
    println!(
        "  {:<10} {:<16} {:>6} ({:.1}%)",
        Seat::Opponent.to_string(),
        GreedyDoubles.name(),
        tally.wins[Seat::Opponent],
        100.0 * tally.wins[Seat::Opponent] as f64 / games
    );
    println!("  ties {:>6}  blocked {:>6}", tally.ties, tally.blocked);
    println!("  mean turns {:.1}", tally.turns as f64 / games);
}
