//! Tarneeb-41 simulator: plays games between built-in policies and prints
//! the results.

use std::collections::BTreeMap;

use clap::{Parser, ValueEnum};
use tarneeb41::{
    CardKey, CardStats, GameRng, GameSummary, HighestScore, LeadRule, RulesConfig, SeatMap,
    SeatPolicies, Table, TieBreaker,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "tarneeb-sim")]
#[command(about = "Simulate Tarneeb-41 games between built-in policies")]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Table seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Policy for all four seats
    #[arg(long, default_value = "heuristic")]
    policy: PolicyKind,

    /// Rotate the first lead one seat per round instead of seat 0 always
    #[arg(long)]
    rotate_lead: bool,

    /// What to do when several seats reach the winning score together
    #[arg(long, default_value = "report")]
    tie_break: TieBreak,

    /// Rounds allowed per game before it is abandoned
    #[arg(long, default_value = "1000")]
    max_rounds: u32,

    /// Print each game summary as a JSON line
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyKind {
    Random,
    Heuristic,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TieBreak {
    /// Stop and report the contested game
    Report,
    /// Award the game to the unique highest score
    HighestScore,
}

fn seat_policies(kind: PolicyKind, rng: &mut GameRng) -> SeatMap<SeatPolicies> {
    SeatMap::new(|_| match kind {
        PolicyKind::Random => SeatPolicies::random(rng),
        PolicyKind::Heuristic => SeatPolicies::heuristic(),
    })
}

fn print_summary(summary: &GameSummary) {
    let scores: Vec<String> = summary
        .final_scores
        .iter()
        .map(|(seat, score)| format!("{seat}={score}"))
        .collect();
    println!(
        "game {:>4}: winner {} after {} rounds [{}]",
        summary.game_number,
        summary.winner,
        summary.rounds,
        scores.join(" ")
    );
}

/// Plays and trick wins per rank, trump and plain, over every game.
fn print_card_stats(stats: &CardStats) {
    println!("card stats over {} tricks:", stats.tricks());
    let mut classes: Vec<CardKey> = stats
        .entries()
        .into_iter()
        .map(|(key, _)| CardKey { won: false, ..key })
        .collect();
    classes.dedup();

    for key in classes {
        let won = stats.count(CardKey { won: true, ..key });
        println!(
            "  {:<5} played {:>7}  won {:>7}  ({:.1}%)",
            key.to_string(),
            stats.count(key) + won,
            won,
            100.0 * stats.win_rate(key.rank, key.trump)
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, games = args.games, policy = ?args.policy, "starting simulation");

    let mut config = RulesConfig::default().with_max_rounds(Some(args.max_rounds));
    if args.rotate_lead {
        config = config.with_lead_rule(LeadRule::Rotating);
    }

    let mut policy_rng = GameRng::new(seed).for_context("policies");
    let policies = seat_policies(args.policy, &mut policy_rng);
    let mut table = Table::new(config, policies, seed)?;

    let mut highest = HighestScore;
    let mut tie: Option<&mut dyn TieBreaker> = match args.tie_break {
        TieBreak::Report => None,
        TieBreak::HighestScore => Some(&mut highest),
    };

    for _ in 0..args.games {
        let outcome = match tie.as_deref_mut() {
            Some(t) => table.play_game_with(t),
            None => table.play_game(),
        };
        match outcome {
            Ok(summary) if args.json => println!("{}", serde_json::to_string(&summary)?),
            Ok(summary) => print_summary(&summary),
            Err(err) => {
                warn!(game = table.game_number(), %err, "game aborted");
                eprintln!("game {:>4}: {err}", table.game_number());
            }
        }
    }

    let won: Vec<String> = table
        .games_won()
        .iter()
        .map(|(seat, n)| format!("{seat}={n}"))
        .collect();
    println!("seed {seed}, games won: {}", won.join(" "));

    if args.json {
        let counts: BTreeMap<String, u32> = table
            .total_stats()
            .entries()
            .into_iter()
            .map(|(key, count)| (key.to_string(), count))
            .collect();
        println!("{}", serde_json::to_string(&counts)?);
    } else {
        print_card_stats(table.total_stats());
    }
    Ok(())
}
