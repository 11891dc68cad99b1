//! bluff-sim - play rounds of the dice bluffing game with scripted agents.
//!
//! Every seat is played by the same random policy. Prints how often each seat
//! lost; `--verbose` logs every step.

use bluff_dice::core::{GameRng, PlayerId, RoundConfig};
use bluff_dice::games::bluff::BluffRound;
use bluff_dice::policy::RandomPolicy;
use bluff_dice::simulate::{play_rounds, tally_losses, RoundSummary};
use clap::Parser;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "bluff-sim")]
#[command(about = "Simulate dice bluffing rounds with random agents")]
struct Args {
    /// Number of seats (3-8)
    #[arg(short, long, default_value = "5")]
    players: usize,

    /// Number of rounds to play
    #[arg(short, long, default_value = "100")]
    rounds: usize,

    /// Seed for dice and agents; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Probability of doubting a declaration
    #[arg(long, default_value = "0.25")]
    doubt_prob: f64,

    /// Probability of declaring poker outright
    #[arg(long, default_value = "0.05")]
    poker_prob: f64,

    /// Step limit per round
    #[arg(long, default_value = "1000")]
    max_steps: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    players: usize,
    rounds: usize,
    seed: u64,
    truncated: usize,
    invalid_steps: usize,
    mean_steps: f64,
    losses: Vec<u32>,
}

fn build_report(args: &Args, seed: u64, summaries: &[RoundSummary]) -> Report {
    let losses = tally_losses(summaries, args.players);
    let total_steps: usize = summaries.iter().map(|s| s.steps).sum();
    Report {
        players: args.players,
        rounds: summaries.len(),
        seed,
        truncated: summaries.iter().filter(|s| s.truncated()).count(),
        invalid_steps: summaries.iter().map(|s| s.invalid_steps).sum(),
        mean_steps: total_steps as f64 / summaries.len().max(1) as f64,
        losses: PlayerId::all(args.players).map(|p| losses[p]).collect(),
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
        .with_writer(std::io::stderr)
        .init();

    let config = RoundConfig::new(args.players)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(players = args.players, rounds = args.rounds, seed, "starting simulation");

    let mut env = BluffRound::new(config, seed);
    let mut policy = RandomPolicy::from_rng(GameRng::new(seed).fork())
        .with_doubt_prob(args.doubt_prob)
        .with_poker_prob(args.poker_prob);

    let start = Instant::now();
    let summaries = play_rounds(&mut env, &mut policy, args.rounds, args.max_steps);
    let elapsed = start.elapsed();
    info!(elapsed_ms = elapsed.as_millis() as u64, "simulation finished");

    let report = build_report(&args, seed, &summaries);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} rounds, {} players, seed {} ({:.1} steps/round, {} truncated)",
        report.rounds, report.players, report.seed, report.mean_steps, report.truncated
    );
    for (seat, losses) in report.losses.iter().enumerate() {
        let share = f64::from(*losses) / report.rounds.max(1) as f64 * 100.0;
        println!("  Player {seat}: {losses:>5} losses ({share:5.1}%)");
    }

    Ok(())
}
