use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use quorum_ballot::mock::MockClock;
use quorum_ballot::{BallotGenesis, BallotService};
use quorum_common::{current_time, Address};

#[derive(Parser)]
#[command(name = "ballot-demo")]
#[command(about = "Quorum Ballot Demo Tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scripted ballot scenario from a genesis file
    Run {
        #[arg(value_name = "GENESIS")]
        genesis: Option<PathBuf>,
    },
}

fn default_genesis() -> BallotGenesis {
    BallotGenesis::new(
        vec!["Alice".to_string(), "Bob".to_string(), "Charlie".to_string()],
        30,
    )
}

fn demo_address(tag: u8) -> Address {
    // Deterministic demo identities; nobody signs anything here.
    let seed = [tag; 32];
    let keypair = ed25519_dalek::SigningKey::from_bytes(&seed);
    Address::from_public_key(&keypair.verifying_key()).expect("demo key encodes")
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { genesis } => {
            let genesis = match genesis {
                Some(path) => match fs::read_to_string(&path) {
                    Ok(json) => match BallotGenesis::from_json(&json) {
                        Ok(g) => g,
                        Err(e) => {
                            eprintln!("Failed to parse genesis file: {}", e);
                            return;
                        }
                    },
                    Err(e) => {
                        eprintln!("Failed to read file: {}", e);
                        return;
                    }
                },
                None => default_genesis(),
            };

            run_scenario(genesis).await;
        }
    }
}

async fn run_scenario(genesis: BallotGenesis) {
    let admin = demo_address(1);
    let clock = Arc::new(MockClock::new(current_time()));

    let service = match BallotService::from_genesis(admin.clone(), &genesis, clock.clone()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to open ballot: {}", e);
            return;
        }
    };

    println!("Administrator: {}", admin);
    println!("Voting open: {}", service.voting_status().await);
    println!("Remaining: {}s", service.remaining_time().await);

    let candidate_count = service.all_candidates().await.len();
    for i in 0..6u8 {
        let voter = demo_address(10 + i);
        let target = (i as usize) % candidate_count.max(1);
        if let Err(e) = service.cast_vote(&voter, target).await {
            eprintln!("Vote by {} failed: {}", voter, e);
        }
    }

    // A repeat vote and an out-of-range vote, to show the rejections.
    let repeat = demo_address(10);
    if let Err(e) = service.cast_vote(&repeat, 0).await {
        println!("Expected rejection: {}", e);
    }
    let stray = demo_address(99);
    if let Err(e) = service.cast_vote(&stray, candidate_count + 5).await {
        println!("Expected rejection: {}", e);
    }

    clock.advance(genesis.duration_minutes * 60 + 1);
    println!("Voting open after deadline: {}", service.voting_status().await);

    if let Err(e) = service.add_candidate(&admin, "Write-in").await {
        eprintln!("Late append failed: {}", e);
    }

    println!("Final tally ({} votes):", service.total_votes().await);
    for candidate in service.all_candidates().await {
        println!("  {}", candidate);
    }
}
