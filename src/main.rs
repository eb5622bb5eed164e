// src/main.rs
mod cli;
mod logging;

use clap::Parser;
use cli::Args;
use mlb_rosters::config::Config;
use mlb_rosters::data_fetcher::{HttpFetcher, Roster, RosterCache, RosterService};
use mlb_rosters::error::AppError;
use mlb_rosters::format::{TextLayout, pitchers_block, position_players_block};
use std::sync::Arc;
use tracing::{error, info};

fn print_roster(roster: &Roster, layout: &TextLayout) {
    println!("{}", roster.team().to_uppercase());
    println!("{}", pitchers_block(roster, layout));
    println!();
    println!("{}", position_players_block(roster, layout));
    println!();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    let mut config = Config::load().await?;
    if let Some(url) = &args.bullpen_url {
        config.bullpen_url = Some(url.clone());
    } else if args.no_bullpen {
        config.bullpen_url = None;
    }
    config.validate()?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, guard) =
        logging::setup_logging(&args, config.log_file_path.as_deref()).await?;
    info!("Logs are being written to: {log_file_path}");

    let fetcher = HttpFetcher::with_timeout(config.http_timeout_seconds)?
        .max_retries(config.max_retries);
    let cache = Arc::new(RosterCache::with_capacity(config.cache_capacity)?);
    let service = RosterService::from_config(&config, fetcher)?.with_cache(cache);
    let layout = args.layout.layout();

    let mut rosters = Vec::new();
    let mut failures = 0usize;
    for team in &args.teams {
        match service.get_roster(team).await {
            Ok(roster) => {
                if !args.json {
                    print_roster(&roster, &layout);
                }
                rosters.push(roster);
            }
            Err(e) => {
                error!("Failed to build roster for {team}: {e}");
                eprintln!("{team}: {e}");
                failures += 1;
            }
        }
    }

    if args.json {
        let rosters: Vec<&Roster> = rosters.iter().map(|r| &**r).collect();
        println!("{}", serde_json::to_string_pretty(&rosters)?);
    }

    if failures > 0 {
        drop(guard);
        std::process::exit(1);
    }

    Ok(())
}
