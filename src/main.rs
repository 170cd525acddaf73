use clap::Parser;
use color_eyre::eyre::{bail, eyre};
use cricket_core::utils::TimeEstimation;
use cricket_core::{MatchSelection, MatchSelectionResult, PitchProfile};
use database::{DatabaseLoader, PitchReportLoader, PlayerNameIndex};
use env_logger::Env;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Picks a playing eleven and its leaders from two rosters.
#[derive(Parser, Debug)]
#[command(name = "cricket_selector", version)]
struct Args {
    /// Seed for a reproducible draw
    #[arg(long, env = "SELECTOR_SEED")]
    seed: Option<u64>,

    /// Pitch report JSON file to use instead of the bundled one
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the reference profile of a pitch archetype (green, dusty, ...)
    #[arg(long)]
    pitch: Option<String>,

    /// Suggest player names starting with this prefix and exit
    #[arg(long)]
    find: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let mut database = database?;

    info!("database loaded: {} ms", estimated);

    if let Some(prefix) = &args.find {
        for name in PlayerNameIndex::new(&database.rosters).autocomplete(prefix) {
            println!("{}", name);
        }
        return Ok(());
    }

    if let Some(name) = &args.pitch {
        let profile = PitchProfile::by_name(name).ok_or_else(|| eyre!("unknown pitch type: {}", name))?;
        println!("Pitch profile: {}\n", profile);
    }

    if let Some(path) = &args.report {
        database.pitch_report = PitchReportLoader::from_file(path)?;
    }

    let [team1, team2] = database.rosters.as_slice() else {
        bail!("expected two rosters, found {}", database.rosters.len());
    };

    let result = match args.seed {
        Some(seed) => {
            info!("using seed {}", seed);
            MatchSelection::run(&database.pitch_report, team1, team2, &mut StdRng::seed_from_u64(seed))?
        }
        None => MatchSelection::run_default(&database.pitch_report, team1, team2)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result, team1.name(), team2.name());
    }

    Ok(())
}

fn print_result(result: &MatchSelectionResult, team1: &str, team2: &str) {
    let analysis = &result.pitch_analysis;

    println!("Pitch Analysis:");
    println!("  favors batting: {}", analysis.favors_batting);
    println!("  favors bowling: {}", analysis.favors_bowling);
    println!("  favors spin: {}", analysis.favors_spin);
    println!("  favors pace: {}", analysis.favors_pace);
    println!("  dew factor: {}", analysis.dew_factor);
    println!("  unpredictable: {}", analysis.unpredictable);

    println!("\nBest Eleven:");
    for player in &result.squad {
        println!("- {}", player);
    }

    println!("\nCaptain: {}", result.captain.name());
    println!("Vice Captain: {}", result.vice_captain.name());

    println!(
        "\nPlayers selected: {} from {}, {} from {}",
        result.team1_players_selected, team1, result.team2_players_selected, team2
    );
}
