use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use droid_explorer::Explorer;
use floor_droid::FloorDroid;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "explorer-cli")]
#[command(about = "Maps a droid's floor plan and reports distances to the goal", long_about = None)]
struct Args {
    /// Droid program (defaults to EXPLORER_PROGRAM environment variable if not provided)
    program: Option<PathBuf>,

    /// Which figure to print
    #[arg(long, value_enum, default_value_t = Part::Both)]
    part: Part,

    /// Print the full survey report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Part {
    /// Shortest distance from the start to the goal
    One,
    /// Longest shortest distance from the goal to any mapped cell
    Two,
    Both,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let program_path = match args.program {
        Some(path) => path,
        None => std::env::var("EXPLORER_PROGRAM")
            .map(PathBuf::from)
            .context("no program given via argument or EXPLORER_PROGRAM environment variable")?,
    };
    let program = std::fs::read_to_string(&program_path)
        .with_context(|| format!("Failed to read program {}", program_path.display()))?;

    let droid = FloorDroid::spawn(&program)
        .with_context(|| format!("Failed to load program {}", program_path.display()))?;
    let mut explorer = Explorer::new(Box::new(droid));

    explorer.explore().await.context("exploration failed")?;
    info!(cells = explorer.graph.vertex_count(), "floor plan mapped");

    if args.json {
        let report = explorer.survey().await?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if matches!(args.part, Part::One | Part::Both) {
        println!("{}", explorer.distance_to_goal().await?);
    }
    if matches!(args.part, Part::Two | Part::Both) {
        println!("{}", explorer.goal_eccentricity().await?);
    }

    Ok(())
}
