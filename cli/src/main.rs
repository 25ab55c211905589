use std::io::Write;

use clap::{Parser, Subcommand};
use cuppa_cli::CliContext;
use cuppa_cli::commands;
use cuppa_cli::logging;
use cuppa_cli::readline;

#[tokio::main]
async fn main() -> Result<(), String> {
    logging::init();

    let ctx = CliContext::new();

    // Reload the previously used dataset, if the config remembers one.
    let remembered = ctx.config.read().await.dataset_path.clone();
    if !remembered.is_empty()
        && let Err(err) = commands::load(&remembered, &ctx).await
    {
        tracing::warn!(error = %err, path = %remembered, "failed to reload dataset");
    }

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "coffee-quality explorer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a dataset file and start a session
    Load { path: String },
    /// Set the trend view's metric (wire key, e.g. `aroma`)
    Metric { key: String },
    /// Set the pie view's grouping dimension (wire key, e.g. `harvestYear`)
    Group { key: String },
    /// Click one trend point
    Click { place: u32 },
    /// Brush-select several trend points
    Select { places: Vec<u32> },
    /// Clear the selection
    Clear,
    /// Print the trend series
    Series,
    /// Print the pie breakdown
    Pie,
    /// Print the world map dataset
    World,
    /// Print configuration and session state
    Config,
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "cuppa".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Load { path }) => commands::load(path, ctx).await?,
        Some(Commands::Metric { key }) => commands::set_metric(key, ctx).await?,
        Some(Commands::Group { key }) => commands::set_group(key, ctx).await?,
        Some(Commands::Click { place }) => commands::click(*place, ctx).await?,
        Some(Commands::Select { places }) => commands::select(places, ctx).await?,
        Some(Commands::Clear) => commands::clear(ctx).await?,
        Some(Commands::Series) => commands::show_series(ctx).await?,
        Some(Commands::Pie) => commands::show_pie(ctx).await?,
        Some(Commands::World) => commands::show_world(ctx).await?,
        Some(Commands::Config) => commands::show_config(ctx).await?,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
