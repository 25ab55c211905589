use std::io::Write;
use std::path::Path;

use cuppa_core::{
    ExplorerConfigExt, ExplorerSession, InputSignal, SampleTable, Selection, read_rows,
};
use cuppa_types::{GroupingDimension, MetricKey};

use crate::context::{CliContext, SessionHandle};

pub async fn load(path: &str, ctx: &CliContext) -> Result<(), String> {
    let rows = read_rows(Path::new(path)).map_err(|e| e.to_string())?;
    let table = SampleTable::load(&rows).map_err(|e| e.to_string())?;
    let samples = table.len();

    let (metric, dimension) = {
        let config = ctx.config.read().await;
        (config.default_metric, config.default_dimension)
    };
    ctx.start_session(ExplorerSession::new(table, metric, dimension))
        .await;

    // Remember the dataset for the next run.
    let mut config = ctx.config.write().await;
    if config.dataset_path != path {
        config.dataset_path = path.to_string();
        if let Err(err) = config.save() {
            tracing::warn!(error = %err, "failed to persist dataset path");
        }
    }

    println!("loaded {samples} samples from {path}");
    Ok(())
}

pub async fn set_metric(key: &str, ctx: &CliContext) -> Result<(), String> {
    let metric = MetricKey::from_key(key).ok_or_else(|| {
        let known: Vec<&str> = MetricKey::ALL.iter().map(|m| m.as_key()).collect();
        format!("unknown metric '{}'; expected one of: {}", key, known.join(", "))
    })?;

    let handle = active_session(ctx).await?;
    let mut session = handle.write().await;
    session.apply(InputSignal::MetricChanged { metric });
    println!("metric set to {}", metric.label());
    Ok(())
}

pub async fn set_group(key: &str, ctx: &CliContext) -> Result<(), String> {
    let dimension = GroupingDimension::from_key(key).ok_or_else(|| {
        let known: Vec<&str> = GroupingDimension::ALL.iter().map(|d| d.as_key()).collect();
        format!("unknown dimension '{}'; expected one of: {}", key, known.join(", "))
    })?;

    let handle = active_session(ctx).await?;
    let mut session = handle.write().await;
    let datasets = session.apply(InputSignal::DimensionChanged { dimension });
    println!(
        "grouping by {} ({} categories)",
        dimension.label(),
        datasets.pie.len()
    );
    Ok(())
}

pub async fn click(place: u32, ctx: &CliContext) -> Result<(), String> {
    let handle = active_session(ctx).await?;
    let mut session = handle.write().await;
    let datasets = session.apply(InputSignal::PointSelected { place });
    println!(
        "clicked place {place}: pie {} categories, world {} countries",
        datasets.pie.len(),
        datasets.world.len()
    );
    Ok(())
}

pub async fn select(places: &[u32], ctx: &CliContext) -> Result<(), String> {
    let handle = active_session(ctx).await?;
    let mut session = handle.write().await;
    let datasets = session.apply(InputSignal::MultiSelected {
        places: places.to_vec(),
    });
    println!(
        "selected {} places: pie {} categories, world {} countries",
        places.len(),
        datasets.pie.len(),
        datasets.world.len()
    );
    Ok(())
}

pub async fn clear(ctx: &CliContext) -> Result<(), String> {
    let handle = active_session(ctx).await?;
    let mut session = handle.write().await;
    session.apply(InputSignal::SelectionCleared);
    println!("selection cleared");
    Ok(())
}

pub async fn show_series(ctx: &CliContext) -> Result<(), String> {
    let handle = active_session(ctx).await?;
    let session = handle.read().await;
    let datasets = session.datasets();

    println!(
        "{:<7} {:>10} {:<28} {:<12} Grading Date",
        "Place",
        session.metric().label(),
        "Country",
        "Year"
    );
    println!("{}", "-".repeat(75));
    for point in &datasets.main_series {
        println!(
            "{:<7} {:>10} {:<28} {:<12} {}",
            point.place,
            format_value(point.value),
            point.hover.country_of_origin,
            point.hover.harvest_year,
            point.hover.grading_date
        );
    }
    println!("\nTotal: {} samples", datasets.main_series.len());
    Ok(())
}

pub async fn show_pie(ctx: &CliContext) -> Result<(), String> {
    let handle = active_session(ctx).await?;
    let session = handle.read().await;
    let datasets = session.datasets();

    if datasets.pie.is_empty() {
        println!("pie is empty for the current selection");
        return Ok(());
    }

    let total: u64 = datasets.pie.iter().map(|s| s.count).sum();
    println!("{:<28} {:>7} Share", session.dimension().label(), "Count");
    println!("{}", "-".repeat(45));
    for slice in &datasets.pie {
        let share = slice.count as f64 / total as f64 * 100.0;
        println!("{:<28} {:>7} {:>5.1}%", slice.category, slice.count, share);
    }
    println!("\nTotal: {total} samples");
    Ok(())
}

pub async fn show_world(ctx: &CliContext) -> Result<(), String> {
    let handle = active_session(ctx).await?;
    let session = handle.read().await;
    let datasets = session.datasets();

    if datasets.world.is_empty() {
        println!("world map is empty for the current selection");
        return Ok(());
    }

    println!("{:<30} {:<6} Score", "Country", "Code");
    println!("{}", "-".repeat(45));
    for entry in &datasets.world {
        println!(
            "{:<30} {:<6} {:.2}",
            entry.country,
            entry.code.as_deref().unwrap_or("-"),
            entry.score
        );
    }
    println!("\nTotal: {} countries", datasets.world.len());
    Ok(())
}

pub async fn show_config(ctx: &CliContext) -> Result<(), String> {
    let config = ctx.config.read().await;
    let dataset = if config.dataset_path.is_empty() {
        "(none)"
    } else {
        config.dataset_path.as_str()
    };
    println!("dataset:           {dataset}");
    println!("default metric:    {}", config.default_metric.label());
    println!("default dimension: {}", config.default_dimension.label());
    drop(config);

    if let Some(handle) = ctx.session().await {
        let session = handle.read().await;
        println!("active metric:     {}", session.metric().label());
        println!("active dimension:  {}", session.dimension().label());
        match session.selection() {
            Selection::None => println!("selection:         none"),
            Selection::Point(place) => println!("selection:         point {place}"),
            Selection::Multi(places) => {
                println!("selection:         {} places", places.len())
            }
        }
    } else {
        println!("no dataset loaded");
    }
    Ok(())
}

pub fn exit() {
    write!(std::io::stdout(), "quitting...").expect("error exiting");
    std::io::stdout().flush().expect("error flushing stdout");
}

async fn active_session(ctx: &CliContext) -> Result<SessionHandle, String> {
    ctx.session()
        .await
        .ok_or_else(|| "no dataset loaded; use `load <path>` first".to_string())
}

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "-".to_string(),
    }
}
