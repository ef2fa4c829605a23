//! Sigmoid Explorer CLI - headless client for the sigmoid backend
//!
//! Prints the same tables and summaries the desktop app shows.
//!
//! # Usage
//! ```sh
//! cargo run --bin sigmoid-cli -- curve --x-shift 0 --steepness 1 --start -5 --end 5
//! cargo run --bin sigmoid-cli -- --mode mock demo
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sigmoid_explorer::application::collector::SliderId;
use sigmoid_explorer::application::explorer::{Applied, Explorer, ExplorerView};
use sigmoid_explorer::application::render::ScatterChart;
use sigmoid_explorer::config::{Config, Mode, parse_base_url};
use sigmoid_explorer::domain::demo::ClassLabel;
use sigmoid_explorer::infrastructure::{ServiceFactory, TracingLoadingIndicator};
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "sigmoid-cli", version, about = "Query the sigmoid teaching backend")]
struct Cli {
    /// Service implementation: http or mock (overrides MODE)
    #[arg(long)]
    mode: Option<String>,

    /// Backend base URL (overrides SIGMOID_API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Log at info level instead of warn
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate a sigmoid curve and print the sampled table
    Curve {
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        x_shift: String,
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        steepness: String,
        #[arg(long, default_value = "-10", allow_hyphen_values = true)]
        start: String,
        #[arg(long, default_value = "10", allow_hyphen_values = true)]
        end: String,
    },
    /// Run the non-linear separability demonstration
    Demo,
    /// List saved parameter sets, newest first
    History,
    /// Replay a saved parameter set
    Saved { id: u64 },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let level = if cli.verbose { Level::INFO } else { Level::WARN };
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with(stderr_layer)
        .init();

    let mut config = Config::from_env()?;
    if let Some(mode) = &cli.mode {
        config.mode = Mode::from_str(mode)?;
    }
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = parse_base_url(base_url)?;
    }

    let explorer = Explorer::new(
        ServiceFactory::create_service(&config),
        Arc::new(TracingLoadingIndicator),
    );
    let mut view = ExplorerView::new(explorer.sequencers());

    let applied = match cli.command {
        Command::Curve {
            x_shift,
            steepness,
            start,
            end,
        } => {
            for (id, raw) in [
                (SliderId::XShift, &x_shift),
                (SliderId::Steepness, &steepness),
                (SliderId::XRangeStart, &start),
                (SliderId::XRangeEnd, &end),
            ] {
                view.sliders
                    .set_from_str(id, raw)
                    .context("Invalid curve parameter")?;
            }
            let outcome = explorer.calculate_sigmoid(view.sliders.collect()).await;
            let applied = view.apply_curve(outcome);
            if applied == Applied::Rendered {
                print_curve(&view);
            }
            applied
        }
        Command::Saved { id } => {
            let applied = view.apply_curve(explorer.load_saved_curve(id).await);
            if applied == Applied::Rendered {
                print_curve(&view);
            }
            applied
        }
        Command::Demo => {
            let applied = view.apply_demo(explorer.load_demo().await);
            if applied == Applied::Rendered {
                print_demo(&view);
            }
            applied
        }
        Command::History => {
            view.apply_history(explorer.saved_parameters().await);
            if view.alert.is_none() {
                print_history(&view);
            }
            Applied::Rendered
        }
    };

    match view.alert {
        Some(alert) => {
            eprintln!("{}", alert);
            Ok(ExitCode::FAILURE)
        }
        None if applied == Applied::Rendered => Ok(ExitCode::SUCCESS),
        None => Ok(ExitCode::FAILURE),
    }
}

fn print_curve(view: &ExplorerView) {
    if let Some(info) = &view.results_info {
        println!("{}", info);
    }
    println!();
    println!("{:>12}  {:>10}", "x", "f(x)");
    for row in &view.table.rows {
        println!("{:>12}  {:>10}", row.x, row.y);
    }
}

fn print_scatter(chart: &ScatterChart) {
    let count = |class: ClassLabel| chart.series_for(class).map_or(0, |s| s.points.len());
    println!(
        "{}: {} = {} points, {} = {} points",
        chart.title,
        ClassLabel::Inner,
        count(ClassLabel::Inner),
        ClassLabel::Outer,
        count(ClassLabel::Outer)
    );
}

fn print_demo(view: &ExplorerView) {
    for chart in [&view.original_chart, &view.transformation_chart]
        .into_iter()
        .flatten()
    {
        print_scatter(chart);
    }
    if let Some(summary) = &view.demo_summary {
        println!();
        for line in summary.lines() {
            println!("{}", line);
        }
    }
}

fn print_history(view: &ExplorerView) {
    if view.history.is_empty() {
        println!("No saved parameter sets.");
        return;
    }
    println!("{:>5}  {:>10}  {:>10}  created", "id", "x_shift", "steepness");
    for saved in &view.history {
        println!(
            "{:>5}  {:>10}  {:>10}  {}",
            saved.id,
            saved.x_shift,
            saved.steepness,
            saved.created_at.format("%Y-%m-%d %H:%M:%S")
        );
    }
}
