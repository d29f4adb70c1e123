//! CLI tool for tubedash

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use tubedash::gauge::{validate_dimensions, RingGauge};
use tubedash::layout::{self, GAUGE_SLOTS, MENU, STAT_TILES};
use tubedash::{Config, Dashboard, DashboardSnapshot, Rgb};

#[derive(Parser)]
#[command(name = "tubedash")]
#[command(about = "Private YouTube Scheduler dashboard: clock, simulated metrics and ring gauges", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to ~/.config/tubedash/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format for non-interactive commands
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Seed for the metrics simulator (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch Terminal User Interface (TUI) - interactive dashboard (default)
    Tui,
    /// Launch Graphical User Interface (GUI) - desktop window
    #[cfg(feature = "gui")]
    Gui,
    /// Print the dashboard once
    Snapshot {
        /// Metric ticks to simulate before printing
        #[arg(short, long, default_value_t = 0)]
        ticks: u64,
    },
    /// Print a single ring gauge as SVG
    Gauge {
        /// Percentage to display
        value: f64,
        /// Outer diameter
        #[arg(long)]
        size: Option<f64>,
        /// Stroke width
        #[arg(long)]
        stroke: Option<f64>,
        /// Accent color as #rrggbb
        #[arg(long, default_value = "#22d3ee")]
        accent: String,
        /// Caption under the value
        #[arg(long)]
        label: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    env_logger::init();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            log::warn!("ignoring unreadable config: {}", e);
            Config::default()
        }),
    };
    if cli.seed.is_some() {
        config.simulation.seed = cli.seed;
    }

    match cli.command {
        None | Some(Commands::Tui) => {
            tubedash::tui::run(config)?;
        }

        #[cfg(feature = "gui")]
        Some(Commands::Gui) => {
            tubedash::gui::run(config)?;
        }

        Some(Commands::Snapshot { ticks }) => {
            let mut dash = Dashboard::from_config(&config);
            dash.run_metric_ticks(ticks);
            let snapshot = dash.snapshot();
            dash.teardown();
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
                Format::Text => print_snapshot(&snapshot),
            }
        }

        Some(Commands::Gauge {
            value,
            size,
            stroke,
            accent,
            label,
        }) => {
            let accent = Rgb::parse(&accent)
                .ok_or_else(|| format!("invalid accent color: {}", accent))?;
            let diameter = size.unwrap_or(config.gauge.diameter);
            let stroke_width = stroke.unwrap_or(config.gauge.stroke_width);
            validate_dimensions(diameter, stroke_width)?;
            let mut gauge = RingGauge::with_size(value, diameter, stroke_width).accent(accent);
            if let Some(label) = label {
                gauge = gauge.label(label);
            }
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&gauge)?),
                Format::Text => print!("{}", gauge.to_svg()),
            }
        }
    }

    Ok(())
}

fn print_snapshot(snapshot: &DashboardSnapshot) {
    println!("▶ {}", snapshot.title);
    println!("{}  {}", snapshot.time, snapshot.date);
    println!();

    let menu: Vec<String> = MENU
        .iter()
        .map(|entry| format!("[{} {}]", entry.icon, entry.label))
        .collect();
    println!("{}", menu.join(" "));
    println!();

    for tile in STAT_TILES.iter() {
        println!("{} {:<16} {}", tile.icon, tile.label, tile.value);
    }
    println!();

    for (slot, gauge) in GAUGE_SLOTS.iter().zip(snapshot.gauges.iter()) {
        println!(
            "{:<13} {:>6}  {}",
            slot.label,
            gauge.value_text(),
            bar(gauge.geometry.value, 30)
        );
    }
    println!();

    println!("{}", layout::NETWORK_TITLE);
    for (figure, caption) in layout::network_rows(&snapshot.metrics) {
        println!("  {:<9} {}", caption, figure);
    }
}

/// Text progress bar for the snapshot printout
fn bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
