mod preview;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use memento_config::{ConfigSource, DEFAULT_CONFIG_PATH, PREVIEW_FILES, check_files};
use memento_core::{Config, Layout, RenderSnapshot, SimulationClock, SvgSurface, evaluate, render};

#[derive(Parser)]
#[command(name = "memento", about = "Life calendar: one dot per week of an expected lifespan")]
struct Cli {
    /// Config file path or http(s) URL [default: $MEMENTO_CONFIG or config.json]
    #[arg(long, global = true)]
    config: Option<String>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the calendar as SVG
    Render {
        /// Simulated date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Layout to draw, overrides the config
        #[arg(long)]
        layout: Option<Layout>,

        /// Output file; SVG goes to stdout when omitted
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Print weeks lived, age and any special day
    Info {
        /// Simulated date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List available layouts
    Layouts,

    /// Check that the preview files and config are in place
    Check {
        /// Directory to check
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Additional file names to check for
        files: Vec<String>,
    },

    /// Serve a local web preview with a date picker
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,

        #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
        bind: IpAddr,
    },
}

fn config_source(cli: &Cli) -> ConfigSource {
    let location = cli
        .config
        .clone()
        .or_else(|| std::env::var("MEMENTO_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    ConfigSource::parse(&location)
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn clock_for(date: Option<NaiveDate>) -> SimulationClock {
    date.map(SimulationClock::at_date)
        .unwrap_or_else(SimulationClock::now)
}

async fn load_config(cli: &Cli) -> Config {
    memento_config::load_or_default(&config_source(cli)).await
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Render { date, layout, out } => {
            cmd_render(&load_config(&cli).await, *date, *layout, out.as_deref())
        }
        Commands::Info { date } => cmd_info(&load_config(&cli).await, *date),
        Commands::Layouts => cmd_layouts(&load_config(&cli).await),
        Commands::Check { dir, files } => cmd_check(&cli, dir, files).await,
        Commands::Serve { port, bind } => {
            preview::serve(load_config(&cli).await, SocketAddr::new(*bind, *port)).await
        }
    }
}

fn cmd_render(
    config: &Config,
    date: Option<NaiveDate>,
    layout: Option<Layout>,
    out: Option<&Path>,
) -> Result<()> {
    let layout = layout.unwrap_or(config.layout);
    let snapshot = RenderSnapshot::new(config, clock_for(date)).with_layout(layout);

    let mut svg = SvgSurface::default();
    let outcome = render(&mut svg, &snapshot).context("failed to render calendar")?;
    tracing::debug!(
        "rendered {layout}: weeks_lived={}, total_weeks={}, special_day={:?}",
        outcome.grid.weeks_lived,
        outcome.grid.total_weeks,
        outcome.summary.special_day_title
    );

    match out {
        Some(path) => {
            std::fs::write(path, svg.finish())
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
            println!("rendered {layout} → {}", path.display());
            for line in outcome.summary.lines() {
                println!("{line}");
            }
        }
        None => print!("{}", svg.finish()),
    }
    Ok(())
}

fn cmd_info(config: &Config, date: Option<NaiveDate>) -> Result<()> {
    let snapshot = RenderSnapshot::new(config, clock_for(date));
    let outcome = evaluate(&snapshot).context("failed to compute calendar")?;

    println!("birthdate:  {}", config.person.birthdate);
    println!("lifespan:   {} years", config.person.expected_lifespan);
    for line in outcome.summary.lines() {
        println!("{line}");
    }
    if let Some(day) = outcome.special_day {
        println!("Quote: {}", day.quote);
    }
    Ok(())
}

fn cmd_layouts(config: &Config) -> Result<()> {
    for layout in Layout::ALL {
        let marker = if layout == config.layout { "*" } else { " " };
        println!("{marker} {:<11} {}", layout.name(), layout.description());
    }
    Ok(())
}

async fn cmd_check(cli: &Cli, dir: &Path, extra: &[String]) -> Result<()> {
    println!("Checking files...\n");
    let mut names: Vec<String> = PREVIEW_FILES.iter().map(|s| s.to_string()).collect();
    names.extend(extra.iter().cloned());
    for check in check_files(dir, &names) {
        println!("{check}");
    }

    println!("\nTesting config load...");
    let source = match &cli.config {
        Some(_) => config_source(cli),
        None => ConfigSource::File(dir.join(DEFAULT_CONFIG_PATH)),
    };
    let config = memento_config::load(&source)
        .await
        .with_context(|| format!("config {source} failed to load"))?;
    println!(
        "✓ Config loaded: {} special days",
        config.special_days.len()
    );
    println!("✓ Birthdate: {}", config.person.birthdate);
    println!("✓ Layout: {}", config.layout);
    Ok(())
}
