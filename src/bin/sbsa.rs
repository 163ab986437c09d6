//! SBSA command-line demo
//!
//! Drives the slot-assignment engine and its benchmark harness:
//! - Benchmark runs and size sweeps (SBSA vs sort-on-insert)
//! - Single-item classification
//! - The task manager scheduling table
//! - Growth-curve data for external plotting
//!
//! # Examples
//!
//! ```bash
//! # Compare 100k insertions across the file size classes
//! sbsa bench --items 100000 --preset size
//!
//! # Reproducible sweep, JSON output
//! sbsa --config sbsa.toml sweep --sizes 1000 10000 --json
//!
//! # Classify a task
//! sbsa map Critical 0 4.5
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use sbsa::slots::growth_curve;
use sbsa::{BenchmarkHarness, CategorySet, SbsaConfig, SlotRegistry};
use std::path::PathBuf;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// The five sample tasks of the task manager simulation: (priority, layer, duration)
const SAMPLE_TASKS: [(&str, u32, f64); 5] = [
    ("Low", 0, 0.5),
    ("Medium", 1, 1.0),
    ("High", 0, 2.0),
    ("Critical", 0, 4.5),
    ("Critical", 1, 1.5),
];

/// SBSA - Slot-Based Size/Attribute assignment
#[derive(Parser, Debug)]
#[command(name = "sbsa")]
#[command(version = sbsa::VERSION)]
#[command(about = "SBSA - constant-time slot assignment and benchmark", long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file
    #[arg(long, global = true, env = "SBSA_CONFIG")]
    config: Option<PathBuf>,

    /// Log directory path (console only when absent)
    #[arg(long, global = true, env = "SBSA_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Time SBSA against the sort-on-insert baseline
    Bench(BenchArgs),

    /// Run the benchmark for several workload sizes
    Sweep(SweepArgs),

    /// Classify one item into its slot
    Map {
        /// Category label
        label: String,
        /// First attribute (thickness / layer)
        attr1: f64,
        /// Second attribute (width / duration)
        attr2: f64,
        /// Built-in category set (defaults to the configured categories)
        #[arg(short, long)]
        preset: Option<Preset>,
    },

    /// Print the task manager scheduling map
    Tasks,

    /// Print theoretical growth curves as CSV
    Growth {
        #[arg(long, default_value = "1")]
        min_exp: f64,
        #[arg(long, default_value = "7")]
        max_exp: f64,
        #[arg(long, default_value = "100")]
        points: usize,
    },

    /// Print the default configuration as TOML
    InitConfig,

    /// Show version
    Version,
}

/// Benchmark arguments
#[derive(Args, Debug)]
struct BenchArgs {
    /// Number of items (overrides config)
    #[arg(short = 'n', long)]
    items: Option<usize>,

    /// Workload RNG seed (overrides config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Built-in category set (defaults to the configured categories)
    #[arg(short, long)]
    preset: Option<Preset>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Sweep arguments
#[derive(Args, Debug)]
struct SweepArgs {
    /// Workload sizes (overrides config)
    #[arg(long, num_args = 1..)]
    sizes: Vec<usize>,

    /// Workload RNG seed (overrides config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Built-in category set (defaults to the configured categories)
    #[arg(short, long)]
    preset: Option<Preset>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Preset {
    /// 1K .. 32K
    Size,
    /// Low, Medium, High, Critical
    Priority,
    /// Size classes (KB) then priority classes
    Combined,
}

impl Preset {
    fn categories(self) -> CategorySet {
        match self {
            Preset::Size => CategorySet::size_classes(),
            Preset::Priority => CategorySet::priority_classes(),
            Preset::Combined => CategorySet::combined(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli)?;

    let config = SbsaConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Bench(args) => bench_command(&config, args),
        Commands::Sweep(args) => sweep_command(&config, args),
        Commands::Map {
            label,
            attr1,
            attr2,
            preset,
        } => {
            let categories = resolve_categories(&config, preset)?;
            let record = SlotRegistry::new(&categories).map_item(&label, attr1, attr2)?;
            println!("{} → {}", label, record);
            Ok(())
        }
        Commands::Tasks => tasks_command(),
        Commands::Growth {
            min_exp,
            max_exp,
            points,
        } => {
            println!("n,sbsa_steps,logn_steps");
            for point in growth_curve(min_exp, max_exp, points)? {
                println!("{},{},{}", point.n, point.sbsa_steps, point.logn_steps);
            }
            Ok(())
        }
        Commands::InitConfig => {
            print!("{}", SbsaConfig::default().to_toml_string()?);
            Ok(())
        }
        Commands::Version => {
            println!("SBSA {}", sbsa::VERSION);
            Ok(())
        }
    }
}

fn resolve_categories(config: &SbsaConfig, preset: Option<Preset>) -> anyhow::Result<CategorySet> {
    match preset {
        Some(preset) => Ok(preset.categories()),
        None => Ok(config.category_set()?),
    }
}

fn harness(
    config: &SbsaConfig,
    preset: Option<Preset>,
    seed: Option<u64>,
) -> anyhow::Result<BenchmarkHarness> {
    let harness = BenchmarkHarness::new(resolve_categories(config, preset)?);
    Ok(match seed.or(config.seed) {
        Some(seed) => harness.with_seed(seed),
        None => harness,
    })
}

fn bench_command(config: &SbsaConfig, args: BenchArgs) -> anyhow::Result<()> {
    let harness = harness(config, args.preset, args.seed)?;
    let num_items = args.items.unwrap_or(config.num_items);

    info!(num_items, categories = %harness.categories(), "Running benchmark");
    let report = harness.run(num_items)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn sweep_command(config: &SbsaConfig, args: SweepArgs) -> anyhow::Result<()> {
    let harness = harness(config, args.preset, args.seed)?;
    let sizes = if args.sizes.is_empty() {
        config.sweep_sizes.clone()
    } else {
        args.sizes
    };

    let reports = harness.sweep(&sizes)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("{:>10} {:>12} {:>12} {:>10}", "items", "sbsa_s", "resort_s", "speedup");
        for report in &reports {
            println!(
                "{:>10} {:>12.6} {:>12.6} {:>9.1}x",
                report.num_items,
                report.bucketed.as_secs_f64(),
                report.resorting.as_secs_f64(),
                report.speedup
            );
        }
    }
    Ok(())
}

fn tasks_command() -> anyhow::Result<()> {
    let registry = SlotRegistry::new(&CategorySet::priority_classes());

    println!("Task Scheduling Map:");
    for (priority, layer, duration) in SAMPLE_TASKS {
        let record = registry.map_task(priority, layer, duration)?;
        println!("Task ({}, {}, {}) → {}", priority, layer, duration, record);
    }
    Ok(())
}

/// Setup console logging, plus a daily rolling file when a log directory is given
fn setup_logging(cli: &Cli) -> anyhow::Result<()> {
    let file_layer = match &cli.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = RollingFileAppender::new(Rotation::DAILY, dir, "sbsa.log");
            Some(fmt::layer().with_writer(appender).with_ansi(false))
        }
        None => None,
    };

    let log_level = cli
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::WARN);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!cli.no_color),
        )
        .with(file_layer)
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .init();

    Ok(())
}
