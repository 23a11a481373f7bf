use std::{fs::OpenOptions, path::{Path, PathBuf}, sync::Mutex};
use serde::{Deserialize, Serialize};
use tracing::{info, level_filters::LevelFilter, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};
use clap::Parser;
use nodescale::{
    convert::{Conversion, Converter},
    metric::Metric,
    node::Node,
    ErrorContext, NodeScaleResult,
};

const DEFAULT_LOG_FILE: &str = "nodeScale.log";

fn main_result() -> NodeScaleResult<()> {
    let args = Args::parse();

    // load config
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    init_logging(&args, &config)?;
    log_diagnostics();

    let conversion = Conversion::builder()
        .metric(args.metric)
        .value(args.value)
        .src(args.source)
        .dst(args.dest)
        .src_vdd(args.svolt)
        .dst_vdd(args.dvolt)
        .build()?;

    let scaled = conversion.run(&Converter::new()).context("convert")?;
    println!("{}", scaled);

    Ok(())
}

fn main() {
    if let Err(e) = main_result() {
        eprintln!("Err: {}", e);
        std::process::exit(1);
    }
}

/// Convert area/delay/power/energy between VLSI nodes
#[derive(Parser, Debug)]
#[command(name = "nodescale")]
#[command(about = "Convert area/delay/power/energy between VLSI nodes", long_about = None)]
struct Args {
    /// Metric to convert: "a" - area, "d" - delay, "p" - power, "e" - energy
    #[arg(short = 'c', value_parser = parse_metric)]
    metric: Metric,

    /// Source node: 180, 130, 90, 65, [HP/LP]45/32/20/16/14/10/7
    #[arg(short = 's')]
    source: Node,

    /// Destination node: 180, 130, 90, 65, [HP/LP]45/32/20/16/14/10/7
    #[arg(short = 'd')]
    dest: Node,

    /// Value to convert
    #[arg(short = 'v', allow_negative_numbers = true)]
    value: f64,

    /// Source voltage
    #[arg(short = 't', default_value_t = 1.0)]
    svolt: f64,

    /// Destination voltage
    #[arg(short = 'u', default_value_t = 1.0)]
    dvolt: f64,

    /// Path to a JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file, overrides the configuration
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Only log to the console
    #[arg(long)]
    no_log_file: bool,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

fn parse_metric(token: &str) -> Result<Metric, String> {
    Metric::from_flag(token)
        .or_else(|_| token.parse())
        .map_err(|e| e.to_string())
}

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub log_file: Option<PathBuf>,
    pub verbose: bool,
}

impl Config {
    pub fn load(path: &Path) -> NodeScaleResult<Self> {
        let context = std::fs::read_to_string(path).context("read config file")?;
        let config = serde_json::from_str(&context).context("parse config file")?;
        Ok(config)
    }
}

fn init_logging(args: &Args, config: &Config) -> NodeScaleResult<()> {
    let level = if args.verbose || config.verbose { Level::DEBUG } else { Level::INFO };

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    let log_file = if args.no_log_file {
        None
    } else {
        args.log_file.clone()
            .or_else(|| config.log_file.clone())
            .or_else(|| Some(PathBuf::from(DEFAULT_LOG_FILE)))
    };

    let file = match &log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {:?}", path))?;
            Some(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false).with_target(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(console)
        .with(file)
        .init();

    if let Some(path) = log_file {
        info!("logging to {:?}", path);
    }

    Ok(())
}

fn log_diagnostics() {
    info!("Hostname: {}", hostname());
    info!("PID: {}", std::process::id());
}

// HOSTNAME is usually an unexported shell variable and /etc/hostname only
// exists on Linux, so other hosts commonly log "unknown".
fn hostname() -> String {
    std::env::var("HOSTNAME")
        .ok()
        .or_else(|| std::fs::read_to_string("/etc/hostname").ok())
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "unknown".into())
}
