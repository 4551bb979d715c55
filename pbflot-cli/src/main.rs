mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{debug, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use pbflot::{
    AirRateUnits, CurveSet, IronModel, Lever, ModelConfig, OperatingPoint, PerformanceModel,
};

/// Pb cleaner flotation simulator.
#[derive(Debug, Parser)]
#[command(name = "pbflot", version, about)]
struct Cli {
    /// JSON model configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Compressed curve pack replacing the built-in curves.
    #[arg(long, global = true)]
    curve_pack: Option<PathBuf>,

    /// depression_only | depression_plus_activation
    #[arg(long, global = true)]
    iron_model: Option<IronModel>,

    /// l/min | m3/h
    #[arg(long, global = true)]
    air_units: Option<AirRateUnits>,

    /// More log output (repeat for debug/trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Predict concentrate quality at one operating point.
    Eval {
        #[command(flatten)]
        point: PointArgs,
        #[arg(long)]
        json: bool,
    },
    /// Step one lever across a range and report every prediction.
    Sweep {
        #[arg(long)]
        lever: Lever,
        /// Defaults to the lower edge of the lever's curve.
        #[arg(long)]
        from: Option<f64>,
        /// Defaults to the upper edge of the lever's curve.
        #[arg(long)]
        to: Option<f64>,
        #[arg(long, default_value_t = 20)]
        steps: usize,
        #[command(flatten)]
        point: PointArgs,
        #[arg(long)]
        json: bool,
    },
    /// Show a response curve, or its interpolated response at one value.
    Curve {
        lever: Lever,
        #[arg(long)]
        at: Option<f64>,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, Args)]
struct PointArgs {
    /// Collector dosage (g/t).
    #[arg(long, default_value_t = 0.0)]
    collector: f64,
    /// Air rate, in the configured units.
    #[arg(long, default_value_t = 0.0)]
    air_rate: f64,
    /// SMBS dosage (g/t).
    #[arg(long, default_value_t = 0.0)]
    smbs: f64,
    #[arg(long, default_value_t = 7.5)]
    ph: f64,
    /// Luproset dosage (g/t).
    #[arg(long, default_value_t = 0.0)]
    luproset: f64,
    /// Feed iron grade (%).
    #[arg(long = "fe", default_value_t = 11.0)]
    fe_feed_grade: f64,
    /// Feed carbon grade (%).
    #[arg(long = "carbon", default_value_t = 4.5)]
    carbon_feed_grade: f64,
    /// Feed zinc grade (%).
    #[arg(long = "zn", default_value_t = 10.5)]
    zn_feed_grade: f64,
}

impl From<PointArgs> for OperatingPoint {
    fn from(a: PointArgs) -> Self {
        OperatingPoint::new(
            a.collector,
            a.air_rate,
            a.smbs,
            a.ph,
            a.luproset,
            a.fe_feed_grade,
            a.carbon_feed_grade,
            a.zn_feed_grade,
        )
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}

fn load_config(path: &Path) -> Result<ModelConfig> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Opening {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Parsing {}", path.display()))
}

fn build_model(cli: &Cli) -> Result<PerformanceModel> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ModelConfig::default(),
    };
    if let Some(iron_model) = cli.iron_model {
        config.iron_model = iron_model;
    }
    if let Some(units) = cli.air_units {
        config.air_rate_units = units;
    }
    debug!("model config: {config:?}");

    match &cli.curve_pack {
        Some(path) => {
            if cli.air_units.is_some() {
                info!("--air-units ignored: the curve pack defines its own air rate keys");
            }
            let bytes =
                std::fs::read(path).with_context(|| format!("Reading {}", path.display()))?;
            let curves = CurveSet::from_pack(&bytes)
                .with_context(|| format!("Loading curve pack {}", path.display()))?;
            info!("loaded curve pack {}", path.display());
            Ok(PerformanceModel::new(curves, config.iron_model)?)
        }
        None => Ok(PerformanceModel::from_config(&config)?),
    }
}

fn run(cli: Cli) -> Result<String> {
    let model = build_model(&cli)?;

    match cli.command {
        Command::Eval { point, json } => {
            let point = OperatingPoint::from(point);
            let result = model.evaluate(&point);
            if json {
                report::evaluation_json(&point, &result)
            } else {
                Ok(report::evaluation_text(&model, &point, &result))
            }
        }
        Command::Sweep {
            lever,
            from,
            to,
            steps,
            point,
            json,
        } => {
            let (lo, hi) = model.curves().table(lever).domain();
            let (start, end) = (from.unwrap_or(lo), to.unwrap_or(hi));
            if steps == 0 {
                bail!("--steps must be at least 1");
            }
            debug!("sweeping {lever} from {start} to {end} in {steps} steps");
            let points = model.sweep(&OperatingPoint::from(point), lever, start, end, steps);
            if json {
                Ok(serde_json::to_string_pretty(&points)?)
            } else {
                Ok(report::sweep_text(lever, &points))
            }
        }
        Command::Curve { lever, at, json } => {
            let table = model.curves().table(lever);
            match (at, json) {
                (Some(x), true) => Ok(serde_json::to_string_pretty(&table.interpolate(x).to_map())?),
                (Some(x), false) => Ok(report::response_text(table, x)),
                (None, true) => Ok(serde_json::to_string_pretty(&table.to_record())?),
                (None, false) => Ok(report::table_text(table)),
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(out) => println!("{out}"),
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_point_defaults_are_baseline() {
        let cli = Cli::try_parse_from(["pbflot", "eval"]).unwrap();
        let Command::Eval { point, .. } = cli.command else {
            panic!("expected eval");
        };
        assert_eq!(OperatingPoint::from(point), OperatingPoint::default());
    }

    #[test]
    fn test_variant_flags_parse() {
        let cli = Cli::try_parse_from([
            "pbflot",
            "--iron-model",
            "depression_plus_activation",
            "--air-units",
            "m3/h",
            "curve",
            "air_rate",
        ])
        .unwrap();
        assert_eq!(cli.iron_model, Some(IronModel::DepressionPlusActivation));
        assert_eq!(cli.air_units, Some(AirRateUnits::CubicMetresPerHour));
        let model = build_model(&cli).unwrap();
        assert_eq!(model.curves().air_rate.domain(), (0.0, 600.0));
    }

    #[test]
    fn test_unknown_lever_rejected() {
        assert!(Cli::try_parse_from(["pbflot", "curve", "frother"]).is_err());
    }
}
