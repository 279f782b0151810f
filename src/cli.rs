//! Command line interface for the pendulum simulator

use clap::Parser;
use std::fmt;
use std::io::{self, Write};
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::error::PendulumError;
use crate::physics::integrators::registry::IntegratorRegistry;
use crate::trajectory::{CSV_HEADER, Trajectory};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be serialized
    ConfigDump(String),
    /// Invalid integrator name provided
    InvalidIntegrator(String),
    /// The simulation could not be set up or failed while running
    Simulation(PendulumError),
    /// Trajectory output could not be written
    Output(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigDump(msg) => write!(f, "Failed to serialize configuration: {msg}"),
            CliError::InvalidIntegrator(msg) => write!(f, "Invalid integrator: {msg}"),
            CliError::Simulation(err) => write!(f, "Simulation failed: {err}"),
            CliError::Output(err) => write!(f, "Failed to write output: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Simulation(err) => Some(err),
            CliError::Output(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PendulumError> for CliError {
    fn from(err: PendulumError) -> Self {
        CliError::Simulation(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Output(err)
    }
}

/// Pendulum - mathematical pendulum simulator
///
/// Advances a single pendulum frame by frame and writes its trajectory as CSV
/// (time, angle, angular velocity, bob position, energy) to stdout.
#[derive(Parser, Debug, Default)]
#[command(version, long_version = LONG_VERSION, about)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Initial angle in radians, 0 is hanging straight down (overrides config file)
    #[arg(short = 'a', long, value_name = "RADIANS", allow_hyphen_values = true)]
    pub angle: Option<f64>,

    /// Initial angular velocity in rad/s (overrides config file)
    #[arg(short = 'w', long, value_name = "RAD_PER_S", allow_hyphen_values = true)]
    pub angular_velocity: Option<f64>,

    /// Rod length in m (overrides config file)
    #[arg(short = 'l', long, value_name = "METERS")]
    pub length: Option<f64>,

    /// Bob mass in kg (overrides config file)
    #[arg(short = 'm', long, value_name = "KG")]
    pub mass: Option<f64>,

    /// Gravitational acceleration in m/s² (overrides config file)
    #[arg(short = 'g', long, value_name = "VALUE")]
    pub gravity: Option<f64>,

    /// Integrator type (e.g., rk4, velocity_verlet, heun)
    #[arg(short = 'i', long, value_name = "TYPE")]
    pub integrator: Option<String>,

    /// Simulated seconds between output frames
    #[arg(long, value_name = "SECONDS")]
    pub frame_dt: Option<f64>,

    /// Total simulated seconds
    #[arg(short = 'd', long, value_name = "SECONDS")]
    pub duration: Option<f64>,

    /// Digits after the decimal point in the output
    #[arg(long, value_name = "DIGITS")]
    pub precision: Option<usize>,

    /// Omit the CSV header line
    #[arg(long)]
    pub no_header: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// List available integrators and exit
    #[arg(long)]
    pub list_integrators: bool,
}

/// Handles the --list-integrators flag by printing available integrators
pub fn handle_list_integrators() {
    let registry = IntegratorRegistry::default();
    println!("Available integrators:");
    for name in registry.list_available() {
        println!("  - {name}");
    }

    let aliases = registry.list_aliases();
    if !aliases.is_empty() {
        println!("\nAliases:");
        for (alias, target) in aliases {
            println!("  - {alias} -> {target}");
        }
    }
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        SimulationConfig::load_or_default(config_path)
    } else {
        SimulationConfig::load_from_user_config()
    };

    if let Some(angle) = args.angle {
        info!("Overriding initial angle to: {angle}");
        config.pendulum.angle = angle;
    }

    if let Some(angular_velocity) = args.angular_velocity {
        info!("Overriding initial angular velocity to: {angular_velocity}");
        config.pendulum.angular_velocity = angular_velocity;
    }

    if let Some(length) = args.length {
        info!("Overriding length to: {length}");
        config.pendulum.length = length;
    }

    if let Some(mass) = args.mass {
        info!("Overriding mass to: {mass}");
        config.pendulum.mass = mass;
    }

    if let Some(gravity) = args.gravity {
        info!("Overriding gravity to: {gravity}");
        config.pendulum.gravity = gravity;
    }

    if let Some(integrator_type) = &args.integrator {
        // Validate integrator name against registry
        IntegratorRegistry::default()
            .create(integrator_type)
            .map_err(|err| CliError::InvalidIntegrator(err.to_string()))?;

        info!("Using integrator: {integrator_type}");
        config.integration.integrator = integrator_type.clone();
    }

    if let Some(frame_dt) = args.frame_dt {
        config.integration.frame_dt = frame_dt;
    }

    if let Some(duration) = args.duration {
        config.integration.duration = duration;
    }

    if let Some(precision) = args.precision {
        config.output.precision = precision;
    }

    if args.no_header {
        config.output.header = false;
    }

    Ok(config)
}

/// Runs the configured simulation, writing one CSV row per frame to `out`
///
/// Returns the number of frames written.
pub fn run_simulation<W: Write>(
    config: &SimulationConfig,
    out: &mut W,
) -> Result<usize, CliError> {
    let pendulum = config.build_pendulum()?;
    let trajectory = Trajectory::new(
        pendulum,
        config.integration.frame_dt,
        config.integration.duration,
    )?;
    debug!(
        frames = trajectory.frame_count(),
        integrator = trajectory.pendulum().integrator().name(),
        "starting simulation"
    );

    if config.output.header {
        writeln!(out, "{CSV_HEADER}")?;
    }

    let mut written = 0;
    for frame in trajectory {
        let frame = frame?;
        writeln!(out, "{}", frame.to_csv_row(config.output.precision))?;
        written += 1;
    }
    out.flush()?;

    info!("Wrote {written} frames");
    Ok(written)
}

/// Entry point shared by the binary: everything after argument parsing and logging setup
pub fn run(args: &Args) -> Result<(), CliError> {
    if args.list_integrators {
        handle_list_integrators();
        return Ok(());
    }

    let config = load_and_apply_config(args)?;

    if args.print_config {
        let toml_string =
            toml::to_string_pretty(&config).map_err(|e| CliError::ConfigDump(e.to_string()))?;
        print!("{toml_string}");
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    run_simulation(&config, &mut out)?;
    Ok(())
}
