use crate::error::PendulumError;
use crate::physics::integrators::{DEFAULT_INTEGRATOR, IntegratorRegistry};
use crate::physics::math::{PI, Point, Scalar};
use crate::physics::pendulum::{DEFAULT_MAX_STEP, Pendulum, PendulumParameters, STANDARD_GRAVITY};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Prefix of environment variables that override configuration values,
/// e.g. `PENDULUM_INTEGRATION__INTEGRATOR=heun`
pub const ENV_PREFIX: &str = "PENDULUM";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub pendulum: PendulumConfig,
    pub integration: IntegrationConfig,
    pub output: OutputConfig,
}

/// Initial state and physical constants
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PendulumConfig {
    pub angle: Scalar,
    pub angular_velocity: Scalar,
    pub length: Scalar,
    pub mass: Scalar,
    pub gravity: Scalar,
    pub origin: [Scalar; 2],
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            angle: PI,
            angular_velocity: 0.0,
            length: 1.0,
            mass: 1.0,
            gravity: STANDARD_GRAVITY,
            origin: [0.0, 0.0],
        }
    }
}

impl PendulumConfig {
    pub fn parameters(&self) -> PendulumParameters {
        PendulumParameters {
            length: self.length,
            mass: self.mass,
            gravity: self.gravity,
            origin: Point::from_array(self.origin),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct IntegrationConfig {
    /// Integrator name or alias, see `--list-integrators`
    pub integrator: String,
    /// Largest internal step in seconds
    pub max_step: Scalar,
    /// Simulated time between two output frames in seconds
    pub frame_dt: Scalar,
    /// Total simulated time in seconds
    pub duration: Scalar,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            integrator: DEFAULT_INTEGRATOR.to_string(),
            max_step: DEFAULT_MAX_STEP,
            frame_dt: 0.04,
            duration: 10.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Digits after the decimal point in trajectory output
    pub precision: usize,
    /// Write a column header line first
    pub header: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: 6,
            header: true,
        }
    }
}

impl SimulationConfig {
    /// Build the configured pendulum with its integrator and step size
    pub fn build_pendulum(&self) -> Result<Pendulum, PendulumError> {
        let integrator = IntegratorRegistry::default().create(&self.integration.integrator)?;

        Pendulum::new(
            self.pendulum.angle,
            self.pendulum.angular_velocity,
            self.pendulum.parameters(),
        )?
        .with_integrator(integrator)
        .with_max_step(self.integration.max_step)
    }

    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        "Failed to parse config file {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {} not found. Using defaults.", path.display());
                Self::default()
            }
        }
    }

    /// Location of the per-user configuration file, if the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "pendulum").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the per-user configuration file layered with `PENDULUM_*` environment overrides
    pub fn load_from_user_config() -> Self {
        let mut builder = ::config::Config::builder();
        if let Some(path) = Self::user_config_path() {
            info!("Looking for user configuration at {}", path.display());
            builder = builder.add_source(::config::File::from(path).required(false));
        }
        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        match builder
            .build()
            .and_then(|settings| settings.try_deserialize::<Self>())
        {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load user configuration: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
