use std::env;
use std::fs;
use std::time::Duration;

use log::{info, warn};

use crate::error::ConfigError;
use crate::strategy::StrategyPair;

const CONFIG_FILE_PATH: &str = "config.json";
const FALLBACK_CONFIG_FILE_PATH: &str = "_config.json";

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct SimulationSection {
    pub duration_minutes: f64,
    pub time_scale: f64,
    pub people_per_minute: f64,
    #[serde(default)]
    pub drain_seconds: f64,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct BuildingSection {
    pub num_floors: u8,
    pub num_elevators: usize,
    pub capacity: usize,
    pub time_per_floor_ms: u64,
    pub door_time_ms: u64,
    pub idle_timeout_ms: u64,
    #[serde(default)]
    pub default_floors: Vec<u8>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct TrafficSection {
    pub start_probabilities: Vec<u32>,
    pub destination_probabilities: Vec<u32>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct ConfigFile {
    pub simulation: SimulationSection,
    pub building: BuildingSection,
    pub traffic: TrafficSection,
    #[serde(default)]
    pub runs: Vec<StrategyPair>,
}

/// Everything a single elevator needs to know about itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevatorSettings {
    pub num_floors: u8,
    pub capacity: usize,
    pub time_per_floor: Duration,
    pub door_time: Duration,
    pub idle_timeout: Duration,
    pub default_floor: u8,
}

impl ElevatorSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_floors < 2 {
            return Err(ConfigError::invalid("num_floors", "a building needs at least 2 floors"));
        }
        if self.capacity == 0 {
            return Err(ConfigError::invalid("capacity", "must be at least 1"));
        }
        if self.default_floor >= self.num_floors {
            return Err(ConfigError::FloorOutOfRange {
                floor: self.default_floor,
                num_floors: self.num_floors,
            });
        }
        if self.idle_timeout.is_zero() {
            return Err(ConfigError::invalid("idle_timeout", "must be greater than zero"));
        }
        Ok(())
    }
}

/// Construction parameters for a whole fleet. Timings are wall-clock
/// durations, already divided by the simulation time scale.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetSettings {
    pub num_floors: u8,
    pub capacity: usize,
    pub time_per_floor: Duration,
    pub door_time: Duration,
    pub idle_timeout: Duration,
    pub default_floors: Vec<u8>,
}

impl FleetSettings {
    pub fn new(num_floors: u8, num_elevators: usize, capacity: usize) -> Self {
        FleetSettings {
            num_floors,
            capacity,
            time_per_floor: Duration::from_millis(1000),
            door_time: Duration::from_millis(2500),
            idle_timeout: Duration::from_millis(10000),
            default_floors: vec![0; num_elevators],
        }
    }

    pub fn with_timing(mut self, time_per_floor: Duration, door_time: Duration, idle_timeout: Duration) -> Self {
        self.time_per_floor = time_per_floor;
        self.door_time = door_time;
        self.idle_timeout = idle_timeout;
        self
    }

    pub fn with_default_floors(mut self, default_floors: Vec<u8>) -> Self {
        self.default_floors = default_floors;
        self
    }

    pub fn num_elevators(&self) -> usize {
        self.default_floors.len()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_floors.is_empty() {
            return Err(ConfigError::invalid("num_elevators", "a fleet needs at least 1 elevator"));
        }
        for id in 0..self.num_elevators() {
            if let Some(settings) = self.elevator(id) {
                settings.validate()?;
            }
        }
        Ok(())
    }

    pub fn elevator(&self, id: usize) -> Option<ElevatorSettings> {
        let default_floor = *self.default_floors.get(id)?;
        Some(ElevatorSettings {
            num_floors: self.num_floors,
            capacity: self.capacity,
            time_per_floor: self.time_per_floor,
            door_time: self.door_time,
            idle_timeout: self.idle_timeout,
            default_floor,
        })
    }
}

/// Rider generation parameters. `duration` and `spawn_interval` are
/// wall-clock, `time_scale` converts measurements back to simulated time.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficSettings {
    pub duration: Duration,
    pub spawn_interval: Duration,
    pub time_scale: f64,
    pub start_probabilities: Vec<u32>,
    pub destination_probabilities: Vec<u32>,
}

impl TrafficSettings {
    pub fn validate(&self, num_floors: u8) -> Result<(), ConfigError> {
        check_probabilities("start_probabilities", &self.start_probabilities, num_floors)?;
        check_probabilities("destination_probabilities", &self.destination_probabilities, num_floors)?;

        for (start, weight) in self.start_probabilities.iter().enumerate() {
            if *weight == 0 {
                continue;
            }
            let has_destination = self.destination_probabilities.iter()
                .enumerate()
                .any(|(dest, dest_weight)| dest != start && *dest_weight > 0);
            if !has_destination {
                return Err(ConfigError::invalid(
                    "destination_probabilities",
                    format!("riders starting at floor {} have nowhere to go", start),
                ));
            }
        }
        Ok(())
    }
}

fn check_probabilities(name: &str, weights: &[u32], num_floors: u8) -> Result<(), ConfigError> {
    if weights.len() != num_floors as usize {
        return Err(ConfigError::invalid(
            name,
            format!("expected {} entries, found {}", num_floors, weights.len()),
        ));
    }
    let total: u32 = weights.iter().sum();
    if total != 100 {
        return Err(ConfigError::invalid(name, format!("percentages sum to {}, not 100", total)));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub fleet: FleetSettings,
    pub traffic: TrafficSettings,
    pub runs: Vec<StrategyPair>,
    pub drain: Duration,
    pub seed: Option<u64>,
    pub show_status: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvArgs {
    pub config_path: Option<String>,
    pub time_scale: Option<f64>,
    pub seed: Option<u64>,
    pub show_status: bool,
}

pub fn parse_env_args(args: &[String]) -> EnvArgs {
    let mut env_args = EnvArgs::default();

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--status" => env_args.show_status = true,
            "--config" => match args.next() {
                Some(path) => env_args.config_path = Some(path.clone()),
                None => warn!("--config needs a path, skipping..."),
            },
            "--timescale" => match args.next().map(|value| (value, value.parse::<f64>())) {
                Some((_, Ok(scale))) => env_args.time_scale = Some(scale),
                Some((value, Err(_))) => warn!("timescale {} is not a number, skipping...", value),
                None => warn!("--timescale needs a value, skipping..."),
            },
            "--seed" => match args.next().map(|value| (value, value.parse::<u64>())) {
                Some((_, Ok(seed))) => env_args.seed = Some(seed),
                Some((value, Err(_))) => warn!("seed {} is not a number, skipping...", value),
                None => warn!("--seed needs a value, skipping..."),
            },
            _ => warn!("illegal argument {}, skipping...", arg),
        }
    }
    env_args
}

fn read_config_file(path: Option<&str>) -> Result<ConfigFile, ConfigError> {
    let file_path = path.unwrap_or(CONFIG_FILE_PATH);
    let config_contents = match fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(source) if path.is_some() => {
            return Err(ConfigError::Io { path: file_path.to_string(), source });
        }
        Err(_) => {
            info!("No configuration file provided, using default settings...");
            fs::read_to_string(FALLBACK_CONFIG_FILE_PATH).map_err(|source| ConfigError::Io {
                path: FALLBACK_CONFIG_FILE_PATH.to_string(),
                source,
            })?
        }
    };
    Ok(serde_json::from_str(&config_contents)?)
}

fn scaled(name: &str, millis: f64, time_scale: f64) -> Result<Duration, ConfigError> {
    Duration::try_from_secs_f64(millis / 1000.0 / time_scale)
        .map_err(|_| ConfigError::invalid(name, "does not fit in a duration at this time scale"))
}

impl SimulationConfig {
    /// Loads the configuration file and applies command line overrides.
    pub fn get() -> Result<Self, ConfigError> {
        let args: Vec<String> = env::args().skip(1).collect();
        let env_args = parse_env_args(&args);

        let mut config_file = read_config_file(env_args.config_path.as_deref())?;
        if let Some(time_scale) = env_args.time_scale {
            config_file.simulation.time_scale = time_scale;
        }

        let mut config = SimulationConfig::from_config_file(config_file)?;
        config.seed = env_args.seed;
        config.show_status = env_args.show_status;
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        SimulationConfig::from_config_file(serde_json::from_str(contents)?)
    }

    pub fn from_config_file(config_file: ConfigFile) -> Result<Self, ConfigError> {
        let ConfigFile { simulation, building, traffic, runs } = config_file;

        let time_scale = simulation.time_scale;
        if !time_scale.is_finite() || time_scale <= 0.0 {
            return Err(ConfigError::invalid("time_scale", "must be a positive number"));
        }
        if !(simulation.duration_minutes > 0.0) {
            return Err(ConfigError::invalid("duration_minutes", "must be greater than zero"));
        }
        if !(simulation.people_per_minute > 0.0) {
            return Err(ConfigError::invalid("people_per_minute", "must be greater than zero"));
        }
        if simulation.drain_seconds < 0.0 {
            return Err(ConfigError::invalid("drain_seconds", "must not be negative"));
        }
        if building.num_elevators == 0 {
            return Err(ConfigError::invalid("num_elevators", "a fleet needs at least 1 elevator"));
        }

        let default_floors = match building.default_floors.len() {
            0 => vec![0; building.num_elevators],
            1 => vec![building.default_floors[0]; building.num_elevators],
            n if n == building.num_elevators => building.default_floors,
            n => {
                return Err(ConfigError::invalid(
                    "default_floors",
                    format!("expected 1 or {} entries, found {}", building.num_elevators, n),
                ));
            }
        };

        let fleet = FleetSettings::new(building.num_floors, building.num_elevators, building.capacity)
            .with_timing(
                scaled("time_per_floor_ms", building.time_per_floor_ms as f64, time_scale)?,
                scaled("door_time_ms", building.door_time_ms as f64, time_scale)?,
                scaled("idle_timeout_ms", building.idle_timeout_ms as f64, time_scale)?,
            )
            .with_default_floors(default_floors);
        fleet.validate()?;

        let traffic = TrafficSettings {
            duration: scaled("duration_minutes", simulation.duration_minutes * 60_000.0, time_scale)?,
            spawn_interval: scaled("people_per_minute", 60_000.0 / simulation.people_per_minute, time_scale)?,
            time_scale,
            start_probabilities: traffic.start_probabilities,
            destination_probabilities: traffic.destination_probabilities,
        };
        traffic.validate(fleet.num_floors)?;

        Ok(SimulationConfig {
            fleet,
            traffic,
            runs: if runs.is_empty() { StrategyPair::defaults() } else { runs },
            drain: scaled("drain_seconds", simulation.drain_seconds * 1000.0, time_scale)?,
            seed: None,
            show_status: false,
        })
    }
}
