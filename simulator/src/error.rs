use std::io;

use fleet::FleetError;
use shared_resources::error::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error("terminal or thread error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
