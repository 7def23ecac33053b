use std::io;

use shared_resources::direction::Direction;
use shared_resources::error::ConfigError;
use thiserror::Error;

use crate::utilities::riders::RiderId;

#[derive(Error, Debug)]
pub enum FleetError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no elevator with id {0}")]
    UnknownElevator(usize),

    #[error("no rider with id {0}")]
    UnknownRider(RiderId),

    #[error("rider {0} has already arrived and cannot board again")]
    RiderAlreadyArrived(RiderId),

    #[error("elevator {id} cannot open its doors while moving")]
    DoorsWhileMoving { id: usize },

    #[error("elevator {id} has no destination to move toward")]
    NoDestinations { id: usize },

    #[error("floor {floor} is behind elevator at floor {current} travelling {direction:?}")]
    DestinationBehind { floor: u8, current: u8, direction: Direction },

    #[error("failed to spawn elevator worker")]
    Spawn(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, FleetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_transparent() {
        let err: FleetError = ConfigError::FloorOutOfRange { floor: 11, num_floors: 10 }.into();
        assert_eq!(err.to_string(), "floor 11 is out of range, the building has 10 floors");
    }

    #[test]
    fn test_protocol_error_messages() {
        let err = FleetError::DestinationBehind { floor: 3, current: 6, direction: Direction::Up };
        assert_eq!(err.to_string(), "floor 3 is behind elevator at floor 6 travelling Up");
        assert_eq!(FleetError::DoorsWhileMoving { id: 2 }.to_string(), "elevator 2 cannot open its doors while moving");
    }
}
