use std::fmt;

use crate::call::Call;
use crate::direction::Direction;
use crate::error::ConfigError;

/// A hall call: somebody on `floor` pressed the button for `call`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Request {
    pub floor: u8,
    pub call: Call,
}

impl Request {
    pub fn new(floor: u8, call: Call, num_floors: u8) -> Result<Self, ConfigError> {
        if floor >= num_floors {
            return Err(ConfigError::FloorOutOfRange { floor, num_floors });
        }
        Ok(Request { floor, call })
    }

    pub fn going_up(&self) -> bool {
        self.call.is_up()
    }

    pub fn direction(&self) -> Direction {
        self.call.direction()
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "floor {} {}", self.floor, self.call.as_string())
    }
}
