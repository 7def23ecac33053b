use shared_resources::direction::Direction;
use shared_resources::error::ConfigError;
use shared_resources::request::Request;

use crate::error::{FleetError, Result};
use crate::utilities::destinations::Destinations;
use crate::utilities::riders::RiderId;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Behaviour {
    Idle,
    Moving,
    DoorOpen,
}

impl Behaviour {
    pub fn as_string(&self) -> String {
        match self {
            Behaviour::Idle => String::from("idle"),
            Behaviour::Moving => String::from("moving"),
            Behaviour::DoorOpen => String::from("doorOpen"),
        }
    }
}

/// Direction an empty elevator settles on. Only the edge floors force one.
pub fn edge_direction(floor: u8, num_floors: u8) -> Direction {
    if floor == 0 {
        Direction::Up
    } else if floor + 1 >= num_floors {
        Direction::Down
    } else {
        Direction::Stop
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ElevatorStatus {
    pub floor: u8,
    pub direction: Direction,
    pub behaviour: Behaviour,
    pub destinations: Destinations,
    pub occupants: Vec<RiderId>,
}

impl ElevatorStatus {
    pub fn new(floor: u8, num_floors: u8) -> Self {
        ElevatorStatus {
            floor,
            direction: edge_direction(floor, num_floors),
            behaviour: Behaviour::Idle,
            destinations: Destinations::new(),
            occupants: Vec::new(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.behaviour == Behaviour::Idle
    }

    /// Moving elevators and elevators stopped mid-sweep with open doors.
    pub fn is_active(&self) -> bool {
        matches!(self.behaviour, Behaviour::Moving | Behaviour::DoorOpen)
    }

    pub fn is_full(&self, capacity: usize) -> bool {
        self.occupants.len() >= capacity
    }

    /// Already heading for this floor in the requested direction.
    pub fn is_serving(&self, request: &Request) -> bool {
        self.destinations.contains(request.floor) && self.direction == request.direction()
    }

    /// An idle elevator takes anything. A busy one only takes calls in its
    /// own direction that it has not passed yet, and only while it has room.
    pub fn can_accept(&self, request: &Request, capacity: usize) -> bool {
        if self.is_idle() {
            return true;
        }
        if self.is_full(capacity) {
            return false;
        }
        self.direction == request.direction() && self.direction.reaches(self.floor, request.floor)
    }

    pub fn accept(&mut self, request: &Request, num_floors: u8) -> Result<bool> {
        if self.is_idle() && request.floor == self.floor {
            self.direction = request.direction();
        }
        self.add_destination(request.floor, num_floors)
    }

    pub fn add_destination(&mut self, floor: u8, num_floors: u8) -> Result<bool> {
        if floor >= num_floors {
            return Err(ConfigError::FloorOutOfRange { floor, num_floors }.into());
        }
        if self.destinations.contains(floor) {
            return Ok(false);
        }

        if self.is_idle() || self.destinations.is_empty() || self.direction == Direction::Stop {
            match Direction::toward(self.floor, floor) {
                Direction::Stop => {
                    if self.direction == Direction::Stop {
                        self.direction = if floor + 1 >= num_floors { Direction::Down } else { Direction::Up };
                    }
                }
                toward => self.direction = toward,
            }
        } else if !self.direction.reaches(self.floor, floor) {
            return Err(FleetError::DestinationBehind {
                floor,
                current: self.floor,
                direction: self.direction,
            });
        }

        self.destinations.insert(floor, self.direction);
        if self.is_idle() {
            self.behaviour = Behaviour::Moving;
        }
        Ok(true)
    }

    pub fn settle_direction(&mut self, num_floors: u8) {
        if self.destinations.is_empty() {
            self.direction = edge_direction(self.floor, num_floors);
        }
    }
}
