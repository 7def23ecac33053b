/// ----- DOORS MODULE -----
/// Runs one door cycle for an elevator that has stopped at a floor:
/// the doors stay open for the configured time, riders get off, waiting
/// riders get on while there is room, and calls for anybody left behind
/// are raised again.

use std::thread;

use log::{info, warn};
use shared_resources::call::Call;
use shared_resources::config::ElevatorSettings;
use shared_resources::direction::Direction;
use shared_resources::request::Request;

use crate::error::{FleetError, Result};
use crate::modules::coordinator::Fleet;
use crate::utilities::elevator::Elevator;
use crate::utilities::elevator_status::ElevatorStatus;
use crate::utilities::riders::{RiderId, RiderProvider};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Exchange {
    pub alighted: Vec<RiderId>,
    pub boarded: Vec<RiderId>,
    pub reraise: Vec<Request>,
}

/// Swaps riders between the car and its current floor. Must be called with
/// the elevator's status locked.
pub fn exchange(status: &mut ElevatorStatus, settings: &ElevatorSettings, riders: &dyn RiderProvider) -> Result<Exchange> {
    let floor = status.floor;
    let mut result = Exchange::default();

    for rider in &status.occupants {
        let destination = riders.rider_destination_floor(*rider).ok_or(FleetError::UnknownRider(*rider))?;
        if destination == floor {
            result.alighted.push(*rider);
        }
    }
    status.occupants.retain(|rider| !result.alighted.contains(rider));
    for rider in &result.alighted {
        riders.transfer_rider_to_floor(floor, *rider);
    }

    loop {
        let queue_was_empty = status.destinations.is_empty();
        let going_up = status.direction == Direction::Up;
        let Some(rider) = riders.next_boardable_person(floor, going_up, queue_was_empty) else {
            break;
        };
        if riders.rider_has_arrived(rider) {
            return Err(FleetError::RiderAlreadyArrived(rider));
        }
        let destination = riders.rider_destination_floor(rider).ok_or(FleetError::UnknownRider(rider))?;

        if status.is_full(settings.capacity) {
            // re-raised in the direction the car is serving
            let direction = match status.direction {
                Direction::Stop => Direction::toward(floor, destination),
                direction => direction,
            };
            if let Some(call) = direction.to_call() {
                result.reraise.push(Request { floor, call });
            }
            break;
        }

        status.add_destination(destination, settings.num_floors)?;
        riders.transfer_rider_to_elevator(floor, rider);
        status.occupants.push(rider);
        result.boarded.push(rider);
    }

    if let Some(call) = status.direction.to_call() {
        let opposite = Request { floor, call: Call::from_going_up(!call.is_up()) };
        if riders.has_waiting_rider(floor, opposite.going_up()) {
            result.reraise.push(opposite);
        }
    }
    Ok(result)
}

pub fn cycle(fleet: &Fleet, elevator: &Elevator) -> Result<()> {
    let floor = elevator.open_doors()?;
    info!("elevator {} opened its doors at floor {}", elevator.id(), floor);
    thread::sleep(elevator.settings().door_time);

    let exchange = {
        let mut status = elevator.lock();
        exchange(&mut status, elevator.settings(), fleet.riders())?
    };
    if !exchange.alighted.is_empty() || !exchange.boarded.is_empty() {
        info!(
            "elevator {} at floor {}: {} off, {} on",
            elevator.id(), floor, exchange.alighted.len(), exchange.boarded.len()
        );
    }

    for request in exchange.reraise {
        warn!("elevator {} left riders behind at floor {}, calling {} again", elevator.id(), floor, request);
        fleet.dispatch_call(request)?;
    }

    elevator.close_doors();
    Ok(())
}
