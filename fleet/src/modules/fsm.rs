/// ----- FSM MODULE -----
/// The worker loop of a single elevator. It steps toward queued
/// destinations one floor at a time, runs a door cycle on every stop,
/// asks the fleet for pending calls once the queue is empty, and heads
/// back to its default floor after sitting idle for too long.
/// The stop flag is only looked at between steps.

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use log::{debug, error, info, trace};

use crate::error::Result;
use crate::modules::coordinator::Fleet;
use crate::modules::doors;
use crate::utilities::elevator::{Elevator, Step};

pub fn main(fleet: Fleet, elevator: Arc<Elevator>) {
    debug!("elevator {} worker started", elevator.id());
    if let Err(err) = run(&fleet, &elevator) {
        error!("elevator {} halted: {}", elevator.id(), err);
    }
    debug!("elevator {} worker stopped", elevator.id());
}

fn run(fleet: &Fleet, elevator: &Elevator) -> Result<()> {
    let settings = elevator.settings().clone();
    let mut idle_since = Instant::now();

    while elevator.is_running() {
        if elevator.has_destinations() {
            match elevator.move_toward_destination()? {
                Step::Passed(floor) => {
                    trace!("elevator {} passing floor {}", elevator.id(), floor);
                    thread::sleep(settings.time_per_floor);
                }
                Step::Arrived(floor) => {
                    info!("elevator {} arrived at floor {}", elevator.id(), floor);
                    doors::cycle(fleet, elevator)?;
                }
            }
            idle_since = Instant::now();
            continue;
        }

        if fleet.backfill(elevator.id(), elevator.floor())? && elevator.has_destinations() {
            continue;
        }

        let idle_for = idle_since.elapsed();
        if idle_for >= settings.idle_timeout {
            if elevator.return_to_default()? {
                info!("elevator {} returning to default floor {}", elevator.id(), settings.default_floor);
            }
            idle_since = Instant::now();
            continue;
        }
        elevator.wait_for_work(settings.idle_timeout - idle_for);
    }
    Ok(())
}
