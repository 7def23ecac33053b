/// ----- ELEVATOR -----
/// One elevator car. The status sits behind a mutex so that the worker
/// thread, dispatch and backfill can all touch the destination queue.
/// Anything that adds a destination sends a wake token while still
/// holding the lock, so the worker can never miss new work.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossbeam_channel::{bounded, select, Receiver, Sender};
use log::debug;
use parking_lot::{Mutex, MutexGuard};
use shared_resources::config::ElevatorSettings;
use shared_resources::direction::Direction;
use shared_resources::request::Request;

use crate::error::{FleetError, Result};
use crate::utilities::elevator_status::{Behaviour, ElevatorStatus};
use crate::utilities::riders::RiderId;

/// Outcome of one discrete movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Passed(u8),
    Arrived(u8),
}

pub struct Elevator {
    id: usize,
    settings: ElevatorSettings,
    status: Mutex<ElevatorStatus>,
    wake_tx: Sender<()>,
    wake_rx: Receiver<()>,
    running: AtomicBool,
}

impl Elevator {
    pub fn new(id: usize, settings: ElevatorSettings) -> Result<Self> {
        settings.validate()?;
        let (wake_tx, wake_rx) = bounded(1);
        Ok(Elevator {
            id,
            status: Mutex::new(ElevatorStatus::new(settings.default_floor, settings.num_floors)),
            settings,
            wake_tx,
            wake_rx,
            running: AtomicBool::new(true),
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn settings(&self) -> &ElevatorSettings {
        &self.settings
    }

    pub fn capacity(&self) -> usize {
        self.settings.capacity
    }

    pub fn default_floor(&self) -> u8 {
        self.settings.default_floor
    }

    pub fn status(&self) -> ElevatorStatus {
        self.status.lock().clone()
    }

    pub fn floor(&self) -> u8 {
        self.status.lock().floor
    }

    pub fn direction(&self) -> Direction {
        self.status.lock().direction
    }

    pub fn behaviour(&self) -> Behaviour {
        self.status.lock().behaviour
    }

    pub fn destinations(&self) -> Vec<u8> {
        self.status.lock().destinations.as_slice().to_vec()
    }

    pub fn occupants(&self) -> Vec<RiderId> {
        self.status.lock().occupants.clone()
    }

    pub fn has_destinations(&self) -> bool {
        !self.status.lock().destinations.is_empty()
    }

    pub fn is_serving(&self, request: &Request) -> bool {
        self.status.lock().is_serving(request)
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, ElevatorStatus> {
        self.status.lock()
    }

    fn wake(&self) {
        // a full slot already means the worker will look again
        let _ = self.wake_tx.try_send(());
    }

    /// Takes `request` if `eligible` holds and the car can serve it.
    /// Checking and queueing happen under one lock.
    pub fn offer<F>(&self, request: &Request, eligible: F) -> Result<bool>
    where
        F: Fn(&ElevatorStatus) -> bool,
    {
        let mut status = self.status.lock();
        if !eligible(&status) || !status.can_accept(request, self.settings.capacity) {
            return Ok(false);
        }
        if status.accept(request, self.settings.num_floors)? {
            debug!("elevator {} took {}, destinations {}", self.id, request, status.destinations.as_string());
            self.wake();
        }
        Ok(true)
    }

    pub fn add_destination(&self, floor: u8) -> Result<bool> {
        let mut status = self.status.lock();
        let added = status.add_destination(floor, self.settings.num_floors)?;
        if added {
            self.wake();
        }
        Ok(added)
    }

    /// Queues the default floor, but only for an idle car somewhere else.
    pub fn return_to_default(&self) -> Result<bool> {
        let mut status = self.status.lock();
        if !status.is_idle() || !status.destinations.is_empty() || status.floor == self.settings.default_floor {
            return Ok(false);
        }
        status.add_destination(self.settings.default_floor, self.settings.num_floors)?;
        self.wake();
        Ok(true)
    }

    /// Moves one floor toward the head of the queue, or stops there if the
    /// car has already reached it.
    pub fn move_toward_destination(&self) -> Result<Step> {
        let mut status = self.status.lock();
        let head = status.destinations.head().ok_or(FleetError::NoDestinations { id: self.id })?;

        if head == status.floor {
            status.destinations.pop_head();
            status.behaviour = Behaviour::DoorOpen;
            return Ok(Step::Arrived(status.floor));
        }

        status.behaviour = Behaviour::Moving;
        status.direction = Direction::toward(status.floor, head);
        status.floor = status.direction.step(status.floor);
        Ok(Step::Passed(status.floor))
    }

    pub fn open_doors(&self) -> Result<u8> {
        let mut status = self.status.lock();
        if status.behaviour == Behaviour::Moving {
            return Err(FleetError::DoorsWhileMoving { id: self.id });
        }
        status.behaviour = Behaviour::DoorOpen;
        Ok(status.floor)
    }

    pub fn close_doors(&self) {
        let mut status = self.status.lock();
        if status.behaviour != Behaviour::DoorOpen {
            return;
        }
        if status.destinations.is_empty() {
            status.behaviour = Behaviour::Idle;
            status.settle_direction(self.settings.num_floors);
        } else {
            status.behaviour = Behaviour::Moving;
        }
    }

    /// Blocks until something is queued or `timeout` runs out. Returns
    /// whether a wake token arrived.
    pub fn wait_for_work(&self, timeout: Duration) -> bool {
        select! {
            recv(self.wake_rx) -> _ => true,
            default(timeout) => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        self.wake();
    }

    /// Back to idle at the default floor with nothing queued and nobody on
    /// board, ready to run again.
    pub fn reset(&self) {
        let mut status = self.status.lock();
        *status = ElevatorStatus::new(self.settings.default_floor, self.settings.num_floors);
        while self.wake_rx.try_recv().is_ok() {}
        self.running.store(true, Ordering::SeqCst);
    }
}
