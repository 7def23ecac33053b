/// ----- COORDINATOR MODULE -----
/// `Fleet` owns the elevators, the pending pool and the worker threads.
/// It is a cheap handle: clone it into whatever needs to press call
/// buttons. Locks are always taken pending pool first, then elevator,
/// then whatever sits behind the rider provider.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, error, info};
use parking_lot::Mutex;
use shared_resources::call::Call;
use shared_resources::config::FleetSettings;
use shared_resources::error::ConfigError;
use shared_resources::request::Request;
use shared_resources::strategy::StrategyPair;

use crate::error::{FleetError, Result};
use crate::modules::{backfill, dispatch, fsm};
use crate::modules::dispatch::Assignment;
use crate::utilities::elevator::Elevator;
use crate::utilities::elevator_status::ElevatorStatus;
use crate::utilities::pending::PendingPool;
use crate::utilities::riders::RiderProvider;

struct Inner {
    settings: FleetSettings,
    strategies: StrategyPair,
    elevators: Vec<Arc<Elevator>>,
    pending: Mutex<PendingPool>,
    riders: Arc<dyn RiderProvider>,
    workers: Mutex<Vec<JoinHandle<()>>>,
}

#[derive(Clone)]
pub struct Fleet {
    inner: Arc<Inner>,
}

impl Fleet {
    /// Builds every elevator idle at its default floor. Workers are not
    /// running until `start` is called.
    pub fn new(settings: FleetSettings, strategies: StrategyPair, riders: Arc<dyn RiderProvider>) -> Result<Self> {
        settings.validate()?;
        let mut elevators = Vec::with_capacity(settings.num_elevators());
        for id in 0..settings.num_elevators() {
            let elevator_settings = settings.elevator(id).ok_or(FleetError::UnknownElevator(id))?;
            elevators.push(Arc::new(Elevator::new(id, elevator_settings)?));
        }
        Ok(Fleet {
            inner: Arc::new(Inner {
                settings,
                strategies,
                elevators,
                pending: Mutex::new(PendingPool::new()),
                riders,
                workers: Mutex::new(Vec::new()),
            }),
        })
    }

    pub fn start(&self) -> Result<()> {
        let mut workers = self.inner.workers.lock();
        if !workers.is_empty() {
            return Ok(());
        }
        for elevator in &self.inner.elevators {
            let fleet = self.clone();
            let elevator = Arc::clone(elevator);
            let handle = thread::Builder::new()
                .name(format!("elevator_{}", elevator.id()))
                .spawn(move || fsm::main(fleet, elevator))?;
            workers.push(handle);
        }
        info!(
            "started {} elevators, strategies {}",
            self.inner.elevators.len(), self.inner.strategies.as_string()
        );
        Ok(())
    }

    pub fn dispatch_call(&self, request: Request) -> Result<Assignment> {
        let request = Request::new(request.floor, request.call, self.inner.settings.num_floors)?;
        let mut pending = self.inner.pending.lock();
        let assignment = dispatch::run(self.inner.strategies.dispatch, &self.inner.elevators, &mut pending, request)?;
        debug!("{} -> {:?}", request, assignment);
        Ok(assignment)
    }

    pub fn press_call_button(&self, floor: u8, going_up: bool) -> Result<Assignment> {
        let num_floors = self.inner.settings.num_floors;
        let request = Request::new(floor, Call::from_going_up(going_up), num_floors)?;
        if (going_up && floor + 1 == num_floors) || (!going_up && floor == 0) {
            return Err(ConfigError::invalid("call", format!("there is no {} button on floor {}", request.call.as_string(), floor)).into());
        }
        self.dispatch_call(request)
    }

    pub fn backfill(&self, id: usize, floor: u8) -> Result<bool> {
        let elevator = self.elevator(id)?;
        let mut pending = self.inner.pending.lock();
        backfill::run(self.inner.strategies.backfill, elevator, floor, &mut pending)
    }

    /// Tells every worker to stop after its current step. Does not wait.
    pub fn shutdown_all(&self) {
        for elevator in &self.inner.elevators {
            elevator.stop();
        }
        info!("shutting down {} elevators", self.inner.elevators.len());
    }

    pub fn join(&self) {
        let workers: Vec<JoinHandle<()>> = self.inner.workers.lock().drain(..).collect();
        for worker in workers {
            let name = worker.thread().name().unwrap_or("elevator").to_string();
            if worker.join().is_err() {
                error!("{} worker panicked", name);
            }
        }
    }

    /// Stops the workers, forgets every pending call, puts all elevators
    /// back at their default floors and starts the workers again.
    pub fn reset(&self) -> Result<()> {
        self.shutdown_all();
        self.join();
        self.inner.pending.lock().clear();
        for elevator in &self.inner.elevators {
            elevator.reset();
        }
        self.start()
    }

    pub fn elevator(&self, id: usize) -> Result<&Arc<Elevator>> {
        self.inner.elevators.get(id).ok_or(FleetError::UnknownElevator(id))
    }

    pub fn size(&self) -> usize {
        self.inner.elevators.len()
    }

    pub fn settings(&self) -> &FleetSettings {
        &self.inner.settings
    }

    pub fn strategies(&self) -> StrategyPair {
        self.inner.strategies
    }

    pub fn pending(&self) -> Vec<Request> {
        self.inner.pending.lock().get_requests()
    }

    /// How long the longest waiting unassigned call has been in the pool.
    pub fn oldest_pending_wait(&self) -> Option<Duration> {
        self.inner.pending.lock().oldest_wait()
    }

    pub fn is_started(&self) -> bool {
        !self.inner.workers.lock().is_empty()
    }

    pub fn snapshot(&self) -> Vec<ElevatorStatus> {
        self.inner.elevators.iter().map(|elevator| elevator.status()).collect()
    }

    pub(crate) fn riders(&self) -> &dyn RiderProvider {
        self.inner.riders.as_ref()
    }
}
