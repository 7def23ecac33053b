pub mod error;
pub mod modules;
pub mod utilities;

pub use error::{FleetError, Result};
pub use modules::coordinator::Fleet;
pub use modules::dispatch::Assignment;
pub use utilities::elevator::Elevator;
pub use utilities::elevator_status::{Behaviour, ElevatorStatus};
pub use utilities::riders::{NoRiders, RiderId, RiderProvider};
