pub mod destinations;
pub mod elevator;
pub mod elevator_status;
pub mod pending;
pub mod riders;
