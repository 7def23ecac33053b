/// ----- DISPATCH MODULE -----
/// Decides which elevator gets a fresh hall call. Both strategies share
/// the acceptance test in `ElevatorStatus::can_accept` and only differ in
/// the order elevators are tried. Calls nobody takes go to the pending pool.

use std::sync::Arc;

use log::debug;
use shared_resources::request::Request;
use shared_resources::strategy::DispatchStrategy;

use crate::error::Result;
use crate::utilities::elevator::Elevator;
use crate::utilities::elevator_status::ElevatorStatus;
use crate::utilities::pending::PendingPool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    AlreadyServed(usize),
    Assigned(usize),
    Pending,
}

fn first_taker(
    elevators: &[Arc<Elevator>],
    request: &Request,
    eligible: fn(&ElevatorStatus) -> bool,
) -> Result<Option<usize>> {
    for elevator in elevators {
        if elevator.offer(request, eligible)? {
            return Ok(Some(elevator.id()));
        }
    }
    Ok(None)
}

pub fn run(
    strategy: DispatchStrategy,
    elevators: &[Arc<Elevator>],
    pending: &mut PendingPool,
    request: Request,
) -> Result<Assignment> {
    if let Some(elevator) = elevators.iter().find(|elevator| elevator.is_serving(&request)) {
        debug!("{} is already served by elevator {}", request, elevator.id());
        return Ok(Assignment::AlreadyServed(elevator.id()));
    }

    let scan_order: [fn(&ElevatorStatus) -> bool; 2] = match strategy {
        DispatchStrategy::FirstCapableThenIdle => [ElevatorStatus::is_active, ElevatorStatus::is_idle],
        DispatchStrategy::IdleFirstThenCapable => [ElevatorStatus::is_idle, ElevatorStatus::is_active],
    };
    for eligible in scan_order {
        if let Some(id) = first_taker(elevators, &request, eligible)? {
            return Ok(Assignment::Assigned(id));
        }
    }

    debug!("no elevator can take {}, leaving it pending", request);
    pending.insert_request(request);
    Ok(Assignment::Pending)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use shared_resources::call::Call;
    use shared_resources::config::FleetSettings;
    use shared_resources::direction::Direction;

    use super::*;
    use crate::utilities::elevator::Step;

    fn fleet(num_elevators: usize) -> Vec<Arc<Elevator>> {
        let settings = FleetSettings::new(10, num_elevators, 10)
            .with_timing(Duration::from_millis(1), Duration::from_millis(1), Duration::from_secs(1));
        (0..num_elevators)
            .map(|id| Arc::new(Elevator::new(id, settings.elevator(id).unwrap()).unwrap()))
            .collect()
    }

    fn request(floor: u8, call: Call) -> Request {
        Request::new(floor, call, 10).unwrap()
    }

    /// Drives the elevator to `floor` and leaves it moving toward `next`.
    fn moving_from(elevator: &Elevator, floor: u8, next: &[u8]) {
        elevator.add_destination(floor).unwrap();
        while let Step::Passed(_) = elevator.move_toward_destination().unwrap() {}
        elevator.close_doors();
        for destination in next {
            elevator.add_destination(*destination).unwrap();
        }
    }

    #[test]
    fn test_idle_elevator_takes_call() {
        let elevators = fleet(1);
        let mut pending = PendingPool::new();
        let assignment = run(DispatchStrategy::FirstCapableThenIdle, &elevators, &mut pending, request(7, Call::HallUp)).unwrap();
        assert_eq!(assignment, Assignment::Assigned(0));
        assert_eq!(elevators[0].destinations(), vec![7]);
        assert_eq!(elevators[0].direction(), Direction::Up);
        assert!(pending.is_empty());
    }

    #[test]
    fn test_call_on_the_way_is_merged() {
        let elevators = fleet(1);
        let mut pending = PendingPool::new();
        elevators[0].add_destination(5).unwrap();
        elevators[0].add_destination(9).unwrap();

        let assignment = run(DispatchStrategy::FirstCapableThenIdle, &elevators, &mut pending, request(7, Call::HallUp)).unwrap();
        assert_eq!(assignment, Assignment::Assigned(0));
        assert_eq!(elevators[0].destinations(), vec![5, 7, 9]);
    }

    #[test]
    fn test_call_behind_goes_pending() {
        let elevators = fleet(1);
        let mut pending = PendingPool::new();
        moving_from(&elevators[0], 6, &[9]);

        let assignment = run(DispatchStrategy::FirstCapableThenIdle, &elevators, &mut pending, request(3, Call::HallDown)).unwrap();
        assert_eq!(assignment, Assignment::Pending);
        assert_eq!(elevators[0].destinations(), vec![9]);
        assert_eq!(pending.get_requests(), vec![request(3, Call::HallDown)]);
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let elevators = fleet(2);
        let mut pending = PendingPool::new();
        let call = request(4, Call::HallUp);
        assert_eq!(run(DispatchStrategy::FirstCapableThenIdle, &elevators, &mut pending, call).unwrap(), Assignment::Assigned(0));
        assert_eq!(run(DispatchStrategy::FirstCapableThenIdle, &elevators, &mut pending, call).unwrap(), Assignment::AlreadyServed(0));
        assert_eq!(elevators[0].destinations(), vec![4]);
        assert!(elevators[1].destinations().is_empty());
        assert!(pending.is_empty());
    }

    #[test]
    fn test_strategy_scan_order() {
        let elevators = fleet(2);
        let mut pending = PendingPool::new();
        moving_from(&elevators[1], 2, &[9]);

        // the busy elevator passes floor 5 going up
        let assignment = run(DispatchStrategy::FirstCapableThenIdle, &elevators, &mut pending, request(5, Call::HallUp)).unwrap();
        assert_eq!(assignment, Assignment::Assigned(1));

        let assignment = run(DispatchStrategy::IdleFirstThenCapable, &elevators, &mut pending, request(6, Call::HallUp)).unwrap();
        assert_eq!(assignment, Assignment::Assigned(0));
        assert_eq!(elevators[1].destinations(), vec![5, 9]);
    }

    #[test]
    fn test_idle_first_falls_back_to_capable() {
        let elevators = fleet(1);
        let mut pending = PendingPool::new();
        moving_from(&elevators[0], 2, &[9]);
        let assignment = run(DispatchStrategy::IdleFirstThenCapable, &elevators, &mut pending, request(4, Call::HallUp)).unwrap();
        assert_eq!(assignment, Assignment::Assigned(0));
        assert_eq!(elevators[0].destinations(), vec![4, 9]);
    }
}
