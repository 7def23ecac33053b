/// ----- RIDERS -----
/// The fleet does not keep track of people itself. Whoever owns the
/// floors and the riders on them implements `RiderProvider`, and the
/// door cycle of every elevator goes through it to let people on and off.

pub type RiderId = usize;

pub trait RiderProvider: Send + Sync {
    /// Next rider on `floor` willing to travel in the given direction. With
    /// `queue_was_empty` set the first waiting rider is taken regardless.
    fn next_boardable_person(&self, floor: u8, direction_up: bool, queue_was_empty: bool) -> Option<RiderId>;

    fn transfer_rider_to_elevator(&self, floor: u8, rider: RiderId);

    fn transfer_rider_to_floor(&self, floor: u8, rider: RiderId);

    fn rider_destination_floor(&self, rider: RiderId) -> Option<u8>;

    fn rider_has_arrived(&self, rider: RiderId) -> bool;

    /// Whether somebody on `floor` is still waiting to go the given way.
    fn has_waiting_rider(&self, _floor: u8, _direction_up: bool) -> bool {
        false
    }
}

/// Provider for a building nobody uses. Handy when only the scheduling
/// side of the fleet matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRiders;

impl RiderProvider for NoRiders {
    fn next_boardable_person(&self, _floor: u8, _direction_up: bool, _queue_was_empty: bool) -> Option<RiderId> {
        None
    }

    fn transfer_rider_to_elevator(&self, _floor: u8, _rider: RiderId) {}

    fn transfer_rider_to_floor(&self, _floor: u8, _rider: RiderId) {}

    fn rider_destination_floor(&self, _rider: RiderId) -> Option<u8> {
        None
    }

    fn rider_has_arrived(&self, _rider: RiderId) -> bool {
        false
    }
}
