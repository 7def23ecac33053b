/// ----- BUILDING -----
/// Keeps track of every person in the simulation: who is waiting on
/// which floor, who is riding and who has arrived. The fleet reaches in
/// here through `RiderProvider` during door cycles.

use log::debug;
use parking_lot::Mutex;

use fleet::{RiderId, RiderProvider};
use shared_resources::error::ConfigError;

use crate::utilities::person::{Person, PersonRecord};

#[derive(Debug, Default)]
struct Floors {
    people: Vec<Person>,
    waiting: Vec<Vec<RiderId>>,
    arrived: Vec<Vec<RiderId>>,
}

pub struct Building {
    num_floors: u8,
    floors: Mutex<Floors>,
}

impl Building {
    pub fn new(num_floors: u8) -> Self {
        Building {
            num_floors,
            floors: Mutex::new(Floors {
                people: Vec::new(),
                waiting: vec![Vec::new(); num_floors as usize],
                arrived: vec![Vec::new(); num_floors as usize],
            }),
        }
    }

    pub fn num_floors(&self) -> u8 {
        self.num_floors
    }

    /// Places a new person on `start`. Pressing the call button is up to
    /// the caller.
    pub fn add_person(&self, start: u8, destination: u8) -> Result<RiderId, ConfigError> {
        let mut floors = self.floors.lock();
        let id = floors.people.len();
        let person = Person::new(id, start, destination, self.num_floors)?;
        debug!("person {} waiting at floor {} for floor {}", id, start, destination);
        floors.people.push(person);
        floors.waiting[start as usize].push(id);
        Ok(id)
    }

    pub fn num_people(&self) -> usize {
        self.floors.lock().people.len()
    }

    pub fn num_waiting(&self) -> usize {
        self.floors.lock().waiting.iter().map(Vec::len).sum()
    }

    pub fn num_arrived(&self) -> usize {
        self.floors.lock().arrived.iter().map(Vec::len).sum()
    }

    pub fn all_arrived(&self) -> bool {
        let floors = self.floors.lock();
        floors.people.iter().all(Person::has_arrived)
    }

    pub fn waiting_at(&self, floor: u8) -> usize {
        self.floors.lock().waiting.get(floor as usize).map(Vec::len).unwrap_or(0)
    }

    /// Finished trips, converted to simulated seconds.
    pub fn records(&self, time_scale: f64) -> Vec<PersonRecord> {
        let floors = self.floors.lock();
        floors.people.iter().filter_map(|person| person.record(time_scale)).collect()
    }
}

impl RiderProvider for Building {
    fn next_boardable_person(&self, floor: u8, direction_up: bool, queue_was_empty: bool) -> Option<RiderId> {
        let floors = self.floors.lock();
        floors.waiting.get(floor as usize)?.iter().copied().find(|id| {
            let person = &floors.people[*id];
            !person.has_arrived() && (queue_was_empty || person.going_up() == direction_up)
        })
    }

    fn transfer_rider_to_elevator(&self, floor: u8, rider: RiderId) {
        let mut floors = self.floors.lock();
        if let Some(waiting) = floors.waiting.get_mut(floor as usize) {
            waiting.retain(|id| *id != rider);
        }
        if let Some(person) = floors.people.get_mut(rider) {
            person.board();
        }
    }

    fn transfer_rider_to_floor(&self, floor: u8, rider: RiderId) {
        let mut floors = self.floors.lock();
        if let Some(person) = floors.people.get_mut(rider) {
            person.arrive();
        }
        if let Some(arrived) = floors.arrived.get_mut(floor as usize) {
            arrived.push(rider);
        }
        debug!("person {} arrived at floor {}", rider, floor);
    }

    fn rider_destination_floor(&self, rider: RiderId) -> Option<u8> {
        self.floors.lock().people.get(rider).map(|person| person.destination)
    }

    fn rider_has_arrived(&self, rider: RiderId) -> bool {
        self.floors.lock().people.get(rider).map(Person::has_arrived).unwrap_or(false)
    }

    fn has_waiting_rider(&self, floor: u8, direction_up: bool) -> bool {
        let floors = self.floors.lock();
        floors.waiting.get(floor as usize)
            .map(|waiting| waiting.iter().any(|id| floors.people[*id].going_up() == direction_up))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_person_validates() {
        let building = Building::new(5);
        assert_eq!(building.add_person(0, 4).unwrap(), 0);
        assert_eq!(building.add_person(3, 1).unwrap(), 1);
        assert!(building.add_person(2, 2).is_err());
        assert!(building.add_person(5, 1).is_err());
        assert_eq!(building.num_people(), 2);
        assert_eq!(building.num_waiting(), 2);
    }

    #[test]
    fn test_next_boardable_person_respects_direction() {
        let building = Building::new(6);
        let down = building.add_person(3, 0).unwrap();
        let up = building.add_person(3, 5).unwrap();

        assert_eq!(building.next_boardable_person(3, true, false), Some(up));
        assert_eq!(building.next_boardable_person(3, false, false), Some(down));
        assert_eq!(building.next_boardable_person(3, true, true), Some(down));
        assert_eq!(building.next_boardable_person(2, true, true), None);
        assert!(building.has_waiting_rider(3, false));
    }

    #[test]
    fn test_trip_is_recorded() {
        let building = Building::new(6);
        let id = building.add_person(1, 4).unwrap();
        building.transfer_rider_to_elevator(1, id);
        assert_eq!(building.waiting_at(1), 0);
        assert!(!building.rider_has_arrived(id));
        assert!(building.records(1.0).is_empty());

        building.transfer_rider_to_floor(4, id);
        assert!(building.rider_has_arrived(id));
        assert!(building.all_arrived());
        assert_eq!(building.num_arrived(), 1);
        let records = building.records(1.0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].destination, 4);
    }

    #[test]
    fn test_unknown_rider() {
        let building = Building::new(3);
        assert_eq!(building.rider_destination_floor(7), None);
        assert!(!building.rider_has_arrived(7));
    }
}
