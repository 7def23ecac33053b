use std::time::{Duration, Instant};

use fleet::RiderId;
use shared_resources::error::ConfigError;

/// Somebody travelling between two floors. The wait clock runs from the
/// moment they show up until they board, the ride clock from boarding
/// until they step out.
#[derive(Debug, Clone)]
pub struct Person {
    pub id: RiderId,
    pub start: u8,
    pub destination: u8,
    created_at: Instant,
    boarded_at: Option<Instant>,
    arrived_at: Option<Instant>,
}

/// Finished trip, in simulated seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRecord {
    pub id: RiderId,
    pub start: u8,
    pub destination: u8,
    pub wait_seconds: f64,
    pub ride_seconds: f64,
}

impl Person {
    pub fn new(id: RiderId, start: u8, destination: u8, num_floors: u8) -> Result<Self, ConfigError> {
        for floor in [start, destination] {
            if floor >= num_floors {
                return Err(ConfigError::FloorOutOfRange { floor, num_floors });
            }
        }
        if start == destination {
            return Err(ConfigError::invalid("destination", format!("rider is already on floor {}", start)));
        }
        Ok(Person {
            id,
            start,
            destination,
            created_at: Instant::now(),
            boarded_at: None,
            arrived_at: None,
        })
    }

    pub fn going_up(&self) -> bool {
        self.destination > self.start
    }

    pub fn board(&mut self) {
        if self.boarded_at.is_none() {
            self.boarded_at = Some(Instant::now());
        }
    }

    pub fn arrive(&mut self) {
        if self.arrived_at.is_none() {
            self.arrived_at = Some(Instant::now());
        }
    }

    pub fn has_boarded(&self) -> bool {
        self.boarded_at.is_some()
    }

    pub fn has_arrived(&self) -> bool {
        self.arrived_at.is_some()
    }

    pub fn wait_time(&self) -> Duration {
        self.boarded_at.unwrap_or_else(Instant::now).duration_since(self.created_at)
    }

    pub fn ride_time(&self) -> Option<Duration> {
        let boarded_at = self.boarded_at?;
        Some(self.arrived_at.unwrap_or_else(Instant::now).duration_since(boarded_at))
    }

    pub fn record(&self, time_scale: f64) -> Option<PersonRecord> {
        if !self.has_arrived() {
            return None;
        }
        Some(PersonRecord {
            id: self.id,
            start: self.start,
            destination: self.destination,
            wait_seconds: self.wait_time().as_secs_f64() * time_scale,
            ride_seconds: self.ride_time()?.as_secs_f64() * time_scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_validation() {
        assert!(Person::new(0, 0, 5, 10).is_ok());
        assert!(Person::new(0, 3, 3, 10).is_err());
        assert!(matches!(
            Person::new(0, 3, 10, 10),
            Err(ConfigError::FloorOutOfRange { floor: 10, num_floors: 10 })
        ));
    }

    #[test]
    fn test_person_timers() {
        let mut person = Person::new(4, 6, 2, 10).unwrap();
        assert!(!person.going_up());
        assert!(person.ride_time().is_none());
        assert!(person.record(1.0).is_none());

        person.board();
        assert!(person.has_boarded());
        person.arrive();
        assert!(person.has_arrived());

        let record = person.record(10.0).unwrap();
        assert_eq!(record.id, 4);
        assert_eq!((record.start, record.destination), (6, 2));
        assert!(record.wait_seconds >= 0.0);
        assert!(record.ride_seconds >= 0.0);
    }
}
