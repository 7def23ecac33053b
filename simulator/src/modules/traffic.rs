/// ----- TRAFFIC MODULE -----
/// Generates riders at a steady rate. Start and destination floors are
/// drawn from the configured percentage tables.

use std::thread;
use std::time::Instant;

use fleet::Fleet;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_resources::config::TrafficSettings;

use crate::error::Result;
use crate::utilities::building::Building;

pub struct Traffic {
    rng: StdRng,
    start_table: Vec<u32>,
    destination_table: Vec<u32>,
}

fn cumulative(percentages: &[u32]) -> Vec<u32> {
    percentages.iter()
        .scan(0, |total, percentage| {
            *total += percentage;
            Some(*total)
        })
        .collect()
}

impl Traffic {
    pub fn new(settings: &TrafficSettings, seed: u64) -> Self {
        Traffic {
            rng: StdRng::seed_from_u64(seed),
            start_table: cumulative(&settings.start_probabilities),
            destination_table: cumulative(&settings.destination_probabilities),
        }
    }

    fn pick(rng: &mut StdRng, table: &[u32]) -> u8 {
        let roll = rng.gen_range(0..100);
        table.iter().position(|total| roll < *total).unwrap_or(table.len().saturating_sub(1)) as u8
    }

    /// Next (start, destination) pair. The destination is drawn again
    /// until it differs from the start.
    pub fn next_trip(&mut self) -> (u8, u8) {
        let start = Traffic::pick(&mut self.rng, &self.start_table);
        loop {
            let destination = Traffic::pick(&mut self.rng, &self.destination_table);
            if destination != start {
                return (start, destination);
            }
        }
    }
}

/// Feeds riders into the building for the configured duration and returns
/// how many were created.
pub fn run(settings: &TrafficSettings, building: &Building, fleet: &Fleet, seed: u64) -> Result<usize> {
    let mut traffic = Traffic::new(settings, seed);
    let started = Instant::now();
    let mut spawned = 0;

    while started.elapsed() < settings.duration {
        let (start, destination) = traffic.next_trip();
        building.add_person(start, destination)?;
        if let Err(err) = fleet.press_call_button(start, destination > start) {
            warn!("call from floor {} was rejected: {}", start, err);
        }
        spawned += 1;
        thread::sleep(settings.spawn_interval);
    }

    info!("traffic finished, {} people generated", spawned);
    Ok(spawned)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn settings(start: Vec<u32>, destination: Vec<u32>) -> TrafficSettings {
        TrafficSettings {
            duration: Duration::from_millis(10),
            spawn_interval: Duration::from_millis(1),
            time_scale: 1.0,
            start_probabilities: start,
            destination_probabilities: destination,
        }
    }

    #[test]
    fn test_cumulative() {
        assert_eq!(cumulative(&[10, 0, 60, 30]), vec![10, 10, 70, 100]);
    }

    #[test]
    fn test_trips_follow_tables() {
        let mut traffic = Traffic::new(&settings(vec![0, 100, 0, 0], vec![0, 50, 0, 50]), 7);
        for _ in 0..200 {
            assert_eq!(traffic.next_trip(), (1, 3));
        }
    }

    #[test]
    fn test_trips_never_stay_put() {
        let mut traffic = Traffic::new(&settings(vec![25, 25, 25, 25], vec![25, 25, 25, 25]), 1);
        for _ in 0..500 {
            let (start, destination) = traffic.next_trip();
            assert_ne!(start, destination);
            assert!(start < 4 && destination < 4);
        }
    }

    #[test]
    fn test_same_seed_same_traffic() {
        let table = settings(vec![40, 20, 20, 20], vec![10, 30, 30, 30]);
        let mut first = Traffic::new(&table, 99);
        let mut second = Traffic::new(&table, 99);
        for _ in 0..50 {
            assert_eq!(first.next_trip(), second.next_trip());
        }
    }
}
