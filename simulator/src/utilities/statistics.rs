use std::fmt;

use shared_resources::strategy::StrategyPair;

use crate::utilities::person::PersonRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloorStatistics {
    pub riders: usize,
    pub average_wait: f64,
    pub max_wait: f64,
    pub average_ride: f64,
}

/// Wait and ride times of one simulation run, in simulated seconds.
#[derive(Debug, Clone)]
pub struct Report {
    pub strategies: StrategyPair,
    pub people: usize,
    pub delivered: usize,
    pub floors: Vec<FloorStatistics>,
    /// Average ride time from floor `[start][destination]`, if anybody made that trip.
    pub ride_matrix: Vec<Vec<Option<f64>>>,
    pub average_wait: f64,
    pub average_ride: f64,
    /// Every delivered person, ordered by id.
    pub records: Vec<PersonRecord>,
}

fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

impl Report {
    pub fn new(strategies: StrategyPair, num_floors: u8, people: usize, records: &[PersonRecord]) -> Self {
        let num_floors = num_floors as usize;

        let floors = (0..num_floors)
            .map(|floor| {
                let from_here: Vec<&PersonRecord> = records.iter().filter(|record| record.start as usize == floor).collect();
                FloorStatistics {
                    riders: from_here.len(),
                    average_wait: average(from_here.iter().map(|record| record.wait_seconds)),
                    max_wait: from_here.iter().map(|record| record.wait_seconds).fold(0.0, f64::max),
                    average_ride: average(from_here.iter().map(|record| record.ride_seconds)),
                }
            })
            .collect();

        let mut ride_matrix = vec![vec![None; num_floors]; num_floors];
        for (start, row) in ride_matrix.iter_mut().enumerate() {
            for (destination, cell) in row.iter_mut().enumerate() {
                let rides: Vec<f64> = records.iter()
                    .filter(|record| record.start as usize == start && record.destination as usize == destination)
                    .map(|record| record.ride_seconds)
                    .collect();
                if !rides.is_empty() {
                    *cell = Some(average(rides.into_iter()));
                }
            }
        }

        let mut records = records.to_vec();
        records.sort_by_key(|record| record.id);

        Report {
            strategies,
            people,
            delivered: records.len(),
            floors,
            ride_matrix,
            average_wait: average(records.iter().map(|record| record.wait_seconds)),
            average_ride: average(records.iter().map(|record| record.ride_seconds)),
            records,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+---------------------------------------------------------------+")?;
        writeln!(f, "| {0:<61} |", format!("RUN: {}", self.strategies.as_string()))?;
        writeln!(f, "+------------+------------+------------+------------+------------+")?;
        writeln!(f, "| {0:<10} | {1:<10} | {2:<10} | {3:<10} | {4:<10} |", "FLOOR", "RIDERS", "AVG WAIT", "MAX WAIT", "AVG RIDE")?;
        for (floor, stats) in self.floors.iter().enumerate().rev() {
            writeln!(f, "+------------+------------+------------+------------+------------+")?;
            writeln!(
                f,
                "| {0:<10} | {1:<10} | {2:<10.1} | {3:<10.1} | {4:<10.1} |",
                floor, stats.riders, stats.average_wait, stats.max_wait, stats.average_ride
            )?;
        }
        writeln!(f, "+------------+------------+------------+------------+------------+\n")?;

        writeln!(f, "+------------+------------+------------+------------+------------+")?;
        writeln!(f, "| {0:<10} | {1:<10} | {2:<10} | {3:<10} | {4:<10} |", "PERSON", "WAIT", "START", "DEST", "RIDE")?;
        writeln!(f, "+------------+------------+------------+------------+------------+")?;
        for record in &self.records {
            writeln!(
                f,
                "| {0:<10} | {1:<10.1} | {2:<10} | {3:<10} | {4:<10.1} |",
                record.id, record.wait_seconds, record.start, record.destination, record.ride_seconds
            )?;
        }
        writeln!(f, "+------------+------------+------------+------------+------------+\n")?;

        writeln!(f, "AVERAGE RIDE TIME (rows: from, columns: to)")?;
        write!(f, "{0:>6}", "")?;
        for destination in 0..self.ride_matrix.len() {
            write!(f, "{0:>8}", destination)?;
        }
        writeln!(f)?;
        for (start, row) in self.ride_matrix.iter().enumerate() {
            write!(f, "{0:>6}", start)?;
            for cell in row {
                match cell {
                    Some(seconds) => write!(f, "{0:>8.1}", seconds)?,
                    None => write!(f, "{0:>8}", "-")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "people generated: {}, delivered: {}", self.people, self.delivered)?;
        writeln!(f, "average wait: {:.1}s, average ride: {:.1}s", self.average_wait, self.average_ride)
    }
}
