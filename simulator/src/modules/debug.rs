use std::io::{stdout, Stdout, Write};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{select, tick, Receiver};
use crossterm::{cursor, terminal, ExecutableCommand, Result};
use fleet::Fleet;

use crate::utilities::building::Building;

const HEADER_SIZE: u16 = 6;

pub fn main(fleet: Fleet, building: Arc<Building>, time_scale: f64, stop_rx: Receiver<()>) -> Result<()> {
    let mut stdout = stdout();
    let timer = tick(Duration::from_millis(250));

    loop {
        select! {
            recv(timer) -> _ => {
                printstatus(&mut stdout, &fleet, &building, time_scale)?;
            },
            recv(stop_rx) -> _ => {
                printstatus(&mut stdout, &fleet, &building, time_scale)?;
                writeln!(stdout)?;
                return Ok(());
            },
        }
    }
}

/// Oldest pending wait in simulated seconds, or "-" with an empty pool.
fn oldest_wait(wait: Option<Duration>, time_scale: f64) -> String {
    match wait {
        Some(wait) => format!("{:.0}s", wait.as_secs_f64() * time_scale),
        None => String::from("-"),
    }
}

fn printstatus(stdout: &mut Stdout, fleet: &Fleet, building: &Building, time_scale: f64) -> Result<()> {
    stdout.execute(terminal::Clear(terminal::ClearType::FromCursorDown))?;

    writeln!(stdout, "+------------------------------------------------------------------------------+")?;
    writeln!(stdout, "| {0:<76} |", format!(
        "ELEVATORS   pending: {} (oldest {})   waiting: {}   delivered: {}",
        fleet.pending().len(),
        oldest_wait(fleet.oldest_pending_wait(), time_scale),
        building.num_waiting(),
        building.num_arrived()
    ))?;
    writeln!(stdout, "+------------+------------+------------+------------+------------+--------------+")?;
    writeln!(stdout, "| {0:<10} | {1:<10} | {2:<10} | {3:<10} | {4:<10} | {5:<12} |", "ID", "STATE", "FLOOR", "DIRECTION", "RIDERS", "DESTINATIONS")?;
    writeln!(stdout, "+------------+------------+------------+------------+------------+--------------+")?;
    let snapshot = fleet.snapshot();
    for (id, status) in snapshot.iter().enumerate() {
        writeln!(stdout, "| {0:<10} | {1:<10} | {2:<10} | {3:<10} | {4:<10} | {5:<12} |",
            id,
            status.behaviour.as_string(),
            status.floor,
            status.direction.as_string().unwrap_or_else(|| String::from("-")),
            status.occupants.len(),
            status.destinations.as_string(),
        )?;
    }
    writeln!(stdout, "+------------+------------+------------+------------+------------+--------------+")?;

    stdout.execute(cursor::MoveUp(HEADER_SIZE + snapshot.len() as u16))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oldest_wait_in_simulated_seconds() {
        assert_eq!(oldest_wait(None, 10.0), "-");
        assert_eq!(oldest_wait(Some(Duration::from_millis(1500)), 10.0), "15s");
        assert_eq!(oldest_wait(Some(Duration::from_secs(3)), 1.0), "3s");
    }
}
