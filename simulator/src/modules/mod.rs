use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::bounded;
use fleet::Fleet;
use log::{error, info, warn};
use shared_resources::config::SimulationConfig;
use shared_resources::strategy::StrategyPair;

use crate::error::Result;
use crate::utilities::building::Building;
use crate::utilities::statistics::Report;

mod debug;
mod traffic;

pub fn run() -> Result<()> {
    // READ CONFIGURATION
    let config = SimulationConfig::get()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        "{} floors, {} elevators, time scale {}, seed {}",
        config.fleet.num_floors, config.fleet.num_elevators(), config.traffic.time_scale, seed
    );

    let mut reports = Vec::with_capacity(config.runs.len());
    for (run, strategies) in config.runs.iter().enumerate() {
        info!("RUN {} OF {}: {}", run + 1, config.runs.len(), strategies.as_string());
        reports.push(simulate(&config, *strategies, seed)?);
    }

    for report in &reports {
        println!("{}", report);
    }
    Ok(())
}

/// One run on a fresh building and fleet, so nothing carries over from
/// the previous strategy pair.
fn simulate(config: &SimulationConfig, strategies: StrategyPair, seed: u64) -> Result<Report> {
    let building = Arc::new(Building::new(config.fleet.num_floors));
    let fleet = Fleet::new(config.fleet.clone(), strategies, building.clone())?;
    fleet.start()?;

    // INITIALIZE DEBUG MODULE
    let (stop_tx, stop_rx) = bounded(1);
    let debug_handle = if config.show_status {
        let fleet = fleet.clone();
        let building = building.clone();
        let time_scale = config.traffic.time_scale;
        Some(thread::Builder::new().name("debug".to_string()).spawn(move || {
            if let Err(err) = debug::main(fleet, building, time_scale, stop_rx) {
                error!("status display failed: {}", err);
            }
        })?)
    } else {
        None
    };

    let people = traffic::run(&config.traffic, &building, &fleet, seed)?;

    let drain_started = Instant::now();
    while !building.all_arrived() && drain_started.elapsed() < config.drain {
        thread::sleep(Duration::from_millis(10));
    }
    if !building.all_arrived() {
        let oldest = fleet.oldest_pending_wait().map_or(0.0, |wait| wait.as_secs_f64() * config.traffic.time_scale);
        warn!(
            "{} people still waiting and {} calls pending when the run ended, oldest call waited {:.0}s",
            building.num_waiting(), fleet.pending().len(), oldest
        );
    }

    fleet.shutdown_all();
    fleet.join();

    if let Some(handle) = debug_handle {
        let _ = stop_tx.send(());
        if handle.join().is_err() {
            error!("status display thread panicked");
        }
    }

    let records = building.records(config.traffic.time_scale);
    info!("run finished, {} of {} people delivered", records.len(), people);
    Ok(Report::new(strategies, config.fleet.num_floors, people, &records))
}
