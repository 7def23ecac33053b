/// ----- BACKFILL MODULE -----
/// Hands pending hall calls to an elevator that just ran out of work.
/// Called by the elevator's own worker with the fleet's pending pool
/// locked, so every claimed call leaves the pool exactly once.

use log::debug;
use shared_resources::direction::Direction;
use shared_resources::strategy::BackfillStrategy;

use crate::error::Result;
use crate::utilities::elevator::Elevator;
use crate::utilities::pending::PendingPool;

/// Returns false straight away for an empty pool, otherwise whether the
/// elevator ended up claiming anything.
pub fn run(strategy: BackfillStrategy, elevator: &Elevator, floor: u8, pending: &mut PendingPool) -> Result<bool> {
    if pending.is_empty() {
        return Ok(false);
    }
    let claimed = match strategy {
        BackfillStrategy::FarthestFirst => farthest_first(elevator, floor, pending)?,
        BackfillStrategy::DensityBased => density_based(elevator, floor, pending)?,
    };
    if claimed > 0 {
        debug!(
            "elevator {} claimed {} pending calls, {} left",
            elevator.id(), claimed, pending.len()
        );
    }
    Ok(claimed > 0)
}

fn farthest_first(elevator: &Elevator, floor: u8, pending: &mut PendingPool) -> Result<usize> {
    let mut claimed = 0;
    if let Some(index) = pending.farthest_from(floor) {
        let request = pending.get_requests()[index];
        if elevator.offer(&request, |_| true)? {
            pending.remove(index);
            claimed += 1;
        }
    }
    claimed += pending.claim(|request| elevator.offer(request, |_| true))?;
    Ok(claimed)
}

fn density_based(elevator: &Elevator, floor: u8, pending: &mut PendingPool) -> Result<usize> {
    let (above, below) = pending.partition(floor);
    // ties sweep downward
    let sweep = if above > below { Direction::Up } else { Direction::Down };
    debug!("elevator {} at floor {}: {} calls above, {} below, sweeping {:?}", elevator.id(), floor, above, below, sweep);

    let claimed = pending.claim(|request| {
        let on_side = match sweep {
            Direction::Up => request.floor > floor,
            _ => request.floor < floor,
        };
        if on_side {
            elevator.offer(request, |_| true)
        } else {
            Ok(false)
        }
    })?;
    if claimed > 0 {
        return Ok(claimed);
    }

    // nothing on either side, so take calls at this very floor
    pending.claim(|request| {
        if request.floor == floor {
            elevator.offer(request, |_| true)
        } else {
            Ok(false)
        }
    })
}
