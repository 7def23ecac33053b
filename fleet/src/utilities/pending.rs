use std::time::{Duration, Instant};

use shared_resources::request::Request;

use crate::error::Result;

/// Hall calls nobody could take when they came in.
#[derive(Debug, Clone)]
pub struct PendingPool {
    requests: Vec<Request>,
    request_timers: Vec<Instant>,
}

impl Default for PendingPool {
    fn default() -> Self {
        PendingPool::new()
    }
}

impl PendingPool {
    pub fn new() -> Self {
        PendingPool {
            requests: Vec::new(),
            request_timers: Vec::new(),
        }
    }

    pub fn get_requests(&self) -> Vec<Request> {
        self.requests.clone()
    }

    pub fn insert_request(&mut self, request: Request) {
        self.requests.push(request);
        self.request_timers.push(Instant::now());
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn clear(&mut self) {
        self.requests.clear();
        self.request_timers.clear();
    }

    /// How long the oldest call has been waiting.
    pub fn oldest_wait(&self) -> Option<Duration> {
        self.request_timers.iter().map(Instant::elapsed).max()
    }

    /// Index of the call farthest from `floor`. Ties go to the oldest.
    pub fn farthest_from(&self, floor: u8) -> Option<usize> {
        let mut farthest: Option<(usize, u8)> = None;
        for (index, request) in self.requests.iter().enumerate() {
            let distance = request.floor.abs_diff(floor);
            match farthest {
                Some((_, best)) if best >= distance => {}
                _ => farthest = Some((index, distance)),
            }
        }
        farthest.map(|(index, _)| index)
    }

    pub fn remove(&mut self, index: usize) -> Option<Request> {
        if index >= self.requests.len() {
            return None;
        }
        self.request_timers.remove(index);
        Some(self.requests.remove(index))
    }

    /// Counts calls strictly above and strictly below `floor`.
    pub fn partition(&self, floor: u8) -> (usize, usize) {
        let above = self.requests.iter().filter(|request| request.floor > floor).count();
        let below = self.requests.iter().filter(|request| request.floor < floor).count();
        (above, below)
    }

    /// Offers every call to `claim` oldest first and drops the ones it
    /// takes. Returns how many were taken.
    pub fn claim<F>(&mut self, mut claim: F) -> Result<usize>
    where
        F: FnMut(&Request) -> Result<bool>,
    {
        let mut claimed = 0;
        let mut index = 0;
        while index < self.requests.len() {
            if claim(&self.requests[index])? {
                self.remove(index);
                claimed += 1;
            } else {
                index += 1;
            }
        }
        Ok(claimed)
    }
}
