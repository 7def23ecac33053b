use crate::call::Call;

/// Travel direction of an elevator. `Stop` means no direction has been
/// chosen yet, which is the case for an empty elevator with nothing queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Stop,
    Up,
}

impl Direction {
    /// Direction that takes an elevator at `from` to `to`.
    pub fn toward(from: u8, to: u8) -> Self {
        if to > from {
            Direction::Up
        } else if to < from {
            Direction::Down
        } else {
            Direction::Stop
        }
    }

    pub fn as_string(self) -> Option<String> {
        match self {
            Direction::Down => Some(String::from("down")),
            Direction::Up => Some(String::from("up")),
            Direction::Stop => None,
        }
    }

    pub fn to_call(self) -> Option<Call> {
        match self {
            Direction::Up => Some(Call::HallUp),
            Direction::Down => Some(Call::HallDown),
            Direction::Stop => None,
        }
    }

    /// True when `floor` is still ahead of (or at) `current` for this direction.
    pub fn reaches(self, current: u8, floor: u8) -> bool {
        match self {
            Direction::Up => floor >= current,
            Direction::Down => floor <= current,
            Direction::Stop => false,
        }
    }

    pub fn step(self, floor: u8) -> u8 {
        match self {
            Direction::Up => floor.saturating_add(1),
            Direction::Down => floor.saturating_sub(1),
            Direction::Stop => floor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toward() {
        assert_eq!(Direction::toward(2, 7), Direction::Up);
        assert_eq!(Direction::toward(7, 2), Direction::Down);
        assert_eq!(Direction::toward(4, 4), Direction::Stop);
    }

    #[test]
    fn test_reaches_is_inclusive() {
        assert!(Direction::Up.reaches(5, 5));
        assert!(Direction::Up.reaches(5, 8));
        assert!(!Direction::Up.reaches(5, 4));
        assert!(Direction::Down.reaches(5, 5));
        assert!(Direction::Down.reaches(5, 0));
        assert!(!Direction::Down.reaches(5, 6));
        assert!(!Direction::Stop.reaches(5, 5));
    }

    #[test]
    fn test_to_call() {
        assert_eq!(Direction::Up.to_call(), Some(Call::HallUp));
        assert_eq!(Direction::Down.to_call(), Some(Call::HallDown));
        assert_eq!(Direction::Stop.to_call(), None);
        assert_eq!(Direction::Stop.as_string(), None);
    }
}
