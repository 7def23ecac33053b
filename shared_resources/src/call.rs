use crate::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    HallUp = 0,
    HallDown = 1,
}

impl Call {
    pub fn from_going_up(going_up: bool) -> Self {
        if going_up {
            Call::HallUp
        } else {
            Call::HallDown
        }
    }

    pub fn is_up(self) -> bool {
        self == Call::HallUp
    }

    pub fn direction(self) -> Direction {
        match self {
            Call::HallUp => Direction::Up,
            Call::HallDown => Direction::Down,
        }
    }

    pub fn as_string(self) -> String {
        match self {
            Call::HallUp => String::from("up"),
            Call::HallDown => String::from("down"),
        }
    }
}
