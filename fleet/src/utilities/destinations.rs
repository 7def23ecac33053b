use shared_resources::direction::Direction;

/// Floors an elevator intends to stop at, kept in the order it will reach
/// them: ascending while travelling up, descending while travelling down.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Destinations {
    floors: Vec<u8>,
}

impl Destinations {
    pub fn new() -> Self {
        Destinations { floors: Vec::new() }
    }

    /// Adds `floor` and restores sweep order. Returns false for duplicates.
    pub fn insert(&mut self, floor: u8, direction: Direction) -> bool {
        if self.floors.contains(&floor) {
            return false;
        }
        self.floors.push(floor);
        self.reorder(direction);
        true
    }

    pub fn reorder(&mut self, direction: Direction) {
        match direction {
            Direction::Down => self.floors.sort_unstable_by(|a, b| b.cmp(a)),
            Direction::Up | Direction::Stop => self.floors.sort_unstable(),
        }
    }

    pub fn head(&self) -> Option<u8> {
        self.floors.first().copied()
    }

    pub fn last(&self) -> Option<u8> {
        self.floors.last().copied()
    }

    pub fn pop_head(&mut self) -> Option<u8> {
        if self.floors.is_empty() {
            None
        } else {
            Some(self.floors.remove(0))
        }
    }

    pub fn contains(&self, floor: u8) -> bool {
        self.floors.contains(&floor)
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn clear(&mut self) {
        self.floors.clear();
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.floors
    }

    pub fn is_ordered_for(&self, direction: Direction) -> bool {
        self.floors.windows(2).all(|pair| match direction {
            Direction::Down => pair[0] > pair[1],
            Direction::Up | Direction::Stop => pair[0] < pair[1],
        })
    }

    pub fn as_string(&self) -> String {
        let floors: Vec<String> = self.floors.iter().map(|floor| floor.to_string()).collect();
        format!("[{}]", floors.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_sweep_order() {
        let mut destinations = Destinations::new();
        assert!(destinations.insert(9, Direction::Up));
        assert!(destinations.insert(5, Direction::Up));
        assert!(destinations.insert(7, Direction::Up));
        assert_eq!(destinations.as_slice(), &[5, 7, 9]);
        assert!(destinations.is_ordered_for(Direction::Up));

        let mut destinations = Destinations::new();
        for floor in [1, 6, 3] {
            destinations.insert(floor, Direction::Down);
        }
        assert_eq!(destinations.as_slice(), &[6, 3, 1]);
        assert!(destinations.is_ordered_for(Direction::Down));
    }

    #[test]
    fn test_insert_skips_duplicates() {
        let mut destinations = Destinations::new();
        assert!(destinations.insert(4, Direction::Up));
        assert!(!destinations.insert(4, Direction::Up));
        assert_eq!(destinations.len(), 1);
    }

    #[test]
    fn test_pop_head() {
        let mut destinations = Destinations::new();
        destinations.insert(2, Direction::Up);
        destinations.insert(8, Direction::Up);
        assert_eq!(destinations.head(), Some(2));
        assert_eq!(destinations.last(), Some(8));
        assert_eq!(destinations.pop_head(), Some(2));
        assert_eq!(destinations.pop_head(), Some(8));
        assert_eq!(destinations.pop_head(), None);
        assert!(destinations.is_empty());
    }

    #[test]
    fn test_as_string() {
        let mut destinations = Destinations::new();
        assert_eq!(destinations.as_string(), "[]");
        destinations.insert(3, Direction::Down);
        destinations.insert(7, Direction::Down);
        assert_eq!(destinations.as_string(), "[7,3]");
    }
}
