use trollmaze_core::{Direction, Location};

/// A route computed by the search engine: an ordered list of steps and a
/// cursor to the next unconsumed one.
///
/// Consumption is one-directional. Once the cursor reaches the end the path
/// is exhausted and should be dropped; a new route requires a new search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<Direction>,
    next: usize,
}

impl Path {
    /// Create a path positioned at its first step.
    pub fn new(steps: Vec<Direction>) -> Self {
        Self { steps, next: 0 }
    }

    /// The zero-length path from a cell to itself. It is born exhausted.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The step at the cursor, without consuming it.
    #[inline]
    pub fn next_step(&self) -> Option<Direction> {
        self.steps.get(self.next).copied()
    }

    /// Consume the step at the cursor. No-op once exhausted.
    #[inline]
    pub fn advance(&mut self) {
        if self.next < self.steps.len() {
            self.next += 1;
        }
    }

    /// Whether every step has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.steps.len()
    }

    /// Total number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.steps.len() - self.next
    }

    /// Index of the next unconsumed step.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.next
    }

    /// All steps, consumed or not.
    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    /// The cells visited when walking the whole path from `start`,
    /// excluding `start` itself.
    pub fn locations(&self, start: Location) -> impl Iterator<Item = Location> + '_ {
        self.steps.iter().scan(start, |cur, &d| {
            *cur = cur.step(d);
            Some(*cur)
        })
    }

    /// The cell reached by walking the whole path from `start`.
    pub fn destination(&self, start: Location) -> Location {
        self.locations(start).last().unwrap_or(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn consumes_in_order() {
        let mut p = Path::new(vec![East, East, South]);
        assert_eq!(p.len(), 3);
        assert_eq!(p.next_step(), Some(East));
        // peeking does not advance
        assert_eq!(p.next_step(), Some(East));
        p.advance();
        p.advance();
        assert_eq!(p.next_step(), Some(South));
        assert_eq!(p.remaining(), 1);
        p.advance();
        assert!(p.is_exhausted());
        assert_eq!(p.next_step(), None);
        assert_eq!(p.cursor(), 3);
    }

    #[test]
    fn advance_saturates() {
        let mut p = Path::new(vec![North]);
        p.advance();
        p.advance();
        assert_eq!(p.cursor(), 1);
        assert_eq!(p.remaining(), 0);
    }

    #[test]
    fn empty_path_is_exhausted() {
        let p = Path::empty();
        assert!(p.is_empty());
        assert!(p.is_exhausted());
        assert_eq!(p.next_step(), None);
        assert_eq!(p.destination(Location::new(4, 4)), Location::new(4, 4));
    }

    #[test]
    fn walks_locations() {
        let p = Path::new(vec![East, South, South, West]);
        let start = Location::new(1, 1);
        let cells: Vec<_> = p.locations(start).collect();
        assert_eq!(
            cells,
            vec![
                Location::new(2, 1),
                Location::new(2, 2),
                Location::new(2, 3),
                Location::new(1, 3)
            ]
        );
        assert_eq!(p.destination(start), Location::new(1, 3));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip_keeps_cursor() {
        let mut p = Path::new(vec![Direction::North, Direction::West]);
        p.advance();
        let json = serde_json::to_string(&p).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert_eq!(back.next_step(), Some(Direction::West));
    }
}
