use std::collections::VecDeque;

/// Sliding window over the most recently accepted blue balls.
///
/// Holds at most `capacity` entries; pushing into a full window evicts
/// the oldest entry first. A zero-capacity window never remembers anything.
#[derive(Debug, Clone)]
pub struct BlueWindow {
    recent: VecDeque<u8>,
    capacity: usize,
}

impl BlueWindow {
    pub fn new(capacity: usize) -> Self {
        BlueWindow {
            recent: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Check whether a blue ball was seen within the window
    pub fn contains(&self, blue: u8) -> bool {
        self.recent.contains(&blue)
    }

    /// Record an accepted blue ball, evicting the oldest one if full
    pub fn push(&mut self, blue: u8) {
        if self.capacity == 0 {
            return;
        }
        if self.recent.len() == self.capacity {
            self.recent.pop_front();
        }
        self.recent.push_back(blue);
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Blue balls from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.recent.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evicts_oldest() {
        let mut window = BlueWindow::new(3);
        window.push(1);
        window.push(2);
        window.push(3);
        assert_eq!(window.len(), 3);
        assert!(window.contains(1));

        window.push(4);
        assert_eq!(window.len(), 3);
        assert!(!window.contains(1));
        assert_eq!(window.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_zero_capacity() {
        let mut window = BlueWindow::new(0);
        window.push(5);
        assert!(window.is_empty());
        assert!(!window.contains(5));
    }

    #[test]
    fn test_starts_empty() {
        let window = BlueWindow::new(15);
        assert!(window.is_empty());
        assert_eq!(window.capacity(), 15);
        assert!(!window.contains(1));
    }
}
