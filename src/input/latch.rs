use crate::game::Direction;

/// Last valid steering input. Read once per discrete move, last key wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    direction: Option<Direction>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch the direction bound to `key`. Unknown keys leave the latch alone.
    ///
    /// Returns true if the key was a steering key.
    pub fn set_direction(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.direction = Some(direction);
                true
            }
            None => false,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn clear(&mut self) {
        self.direction = None;
    }
}
