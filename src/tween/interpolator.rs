use crate::game::Position;

use super::easing::Easing;

/// A single time-bounded transition between two positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Position,
    pub to: Position,
    pub start: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl Tween {
    /// Position at `now`, and whether the tween has run its course.
    /// Once finished the target is returned exactly.
    pub fn sample(&self, now: f64) -> (Position, bool) {
        let elapsed = now - self.start;
        if elapsed >= self.duration {
            return (self.to, true);
        }

        let k = self.easing.apply((elapsed / self.duration).max(0.0) as f32);
        let position = Position::new(
            self.from.x + (self.to.x - self.from.x) * k,
            self.from.y + (self.to.y - self.from.y) * k,
        );
        (position, false)
    }
}

/// Displayed positions of every segment plus the tweens moving them.
///
/// Indexed by segment. Purely presentational: nothing here feeds back into
/// the grid state.
#[derive(Debug, Clone)]
pub struct Interpolator {
    duration: f64,
    easing: Easing,
    displayed: Vec<Position>,
    active: Vec<Option<Tween>>,
}

impl Interpolator {
    pub fn new(duration: f64, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            displayed: Vec::new(),
            active: Vec::new(),
        }
    }

    /// Drop all tweens and show `positions` as they are
    pub fn snap_to(&mut self, positions: &[Position]) {
        self.displayed.clear();
        self.displayed.extend_from_slice(positions);
        self.active.clear();
        self.active.resize(positions.len(), None);
    }

    /// Track a new segment that appears without animation
    pub fn push(&mut self, position: Position) {
        self.displayed.push(position);
        self.active.push(None);
    }

    /// Begin moving segment `index`, replacing any tween still running for it
    pub fn start(&mut self, index: usize, from: Position, to: Position, now: f64) {
        if index >= self.displayed.len() {
            self.displayed.resize(index + 1, from);
            self.active.resize(index + 1, None);
        }

        self.displayed[index] = from;
        self.active[index] = Some(Tween {
            from,
            to,
            start: now,
            duration: self.duration,
            easing: self.easing,
        });
    }

    /// Update every in-flight tween, retiring the finished ones
    pub fn advance(&mut self, now: f64) {
        for (slot, displayed) in self.active.iter_mut().zip(self.displayed.iter_mut()) {
            if let Some(tween) = slot {
                let (position, finished) = tween.sample(now);
                *displayed = position;
                if finished {
                    *slot = None;
                }
            }
        }
    }

    pub fn positions(&self) -> &[Position] {
        &self.displayed
    }

    pub fn in_flight(&self) -> usize {
        self.active.iter().filter(|t| t.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.displayed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displayed.is_empty()
    }
}
