use super::config::TimingConfig;

/// Fixed-interval clock deciding when the next discrete move happens.
///
/// Driven by host timestamps in milliseconds. At most one move fires per call.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveScheduler {
    last_tick: f64,
    loop_time_step: f64,
    tween_time_step: f64,
    carry_surplus: bool,
}

impl MoveScheduler {
    pub fn new(timing: &TimingConfig) -> Self {
        Self {
            last_tick: 0.0,
            loop_time_step: timing.loop_time_step,
            tween_time_step: timing.tween_time_step,
            carry_surplus: timing.carry_surplus,
        }
    }

    /// Returns true when a move is due at `now`
    pub fn tick(&mut self, now: f64) -> bool {
        let accumulated = now - self.last_tick;
        if accumulated <= self.loop_time_step {
            return false;
        }

        if self.carry_surplus && accumulated < 2.0 * self.loop_time_step {
            // Carried surplus never brings the next move closer than one tween
            self.last_tick = (self.last_tick + self.loop_time_step)
                .max(now - self.loop_time_step + self.tween_time_step);
        } else {
            // Drop the surplus, or resync after falling a full interval behind
            self.last_tick = now;
        }
        true
    }

    pub fn last_tick(&self) -> f64 {
        self.last_tick
    }

    /// Restart the interval from `now`
    pub fn reset(&mut self, now: f64) {
        self.last_tick = now;
    }
}
