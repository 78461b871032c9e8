use std::time::{Duration, Instant};

use crate::game::StepResult;

/// Per-process play statistics shown by the terminal host
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub food_eaten: u32,
    pub best_length: usize,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            food_eaten: 0,
            best_length: 0,
            games_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    /// Record a discrete move and the snake length after it
    pub fn on_step(&mut self, result: &StepResult, length: usize) {
        if result.growth {
            self.food_eaten += 1;
        }
        self.best_length = self.best_length.max(length);
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.food_eaten = 0;
    }

    pub fn on_game_over(&mut self, final_length: usize) {
        self.games_played += 1;
        self.best_length = self.best_length.max(final_length);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_step_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_step(&StepResult::default(), 10);
        assert_eq!(metrics.food_eaten, 0);
        assert_eq!(metrics.best_length, 10);

        let ate = StepResult {
            growth: true,
            ..Default::default()
        };
        metrics.on_step(&ate, 11);
        assert_eq!(metrics.food_eaten, 1);
        assert_eq!(metrics.best_length, 11);
    }

    #[test]
    fn test_best_length_survives_games() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(14);
        assert_eq!(metrics.best_length, 14);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_start();
        metrics.on_game_over(11);
        assert_eq!(metrics.best_length, 14); // Should not decrease
        assert_eq!(metrics.games_played, 2);
        assert_eq!(metrics.food_eaten, 0);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
