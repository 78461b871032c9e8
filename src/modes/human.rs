use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::{Duration, Instant};
use tokio::time::interval;
use tracing::{debug, info};

use crate::game::{GameConfig, GameSession, GameStatus};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Keyboard-driven terminal host. Plays the role of the render loop: every
/// frame it feeds a monotonic timestamp to the session and draws the scene.
pub struct HumanMode {
    session: GameSession,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    clock: Instant,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self> {
        let session = match seed {
            Some(seed) => GameSession::with_seed(config, seed),
            None => GameSession::new(config),
        }
        .context("Failed to start game session")?;

        Ok(Self {
            session,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            clock: Instant::now(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Frames at ~60 FPS; discrete moves are timed by the session itself
        let frame_interval = Duration::from_millis(16);
        let mut frame_timer = interval(frame_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Advance the session and render
                _ = frame_timer.tick() => {
                    self.frame();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.session, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            games_played = self.metrics.games_played,
            best_length = self.metrics.best_length,
            "leaving game"
        );
        Ok(())
    }

    fn now(&self) -> f64 {
        self.clock.elapsed().as_secs_f64() * 1000.0
    }

    fn frame(&mut self) {
        self.frame_at(self.now());
    }

    fn frame_at(&mut self, now: f64) {
        let was_running = self.session.status() == GameStatus::Running;

        if let Some(result) = self.session.on_frame(now) {
            self.metrics
                .on_step(&result, self.session.state().snake.len());
        }

        if was_running {
            self.metrics.update();
            if self.session.status() != GameStatus::Running {
                self.metrics.on_game_over(self.session.state().snake.len());
            }
        }
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            match self.input_handler.handle_key_event(key) {
                KeyAction::Key(name) => {
                    if self.session.press_key(&name) {
                        debug!(key = %name, "direction latched");
                    }
                }
                KeyAction::Restart => {
                    self.reset_game()?;
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn reset_game(&mut self) -> Result<()> {
        if self.session.status() == GameStatus::Running {
            self.metrics.on_game_over(self.session.state().snake.len());
        }
        self.session
            .reset(self.now())
            .context("Failed to reset game session")?;
        self.metrics.on_game_start();
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default(), Some(1)).unwrap();
        assert_eq!(mode.session.status(), GameStatus::Running);
        assert_eq!(mode.session.state().snake.len(), 10);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let mut config = GameConfig::default();
        config.board_size = 0;
        assert!(HumanMode::new(config, None).is_err());
    }

    #[test]
    fn test_keys_reach_latch() {
        let mut mode = HumanMode::new(GameConfig::default(), Some(1)).unwrap();

        mode.handle_event(press(KeyCode::Up)).unwrap();
        assert_eq!(
            mode.session.input().direction(),
            Some(crate::game::Direction::Up)
        );

        mode.handle_event(press(KeyCode::Char('a'))).unwrap();
        assert_eq!(
            mode.session.input().direction(),
            Some(crate::game::Direction::Left)
        );

        mode.handle_event(press(KeyCode::Char('q'))).unwrap();
        assert!(mode.should_quit);
    }

    #[test]
    fn test_final_food_is_counted_when_board_fills() {
        let mut config = GameConfig::new(1);
        config.starter_length = 1;
        let mut mode = HumanMode::new(config, Some(3)).unwrap();
        mode.handle_event(press(KeyCode::Char('w'))).unwrap();

        mode.frame_at(501.0);

        assert_eq!(mode.session.status(), GameStatus::BoardFull);
        assert_eq!(mode.metrics.food_eaten, 1);
        assert_eq!(mode.metrics.best_length, 2);
        assert_eq!(mode.metrics.games_played, 1);
    }

    #[test]
    fn test_game_reset() {
        let mut mode = HumanMode::new(GameConfig::default(), Some(1)).unwrap();
        mode.handle_event(press(KeyCode::Char('w'))).unwrap();

        mode.handle_event(press(KeyCode::Char('r'))).unwrap();

        assert_eq!(mode.session.input().direction(), None);
        assert_eq!(mode.metrics.games_played, 1);
        assert_eq!(mode.session.status(), GameStatus::Running);
    }
}
