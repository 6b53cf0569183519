//! The game loop driver
//!
//! A fixed-rate tick loop over the session: pump key events in arrival
//! order, advance the session exactly once per tick, draw, repeat. The
//! driver owns no game data, only the session handle and the timing.

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::audio::AudioSink;
use crate::game::GameConfig;
use crate::input::InputHandler;
use crate::persistence::HighScoreStore;
use crate::render::Renderer;
use crate::session::Session;

pub struct App<S: AudioSink> {
    session: Session,
    renderer: Renderer,
    input_handler: InputHandler,
    sink: S,
    tick_interval: Duration,
}

impl<S: AudioSink> App<S> {
    pub fn new(config: GameConfig, store: HighScoreStore, sink: S) -> Self {
        // A tick is a whole number of milliseconds, so the rate caps out at
        // 1000; anything higher would truncate to a zero period, which the
        // interval timer rejects
        let tick_rate = config.tick_rate.clamp(1, 1000);
        let tick_interval = Duration::from_millis(1000 / tick_rate);

        Self {
            session: Session::new(config, store),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            sink,
            tick_interval,
        }
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
        let mut tick_timer = interval(self.tick_interval);

        loop {
            // One quit check per tick covers every screen; the select below
            // keeps the pacing sleep interruptible by input and Ctrl+C
            if self.session.should_quit() {
                break;
            }

            tokio::select! {
                // Key events, dispatched in arrival order
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // One session update plus one frame per tick
                _ = tick_timer.tick() => {
                    self.session.tick();
                    self.forward_cues();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.session);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.session.request_quit();
                }
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let command = self.input_handler.handle_key_event(key);
            self.session.handle_command(command);
            self.forward_cues();
        }
    }

    fn forward_cues(&mut self) {
        for cue in self.session.take_cues() {
            self.sink.cue(cue);
        }
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
    use crate::audio::NullSink;
    use crate::session::Screen;
    use tempfile::TempDir;

    #[test]
    fn test_app_starts_on_welcome() {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::new(dir.path().join("high_score.txt"));
        let app = App::new(GameConfig::default(), store, NullSink);

        assert!(matches!(app.session.screen, Screen::Welcome));
        assert!(!app.session.should_quit());
        assert_eq!(app.tick_interval, Duration::from_millis(16));
    }

    #[test]
    fn test_tick_interval_follows_config() {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::new(dir.path().join("high_score.txt"));
        let mut config = GameConfig::default();
        config.tick_rate = 10;
        let app = App::new(config, store, NullSink);

        assert_eq!(app.tick_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_tick_interval_never_zero() {
        let dir = TempDir::new().unwrap();

        // Above 1000 ticks/s the millisecond division would hit zero, which
        // the interval timer refuses; the rate is clamped instead
        for tick_rate in [1001, 5000, u64::MAX] {
            let store = HighScoreStore::new(dir.path().join("high_score.txt"));
            let mut config = GameConfig::default();
            config.tick_rate = tick_rate;
            let app = App::new(config, store, NullSink);
            assert_eq!(app.tick_interval, Duration::from_millis(1));
        }

        // Zero clamps up to one tick per second
        let store = HighScoreStore::new(dir.path().join("high_score.txt"));
        let mut config = GameConfig::default();
        config.tick_rate = 0;
        let app = App::new(config, store, NullSink);
        assert_eq!(app.tick_interval, Duration::from_millis(1000));
    }
}
