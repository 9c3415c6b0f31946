use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval, interval_at};

use crate::game::{GameConfig, Phase, TickOutcome};
use crate::input::{Command, InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::session::{Session, TimerDirective};

// Longer than any real tick period; stands in for a stopped timer
const PARKED: Duration = Duration::from_secs(3600);

pub struct HumanMode {
    session: Session,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    ticking: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let input_handler = InputHandler::new(config.swipe_threshold);
        let session = Session::new(config, seed);
        tracing::info!(seed = session.seed(), "new session");

        Self {
            session,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler,
            should_quit: false,
            ticking: true,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
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

        let mut tick_timer = self.new_tick_timer(self.session.tick_interval());

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event, &mut tick_timer),
                        Some(Err(err)) => tracing::warn!(%err, "terminal event error"),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.ticking {
                        self.update_game(&mut tick_timer);
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let snapshot = self.session.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.metrics);
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

        tracing::info!(
            games_played = self.metrics.games_played,
            best_score = self.metrics.best_score,
            "session ended"
        );

        Ok(())
    }

    fn handle_event(&mut self, event: Event, tick_timer: &mut Interval) {
        let action = match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.input_handler.handle_key_event(key)
            }
            Event::Mouse(mouse) => self.input_handler.handle_mouse_event(mouse),
            _ => KeyAction::None,
        };

        match action {
            KeyAction::Game(input) => {
                let before = (self.session.phase(), self.session.state().score);
                let (command, directive) = self.session.apply(input);
                self.track_phase(before, command);
                self.apply_directive(directive, tick_timer);
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self, tick_timer: &mut Interval) {
        let (outcome, directive) = self.session.tick();

        if let TickOutcome::Collided(_) = outcome {
            self.metrics.on_game_over(self.session.state().score);
        }

        self.apply_directive(directive, tick_timer);
    }

    fn track_phase(&mut self, before: (Phase, u32), command: Command) {
        let (before, score) = before;
        let after = self.session.phase();
        match (command, before, after) {
            (Command::Restart, Phase::Running | Phase::Paused, _) => {
                // Abandoned game still counts toward the session
                self.metrics.on_game_over(score);
                self.metrics.on_game_start();
            }
            (Command::Restart, Phase::Over, _) => self.metrics.on_game_start(),
            (_, Phase::Running, Phase::Paused) => self.metrics.on_pause(),
            (_, Phase::Paused, Phase::Running) => self.metrics.on_resume(),
            _ => {}
        }
    }

    /// Clear and reschedule the tick timer, or park it
    fn apply_directive(&mut self, directive: TimerDirective, tick_timer: &mut Interval) {
        match directive {
            TimerDirective::Keep => {}
            TimerDirective::Reschedule(period) => {
                tracing::debug!(period_ms = period.as_millis() as u64, "tick timer rescheduled");
                *tick_timer = self.new_tick_timer(period);
                self.ticking = true;
            }
            TimerDirective::Stop => {
                tracing::debug!("tick timer stopped");
                *tick_timer = self.new_tick_timer(PARKED);
                self.ticking = false;
            }
        }
    }

    /// First tick fires one full period from now, not immediately
    fn new_tick_timer(&self, period: Duration) -> Interval {
        let mut timer = interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        timer
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;

    #[tokio::test]
    async fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default(), Some(1));
        assert_eq!(mode.session.phase(), Phase::Running);
        assert_eq!(mode.session.state().score, 0);
        assert!(mode.ticking);
    }

    #[tokio::test]
    async fn test_pause_parks_and_resume_restarts_timer() {
        let mut mode = HumanMode::new(GameConfig::default(), Some(1));
        let mut timer = mode.new_tick_timer(mode.session.tick_interval());

        let (_, directive) = mode.session.apply(InputEvent::PauseToggle);
        mode.apply_directive(directive, &mut timer);
        assert!(!mode.ticking);
        assert_eq!(timer.period(), PARKED);

        let (_, directive) = mode.session.apply(InputEvent::PauseToggle);
        mode.apply_directive(directive, &mut timer);
        assert!(mode.ticking);
        assert_eq!(timer.period(), Duration::from_millis(150));
    }

    #[tokio::test]
    async fn test_restart_counts_abandoned_game() {
        let mut mode = HumanMode::new(GameConfig::default(), Some(1));
        let (command, _) = mode.session.apply(InputEvent::Restart);
        mode.track_phase((Phase::Running, 7), command);
        assert_eq!(mode.metrics.games_played, 1);
        assert_eq!(mode.metrics.best_score, 7);
    }
}
