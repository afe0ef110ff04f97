use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::game::{GameConfig, GameState, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;

/// Owns the game session and drives it from a fixed-interval timer
pub struct GameLoop {
    state: GameState,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    ticks: u64,
}

impl GameLoop {
    pub fn new(config: GameConfig) -> Self {
        Self::with_state(GameState::new(config))
    }

    pub fn with_state(state: GameState) -> Self {
        Self {
            state,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            ticks: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        info!("game started, ticking every {:?}", self.state.config().tick_interval());

        // Everything after raw mode is undone on every exit path
        let result = self.run_in_terminal().await;
        let cleanup = restore_terminal();

        info!(
            "game stopped after {} ticks, snake length {}",
            self.ticks,
            self.state.snake.len()
        );

        prefer_loop_error(result, cleanup)
    }

    async fn run_in_terminal(&mut self) -> Result<()> {
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        self.run_game_loop(&mut terminal).await
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = tick_timer(self.state.config().tick_interval());

        self.draw(terminal)?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_event(event) {
                                self.draw(terminal)?;
                            }
                        }
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick, followed by exactly one redraw
                _ = tick_timer.tick() => {
                    self.on_tick();
                    self.draw(terminal)?;
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

        Ok(())
    }

    /// Apply a terminal event; returns true when the screen needs a redraw
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => {
                let action = self.input_handler.handle_key_event(key);
                self.handle_key_action(action);
                false
            }
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Turn(direction) => {
                if !self.state.request_direction_change(direction) {
                    debug!("ignored turn to {:?}", direction);
                }
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    /// One timer tick: re-open the turn window, then step the simulation
    pub fn on_tick(&mut self) -> TickOutcome {
        self.state.clear_direction_change();
        self.ticks += 1;
        self.state.tick()
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        terminal
            .draw(|frame| self.renderer.render(frame, &self.state))
            .context("Failed to draw frame")?;
        Ok(())
    }
}

/// Timer whose first tick fires one full period after creation
fn tick_timer(period: Duration) -> Interval {
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}

/// Leave the alternate screen, show the cursor and drop raw mode
fn restore_terminal() -> Result<()> {
    let mut stderr = stderr();
    let screen = execute!(stderr, LeaveAlternateScreen, Show)
        .context("Failed to leave alternate screen");
    disable_raw_mode().context("Failed to disable raw mode")?;
    screen
}

/// The loop's own failure wins over a failure while restoring the terminal
fn prefer_loop_error(result: Result<()>, cleanup: Result<()>) -> Result<()> {
    match (result, cleanup) {
        (Err(err), Err(cleanup_err)) => {
            warn!("terminal cleanup also failed: {cleanup_err:#}");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), cleanup) => cleanup,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position, Snake, Vector};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn game_loop(food: Position) -> GameLoop {
        let snake = Snake::new(Position::new(0, 0), Direction::Right);
        GameLoop::with_state(GameState::from_parts(GameConfig::default(), snake, food, 5))
    }

    fn press(game: &mut GameLoop, code: KeyCode) {
        game.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_game_initialization() {
        let game = GameLoop::new(GameConfig::default());
        assert_eq!(game.state().snake.len(), 1);
        assert!(!game.should_quit());
    }

    #[test]
    fn test_single_turn_per_tick() {
        let mut game = game_loop(Position::new(400, 400));

        press(&mut game, KeyCode::Down);
        press(&mut game, KeyCode::Left);
        assert_eq!(game.state().direction(), Direction::Down);

        game.on_tick();
        assert_eq!(game.state().snake.head(), Position::new(0, 40));

        press(&mut game, KeyCode::Left);
        game.on_tick();
        assert_eq!(game.state().snake.head(), Position::new(-40, 40));
    }

    #[test]
    fn test_reverse_then_perpendicular() {
        let mut game = game_loop(Position::new(400, 400));

        press(&mut game, KeyCode::Left);
        assert_eq!(game.state().direction(), Direction::Right);

        press(&mut game, KeyCode::Up);
        assert_eq!(game.state().direction(), Direction::Up);
    }

    #[test]
    fn test_tick_grows_on_food() {
        let mut game = game_loop(Position::new(0, 0));

        assert_eq!(game.on_tick(), TickOutcome::Grew);
        assert_eq!(
            game.state().snake.segments().collect::<Vec<_>>(),
            vec![Vector::new(0, 0), Vector::new(40, 0)]
        );
    }

    #[test]
    fn test_quit_key() {
        let mut game = game_loop(Position::new(400, 400));

        press(&mut game, KeyCode::Esc);
        assert!(game.should_quit());
    }

    #[test]
    fn test_resize_requests_redraw() {
        let mut game = game_loop(Position::new(400, 400));
        assert!(game.handle_event(Event::Resize(80, 24)));
        assert!(!game.handle_event(Event::FocusGained));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_waits_one_period() {
        let period = Duration::from_millis(60);
        let start = Instant::now();
        let mut timer = tick_timer(period);

        timer.tick().await;
        assert_eq!(start.elapsed(), period);

        timer.tick().await;
        assert_eq!(start.elapsed(), period * 2);
    }

    #[test]
    fn test_loop_error_wins_over_cleanup_error() {
        let result = prefer_loop_error(
            Err(anyhow::anyhow!("draw failed")),
            Err(anyhow::anyhow!("restore failed")),
        );
        assert_eq!(result.unwrap_err().to_string(), "draw failed");
    }

    #[test]
    fn test_cleanup_error_reported_after_clean_loop() {
        let result = prefer_loop_error(Ok(()), Err(anyhow::anyhow!("restore failed")));
        assert_eq!(result.unwrap_err().to_string(), "restore failed");

        assert!(prefer_loop_error(Ok(()), Ok(())).is_ok());
        assert!(prefer_loop_error(Err(anyhow::anyhow!("setup failed")), Ok(())).is_err());
    }
}
