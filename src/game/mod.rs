mod field;
mod food;
mod heading;
mod snake;
use self::field::{Field, Point};
use self::food::Food;
use self::heading::Heading;
use self::snake::Snake;
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::replay::ReplayScreen;
use crate::scores::Scoreboard;
use crate::speed::Speed;
use crate::util::{get_display_area, Globals};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::Instant;

/// One session of play, from the first step to the end of the game-over
/// pause.
///
/// Two deadlines pace the session: the controller tick, fixed at
/// [`consts::TICK_PERIOD`] so steering stays responsive, and the snake's
/// step deadline, derived from the session speed.  Input between ticks only
/// records a pending heading; all movement and collision work happens in
/// [`step`][Game::step].
#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    globals: Globals,
    speed: Speed,
    field: Field,
    snake: Snake,
    food: Food,
    scores: Scoreboard,
    /// Best score on record, cached for the score bar and refreshed after
    /// the end-of-session commit
    best: u32,
    phase: Phase,
    next_tick: Option<Instant>,
    next_step: Option<Instant>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Playing,
    /// Terminal collision happened at `since`; the summary stays up until
    /// [`consts::GAME_OVER_PAUSE`] has elapsed
    Over { since: Instant },
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(globals: Globals, speed: Speed) -> Self {
        Game::new_with_rng(globals, speed, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(globals: Globals, speed: Speed, mut rng: R) -> Game<R> {
        let field = Field::default();
        let snake = Snake::new(Point::ORIGIN, Heading::Right);
        let food = Food::place(&mut rng, field, &snake);
        let scores = Scoreboard::new(globals.scores_path());
        let best = scores.best();
        Game {
            rng,
            globals,
            speed,
            field,
            snake,
            food,
            scores,
            best,
            phase: Phase::Playing,
            next_tick: None,
            next_step: None,
        }
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        match self.phase {
            Phase::Playing => {
                let now = Instant::now();
                let deadline = *self.next_tick.get_or_insert_with(|| now + consts::TICK_PERIOD);
                let wait = deadline.saturating_duration_since(now);
                if wait.is_zero() || !poll(wait)? {
                    self.next_tick = None;
                    self.tick(Instant::now());
                    Ok(None)
                } else {
                    Ok(self.handle_event(read()?))
                }
            }
            Phase::Over { since } => {
                let deadline = since + consts::GAME_OVER_PAUSE;
                let wait = deadline.saturating_duration_since(Instant::now());
                if wait.is_zero() || !poll(wait)? {
                    Ok(Some(Screen::Replay(ReplayScreen::new(
                        self.globals.clone(),
                    ))))
                } else {
                    Ok(self.handle_event(read()?))
                }
            }
        }
    }

    /// One controller tick.  The snake steps only when its own deadline,
    /// set by the session speed, has come around.
    fn tick(&mut self, now: Instant) {
        if self.phase != Phase::Playing {
            return;
        }
        let due = *self.next_step.get_or_insert(now);
        if now < due {
            return;
        }
        self.next_step = Some(due + self.speed.step_period());
        self.step(now);
    }

    /// Advance the snake one step and settle the consequences, in order:
    /// leaving the field, eating the pellet, biting the body.  Eating wins
    /// over biting when one step does both.
    fn step(&mut self, now: Instant) {
        self.snake.advance();
        let head = self.snake.head();
        if !self.field.contains(head) {
            self.game_over(now);
        } else if head.within(self.food.position(), consts::EAT_RADIUS) {
            self.food.respawn(&mut self.rng, self.field, &self.snake);
            self.snake.grow();
            self.scores.increment();
        } else if self.snake.bites_self() {
            self.game_over(now);
        }
    }

    /// The session is done: put the best score on record before anything
    /// is presented, then freeze the board for the pause.
    fn game_over(&mut self, now: Instant) {
        let _ = self.scores.commit_if_record();
        self.best = self.scores.best();
        self.phase = Phase::Over { since: now };
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        match self.phase {
            Phase::Playing => match cmd {
                Command::Quit => return Some(Screen::Quit),
                Command::Up => self.snake.set_heading(Heading::Up),
                Command::Down => self.snake.set_heading(Heading::Down),
                Command::Left => self.snake.set_heading(Heading::Left),
                Command::Right => self.snake.set_heading(Heading::Right),
                Command::Enter | Command::Esc => (),
            },
            // Only the close control means anything during the game-over
            // pause; it skips the replay prompt entirely.
            Phase::Over { .. } => {
                if cmd == Command::Quit {
                    return Some(Screen::Quit);
                }
            }
        }
        None
    }
}

fn draw_cell(buf: &mut Buffer, cell: Position, symbol: char, style: Style) {
    if let Some(cell) = buf.cell_mut(cell) {
        cell.set_char(symbol);
        cell.set_style(Style::reset().patch(style));
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(display);
        Block::bordered().render(board_area, buf);
        let pitch = board_area.inner(Margin::new(1, 1));

        match self.phase {
            Phase::Playing => {
                Line::styled(
                    format!(
                        " Score: {}  /  Best: {}",
                        self.scores.current(),
                        self.best
                    ),
                    consts::SCORE_BAR_STYLE,
                )
                .render(score_area, buf);
                if let Some(cell) = self.field.project(self.food.position(), pitch) {
                    draw_cell(buf, cell, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
                }
                for p in self.snake.segments().skip(1) {
                    if let Some(cell) = self.field.project(p, pitch) {
                        draw_cell(buf, cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
                    }
                }
                // Head last, so it wins the cell when the body doubles back
                if let Some(cell) = self.field.project(self.snake.head(), pitch) {
                    draw_cell(
                        buf,
                        cell,
                        self.snake.heading().head_symbol(),
                        consts::SNAKE_STYLE,
                    );
                }
            }
            Phase::Over { .. } => {
                // Snake, pellet, and score bar are all withheld; only the
                // summary is shown.
                let mut y = pitch.y + pitch.height / 2;
                for (ln, style) in [
                    ("G A M E   O V E R".to_owned(), consts::GAME_OVER_STYLE),
                    (String::new(), Style::new()),
                    (format!("Your score: {}", self.scores.current()), Style::new()),
                    (format!("Best score: {}", self.best), Style::new()),
                ] {
                    Line::styled(ln, style).centered().render(
                        Rect {
                            y,
                            height: 1,
                            ..pitch
                        },
                        buf,
                    );
                    y += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, FileConfig};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;
    use std::path::PathBuf;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn globals_with_scores(path: Option<PathBuf>) -> Globals {
        Globals {
            config: Config {
                files: FileConfig {
                    scores_file: path,
                    save_scores: true,
                },
            },
        }
    }

    fn test_globals() -> Globals {
        Globals {
            config: Config {
                files: FileConfig {
                    scores_file: None,
                    save_scores: false,
                },
            },
        }
    }

    fn test_game(globals: Globals) -> Game<ChaCha12Rng> {
        let speed = "15".parse::<Speed>().expect("speed should parse");
        Game::new_with_rng(globals, speed, ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn place_snake(game: &mut Game<ChaCha12Rng>, segments: &[Point], heading: Heading) {
        game.snake.segments = VecDeque::from(segments.to_vec());
        game.snake.heading = heading;
    }

    #[test]
    fn eating_grows_scores_and_respawns() {
        let mut game = test_game(test_globals());
        game.food.position = Point::new(25, 0);
        let len = game.snake.len();
        game.step(Instant::now());
        assert_eq!(game.snake.head(), Point::new(20, 0));
        assert_eq!(game.scores.current(), 1);
        assert_eq!(game.snake.len(), len + 1);
        assert_eq!(game.phase, Phase::Playing);
        // The pellet moved somewhere the head cannot already reach.
        assert!(!game.snake.head().within(game.food.position(), consts::EAT_RADIUS));
    }

    #[test]
    fn leaving_the_field_ends_the_session() {
        let mut game = test_game(test_globals());
        game.food.position = Point::new(-300, -300);
        place_snake(
            &mut game,
            &[Point::new(480, 0), Point::new(460, 0), Point::new(440, 0)],
            Heading::Right,
        );
        game.step(Instant::now());
        assert_eq!(game.snake.head(), Point::new(500, 0));
        assert!(matches!(game.phase, Phase::Over { .. }));
    }

    #[test]
    fn a_head_inside_the_boundary_survives() {
        let mut game = test_game(test_globals());
        game.food.position = Point::new(-300, -300);
        place_snake(
            &mut game,
            &[Point::new(464, 0), Point::new(444, 0), Point::new(424, 0)],
            Heading::Right,
        );
        game.step(Instant::now());
        assert_eq!(game.snake.head(), Point::new(484, 0));
        assert_eq!(game.phase, Phase::Playing);
    }

    #[test]
    fn a_head_just_past_the_boundary_dies() {
        let mut game = test_game(test_globals());
        game.food.position = Point::new(-300, -300);
        place_snake(
            &mut game,
            &[Point::new(466, 0), Point::new(446, 0), Point::new(426, 0)],
            Heading::Right,
        );
        game.step(Instant::now());
        assert_eq!(game.snake.head(), Point::new(486, 0));
        assert!(matches!(game.phase, Phase::Over { .. }));
    }

    #[test]
    fn eating_takes_priority_over_biting() {
        let mut game = test_game(test_globals());
        game.food.position = Point::new(-300, -300);
        game.step(Instant::now());
        // Reverse straight back into the body, onto the pellet.
        game.food.position = Point::new(0, 0);
        game.snake.set_heading(Heading::Left);
        game.step(Instant::now());
        assert_eq!(game.snake.head(), Point::new(0, 0));
        assert_eq!(game.scores.current(), 1);
        assert_eq!(game.phase, Phase::Playing);
    }

    #[test]
    fn biting_the_body_ends_the_session() {
        let mut game = test_game(test_globals());
        game.food.position = Point::new(-300, -300);
        game.step(Instant::now());
        game.snake.set_heading(Heading::Left);
        game.step(Instant::now());
        assert!(matches!(game.phase, Phase::Over { .. }));
    }

    #[test]
    fn steering_is_deferred_to_the_next_step() {
        let mut game = test_game(test_globals());
        game.food.position = Point::new(-300, -300);
        let ev = Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert!(game.handle_event(ev).is_none());
        assert_eq!(game.snake.heading(), Heading::Right);
        game.step(Instant::now());
        assert_eq!(game.snake.head(), Point::new(0, 20));
    }

    #[test]
    fn close_during_pause_skips_the_replay_prompt() {
        let mut game = test_game(test_globals());
        game.phase = Phase::Over {
            since: Instant::now(),
        };
        let score = game.scores.current();
        let len = game.snake.len();
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(game.handle_event(ev), Some(Screen::Quit)));
        assert_eq!(game.scores.current(), score);
        assert_eq!(game.snake.len(), len);
    }

    #[test]
    fn other_keys_do_nothing_during_the_pause() {
        let mut game = test_game(test_globals());
        game.phase = Phase::Over {
            since: Instant::now(),
        };
        let ev = Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert!(game.handle_event(ev).is_none());
    }

    #[test]
    fn a_session_commits_its_record_on_game_over() {
        let dir = tempfile::tempdir().expect("tempdir should be creatable");
        let path = dir.path().join("best-score.txt");
        fs_err::write(&path, "1").expect("write should succeed");
        let mut game = test_game(globals_with_scores(Some(path.clone())));
        assert_eq!(game.best, 1);

        // Three pellets eaten, then a boundary collision.
        for _ in 0..3 {
            let target = game.snake.heading().step(game.snake.head(), consts::STEP_SIZE);
            game.food.position = target;
            game.step(Instant::now());
        }
        assert_eq!(game.scores.current(), 3);
        place_snake(
            &mut game,
            &[Point::new(480, 0), Point::new(460, 0), Point::new(440, 0)],
            Heading::Right,
        );
        game.step(Instant::now());
        assert!(matches!(game.phase, Phase::Over { .. }));
        assert_eq!(game.best, 3);
        assert_eq!(
            fs_err::read_to_string(&path).expect("read should succeed"),
            "3\n"
        );
    }
}
