//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Cadence of the controller's input/animation loop.  Independent of the
/// per-session speed, which only paces the snake's steps.
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(50);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Half-width of the playfield in world units; a head with `|x|` beyond this
/// is out of bounds.
pub(crate) const FIELD_HALF_WIDTH: i32 = 485;

/// Half-height of the playfield in world units; a head with `|y|` beyond
/// this is out of bounds.
pub(crate) const FIELD_HALF_HEIGHT: i32 = 385;

/// Distance in world units that the snake moves per step
pub(crate) const STEP_SIZE: i32 = 20;

/// Number of segments a snake starts a session with, head included
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 6;

/// A pellet closer to the head than this is eaten
pub(crate) const EAT_RADIUS: i32 = 15;

/// An eligible body segment closer to the head than this is a collision
pub(crate) const SELF_COLLIDE_RADIUS: i32 = 10;

/// Pellets spawn at least this far inside the playfield boundary
pub(crate) const FOOD_MARGIN: i32 = 20;

/// How many random points to try before giving up on finding a pellet spot
/// clear of the snake
pub(crate) const FOOD_PLACEMENT_ATTEMPTS: u32 = 64;

/// Smallest accepted snake speed, in steps per second
pub(crate) const SPEED_MIN: u16 = 10;

/// Largest accepted snake speed, in steps per second
pub(crate) const SPEED_MAX: u16 = 20;

/// How long the game-over summary stays up before the replay prompt
pub(crate) const GAME_OVER_PAUSE: Duration = Duration::from_millis(1500);

/// How long transient notices (input hints, invalid-entry messages) stay up
pub(crate) const NOTICE_TTL: Duration = Duration::from_millis(1500);

/// How long the farewell screen stays up before the program exits
pub(crate) const FAREWELL_PAUSE: Duration = Duration::from_millis(1200);

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '>';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '<';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the pellet
pub(crate) const FOOD_SYMBOL: char = '●';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD);

/// Style for the pellet
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightGreen);

/// Style for the game-over summary
pub(crate) const GAME_OVER_STYLE: Style =
    Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for transient notices
pub(crate) const NOTICE_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::ITALIC);

/// Style for the farewell message
pub(crate) const FAREWELL_STYLE: Style = Style::new().fg(Color::Gray);
