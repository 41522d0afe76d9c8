use crate::consts;
use super::field::Point;

/// One of the four directions the snake can travel in
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Return the point `distance` world units from `pos` in this direction
    pub(crate) fn step(self, pos: Point, distance: i32) -> Point {
        let Point { mut x, mut y } = pos;
        match self {
            Heading::Up => y += distance,
            Heading::Down => y -= distance,
            Heading::Left => x -= distance,
            Heading::Right => x += distance,
        }
        Point { x, y }
    }

    pub(crate) fn reverse(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// Return the glyph to use for drawing the snake's head
    pub(crate) fn head_symbol(self) -> char {
        match self {
            Heading::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Heading::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Heading::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Heading::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }
}
