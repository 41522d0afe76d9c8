use crate::consts;
use rand::Rng;
use ratatui::layout::{Position, Rect};

/// A point in world coordinates.  The origin is the center of the playfield,
/// `x` grows to the right, and `y` grows upward.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Point {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Point {
    pub(crate) const ORIGIN: Point = Point { x: 0, y: 0 };

    pub(crate) fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Square of the Euclidean distance to `other`.  Collision radii are
    /// compared against this to keep the tests exact.
    pub(crate) fn distance_squared(self, other: Point) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        dx * dx + dy * dy
    }

    /// Is `other` strictly closer to `self` than `radius` world units?
    pub(crate) fn within(self, other: Point, radius: i32) -> bool {
        self.distance_squared(other) < i64::from(radius) * i64::from(radius)
    }
}

/// The playfield: a rectangle of world coordinates centered on the origin.
/// A snake head strictly outside it is dead; pellets spawn strictly inside
/// it with a margin.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Field {
    half_width: i32,
    half_height: i32,
}

impl Field {
    pub(crate) fn new(half_width: i32, half_height: i32) -> Field {
        Field {
            half_width,
            half_height,
        }
    }

    /// Is `p` on or inside the death boundary?  The boundary itself counts
    /// as inside: only `|x| > half_width` or `|y| > half_height` kills.
    pub(crate) fn contains(self, p: Point) -> bool {
        p.x.abs() <= self.half_width && p.y.abs() <= self.half_height
    }

    /// Pick a uniformly random point at least [`consts::FOOD_MARGIN`] units
    /// inside the boundary
    pub(crate) fn random_inner_point<R: Rng>(self, rng: &mut R) -> Point {
        let xlim = self.half_width - consts::FOOD_MARGIN;
        let ylim = self.half_height - consts::FOOD_MARGIN;
        Point {
            x: rng.random_range(-xlim..=xlim),
            y: rng.random_range(-ylim..=ylim),
        }
    }

    /// Map a world point onto a terminal cell within `area`.  Returns `None`
    /// for points outside the field or when `area` is degenerate.
    pub(crate) fn project(self, p: Point, area: Rect) -> Option<Position> {
        if !self.contains(p) || area.is_empty() {
            return None;
        }
        let col = scale(p.x + self.half_width, 2 * self.half_width, area.width);
        let row = scale(self.half_height - p.y, 2 * self.half_height, area.height);
        Some(Position {
            x: area.x.checked_add(col)?,
            y: area.y.checked_add(row)?,
        })
    }
}

impl Default for Field {
    fn default() -> Field {
        Field::new(consts::FIELD_HALF_WIDTH, consts::FIELD_HALF_HEIGHT)
    }
}

/// Map `offset` in `0..=span` world units onto a cell in `0..cells`,
/// rounding to nearest
fn scale(offset: i32, span: i32, cells: u16) -> u16 {
    debug_assert!((0..=span).contains(&offset));
    let last = i64::from(cells) - 1;
    let num = i64::from(offset) * last + i64::from(span) / 2;
    u16::try_from(num / i64::from(span)).unwrap_or(0)
}
