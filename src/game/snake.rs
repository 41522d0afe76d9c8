use super::field::Point;
use super::heading::Heading;
use crate::consts;
use std::collections::VecDeque;

/// Snake state.
///
/// All positions are world coordinates.  Segments sit on the step grid
/// implied by repeated 20-unit moves from the starting point; pellets do
/// not, which is why collision tests are distance checks rather than
/// equality checks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// Every segment of the snake, head first
    pub(super) segments: VecDeque<Point>,

    /// The direction the snake is currently travelling in
    pub(super) heading: Heading,

    /// A turn requested since the last step.  Applied at the start of the
    /// next step, never mid-step, so a single step cannot reverse partway.
    pending: Option<Heading>,

    /// The tail slot vacated by the most recent step; growth re-occupies it
    vacated: Option<Point>,
}

impl Snake {
    /// Create a snake of [`consts::INITIAL_SNAKE_LENGTH`] segments with its
    /// head at `head`, the body trailing opposite `heading`.
    pub(crate) fn new(head: Point, heading: Heading) -> Snake {
        let rear = heading.reverse();
        let mut segments = VecDeque::with_capacity(consts::INITIAL_SNAKE_LENGTH);
        let mut p = head;
        for _ in 0..consts::INITIAL_SNAKE_LENGTH {
            segments.push_back(p);
            p = rear.step(p, consts::STEP_SIZE);
        }
        Snake {
            segments,
            heading,
            pending: None,
            vacated: None,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Point {
        *self
            .segments
            .front()
            .expect("snake should never be empty")
    }

    pub(crate) fn heading(&self) -> Heading {
        self.heading
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    /// Iterate over every segment, head first
    pub(crate) fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().copied()
    }

    /// Request a turn, to take effect on the next step.  Later requests in
    /// the same tick overwrite earlier ones.  There is deliberately no guard
    /// against reversing straight into the body: an abrupt 180-degree turn
    /// is a legitimate (and fatal) move.
    pub(crate) fn set_heading(&mut self, heading: Heading) {
        self.pending = Some(heading);
    }

    /// Take one step: apply any pending turn, then move the head
    /// [`consts::STEP_SIZE`] units while the body trails its own path one
    /// slot behind.
    pub(crate) fn advance(&mut self) {
        if let Some(heading) = self.pending.take() {
            self.heading = heading;
        }
        let head = self.heading.step(self.head(), consts::STEP_SIZE);
        self.segments.push_front(head);
        self.vacated = self.segments.pop_back();
    }

    /// Add one segment at the tail slot vacated by the most recent
    /// [`advance`][Snake::advance], leaving every other segment in place.
    /// A no-op unless a step has happened since the last growth.
    pub(crate) fn grow(&mut self) {
        if let Some(p) = self.vacated.take() {
            self.segments.push_back(p);
        }
    }

    /// Body segments eligible for self-collision.  The head, the segment
    /// directly behind it (which occupies the slot the head just vacated),
    /// and the tail segment are all skipped.
    fn collision_candidates(&self) -> impl Iterator<Item = Point> + '_ {
        let eligible = self.segments.len().saturating_sub(1);
        self.segments
            .iter()
            .take(eligible)
            .skip(2)
            .copied()
    }

    /// Has the head come within [`consts::SELF_COLLIDE_RADIUS`] of an
    /// eligible body segment?
    pub(crate) fn bites_self(&self) -> bool {
        let head = self.head();
        self.collision_candidates()
            .any(|seg| head.within(seg, consts::SELF_COLLIDE_RADIUS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn segments(snake: &Snake) -> Vec<Point> {
        snake.segments().collect()
    }

    #[test]
    fn new_snake_trails_behind_head() {
        let snake = Snake::new(Point::ORIGIN, Heading::Right);
        assert_eq!(
            segments(&snake),
            vec![
                Point::new(0, 0),
                Point::new(-20, 0),
                Point::new(-40, 0),
                Point::new(-60, 0),
                Point::new(-80, 0),
                Point::new(-100, 0),
            ]
        );
        assert_eq!(snake.len(), consts::INITIAL_SNAKE_LENGTH);
    }

    #[test]
    fn advance_shifts_body_one_slot() {
        let mut snake = Snake::new(Point::ORIGIN, Heading::Right);
        snake.advance();
        assert_eq!(
            segments(&snake),
            vec![
                Point::new(20, 0),
                Point::new(0, 0),
                Point::new(-20, 0),
                Point::new(-40, 0),
                Point::new(-60, 0),
                Point::new(-80, 0),
            ]
        );
    }

    #[test]
    fn pending_heading_applies_on_next_advance() {
        let mut snake = Snake::new(Point::ORIGIN, Heading::Right);
        snake.set_heading(Heading::Up);
        assert_eq!(snake.heading(), Heading::Right);
        snake.advance();
        assert_eq!(snake.heading(), Heading::Up);
        assert_eq!(snake.head(), Point::new(0, 20));
    }

    #[test]
    fn last_turn_request_wins() {
        let mut snake = Snake::new(Point::ORIGIN, Heading::Right);
        snake.set_heading(Heading::Up);
        snake.set_heading(Heading::Down);
        snake.advance();
        assert_eq!(snake.head(), Point::new(0, -20));
    }

    #[test]
    fn growth_reoccupies_vacated_tail_slots() {
        let mut snake = Snake::new(Point::ORIGIN, Heading::Right);
        let mut vacated = Vec::new();
        for _ in 0..3 {
            let tail = *snake.segments.back().expect("snake should be non-empty");
            snake.advance();
            vacated.push(tail);
            snake.grow();
            let new_tail = *snake.segments.back().expect("snake should be non-empty");
            assert_eq!(new_tail, tail);
        }
        assert_eq!(snake.len(), consts::INITIAL_SNAKE_LENGTH + 3);
        assert_eq!(
            vacated,
            vec![
                Point::new(-100, 0),
                Point::new(-100, 0),
                Point::new(-100, 0),
            ]
        );
    }

    #[test]
    fn grow_without_advance_is_noop() {
        let mut snake = Snake::new(Point::ORIGIN, Heading::Right);
        snake.advance();
        snake.grow();
        snake.grow();
        assert_eq!(snake.len(), consts::INITIAL_SNAKE_LENGTH + 1);
    }

    #[test]
    fn self_collision_skips_head_neck_and_tail() {
        // Length 4: only the third segment from the head is eligible.
        let mut snake = Snake::new(Point::ORIGIN, Heading::Right);
        snake.segments = VecDeque::from([
            Point::new(0, 0),
            Point::new(20, 0),
            Point::new(40, 0),
            Point::new(60, 0),
        ]);
        assert!(!snake.bites_self());

        snake.segments[2] = Point::new(0, 0);
        assert!(snake.bites_self());

        snake.segments[2] = Point::new(40, 0);
        snake.segments[3] = Point::new(0, 0);
        assert!(!snake.bites_self());

        snake.segments[3] = Point::new(60, 0);
        snake.segments[1] = Point::new(0, 0);
        assert!(!snake.bites_self());
    }

    #[test]
    fn reversing_into_the_body_is_fatal() {
        let mut snake = Snake::new(Point::ORIGIN, Heading::Right);
        snake.advance();
        snake.set_heading(Heading::Left);
        snake.advance();
        assert_eq!(snake.head(), Point::new(0, 0));
        assert!(snake.bites_self());
    }
}
