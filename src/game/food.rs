use super::field::{Field, Point};
use super::snake::Snake;
use crate::consts;
use rand::Rng;

/// The pellet the snake is chasing.  One per session; repositioned on every
/// consumption rather than recreated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    pub(super) position: Point,
}

impl Food {
    /// Spawn the session's pellet somewhere clear of the snake
    pub(crate) fn place<R: Rng>(rng: &mut R, field: Field, snake: &Snake) -> Food {
        let mut food = Food {
            position: Point::ORIGIN,
        };
        food.respawn(rng, field, snake);
        food
    }

    /// Return the pellet's position
    pub(crate) fn position(&self) -> Point {
        self.position
    }

    /// Move the pellet to a fresh random point strictly inside the field
    /// boundary.  Points within eating range of the snake are rerolled, up
    /// to a bounded number of attempts; the last candidate is accepted if
    /// the board is too crowded to do better.
    pub(crate) fn respawn<R: Rng>(&mut self, rng: &mut R, field: Field, snake: &Snake) {
        for _ in 0..consts::FOOD_PLACEMENT_ATTEMPTS {
            self.position = field.random_inner_point(rng);
            if !self.touches(snake) {
                return;
            }
        }
    }

    fn touches(&self, snake: &Snake) -> bool {
        snake
            .segments()
            .any(|seg| self.position.within(seg, consts::EAT_RADIUS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::heading::Heading;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn respawn_avoids_snake_and_boundary() {
        let field = Field::default();
        let snake = Snake::new(Point::ORIGIN, Heading::Right);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut food = Food::place(&mut rng, field, &snake);
        for _ in 0..200 {
            food.respawn(&mut rng, field, &snake);
            let p = food.position();
            assert!(p.x.abs() < consts::FIELD_HALF_WIDTH);
            assert!(p.y.abs() < consts::FIELD_HALF_HEIGHT);
            assert!(snake
                .segments()
                .all(|seg| !p.within(seg, consts::EAT_RADIUS)));
        }
    }
}
