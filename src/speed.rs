use crate::consts;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// A session's snake speed, solicited from the player at setup: the number
/// of steps the snake takes per second, between [`consts::SPEED_MIN`] and
/// [`consts::SPEED_MAX`] inclusive.  A higher speed shortens the delay
/// between steps; the step length never changes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Speed(u16);

impl Speed {
    pub(crate) fn get(self) -> u16 {
        self.0
    }

    /// Time between snake steps at this speed
    pub(crate) fn step_period(self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.0))
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Speed {
    type Err = ParseSpeedError;

    fn from_str(s: &str) -> Result<Speed, ParseSpeedError> {
        let n = s
            .trim()
            .parse::<u16>()
            .map_err(|_| ParseSpeedError::NotANumber)?;
        if (consts::SPEED_MIN..=consts::SPEED_MAX).contains(&n) {
            Ok(Speed(n))
        } else {
            Err(ParseSpeedError::OutOfRange(n))
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum ParseSpeedError {
    #[error("speed must be a whole number")]
    NotANumber,
    #[error("speed {0} is not between {min} and {max}", min = consts::SPEED_MIN, max = consts::SPEED_MAX)]
    OutOfRange(u16),
}
