//! Round tracking and secret generation

mod error;
mod round;
mod secret;

pub use error::GameError;
pub use round::{DEFAULT_MAX_TURNS, Round, RoundConfig, RoundStatus, TurnRecord};
pub use secret::{FixedSecret, RandomSecret, SecretSource};
