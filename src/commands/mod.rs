//! Command implementations

pub mod play;

pub use play::{Session, SessionError, SessionOutcome, run_play};
