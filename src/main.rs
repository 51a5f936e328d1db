//! Mastermind - CLI
//!
//! Plays one ten-turn round on the terminal.

use anyhow::{Context, Result};
use log::debug;
use mastermind::{
    commands::run_play,
    game::{RandomSecret, RoundConfig},
};
use rand::{SeedableRng, rngs::StdRng};

fn main() -> Result<()> {
    env_logger::init();

    let mut source = RandomSecret::new(StdRng::from_os_rng());
    let outcome = run_play(RoundConfig::default(), &mut source).context("game session failed")?;
    debug!("Session finished: {outcome:?}");

    Ok(())
}
