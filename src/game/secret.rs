//! Sources of the hidden code
//!
//! A round draws its secret exactly once, at start. Injecting the source keeps
//! rounds reproducible: tests hand in a seeded RNG or a fixed code.

use crate::core::Code;
use rand::Rng;

/// Something that can produce the secret for a new round
pub trait SecretSource {
    /// Produce the next secret
    fn draw(&mut self) -> Code;
}

/// Uniform random secrets, one independent draw per slot
#[derive(Debug, Clone)]
pub struct RandomSecret<R> {
    rng: R,
}

impl<R: Rng> RandomSecret<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SecretSource for RandomSecret<R> {
    fn draw(&mut self) -> Code {
        Code::random(&mut self.rng)
    }
}

/// Always hands out the same predetermined code
#[derive(Debug, Clone, Copy)]
pub struct FixedSecret(pub Code);

impl SecretSource for FixedSecret {
    fn draw(&mut self) -> Code {
        self.0
    }
}
