//! Secret generation adapters.

use rand::Rng;
use rand::distributions::Alphanumeric;

use sitewright_core::application::ports::SecretGenerator;

/// Production generator: cryptographically seeded alphanumeric strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandSecretGenerator;

impl RandSecretGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SecretGenerator for RandSecretGenerator {
    fn generate(&self, len: usize) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }
}

/// Fixed generator for testing: repeats a marker character.
#[derive(Debug, Clone)]
pub struct FixedSecretGenerator {
    fill: char,
}

impl FixedSecretGenerator {
    pub fn new(fill: char) -> Self {
        Self { fill }
    }
}

impl SecretGenerator for FixedSecretGenerator {
    fn generate(&self, len: usize) -> String {
        std::iter::repeat(self.fill).take(len).collect()
    }
}
