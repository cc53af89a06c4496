//! # Password Generation
//!
//! Master password generation for DB clusters whose spec asks for one.

use rand::distributions::Alphanumeric;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use thiserror::Error;
use zeroize::Zeroizing;

use crate::config::AdapterConfig;
use crate::constants::DEFAULT_PASSWORD_LENGTH;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("random source failed: {0}")]
    RandomSource(#[from] rand::Error),
}

/// Produces master passwords meeting the deployment's strength policy
pub trait PasswordGenerator: Send + Sync {
    fn generate(&self) -> Result<Zeroizing<String>, PasswordError>;
}

/// Alphanumeric passwords from a CSPRNG seeded by the operating system
#[derive(Debug, Clone)]
pub struct RandomPasswordGenerator {
    length: usize,
}

impl RandomPasswordGenerator {
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    #[must_use]
    pub fn from_config(config: &AdapterConfig) -> Self {
        Self::new(config.password_length)
    }
}

impl Default for RandomPasswordGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD_LENGTH)
    }
}

impl PasswordGenerator for RandomPasswordGenerator {
    fn generate(&self) -> Result<Zeroizing<String>, PasswordError> {
        let rng = StdRng::from_rng(OsRng)?;
        let mut password = Zeroizing::new(String::with_capacity(self.length));
        password.extend(
            rng.sample_iter(&Alphanumeric)
                .take(self.length)
                .map(char::from),
        );
        Ok(password)
    }
}
