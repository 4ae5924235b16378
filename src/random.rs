// src/random.rs
//! Secure random bytes
//!
//! The orchestrators draw IVs through the [`SecureRandom`] trait so callers
//! (and tests) can inject their own source. [`OsRandom`] reads the operating
//! system CSPRNG.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{CryptoError, Result};

pub trait SecureRandom: Send + Sync {
    /// Fill `dest` entirely with uniformly distributed bytes
    fn fill(&self, dest: &mut [u8]) -> Result<()>;
}

/// Operating-system randomness
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|err| CryptoError::Random(err.to_string()))
    }
}

/// `length` random bytes, each uniformly distributed in `0..=max`
///
/// `max` must be within `1..=255`. Values below 255 use rejection sampling
/// against the largest multiple of `max + 1` not exceeding 256 so every
/// residue is equally likely.
pub fn random_buffer<R>(rng: &R, length: usize, max: u32) -> Result<Vec<u8>>
where
    R: SecureRandom + ?Sized,
{
    if !(1..=255).contains(&max) {
        return Err(CryptoError::InvalidMaxValue(max));
    }

    let mut out = vec![0u8; length];
    if max == 255 {
        rng.fill(&mut out)?;
        return Ok(out);
    }

    let interval = max + 1;
    let divisible_max = (256 / interval) * interval;
    let mut sample = [0u8; 1];
    let mut index = 0;

    while index < length {
        rng.fill(&mut sample)?;
        let value = u32::from(sample[0]);
        if value < divisible_max {
            out[index] = (value % interval) as u8;
            index += 1;
        }
    }

    Ok(out)
}
