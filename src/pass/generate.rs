//! Password generation.

use std::fmt;

use log::debug;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::charset::{self, ClassSet};
use crate::entropy::{self, Sampling};
use crate::settings::Settings;

/// One generated password plus the fallback signal.
pub struct Generated {
    pub password: Zeroizing<String>,
    /// No class was enabled; the password was drawn from lowercase instead.
    pub fell_back: bool,
}

impl fmt::Debug for Generated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generated")
            .field("len", &self.password.len())
            .field("fell_back", &self.fell_back)
            .finish()
    }
}

/// Several passwords drawn from a single pool build.
pub struct Batch {
    pub passwords: Vec<Zeroizing<String>>,
    pub fell_back: bool,
}

/// Generate a password of `length` characters from the enabled classes using
/// the OS CSPRNG and exact-uniform sampling.
pub fn generate(length: usize, classes: ClassSet) -> Generated {
    generate_with(&mut entropy::source(), Sampling::default(), length, classes)
}

/// Generate with an explicit secure source and index reduction.
pub fn generate_with<R>(
    rng: &mut R,
    sampling: Sampling,
    length: usize,
    classes: ClassSet,
) -> Generated
where
    R: RngCore + CryptoRng + ?Sized,
{
    let pool = charset::build(classes);
    let password = draw(rng, &pool.chars, length, sampling);

    debug!(
        "generated password: length={} pool={} sampling={} fell_back={}",
        length,
        pool.chars.len(),
        sampling.label(),
        pool.fell_back
    );

    Generated {
        password,
        fell_back: pool.fell_back,
    }
}

/// Generate `count` passwords from the settings' length and classes.
pub fn generate_batch(settings: &Settings, count: usize) -> Batch {
    let pool = charset::build(settings.classes);
    let mut rng = entropy::source();

    let passwords = (0..count)
        .map(|_| draw(&mut rng, &pool.chars, settings.length, settings.sampling))
        .collect();

    debug!(
        "generated batch: count={} length={} pool={} sampling={}",
        count,
        settings.length,
        pool.chars.len(),
        settings.sampling.label()
    );

    Batch {
        passwords,
        fell_back: pool.fell_back,
    }
}

#[inline]
fn draw<R: RngCore + ?Sized>(
    rng: &mut R,
    chars: &[u8],
    length: usize,
    sampling: Sampling,
) -> Zeroizing<String> {
    // Capacity is exact for ASCII, so the buffer never reallocates and leaves
    // no unzeroized copy behind.
    let mut password = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        let idx = entropy::uniform_index(rng, chars.len(), sampling);
        password.push(chars[idx] as char);
    }
    password
}
