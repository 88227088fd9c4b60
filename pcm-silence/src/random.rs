// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

//! Sources of random fill data.
//!
//! The sweep refills its buffer with random bytes before every trial so that
//! bytes the silence fill fails to touch are very unlikely to already hold the
//! silence pattern. The data only has to be unbiased, not secret.

use std::{
    fs::File,
    io::{ErrorKind, Read},
    path::{Path, PathBuf},
};

use rand::{RngCore, SeedableRng, rngs::StdRng};
use tracing::{debug, error};

use crate::{Error, Result};

/// Default random device on Unix systems.
pub const DEFAULT_RANDOM_DEVICE: &str = "/dev/urandom";

/// A producer of random bytes on demand.
pub trait RandomSource {
    /// Fills the whole of `buf` with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSourceExhausted`] if fewer than `buf.len()` bytes
    /// could be produced.
    fn fill_random(&mut self, buf: &mut [u8]) -> Result<()>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn fill_random(&mut self, buf: &mut [u8]) -> Result<()> {
        (**self).fill_random(buf)
    }
}

/// Pseudo-random bytes from a [`StdRng`].
///
/// A seeded generator makes a failing sweep reproducible.
pub struct SeededRandom {
    rng: StdRng,
    seed: Option<u64>,
}

impl SeededRandom {
    /// Creates a generator with a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a generator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// The seed, if the generator was created with one.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn fill_random(&mut self, buf: &mut [u8]) -> Result<()> {
        self.rng.fill_bytes(buf);
        Ok(())
    }
}

/// Random bytes read from a character device or any other file.
///
/// The file is opened once and closed when the source is dropped, including
/// when a sweep aborts early.
pub struct DeviceRandom {
    file: File,
    path: PathBuf,
}

impl DeviceRandom {
    /// Opens [`DEFAULT_RANDOM_DEVICE`].
    pub fn open_default() -> Result<Self> {
        Self::open(DEFAULT_RANDOM_DEVICE)
    }

    /// Opens the file at `path` for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|error| {
            error!("Failed to open random source \"{}\": {}", path.display(), error);
            Error::Io(error)
        })?;
        debug!("Opened random source \"{}\"", path.display());
        Ok(Self { file, path })
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RandomSource for DeviceRandom {
    fn fill_random(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut delivered = 0;
        while delivered < buf.len() {
            match self.file.read(&mut buf[delivered..]) {
                Ok(0) => break,
                Ok(len) => delivered += len,
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) => return Err(Error::Io(error)),
            }
        }
        if delivered != buf.len() {
            return Err(Error::RandomSourceExhausted {
                requested: buf.len(),
                delivered,
            });
        }
        Ok(())
    }
}

impl Drop for DeviceRandom {
    fn drop(&mut self) {
        debug!("Closing random source \"{}\"", self.path.display());
    }
}
