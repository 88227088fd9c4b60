// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

//! Helpers shared by the integration tests.

#![allow(dead_code)]

use pcm_silence::{RandomSource, SeededRandom};

/// Ensures logging is initialized only once across all tests.
static LOG_ONCE: std::sync::Once = std::sync::Once::new();

/// Initializes logging once (respects the RUST_LOG environment variable).
pub fn setup_logging() {
    LOG_ONCE.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::builder()
                    .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                    .from_env_lossy(),
            )
            .with_test_writer()
            .init();
    });
}

/// Returns `len` pseudo-random bytes derived from `seed`.
pub fn random_buffer(seed: u64, len: usize) -> Vec<u8> {
    let mut buf = vec![0; len];
    SeededRandom::from_seed(seed)
        .fill_random(&mut buf)
        .unwrap();
    buf
}

/// RAII guard for a temporary file.
///
/// Creates a uniquely named file in the system temporary directory and
/// removes it when dropped.
pub struct TempFileGuard {
    path: std::path::PathBuf,
}

impl TempFileGuard {
    /// Creates a temporary file holding `content`.
    pub fn new(test: &str, content: &[u8]) -> Self {
        let path = std::env::temp_dir().join(format!(
            "pcm_silence_tests_{}_{}",
            test,
            uuid::Uuid::new_v4()
        ));
        std::fs::write(path.as_path(), content).unwrap_or_else(|_| {
            panic!("Failed to create test file \"{}\".", path.display())
        });
        Self { path }
    }

    /// Returns the file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for TempFileGuard {
    /// Removes the temporary file on drop.
    fn drop(&mut self) {
        std::fs::remove_file(self.path.as_path()).unwrap_or_else(|_| {
            panic!("Failed to remove test file \"{}\".", self.path.display())
        });
    }
}
