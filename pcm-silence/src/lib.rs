// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

//! # PCM Silence
//!
//! Fill strided multi-channel PCM buffers with format-correct digital silence
//! and prove, byte for byte, that the fill landed exactly where the channel
//! geometry says it should.
//!
//! ## Overview
//!
//! A sample buffer is described by one [`ChannelArea`] per channel: a base, a
//! bit offset to the first sample and a bit stride between samples. The same
//! description covers interleaved and non-interleaved buffers and samples of
//! any physical width from 4 to 64 bits.
//!
//! ### Key Concepts
//!
//! - **Format catalog**: [`SampleFormat`] knows each format's physical width
//!   and silence pattern. Silence is not always zero: unsigned PCM is biased,
//!   µ-law silence is `0x7f`, A-law `0x55`, DSD `0x69`.
//! - **Layouts**: [`LayoutKind`] builds area sets for interleaved and
//!   non-interleaved buffers.
//! - **Silence fill**: [`SilenceFill`] is the operation under test;
//!   [`AreaSilencer`] is the native implementation.
//! - **Sweep**: [`Sweep`] runs the fill over every format, channel count,
//!   frame count, destination offset and layout, on freshly randomized buffers
//!   from a [`RandomSource`], and verifies every byte.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐
//! │ SampleFormat │  (width, silence, eligibility)
//! └──────┬───────┘
//!        │
//!        ├─► LayoutKind ──► [ChannelArea]
//!        │                      │
//!        │   RandomSource ──► buffer ──► SilenceFill ──► Verifier
//!        │                                                  │
//!        └──────────────────────► Sweep ◄───────────────────┘
//! ```
//!
//! ## Examples
//!
//! ```
//! use pcm_silence::{AreaSilencer, SampleFormat, SeededRandom, Sweep, SweepConfig};
//!
//! # fn main() -> Result<(), pcm_silence::Error> {
//! let config = SweepConfig::default()
//!     .with_format(SampleFormat::MuLaw)
//!     .with_bounds(3, 4, 2);
//! let mut sweep = Sweep::new(config)?;
//! let report = sweep.run(&mut SeededRandom::from_seed(1), &AreaSilencer)?;
//! assert_eq!(report.passed().collect::<Vec<_>>(), [SampleFormat::MuLaw]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! A [`Sweep`] owns one buffer and runs its trials sequentially. Trials are
//! independent of each other, so parallel sweeps need one [`Sweep`] each.

mod areas;
mod error;
mod format;
mod random;

pub mod config;
pub mod sweep;

pub use areas::{
    ChannelArea, FillRegion,
    layout::LayoutKind,
    silence::{AreaSilencer, SilenceFill},
};
pub use config::{FillRejectedPolicy, FormatSelection, MismatchPolicy, SweepConfig};
pub use error::{Error, Result};
pub use format::{EXCLUDED_FORMATS, SampleFormat};
pub use random::{DEFAULT_RANDOM_DEVICE, DeviceRandom, RandomSource, SeededRandom};
pub use sweep::{MismatchReport, Sweep, SweepReport, Trial, TrialPlan};
