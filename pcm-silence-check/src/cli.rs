// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

//! Command line options.

use std::path::PathBuf;

use clap::Parser;
use pcm_silence::{
    DEFAULT_RANDOM_DEVICE, DeviceRandom, FillRejectedPolicy, FormatSelection, MismatchPolicy,
    RandomSource, Result, SampleFormat, SeededRandom, SweepConfig,
    config::{MAX_CHANNELS, MAX_DST_OFFSET, MAX_FRAMES},
};

/// Fill randomized PCM buffers with silence in every sample format and
/// layout, and verify every byte of the result.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Largest destination frame offset to test.
    #[arg(short = 'd', long = "dst-offset", default_value_t = MAX_DST_OFFSET)]
    pub dst_offset: usize,

    /// Largest number of frames to fill.
    #[arg(short = 'c', long = "frame-count", default_value_t = MAX_FRAMES)]
    pub frame_count: usize,

    /// Largest number of channels to fill.
    #[arg(short = 's', long = "samples-per-frame", default_value_t = MAX_CHANNELS)]
    pub samples_per_frame: usize,

    /// Test only this sample format (e.g. S16_LE).
    #[arg(short = 'f', long = "sample-format")]
    pub sample_format: Option<String>,

    /// Use a pseudo-random generator with this seed instead of the random device.
    #[arg(long, env = "PCM_SILENCE_SEED")]
    pub seed: Option<u64>,

    /// Random device to read fill data from.
    #[arg(long, default_value = DEFAULT_RANDOM_DEVICE)]
    pub random_device: PathBuf,

    /// Report every mismatching sample of the failing trial instead of the first.
    #[arg(long)]
    pub collect_mismatches: bool,

    /// Go on with the next format when the fill rejects one.
    #[arg(long)]
    pub skip_rejected_formats: bool,

    /// Do not check the bytes outside the filled region.
    #[arg(long)]
    pub no_outside_check: bool,

    /// Print the final report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Builds and validates the sweep configuration.
    ///
    /// # Errors
    ///
    /// [`pcm_silence::Error::UnknownFormat`] for an unknown format name and
    /// [`pcm_silence::Error::InvalidBound`] for a bound outside the hard limits.
    pub fn sweep_config(&self) -> Result<SweepConfig> {
        let formats = match &self.sample_format {
            Some(name) => FormatSelection::Single(name.parse::<SampleFormat>()?),
            None => FormatSelection::All,
        };
        let config = SweepConfig {
            formats,
            max_channels: self.samples_per_frame,
            max_frames: self.frame_count,
            max_dst_offset: self.dst_offset,
            mismatch_policy: if self.collect_mismatches {
                MismatchPolicy::CollectTrial
            } else {
                MismatchPolicy::FailFast
            },
            fill_rejected_policy: if self.skip_rejected_formats {
                FillRejectedPolicy::SkipFormat
            } else {
                FillRejectedPolicy::Abort
            },
            check_outside: !self.no_outside_check,
        };
        config.validate()?;
        Ok(config)
    }

    /// Opens the random source selected by the options.
    pub fn random_source(&self) -> Result<Box<dyn RandomSource>> {
        Ok(match self.seed {
            Some(seed) => Box::new(SeededRandom::from_seed(seed)),
            None => Box::new(DeviceRandom::open(&self.random_device)?),
        })
    }
}
