// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

//! The fill-and-verify sweep.
//!
//! For every selected format, every channel count, frame count and
//! destination offset within the configured bounds, and every layout, the
//! sweep randomizes its buffer, lets a [`SilenceFill`] write silence into the
//! trial region and checks the result byte by byte.
//!
//! # Key Types
//!
//! - [`Sweep`]: owns the trial buffer and drives the trials
//! - [`TrialPlan`]: lazy sequence of the trials of one format
//! - [`Verifier`]: the byte-exact checks
//! - [`SweepReport`] / [`MismatchReport`]: outcomes and failure diagnostics

pub mod plan;
pub mod report;
pub mod verify;

pub use plan::{Trial, TrialPlan};
pub use report::{Corruption, FormatOutcome, FormatStatus, Mismatch, MismatchReport, SweepReport};
pub use verify::Verifier;

use tracing::{debug, error, info, trace, warn};

use crate::{
    ChannelArea, Error, FillRejectedPolicy, LayoutKind, MismatchPolicy, RandomSource, Result,
    SampleFormat, SilenceFill, SweepConfig,
};

/// Drives fill-and-verify trials over one reusable buffer.
///
/// The buffer is mutated destructively by every trial, so a sweep runs its
/// trials strictly one after another.
///
/// # Examples
///
/// ```
/// use pcm_silence::{AreaSilencer, SampleFormat, SeededRandom, Sweep, SweepConfig};
///
/// # fn main() -> Result<(), pcm_silence::Error> {
/// let config = SweepConfig::default()
///     .with_format(SampleFormat::U8)
///     .with_bounds(2, 4, 3);
/// let mut sweep = Sweep::new(config)?;
/// let report = sweep.run(&mut SeededRandom::from_seed(7), &AreaSilencer)?;
/// assert_eq!(report.trials(), 2 * 4 * 4 * 2);
/// # Ok(())
/// # }
/// ```
pub struct Sweep {
    config: SweepConfig,
    buffer: Vec<u8>,
    areas: Vec<ChannelArea>,
    verifier: Verifier,
}

impl Sweep {
    /// Validates `config` and allocates the trial buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBound`] if a bound is outside the hard limits.
    pub fn new(config: SweepConfig) -> Result<Self> {
        config.validate()?;
        let buffer = vec![0; config.buffer_len()];
        let areas = Vec::with_capacity(config.max_channels);
        Ok(Self {
            config,
            buffer,
            areas,
            verifier: Verifier::new(),
        })
    }

    /// The configuration this sweep runs with.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// The trial buffer as left by the last trial.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Runs the whole sweep.
    ///
    /// Ineligible formats are skipped. The sweep stops at the first failing
    /// trial and returns its error; a rejected format only stops it under
    /// [`FillRejectedPolicy::Abort`].
    pub fn run<R, F>(&mut self, random: &mut R, filler: &F) -> Result<SweepReport>
    where
        R: RandomSource + ?Sized,
        F: SilenceFill + ?Sized,
    {
        let mut report = SweepReport::default();

        for format in self.config.formats.formats() {
            if !format.is_eligible() {
                debug!("skipping ineligible format {}", format);
                report.outcomes.push(FormatOutcome {
                    format,
                    status: FormatStatus::Skipped,
                });
                continue;
            }

            info!("testcase: {}", format);
            let status = match self.run_format(format, random, filler) {
                Ok(trials) => FormatStatus::Passed { trials },
                Err(Error::FillRejected { format, reason })
                    if self.config.fill_rejected_policy == FillRejectedPolicy::SkipFormat =>
                {
                    warn!("  {} rejected by the fill: {}", format, reason);
                    FormatStatus::Rejected { reason }
                }
                Err(Error::MismatchDetected(mismatch)) => {
                    error!(
                        "  {} failed: {} problem(s) in the {} layout",
                        format,
                        mismatch.len(),
                        mismatch.layout
                    );
                    return Err(Error::MismatchDetected(mismatch));
                }
                Err(err) => {
                    error!("  {} failed: {}", format, err);
                    return Err(err);
                }
            };
            report.outcomes.push(FormatOutcome { format, status });
        }

        info!(
            "sweep finished: {} format(s) passed, {} skipped, {} rejected, {} trial(s)",
            report.passed().count(),
            report.skipped().count(),
            report.rejected().count(),
            report.trials()
        );
        Ok(report)
    }

    /// Runs every planned trial of one format and returns the number of
    /// layout trials run.
    pub fn run_format<R, F>(
        &mut self,
        format: SampleFormat,
        random: &mut R,
        filler: &F,
    ) -> Result<usize>
    where
        R: RandomSource + ?Sized,
        F: SilenceFill + ?Sized,
    {
        let mut trials = 0;
        let mut channels = 0;
        for trial in TrialPlan::new(format, &self.config) {
            if trial.channels != channels {
                channels = trial.channels;
                debug!("  {} channel(s)", channels);
            }
            trials += self.run_trial(&trial, random, filler)?;
        }
        Ok(trials)
    }

    /// Runs one trial in every layout and returns the number of layouts run.
    ///
    /// # Errors
    ///
    /// - [`Error::IneligibleFormat`] if the trial format cannot be tested
    /// - [`Error::InvalidBound`] if the trial exceeds the configured bounds
    /// - [`Error::RandomSourceExhausted`] / [`Error::Io`] from the random source
    /// - [`Error::FillRejected`] from the fill
    /// - [`Error::MismatchDetected`] if the fill result is wrong
    /// - [`Error::GeometryOverrun`] on a harness bookkeeping bug, detected
    ///   before the fill runs
    pub fn run_trial<R, F>(&mut self, trial: &Trial, random: &mut R, filler: &F) -> Result<usize>
    where
        R: RandomSource + ?Sized,
        F: SilenceFill + ?Sized,
    {
        let width = trial.format.eligible_bytes()?;
        crate::config::check_bound("channel count", trial.channels, 1, self.config.max_channels)?;
        crate::config::check_bound("frame count", trial.frames, 1, self.config.max_frames)?;
        crate::config::check_bound(
            "destination offset",
            trial.dst_offset,
            0,
            self.config.max_dst_offset,
        )?;

        let region = trial.region();
        for layout in LayoutKind::ALL {
            trace!(
                "{} {}: {} ch, {} frames at {}",
                trial.format,
                layout,
                trial.channels,
                trial.frames,
                trial.dst_offset
            );
            random.fill_random(&mut self.buffer)?;
            if self.config.check_outside {
                self.verifier.snapshot(&self.buffer);
            }

            layout.build_into(&mut self.areas, trial.channels, trial.frames, width * 8, 0);
            Verifier::check_geometry(
                self.buffer.len(),
                &self.areas,
                region,
                trial.format,
                layout,
            )?;
            filler.fill(&mut self.buffer, &self.areas, region, trial.format)?;

            let policy = self.config.mismatch_policy;
            let mismatches = self.verifier.check_region(
                &self.buffer,
                &self.areas,
                region,
                trial.format,
                layout,
                policy,
            )?;
            let corruptions = if self.config.check_outside
                && (mismatches.is_empty() || policy == MismatchPolicy::CollectTrial)
            {
                self.verifier
                    .check_outside(&self.buffer, &self.areas, region, width, policy)
            } else {
                Vec::new()
            };

            if !mismatches.is_empty() || !corruptions.is_empty() {
                let report = MismatchReport {
                    format: trial.format,
                    physical_width: width * 8,
                    layout,
                    dst_offset: trial.dst_offset,
                    channels: trial.channels,
                    frames: trial.frames,
                    mismatches,
                    corruptions,
                };
                return Err(Error::MismatchDetected(Box::new(report)));
            }
        }
        Ok(LayoutKind::ALL.len())
    }
}
