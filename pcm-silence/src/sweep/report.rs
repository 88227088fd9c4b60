// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

//! Sweep outcomes and failure diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{LayoutKind, SampleFormat};

/// A filled sample whose bytes differ from the silence pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    /// Channel index.
    pub channel: usize,
    /// Frame index, relative to the destination offset.
    pub frame: usize,
    /// Byte offset of the sample in the buffer.
    pub byte_offset: usize,
    /// Expected silence bytes.
    pub expected: Vec<u8>,
    /// Bytes found after the fill.
    pub actual: Vec<u8>,
}

/// A byte outside the fill region that the fill altered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corruption {
    /// Byte offset in the buffer.
    pub byte_offset: usize,
    /// Value before the fill.
    pub expected: u8,
    /// Value after the fill.
    pub actual: u8,
}

/// Everything needed to reproduce a failing trial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MismatchReport {
    /// Format under test.
    pub format: SampleFormat,
    /// Physical sample width in bits.
    pub physical_width: usize,
    /// Layout of the failing trial.
    pub layout: LayoutKind,
    /// First frame filled.
    pub dst_offset: usize,
    /// Number of channels filled.
    pub channels: usize,
    /// Number of frames filled per channel.
    pub frames: usize,
    /// Filled samples that are not silent.
    pub mismatches: Vec<Mismatch>,
    /// Bytes outside the region that changed.
    pub corruptions: Vec<Corruption>,
}

impl MismatchReport {
    /// Human readable lines, one per mismatching sample or altered byte.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let samples = self.mismatches.iter().map(move |mismatch| {
            format!(
                "  phys_width {}, dst_offset {:03}, ch {:03}/({:03}), frames {:03}/({:03}), {}",
                self.physical_width,
                self.dst_offset,
                mismatch.channel,
                self.channels,
                mismatch.frame,
                self.frames,
                self.layout.label()
            )
        });
        let outside = self.corruptions.iter().map(move |corruption| {
            format!(
                "  phys_width {}, dst_offset {:03}, byte {:05} outside ({:03} ch x {:03} frames) changed {:02x} -> {:02x}, {}",
                self.physical_width,
                self.dst_offset,
                corruption.byte_offset,
                self.channels,
                self.frames,
                corruption.expected,
                corruption.actual,
                self.layout.label()
            )
        });
        samples.chain(outside)
    }

    /// Total number of reported problems.
    pub fn len(&self) -> usize {
        self.mismatches.len() + self.corruptions.len()
    }

    /// `true` if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for MismatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Silence mismatch for {} ({} problem(s))",
            self.format,
            self.len()
        )?;
        for line in self.lines() {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

/// Result of the sweep over one format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum FormatStatus {
    /// Every trial passed.
    Passed {
        /// Number of trials run, counting each layout separately.
        trials: usize,
    },
    /// The format is not eligible and was not tested.
    Skipped,
    /// The fill refused the format and the sweep moved on.
    Rejected {
        /// Reason given by the fill.
        reason: String,
    },
}

/// Per-format entry of a [`SweepReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOutcome {
    /// Format visited.
    pub format: SampleFormat,
    /// What happened to it.
    #[serde(flatten)]
    pub status: FormatStatus,
}

/// Summary of a sweep that completed without a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReport {
    /// One entry per visited format, in visiting order.
    pub outcomes: Vec<FormatOutcome>,
}

impl SweepReport {
    /// Total number of trials run.
    pub fn trials(&self) -> usize {
        self.outcomes
            .iter()
            .map(|outcome| match outcome.status {
                FormatStatus::Passed { trials } => trials,
                _ => 0,
            })
            .sum()
    }

    /// Formats whose trials all passed.
    pub fn passed(&self) -> impl Iterator<Item = SampleFormat> + '_ {
        self.with_status(|status| matches!(status, FormatStatus::Passed { .. }))
    }

    /// Formats skipped as ineligible.
    pub fn skipped(&self) -> impl Iterator<Item = SampleFormat> + '_ {
        self.with_status(|status| matches!(status, FormatStatus::Skipped))
    }

    /// Formats the fill refused.
    pub fn rejected(&self) -> impl Iterator<Item = SampleFormat> + '_ {
        self.with_status(|status| matches!(status, FormatStatus::Rejected { .. }))
    }

    fn with_status(
        &self,
        predicate: impl Fn(&FormatStatus) -> bool + 'static,
    ) -> impl Iterator<Item = SampleFormat> + '_ {
        self.outcomes
            .iter()
            .filter(move |outcome| predicate(&outcome.status))
            .map(|outcome| outcome.format)
    }
}
