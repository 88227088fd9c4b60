// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

//! Sweep configuration and its hard limits.
//!
//! The limits bound the size of the shared trial buffer. A [`SweepConfig`]
//! must pass [`SweepConfig::validate`] before a sweep starts.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, SampleFormat};

/// Largest number of channels (areas) a sweep may use.
pub const MAX_CHANNELS: usize = 16;

/// Largest number of frames a single fill may cover.
pub const MAX_FRAMES: usize = 32;

/// Largest destination frame offset a sweep may use.
pub const MAX_DST_OFFSET: usize = 64;

/// Widest physical sample supported by any format, in bytes.
pub const MAX_PHYSICAL_BYTES: usize = 8;

/// Which formats a sweep visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatSelection {
    /// Every defined format.
    #[default]
    All,
    /// A single format.
    Single(SampleFormat),
    /// Every defined format whose index lies in `first..=last`.
    Range {
        /// First format of the range.
        first: SampleFormat,
        /// Last format of the range.
        last: SampleFormat,
    },
}

impl FormatSelection {
    /// Iterates the selected formats in index order.
    pub fn formats(self) -> impl Iterator<Item = SampleFormat> + Clone {
        let (first, last) = match self {
            FormatSelection::All => (SampleFormat::FIRST, SampleFormat::LAST),
            FormatSelection::Single(format) => (format, format),
            FormatSelection::Range { first, last } => (first, last),
        };
        SampleFormat::all().filter(move |format| (first..=last).contains(format))
    }
}

/// What the sweep does once a trial shows a mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MismatchPolicy {
    /// Stop at the first mismatching sample.
    #[default]
    FailFast,
    /// Finish checking the failing trial, report every mismatching sample of
    /// it, then stop.
    CollectTrial,
}

/// What the sweep does when the fill refuses a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillRejectedPolicy {
    /// Abort the sweep.
    #[default]
    Abort,
    /// Log the rejection, count the format as rejected and go on with the next
    /// format.
    SkipFormat,
}

/// Parameters of a fill-and-verify sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Formats to visit.
    pub formats: FormatSelection,
    /// Channel counts `1..=max_channels` are tested.
    pub max_channels: usize,
    /// Frame counts `1..=max_frames` are tested.
    pub max_frames: usize,
    /// Destination offsets `0..=max_dst_offset` are tested.
    pub max_dst_offset: usize,
    /// Reaction to a mismatching trial.
    pub mismatch_policy: MismatchPolicy,
    /// Reaction to a rejected format.
    pub fill_rejected_policy: FillRejectedPolicy,
    /// Also compare every byte outside the fill region against its value
    /// before the fill.
    pub check_outside: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            formats: FormatSelection::All,
            max_channels: MAX_CHANNELS,
            max_frames: MAX_FRAMES,
            max_dst_offset: MAX_DST_OFFSET,
            mismatch_policy: MismatchPolicy::FailFast,
            fill_rejected_policy: FillRejectedPolicy::Abort,
            check_outside: true,
        }
    }
}

impl SweepConfig {
    /// Restricts the sweep to one format.
    pub fn with_format(mut self, format: SampleFormat) -> Self {
        self.formats = FormatSelection::Single(format);
        self
    }

    /// Sets the three sweep bounds at once.
    pub fn with_bounds(
        mut self,
        max_channels: usize,
        max_frames: usize,
        max_dst_offset: usize,
    ) -> Self {
        self.max_channels = max_channels;
        self.max_frames = max_frames;
        self.max_dst_offset = max_dst_offset;
        self
    }

    /// Checks every bound against the hard limits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBound`] naming the first offending bound.
    pub fn validate(&self) -> Result<()> {
        check_bound("samples per frame", self.max_channels, 1, MAX_CHANNELS)?;
        check_bound("frame count", self.max_frames, 1, MAX_FRAMES)?;
        check_bound("destination offset", self.max_dst_offset, 0, MAX_DST_OFFSET)?;
        if let FormatSelection::Range { first, last } = self.formats
            && first > last
        {
            return Err(Error::InvalidBound {
                name: "format range",
                value: first.index() as usize,
                min: SampleFormat::FIRST.index() as usize,
                max: last.index() as usize,
            });
        }
        Ok(())
    }

    /// Size of the trial buffer in bytes.
    ///
    /// Large enough for the widest format at the largest channel count, frame
    /// count and destination offset, in either layout.
    pub fn buffer_len(&self) -> usize {
        self.max_channels * MAX_PHYSICAL_BYTES * (self.max_frames + self.max_dst_offset)
    }
}

/// Checks that `value` lies in `min..=max`.
pub fn check_bound(name: &'static str, value: usize, min: usize, max: usize) -> Result<usize> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidBound {
            name,
            value,
            min,
            max,
        })
    }
}
