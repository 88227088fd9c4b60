// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

//! Lazy enumeration of the trials of one format.

use serde::{Deserialize, Serialize};

use crate::{FillRegion, SampleFormat, SweepConfig};

/// Parameters of one fill-and-verify trial.
///
/// A trial is run once per [`crate::LayoutKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trial {
    /// Format under test.
    pub format: SampleFormat,
    /// Number of channels filled.
    pub channels: usize,
    /// Number of frames filled per channel.
    pub frames: usize,
    /// First frame filled.
    pub dst_offset: usize,
}

impl Trial {
    /// The region this trial fills.
    pub fn region(&self) -> FillRegion {
        FillRegion::new(self.dst_offset, self.frames, self.channels)
    }
}

/// Finite, restartable sequence of the trials of one format.
///
/// Channel counts run `1..=max_channels` (outermost), frame counts
/// `1..=max_frames`, destination offsets `0..=max_dst_offset` (innermost), so
/// the minimal trial (mono, one frame, offset 0) always comes first.
#[derive(Debug, Clone)]
pub struct TrialPlan {
    max_channels: usize,
    max_frames: usize,
    max_dst_offset: usize,
    first: Option<Trial>,
    next: Option<Trial>,
    remaining: usize,
}

impl TrialPlan {
    /// Plans the trials of `format` within the bounds of `config`.
    pub fn new(format: SampleFormat, config: &SweepConfig) -> Self {
        Self::with_bounds(
            format,
            config.max_channels,
            config.max_frames,
            config.max_dst_offset,
        )
    }

    /// Plans the trials of `format` within explicit bounds.
    pub fn with_bounds(
        format: SampleFormat,
        max_channels: usize,
        max_frames: usize,
        max_dst_offset: usize,
    ) -> Self {
        let remaining = trial_count(max_channels, max_frames, max_dst_offset);
        let first = (remaining > 0).then_some(Trial {
            format,
            channels: 1,
            frames: 1,
            dst_offset: 0,
        });
        Self {
            max_channels,
            max_frames,
            max_dst_offset,
            first,
            next: first,
            remaining,
        }
    }

    /// Rewinds the plan to its first trial.
    pub fn restart(&mut self) {
        self.next = self.first;
        self.remaining = trial_count(self.max_channels, self.max_frames, self.max_dst_offset);
    }

    fn successor(&self, trial: Trial) -> Option<Trial> {
        let mut next = trial;
        if next.dst_offset < self.max_dst_offset {
            next.dst_offset += 1;
        } else if next.frames < self.max_frames {
            next.frames += 1;
            next.dst_offset = 0;
        } else if next.channels < self.max_channels {
            next.channels += 1;
            next.frames = 1;
            next.dst_offset = 0;
        } else {
            return None;
        }
        Some(next)
    }
}

/// Number of trials within the bounds, saturating at `usize::MAX`.
fn trial_count(max_channels: usize, max_frames: usize, max_dst_offset: usize) -> usize {
    max_channels
        .saturating_mul(max_frames)
        .saturating_mul(max_dst_offset.saturating_add(1))
}

impl Iterator for TrialPlan {
    type Item = Trial;

    fn next(&mut self) -> Option<Trial> {
        let current = self.next?;
        self.next = self.successor(current);
        self.remaining = self.remaining.saturating_sub(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for TrialPlan {}
