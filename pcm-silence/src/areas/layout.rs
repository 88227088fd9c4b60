// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

//! Builders for the area sets of common buffer layouts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ChannelArea;

/// Arrangement of channel samples inside a shared buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    /// One sample per channel, channel after channel, then the next frame.
    ///
    /// Devices such as korg1212 use this arrangement with an unused padding
    /// channel in every frame.
    Interleaved,
    /// Every channel holds its own contiguous run of samples.
    ///
    /// HDSP, HDSPM and RME9652 hardware use this arrangement, with their own
    /// channel order.
    NonInterleaved,
}

impl LayoutKind {
    /// Every layout, in the order the sweep tests them.
    pub const ALL: [LayoutKind; 2] = [LayoutKind::Interleaved, LayoutKind::NonInterleaved];

    /// Label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            LayoutKind::Interleaved => "interleaved",
            LayoutKind::NonInterleaved => "non-interleaved",
        }
    }

    /// Builds the areas of `channels` channels holding `frames` frames of
    /// `physical_width`-bit samples, rooted at byte `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pcm_silence::{ChannelArea, LayoutKind};
    ///
    /// let areas = LayoutKind::Interleaved.build(2, 4, 16, 0);
    /// assert_eq!(areas[1], ChannelArea::new(0, 16, 32));
    ///
    /// let areas = LayoutKind::NonInterleaved.build(2, 4, 16, 0);
    /// assert_eq!(areas[1], ChannelArea::new(0, 64, 16));
    /// ```
    pub fn build(
        self,
        channels: usize,
        frames: usize,
        physical_width: usize,
        base: usize,
    ) -> Vec<ChannelArea> {
        (0..channels)
            .map(|ch| self.area(ch, channels, frames, physical_width, base))
            .collect()
    }

    fn area(
        self,
        ch: usize,
        channels: usize,
        frames: usize,
        physical_width: usize,
        base: usize,
    ) -> ChannelArea {
        match self {
            LayoutKind::Interleaved => {
                ChannelArea::new(base, ch * physical_width, channels * physical_width)
            }
            LayoutKind::NonInterleaved => {
                ChannelArea::new(base, ch * physical_width * frames, physical_width)
            }
        }
    }

    /// Like [`LayoutKind::build`], but writes into an existing vector so a
    /// sweep can reuse one allocation across trials.
    pub fn build_into(
        self,
        areas: &mut Vec<ChannelArea>,
        channels: usize,
        frames: usize,
        physical_width: usize,
        base: usize,
    ) -> &'static str {
        areas.clear();
        areas.extend((0..channels).map(|ch| self.area(ch, channels, frames, physical_width, base)));
        self.label()
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
