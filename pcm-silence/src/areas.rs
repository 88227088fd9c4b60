// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

//! Channel area descriptors and the operations built on them.
//!
//! A multi-channel sample buffer is not described as a flat array but as one
//! [`ChannelArea`] per channel: where the channel's first sample sits and how
//! far apart its samples are, both in bits. The same byte buffer is shared by
//! every area of a set; areas never own it.
//!
//! # Key Types
//!
//! - [`ChannelArea`]: geometry of one channel inside a shared buffer
//! - [`LayoutKind`]: builds a full area set for a buffer layout
//! - [`SilenceFill`]: fills a region of an area set with silence
//! - [`AreaSilencer`]: the native [`SilenceFill`] implementation

pub mod layout;
pub mod silence;

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Geometry of one channel inside a shared sample buffer.
///
/// All offsets are relative to the start of the buffer slice the area is used
/// with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChannelArea {
    /// Byte offset of the channel base inside the buffer.
    pub base: usize,
    /// Bit offset from `base` to the channel's first sample.
    pub first: usize,
    /// Bit distance between two consecutive samples of the channel.
    pub step: usize,
}

impl ChannelArea {
    /// Creates an area rooted at `base` bytes into the buffer.
    pub fn new(base: usize, first: usize, step: usize) -> Self {
        Self { base, first, step }
    }

    /// Absolute bit position of the sample at `frame`.
    ///
    /// `None` if the position does not fit in a `usize`.
    pub fn sample_bit_offset(&self, frame: usize) -> Option<usize> {
        self.base
            .checked_mul(8)?
            .checked_add(self.first)?
            .checked_add(self.step.checked_mul(frame)?)
    }

    /// Absolute byte offset of the sample at `frame`.
    ///
    /// Bit offsets are truncated to whole bytes, so for sub-byte samples this
    /// is the byte holding the sample. `None` on overflow.
    pub fn sample_byte_offset(&self, frame: usize) -> Option<usize> {
        self.base
            .checked_add(self.first / 8)?
            .checked_add((self.step / 8).checked_mul(frame)?)
    }

    /// Byte range covered by the sample at `frame` for a sample `width_bytes`
    /// wide. `None` on overflow.
    pub fn sample_range(&self, frame: usize, width_bytes: usize) -> Option<Range<usize>> {
        let start = self.sample_byte_offset(frame)?;
        Some(start..start.checked_add(width_bytes)?)
    }

    /// `true` when consecutive samples are adjacent in memory.
    pub fn is_contiguous(&self, physical_width: usize) -> bool {
        self.step == physical_width
    }
}

/// The logical rectangle of an area set touched by one fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillRegion {
    /// First frame index written.
    pub dst_offset: usize,
    /// Number of frames written per channel.
    pub frames: usize,
    /// Number of channels (leading areas of the set) written.
    pub channels: usize,
}

impl FillRegion {
    /// Creates a region of `frames` frames over the first `channels` areas,
    /// starting at frame `dst_offset`.
    pub fn new(dst_offset: usize, frames: usize, channels: usize) -> Self {
        Self {
            dst_offset,
            frames,
            channels,
        }
    }

    /// Frame indices covered by the region.
    ///
    /// Saturates at `usize::MAX`; use [`FillRegion::last_frame`] to detect a
    /// region that does not fit.
    pub fn frame_range(&self) -> Range<usize> {
        self.dst_offset..self.dst_offset.saturating_add(self.frames)
    }

    /// Index of the last frame covered, `None` for an empty region or one
    /// that reaches past `usize::MAX`.
    pub fn last_frame(&self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        self.dst_offset.checked_add(self.frames - 1)
    }

    /// `true` when the region touches no sample at all.
    pub fn is_empty(&self) -> bool {
        self.frames == 0 || self.channels == 0
    }
}
