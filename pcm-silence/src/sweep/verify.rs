// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

//! Byte-exact checks of a filled buffer.

use std::ops::Range;

use crate::{
    ChannelArea, Error, FillRegion, LayoutKind, MismatchPolicy, Result, SampleFormat,
    sweep::{Corruption, Mismatch},
};

/// Checks a buffer after a silence fill.
///
/// Holds scratch space (a pre-fill snapshot and a mask of filled bytes) that
/// is reused across trials.
#[derive(Debug, Default)]
pub struct Verifier {
    snapshot: Vec<u8>,
    filled: Vec<bool>,
}

impl Verifier {
    /// Creates a verifier with empty scratch space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the buffer content before the fill.
    pub fn snapshot(&mut self, buf: &[u8]) {
        self.snapshot.clear();
        self.snapshot.extend_from_slice(buf);
    }

    /// Checks that every sample of `region` lies inside a buffer of
    /// `buf_len` bytes, without looking at its content.
    ///
    /// Sample addresses grow with the frame index, so only the last frame of
    /// each channel is checked.
    ///
    /// # Errors
    ///
    /// [`Error::GeometryOverrun`] naming the first sample that does not fit,
    /// [`Error::IneligibleFormat`] if the format has no whole-byte width.
    pub fn check_geometry(
        buf_len: usize,
        areas: &[ChannelArea],
        region: FillRegion,
        format: SampleFormat,
        layout: LayoutKind,
    ) -> Result<()> {
        let width = format.eligible_bytes()?;
        let Some(last) = region.frames.checked_sub(1) else {
            return Ok(());
        };
        for (channel, area) in areas.iter().take(region.channels).enumerate() {
            sample_range(buf_len, channel, area, region, last, width, format, layout)?;
        }
        Ok(())
    }

    /// Checks that every sample of `region` holds the silence of `format`.
    ///
    /// Returns the mismatching samples: at most one under
    /// [`MismatchPolicy::FailFast`], all of them under
    /// [`MismatchPolicy::CollectTrial`].
    ///
    /// # Errors
    ///
    /// [`Error::GeometryOverrun`] if a sample address reaches past the buffer,
    /// [`Error::IneligibleFormat`] if the format has no whole-byte width.
    pub fn check_region(
        &self,
        buf: &[u8],
        areas: &[ChannelArea],
        region: FillRegion,
        format: SampleFormat,
        layout: LayoutKind,
        policy: MismatchPolicy,
    ) -> Result<Vec<Mismatch>> {
        let width = format.eligible_bytes()?;
        let silence = format.silence();
        let expected = &silence[..width];
        let mut mismatches = Vec::new();

        for (channel, area) in areas.iter().take(region.channels).enumerate() {
            for frame in 0..region.frames {
                let range =
                    sample_range(buf.len(), channel, area, region, frame, width, format, layout)?;
                let actual = &buf[range.clone()];
                if actual != expected {
                    mismatches.push(Mismatch {
                        channel,
                        frame,
                        byte_offset: range.start,
                        expected: expected.to_vec(),
                        actual: actual.to_vec(),
                    });
                    if policy == MismatchPolicy::FailFast {
                        return Ok(mismatches);
                    }
                }
            }
        }
        Ok(mismatches)
    }

    /// Checks that no byte outside the samples of `region` changed since the
    /// last [`Verifier::snapshot`].
    ///
    /// Samples are `width` bytes wide. Call only after
    /// [`Verifier::check_region`] succeeded on the same geometry, which
    /// guarantees every sample lies inside the buffer.
    pub fn check_outside(
        &mut self,
        buf: &[u8],
        areas: &[ChannelArea],
        region: FillRegion,
        width: usize,
        policy: MismatchPolicy,
    ) -> Vec<Corruption> {
        self.filled.clear();
        self.filled.resize(buf.len(), false);
        for area in areas.iter().take(region.channels) {
            for frame in region.frame_range() {
                let Some(range) = area.sample_range(frame, width) else {
                    break;
                };
                let end = range.end.min(buf.len());
                self.filled[range.start.min(end)..end].fill(true);
            }
        }

        let mut corruptions = Vec::new();
        let changed = buf
            .iter()
            .zip(&self.snapshot)
            .zip(&self.filled)
            .enumerate()
            .filter(|&(_, ((actual, expected), filled))| !filled && actual != expected);
        for (byte_offset, ((&actual, &expected), _)) in changed {
            corruptions.push(Corruption {
                byte_offset,
                expected,
                actual,
            });
            if policy == MismatchPolicy::FailFast {
                break;
            }
        }
        corruptions
    }
}

/// Byte range of sample `frame` (relative to the region start) of `channel`,
/// checked against the buffer length.
#[allow(clippy::too_many_arguments)]
fn sample_range(
    buf_len: usize,
    channel: usize,
    area: &ChannelArea,
    region: FillRegion,
    frame: usize,
    width: usize,
    format: SampleFormat,
    layout: LayoutKind,
) -> Result<Range<usize>> {
    let range = region
        .dst_offset
        .checked_add(frame)
        .and_then(|absolute| area.sample_range(absolute, width));
    let end = range.as_ref().map_or(usize::MAX, |range| range.end);
    match range {
        Some(range) if end <= buf_len => Ok(range),
        _ => Err(Error::GeometryOverrun {
            format,
            layout: layout.label(),
            channel,
            frame,
            end,
            buffer_len: buf_len,
        }),
    }
}
