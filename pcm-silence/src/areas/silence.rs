// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

//! Filling channel areas with format-correct silence.

use tracing::trace;

use crate::{ChannelArea, Error, FillRegion, Result, SampleFormat};

/// Writes the silence pattern of a format into a region of an area set.
///
/// Implementations must write exactly `region.frames` consecutive samples per
/// channel, starting at `region.dst_offset`, for the first `region.channels`
/// areas, and must leave every other byte of `buf` untouched. A format or
/// geometry the implementation cannot handle is reported as
/// [`Error::FillRejected`].
///
/// Closures with the same signature implement the trait, which makes it easy
/// to drive the sweep with an alternative (or deliberately broken) fill.
pub trait SilenceFill {
    /// Fills `region` of `areas` inside `buf` with the silence of `format`.
    fn fill(
        &self,
        buf: &mut [u8],
        areas: &[ChannelArea],
        region: FillRegion,
        format: SampleFormat,
    ) -> Result<()>;
}

impl<F> SilenceFill for F
where
    F: Fn(&mut [u8], &[ChannelArea], FillRegion, SampleFormat) -> Result<()>,
{
    fn fill(
        &self,
        buf: &mut [u8],
        areas: &[ChannelArea],
        region: FillRegion,
        format: SampleFormat,
    ) -> Result<()> {
        self(buf, areas, region, format)
    }
}

/// Native silence fill over channel areas.
///
/// Handles physical widths of 4, 8, 16, 24, 32 and 64 bits. Samples of 4 bits
/// are written nibble-wise and keep the neighbouring nibble; wider samples must
/// start on byte boundaries. The whole request is validated before the first
/// byte is written, so a rejected fill leaves the buffer untouched.
///
/// # Examples
///
/// ```
/// use pcm_silence::{AreaSilencer, FillRegion, LayoutKind, SampleFormat, SilenceFill};
///
/// # fn main() -> Result<(), pcm_silence::Error> {
/// let mut buf = vec![0xaa; 16];
/// let areas = LayoutKind::Interleaved.build(2, 4, 16, 0);
/// AreaSilencer.fill(&mut buf, &areas, FillRegion::new(0, 2, 2), SampleFormat::U16Be)?;
/// assert_eq!(&buf[..8], &[0x80, 0x00, 0x80, 0x00, 0x80, 0x00, 0x80, 0x00]);
/// assert_eq!(&buf[8..], &[0xaa; 8]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaSilencer;

impl AreaSilencer {
    /// Checks alignment and bounds of one area before anything is written.
    ///
    /// Returns the bit position of the first sample to write.
    fn check_area(
        buf_len: usize,
        ch: usize,
        area: &ChannelArea,
        region: FillRegion,
        width: usize,
        format: SampleFormat,
    ) -> Result<usize> {
        let alignment = width.min(8);
        if area.first % alignment != 0 || area.step % alignment != 0 {
            return Err(Error::FillRejected {
                format,
                reason: format!(
                    "channel {ch} (first {}, step {}) is not aligned to {alignment} bit(s)",
                    area.first, area.step
                ),
            });
        }

        let overflow = || Error::FillRejected {
            format,
            reason: format!(
                "channel {ch}: {} frame(s) at offset {} overflow the address space",
                region.frames, region.dst_offset
            ),
        };
        let last_frame = region.last_frame().ok_or_else(overflow)?;
        let end_bit = area
            .sample_bit_offset(last_frame)
            .and_then(|bit| bit.checked_add(width))
            .ok_or_else(overflow)?;
        if end_bit > buf_len.saturating_mul(8) {
            return Err(Error::FillRejected {
                format,
                reason: format!(
                    "channel {ch} frame {last_frame} ends at bit {end_bit}, past the {buf_len} byte buffer"
                ),
            });
        }
        area.sample_bit_offset(region.dst_offset).ok_or_else(overflow)
    }

    // Positions below are bounded by the end bit validated in `check_area`.

    fn silence_nibbles(
        buf: &mut [u8],
        area: &ChannelArea,
        start_bit: usize,
        frames: usize,
        silence: u8,
    ) {
        let high = silence & 0xf0;
        let low = silence & 0x0f;
        for frame in 0..frames {
            let bit = start_bit + area.step * frame;
            let byte = &mut buf[bit / 8];
            *byte = if bit % 8 == 0 {
                (*byte & 0x0f) | high
            } else {
                (*byte & 0xf0) | low
            };
        }
    }

    fn silence_bytes(
        buf: &mut [u8],
        area: &ChannelArea,
        start_bit: usize,
        frames: usize,
        sample: &[u8],
    ) {
        let width = sample.len();
        let start = start_bit / 8;
        if area.is_contiguous(width * 8) {
            buf[start..start + width * frames]
                .chunks_exact_mut(width)
                .for_each(|dst| dst.copy_from_slice(sample));
        } else {
            let step = area.step / 8;
            for frame in 0..frames {
                let offset = start + step * frame;
                buf[offset..offset + width].copy_from_slice(sample);
            }
        }
    }
}

impl SilenceFill for AreaSilencer {
    fn fill(
        &self,
        buf: &mut [u8],
        areas: &[ChannelArea],
        region: FillRegion,
        format: SampleFormat,
    ) -> Result<()> {
        if region.is_empty() {
            return Ok(());
        }
        if region.channels > areas.len() {
            return Err(Error::FillRejected {
                format,
                reason: format!(
                    "{} channel(s) requested, {} area(s) given",
                    region.channels,
                    areas.len()
                ),
            });
        }

        let width = format.physical_width().ok_or_else(|| Error::FillRejected {
            format,
            reason: "physical width is undefined".to_string(),
        })? as usize;
        if !matches!(width, 4 | 8 | 16 | 24 | 32 | 64) {
            return Err(Error::FillRejected {
                format,
                reason: format!("invalid format width {width}"),
            });
        }

        let areas = &areas[..region.channels];
        let starts = areas
            .iter()
            .enumerate()
            .map(|(ch, area)| Self::check_area(buf.len(), ch, area, region, width, format))
            .collect::<Result<Vec<_>>>()?;

        let silence = format.silence();
        trace!(
            "silencing {} channel(s) x {} frame(s) at offset {} with {}",
            region.channels, region.frames, region.dst_offset, format
        );
        for (area, start_bit) in areas.iter().zip(starts) {
            if width == 4 {
                Self::silence_nibbles(buf, area, start_bit, region.frames, silence[0]);
            } else {
                Self::silence_bytes(buf, area, start_bit, region.frames, &silence[..width / 8]);
            }
        }
        Ok(())
    }
}
