// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for silence fill and verification.
//!
//! Every failure carries enough context (format, layout, indices) to reproduce
//! the failing trial without re-running the whole sweep.

use crate::{SampleFormat, sweep::MismatchReport};

/// Convenience result type using [`Error`] as the error variant.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while filling or verifying channel areas.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The format has no usable physical width or is excluded from fill testing.
    ///
    /// The sweep engine never returns this: ineligible formats are skipped and
    /// counted in [`crate::SweepReport`]. It is returned by direct catalog
    /// lookups that require a byte-addressable format.
    #[error("Sample format {0} is not eligible for silence testing")]
    IneligibleFormat(SampleFormat),

    /// No sample format has this name.
    #[error("Unknown sample format: {0}")]
    UnknownFormat(String),

    /// A sweep bound is outside the accepted range.
    #[error("Invalid {name}: {value} (accepted {min}..={max})")]
    InvalidBound {
        /// Name of the bound (e.g. `"frame count"`).
        name: &'static str,
        /// Rejected value.
        value: usize,
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },

    /// The randomness source delivered fewer bytes than requested.
    #[error("Random source exhausted: requested {requested} byte(s), got {delivered}")]
    RandomSourceExhausted {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes actually delivered.
        delivered: usize,
    },

    /// The silence fill refused the format or the geometry.
    #[error("Silence fill rejected {format}: {reason}")]
    FillRejected {
        /// Format passed to the fill.
        format: SampleFormat,
        /// Why the fill refused.
        reason: String,
    },

    /// Filled bytes differ from the silence pattern, or bytes outside the fill
    /// region were altered.
    #[error("{0}")]
    MismatchDetected(Box<MismatchReport>),

    /// A computed sample address reaches past the end of the buffer.
    ///
    /// This indicates a bug in the layout or bookkeeping of the harness rather
    /// than in the fill under test.
    #[error(
        "Geometry overrun for {format} ({layout}): ch {channel}, frame {frame} ends at byte {end}, buffer holds {buffer_len}"
    )]
    GeometryOverrun {
        /// Format under test.
        format: SampleFormat,
        /// Layout label.
        layout: &'static str,
        /// Channel index.
        channel: usize,
        /// Frame index relative to the destination offset.
        frame: usize,
        /// Exclusive end byte of the offending sample.
        end: usize,
        /// Length of the buffer.
        buffer_len: usize,
    },

    /// I/O failure, typically while opening or reading the random device.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` for failures caused by the fill under test rather than
    /// by the harness or its environment.
    pub fn is_fill_failure(&self) -> bool {
        matches!(self, Error::MismatchDetected(_) | Error::FillRejected { .. })
    }
}
