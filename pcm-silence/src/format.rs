// SPDX-FileCopyrightText: 2026 Contributors to the PCM Silence project.
// SPDX-License-Identifier: Apache-2.0

//! Sample format catalog.
//!
//! Maps every PCM sample format identifier to its physical width and to the
//! byte image of its silence pattern. The catalog is a static table: nothing
//! here queries a device or a library at runtime.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// PCM sample format identifiers.
///
/// Discriminants are the stable numeric indices used when sweeping a format
/// range. Indices 29 and 30 are unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
#[allow(non_camel_case_types)]
#[repr(u32)]
pub enum SampleFormat {
    S8 = 0,
    U8 = 1,
    S16Le = 2,
    S16Be = 3,
    U16Le = 4,
    U16Be = 5,
    S24Le = 6,
    S24Be = 7,
    U24Le = 8,
    U24Be = 9,
    S32Le = 10,
    S32Be = 11,
    U32Le = 12,
    U32Be = 13,
    FloatLe = 14,
    FloatBe = 15,
    Float64Le = 16,
    Float64Be = 17,
    Iec958SubframeLe = 18,
    Iec958SubframeBe = 19,
    MuLaw = 20,
    ALaw = 21,
    ImaAdpcm = 22,
    Mpeg = 23,
    Gsm = 24,
    S20Le = 25,
    S20Be = 26,
    U20Le = 27,
    U20Be = 28,
    Special = 31,
    S24_3Le = 32,
    S24_3Be = 33,
    U24_3Le = 34,
    U24_3Be = 35,
    S20_3Le = 36,
    S20_3Be = 37,
    U20_3Le = 38,
    U20_3Be = 39,
    S18_3Le = 40,
    S18_3Be = 41,
    U18_3Le = 42,
    U18_3Be = 43,
    G723_24 = 44,
    G723_24_1B = 45,
    G723_40 = 46,
    G723_40_1B = 47,
    DsdU8 = 48,
    DsdU16Le = 49,
    DsdU32Le = 50,
    DsdU16Be = 51,
    DsdU32Be = 52,
}

/// Formats that cannot be fill-tested: variable bit rate, compressed, or
/// sub-byte encodings.
pub const EXCLUDED_FORMATS: [SampleFormat; 8] = [
    SampleFormat::ImaAdpcm,
    SampleFormat::Mpeg,
    SampleFormat::Gsm,
    SampleFormat::Special,
    SampleFormat::G723_24,
    SampleFormat::G723_24_1B,
    SampleFormat::G723_40,
    SampleFormat::G723_40_1B,
];

use SampleFormat::*;

const ALL_FORMATS: [SampleFormat; 51] = [
    S8, U8, S16Le, S16Be, U16Le, U16Be, S24Le, S24Be, U24Le, U24Be, S32Le, S32Be, U32Le, U32Be,
    FloatLe, FloatBe, Float64Le, Float64Be, Iec958SubframeLe, Iec958SubframeBe, MuLaw, ALaw,
    ImaAdpcm, Mpeg, Gsm, S20Le, S20Be, U20Le, U20Be, Special, S24_3Le, S24_3Be, U24_3Le,
    U24_3Be, S20_3Le, S20_3Be, U20_3Le, U20_3Be, S18_3Le, S18_3Be, U18_3Le, U18_3Be, G723_24,
    G723_24_1B, G723_40, G723_40_1B, DsdU8, DsdU16Le, DsdU32Le, DsdU16Be, DsdU32Be,
];

impl SampleFormat {
    /// First format index of a full sweep.
    pub const FIRST: SampleFormat = S8;
    /// Last format index of a full sweep.
    pub const LAST: SampleFormat = DsdU32Be;

    /// Iterates every defined format in index order.
    pub fn all() -> impl Iterator<Item = SampleFormat> + Clone {
        ALL_FORMATS.into_iter()
    }

    /// Looks up a format by numeric index.
    ///
    /// Returns `None` for empty slots and indices past [`SampleFormat::LAST`].
    pub fn from_index(index: u32) -> Option<SampleFormat> {
        ALL_FORMATS.iter().copied().find(|format| format.index() == index)
    }

    /// Numeric index of the format.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Canonical upper-case name (e.g. `"S16_LE"`).
    pub fn name(self) -> &'static str {
        match self {
            S8 => "S8",
            U8 => "U8",
            S16Le => "S16_LE",
            S16Be => "S16_BE",
            U16Le => "U16_LE",
            U16Be => "U16_BE",
            S24Le => "S24_LE",
            S24Be => "S24_BE",
            U24Le => "U24_LE",
            U24Be => "U24_BE",
            S32Le => "S32_LE",
            S32Be => "S32_BE",
            U32Le => "U32_LE",
            U32Be => "U32_BE",
            FloatLe => "FLOAT_LE",
            FloatBe => "FLOAT_BE",
            Float64Le => "FLOAT64_LE",
            Float64Be => "FLOAT64_BE",
            Iec958SubframeLe => "IEC958_SUBFRAME_LE",
            Iec958SubframeBe => "IEC958_SUBFRAME_BE",
            MuLaw => "MU_LAW",
            ALaw => "A_LAW",
            ImaAdpcm => "IMA_ADPCM",
            Mpeg => "MPEG",
            Gsm => "GSM",
            S20Le => "S20_LE",
            S20Be => "S20_BE",
            U20Le => "U20_LE",
            U20Be => "U20_BE",
            Special => "SPECIAL",
            S24_3Le => "S24_3LE",
            S24_3Be => "S24_3BE",
            U24_3Le => "U24_3LE",
            U24_3Be => "U24_3BE",
            S20_3Le => "S20_3LE",
            S20_3Be => "S20_3BE",
            U20_3Le => "U20_3LE",
            U20_3Be => "U20_3BE",
            S18_3Le => "S18_3LE",
            S18_3Be => "S18_3BE",
            U18_3Le => "U18_3LE",
            U18_3Be => "U18_3BE",
            G723_24 => "G723_24",
            G723_24_1B => "G723_24_1B",
            G723_40 => "G723_40",
            G723_40_1B => "G723_40_1B",
            DsdU8 => "DSD_U8",
            DsdU16Le => "DSD_U16_LE",
            DsdU32Le => "DSD_U32_LE",
            DsdU16Be => "DSD_U16_BE",
            DsdU32Be => "DSD_U32_BE",
        }
    }

    /// Number of bits a sample occupies in memory.
    ///
    /// `None` for formats without a fixed sample size (MPEG, GSM, SPECIAL).
    pub fn physical_width(self) -> Option<u32> {
        match self {
            S8 | U8 | MuLaw | ALaw | G723_24_1B | G723_40_1B | DsdU8 => Some(8),
            S16Le | S16Be | U16Le | U16Be | DsdU16Le | DsdU16Be => Some(16),
            S24Le | S24Be | U24Le | U24Be | S32Le | S32Be | U32Le | U32Be | FloatLe | FloatBe
            | Iec958SubframeLe | Iec958SubframeBe | S20Le | S20Be | U20Le | U20Be | DsdU32Le
            | DsdU32Be => Some(32),
            Float64Le | Float64Be => Some(64),
            S24_3Le | S24_3Be | U24_3Le | U24_3Be | S20_3Le | S20_3Be | U20_3Le | U20_3Be
            | S18_3Le | S18_3Be | U18_3Le | U18_3Be => Some(24),
            ImaAdpcm => Some(4),
            G723_24 => Some(3),
            G723_40 => Some(5),
            Mpeg | Gsm | Special => None,
        }
    }

    /// Number of significant bits in a sample.
    pub fn width(self) -> Option<u32> {
        match self {
            S24Le | S24Be | U24Le | U24Be | S24_3Le | S24_3Be | U24_3Le | U24_3Be => Some(24),
            S20Le | S20Be | U20Le | U20Be | S20_3Le | S20_3Be | U20_3Le | U20_3Be => Some(20),
            S18_3Le | S18_3Be | U18_3Le | U18_3Be => Some(18),
            G723_24_1B => Some(3),
            G723_40_1B => Some(5),
            _ => self.physical_width(),
        }
    }

    /// Physical width in whole bytes, zero for sub-byte formats.
    pub fn physical_bytes(self) -> Option<usize> {
        self.physical_width().map(|bits| bits as usize / 8)
    }

    /// Byte image of one sample of silence, as stored in memory.
    fn silence_sample(self) -> &'static [u8] {
        match self {
            U8 => &[0x80],
            U16Le => &[0x00, 0x80],
            U16Be => &[0x80, 0x00],
            U24Le => &[0x00, 0x00, 0x80, 0x00],
            U24Be => &[0x00, 0x80, 0x00, 0x00],
            U32Le => &[0x00, 0x00, 0x00, 0x80],
            U32Be => &[0x80, 0x00, 0x00, 0x00],
            U20Le => &[0x00, 0x00, 0x08, 0x00],
            U20Be => &[0x00, 0x08, 0x00, 0x00],
            U24_3Le => &[0x00, 0x00, 0x80],
            U24_3Be => &[0x80, 0x00, 0x00],
            U20_3Le => &[0x00, 0x00, 0x08],
            U20_3Be => &[0x08, 0x00, 0x00],
            U18_3Le => &[0x00, 0x00, 0x02],
            U18_3Be => &[0x02, 0x00, 0x00],
            MuLaw => &[0x7f],
            ALaw => &[0x55],
            DsdU8 | DsdU16Le | DsdU16Be | DsdU32Le | DsdU32Be => &[0x69],
            _ => &[0x00],
        }
    }

    /// The silence pattern replicated over 64 bits, in memory byte order.
    ///
    /// The first [`SampleFormat::physical_bytes`] bytes form exactly one silent
    /// sample; for byte-wide encodings the whole array is silent.
    pub fn silence(self) -> [u8; 8] {
        let sample = self.silence_sample();
        std::array::from_fn(|i| sample[i % sample.len()])
    }

    /// `true` when the format can be driven through the fill-and-verify sweep.
    pub fn is_eligible(self) -> bool {
        match self.physical_bytes() {
            None | Some(0) => false,
            Some(_) => !EXCLUDED_FORMATS.contains(&self),
        }
    }

    /// Physical width in bytes, failing for formats the sweep cannot test.
    pub fn eligible_bytes(self) -> Result<usize> {
        match self.physical_bytes() {
            Some(bytes) if self.is_eligible() => Ok(bytes),
            _ => Err(Error::IneligibleFormat(self)),
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleFormat {
    type Err = Error;

    /// Parses a format name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        SampleFormat::all()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

impl From<SampleFormat> for String {
    fn from(value: SampleFormat) -> Self {
        value.name().to_string()
    }
}

impl TryFrom<String> for SampleFormat {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}
