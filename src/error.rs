//! Decoder error type.

use alloc::string::String;
use core::fmt::{Debug, Formatter};

use crate::enums::PngColor;

/// Every way a [`crate::decoder::PngDecoder`] can fail.
///
/// Hosts that only care about pass/fail can ignore the variants and call
/// `.is_err()`; hosts with a logger can format this with `{:?}` for a
/// human-readable diagnostic.
pub enum PngErrors
{
    /// The first 8 bytes did not match the PNG signature.
    BadSignature,
    /// The first chunk was not `IHDR`, or `IHDR`'s declared length was not 13.
    BadIhdr,
    /// `IHDR` declared a (color type, bit depth) pair this decoder does not
    /// support (includes the disallowed 16-bit-depth/palette combination).
    UnsupportedColorAndDepth(PngColor, u8),
    /// `IHDR` declared `interlace != 0`. Adam7 is out of scope.
    UnsupportedInterlace,
    /// `IHDR` declared a nonzero compression or filter method.
    UnsupportedMethod(&'static str, u8),
    /// `IHDR` declared a zero width or height.
    ZeroDimensions,
    /// `decode` was called with a scale factor other than 1, 2, or 4.
    InvalidScale(u8),
    /// The requested scale factor shrinks width or height to zero.
    ZeroOutputDimensions,
    /// No `IDAT` chunks were present before `IEND`.
    NoIdatChunks,
    /// A scanline carried a filter-type byte outside 0..=4.
    UnknownFilterType(u8),
    /// Fewer decompressed bytes arrived than `height * (1 + stride)` requires.
    TruncatedScanlineData,
    /// The inflate primitive reported a decode error.
    InflateError(&'static str),
    /// A fallible allocation for one of the fixed-size working buffers failed.
    AllocationFailure,
    /// (feature = "crc") A chunk's trailing CRC-32 did not match its
    /// computed value.
    #[cfg(feature = "crc")]
    BadCrc { expected: u32, computed: u32 },
    /// Any other malformed-input condition not worth a dedicated variant.
    Generic(String),
    /// Same as `Generic`, but for messages known at compile time (avoids an
    /// allocation on paths that don't otherwise need one).
    GenericStatic(&'static str)
}

impl Debug for PngErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        match self
        {
            PngErrors::BadSignature => write!(f, "Not a PNG: bad signature"),
            PngErrors::BadIhdr => write!(f, "Missing or malformed IHDR chunk"),
            PngErrors::UnsupportedColorAndDepth(color, depth) =>
            {
                write!(f, "Unsupported color type {color:?} at bit depth {depth}")
            }
            PngErrors::UnsupportedInterlace =>
            {
                write!(f, "Interlaced PNGs (Adam7) are not supported")
            }
            PngErrors::UnsupportedMethod(field, value) =>
            {
                write!(f, "Unsupported {field} value {value}, expected 0")
            }
            PngErrors::ZeroDimensions => write!(f, "Width or height is zero"),
            PngErrors::InvalidScale(scale) =>
            {
                write!(f, "Invalid scale factor {scale}, expected 1, 2 or 4")
            }
            PngErrors::ZeroOutputDimensions =>
            {
                write!(f, "Scale factor reduces output width or height to zero")
            }
            PngErrors::NoIdatChunks => write!(f, "No IDAT chunks found before IEND"),
            PngErrors::UnknownFilterType(byte) => write!(f, "Unknown scanline filter type {byte}"),
            PngErrors::TruncatedScanlineData =>
            {
                write!(f, "Inflated data ended before all scanlines were read")
            }
            PngErrors::InflateError(msg) => write!(f, "Inflate error: {msg}"),
            PngErrors::AllocationFailure => write!(f, "Failed to allocate a decoder work buffer"),
            #[cfg(feature = "crc")]
            PngErrors::BadCrc { expected, computed } =>
            {
                write!(f, "CRC mismatch: expected {expected:#010x}, computed {computed:#010x}")
            }
            PngErrors::Generic(msg) => write!(f, "{msg}"),
            PngErrors::GenericStatic(msg) => write!(f, "{msg}")
        }
    }
}

impl From<&'static str> for PngErrors
{
    fn from(value: &'static str) -> Self
    {
        PngErrors::GenericStatic(value)
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for PngErrors
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        Debug::fmt(self, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PngErrors {}
