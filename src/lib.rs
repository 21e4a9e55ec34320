//! A streaming PNG decoder that emits RGB565 rows for memory-constrained,
//! display-driving embedded targets.
//!
//! The crate is built as four small stages wired together by
//! [`decoder::PngDecoder`]:
//!
//! - the Chunk Scanner (`chunk`) walks the input once, validating the
//!   signature and `IHDR` and indexing `PLTE`/`tRNS`/`IDAT`;
//! - the Inflate Driver (`inflate`) feeds the ordered `IDAT` spans to an
//!   external zlib decompressor through a fixed 32 KiB scratch window;
//! - the Scanline Reassembler (`scanline`) undoes each row's PNG filter
//!   against the previous row;
//! - the Pixel Pipeline (`pixel`) unpacks samples by color type/bit depth,
//!   packs them to RGB565, and optionally folds rows into a box-filter
//!   downscale.
//!
//! None of these four stages allocates per row after construction; the
//! only dynamic allocations are the palette (`Vec`, <=256 entries), the
//! `IDAT` span index, and the fixed-size scratch buffers allocated up
//! front by [`inflate::InflateDriver`] and [`pixel::PixelPipeline`].
//!
//! ```no_run
//! use pngstream::{decode, sink::RowCollector};
//!
//! # fn run(png_bytes: &[u8]) -> Result<(), pngstream::error::PngErrors>
//! # {
//! let mut rows = RowCollector::default();
//! decode(png_bytes, 1, &mut rows)?;
//! # Ok(())
//! # }
//! ```
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod chunk;
#[cfg(feature = "crc")]
mod crc;
mod cursor;
mod decoder;
mod enums;
mod inflate;
mod pixel;
mod scanline;

pub mod error;
pub mod options;
pub mod sink;

pub use decoder::{decode, info, ImageInfo, PngDecoder};
pub use enums::PngColor;
