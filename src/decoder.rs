//! Top-level orchestration: wires the Chunk Scanner, Inflate Driver,
//! Scanline Reassembler and Pixel Pipeline into one decode loop.
//!
//! The `Decoder` object splits into a constructor that validates the
//! header and allocates once, and a `decode` method that drives the loop,
//! with the three inner stages kept as separate owned components instead
//! of one monolithic function.

use crate::chunk::{self, PngHeader};
use crate::error::PngErrors;
use crate::inflate::InflateDriver;
use crate::options::PngOptions;
use crate::pixel::PixelPipeline;
use crate::scanline::ScanlineReassembler;
use crate::sink::RowSink;

/// The two numbers `info` promises without touching anything else.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ImageInfo
{
    pub width:  u32,
    pub height: u32
}

/// A PNG decoder bound to one borrowed input buffer.
///
/// Construction is cheap (no parsing happens in `new`); `info` and
/// `decode` each perform their own independent pass over the input.
pub struct PngDecoder<'a>
{
    data:    &'a [u8],
    options: PngOptions
}

impl<'a> PngDecoder<'a>
{
    pub fn new(data: &'a [u8]) -> PngDecoder<'a>
    {
        PngDecoder::new_with_options(data, PngOptions::default())
    }

    pub fn new_with_options(data: &'a [u8], options: PngOptions) -> PngDecoder<'a>
    {
        PngDecoder { data, options }
    }

    /// Validate the signature and `IHDR` prefix and return the declared
    /// dimensions. Does not allocate beyond the returned value and does
    /// not walk the remaining chunks.
    pub fn info(&self) -> Result<ImageInfo, PngErrors>
    {
        let (width, height) = chunk::probe_dimensions(self.data)?;
        Ok(ImageInfo { width, height })
    }

    /// Decode the image, emitting RGB565 rows through `sink` in ascending
    /// order. `scale` must be 1, 2 or 4.
    pub fn decode(&self, scale: u8, sink: &mut dyn RowSink) -> Result<(), PngErrors>
    {
        if !matches!(scale, 1 | 2 | 4)
        {
            return Err(PngErrors::InvalidScale(scale));
        }

        let (header, index) = chunk::index(self.data, &self.options)?;
        let (out_w, out_h) = scaled_dimensions(&header, scale)?;

        let mut driver = InflateDriver::new(self.data, &index.idat)?;
        let mut reassembler = ScanlineReassembler::new(header.stride(), header.bytes_per_pixel(), header.height as usize);
        let mut pipeline = PixelPipeline::new(header.color, header.depth, scale, out_w, out_h, &index.palette);

        let mut row_y = 0usize;
        let mut stopped = false;

        loop
        {
            let outcome = driver.step()?;
            let bytes = driver.window(&outcome);

            reassembler.feed(bytes, |raw_row| {
                let result = pipeline.process_row(row_y, raw_row, |out_y, packed| {
                    if !stopped && !sink.emit_row(out_y, packed)
                    {
                        stopped = true;
                    }
                    Ok(())
                });
                row_y += 1;
                result
            })?;

            if stopped || reassembler.is_done()
            {
                break;
            }
            if outcome.done
            {
                return Err(PngErrors::TruncatedScanlineData);
            }
        }

        Ok(())
    }
}

fn scaled_dimensions(header: &PngHeader, scale: u8) -> Result<(usize, usize), PngErrors>
{
    let scale = usize::from(scale);
    let out_w = header.width as usize / scale;
    let out_h = header.height as usize / scale;
    if out_w == 0 || out_h == 0
    {
        return Err(PngErrors::ZeroOutputDimensions);
    }
    Ok((out_w, out_h))
}

/// `info(png_bytes)`: free-function form of [`PngDecoder::info`].
pub fn info(data: &[u8]) -> Result<ImageInfo, PngErrors>
{
    PngDecoder::new(data).info()
}

/// `decode(png_bytes, scale, sink)`: free-function form of
/// [`PngDecoder::decode`]. The caller context that would otherwise be a
/// separate parameter is folded into `sink` itself (a closure's captures,
/// or a `RowSink` trait object's fields).
pub fn decode(data: &[u8], scale: u8, sink: &mut dyn RowSink) -> Result<(), PngErrors>
{
    PngDecoder::new(data).decode(scale, sink)
}
