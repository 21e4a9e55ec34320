//! Inflate Driver: presents the ordered `IDAT` span list as one continuous
//! zlib stream to the external inflate primitive, and harvests decompressed
//! bytes through a fixed 32 KiB scratch window.
//!
//! The external decompressor is wrapped behind a small interface: feed an
//! input span, request an output span, report status. This crate uses
//! `miniz_oxide`'s streaming `inflate::stream` API, which accepts an
//! arbitrary caller-owned output slice on every call and is resumable
//! across calls, matching the bounded circular window this driver needs
//! (see DESIGN.md for why this was chosen over an alternative that only
//! supports whole-buffer output).

use alloc::boxed::Box;

use miniz_oxide::inflate::stream::{inflate, InflateState};
use miniz_oxide::{DataFormat, MZFlush, MZStatus};

use crate::chunk::IdatSpan;
use crate::constants::DICT_WINDOW_SIZE;
use crate::error::PngErrors;

/// One step of decompression: a contiguous span of freshly-written bytes
/// inside the driver's scratch window, plus whether the stream is finished.
pub(crate) struct StepOutcome
{
    pub offset: usize,
    pub len:    usize,
    pub done:   bool
}

/// Drives a single `miniz_oxide` decompressor instance across every `IDAT`
/// chunk in order. Exactly one instance spans the whole image; the
/// deflate stream must never be split across independent decompressors.
pub(crate) struct InflateDriver<'a>
{
    data:     &'a [u8],
    idat:     &'a [IdatSpan],
    ci:       usize,
    consumed: usize,
    state:    Box<InflateState>,
    dict:     Box<[u8]>,
    dict_ofs: usize
}

impl<'a> InflateDriver<'a>
{
    pub(crate) fn new(data: &'a [u8], idat: &'a [IdatSpan]) -> Result<Self, PngErrors>
    {
        if idat.is_empty()
        {
            return Err(PngErrors::NoIdatChunks);
        }
        let dict = alloc::vec![0u8; DICT_WINDOW_SIZE].into_boxed_slice();
        Ok(InflateDriver {
            data,
            idat,
            ci: 0,
            consumed: 0,
            state: InflateState::new_boxed(DataFormat::Zlib),
            dict,
            dict_ofs: 0
        })
    }

    /// The scratch window bytes written by the most recent [`step`] call.
    pub(crate) fn window(&self, outcome: &StepOutcome) -> &[u8]
    {
        &self.dict[outcome.offset..outcome.offset + outcome.len]
    }

    /// Drive the decompressor forward until it produces at least one byte
    /// of output, or reports the stream is done.
    pub(crate) fn step(&mut self) -> Result<StepOutcome, PngErrors>
    {
        loop
        {
            if self.dict_ofs == self.dict.len()
            {
                self.dict_ofs = 0;
            }

            let Some(&span) = self.idat.get(self.ci) else
            {
                return Err(PngErrors::InflateError("ran out of IDAT input before stream end"));
            };

            let input = &self.data[span.offset + self.consumed..span.offset + span.length];
            let has_more_input = self.ci + 1 < self.idat.len();
            let flush = if has_more_input { MZFlush::None } else { MZFlush::Finish };

            let out_ofs = self.dict_ofs;
            let output = &mut self.dict[out_ofs..];

            let result = inflate(&mut self.state, input, output, flush);

            self.consumed += result.bytes_consumed;
            let written = result.bytes_written;
            self.dict_ofs = (self.dict_ofs + written) % self.dict.len();

            match result.status
            {
                Ok(MZStatus::StreamEnd) =>
                {
                    return Ok(StepOutcome { offset: out_ofs, len: written, done: true });
                }
                Ok(_) =>
                {
                    if written > 0
                    {
                        return Ok(StepOutcome { offset: out_ofs, len: written, done: false });
                    }
                    if self.consumed >= span.length
                    {
                        if has_more_input
                        {
                            self.ci += 1;
                            self.consumed = 0;
                            continue;
                        }
                        return Err(PngErrors::InflateError(
                            "ran out of IDAT input before stream end"
                        ));
                    }
                    if result.bytes_consumed == 0
                    {
                        return Err(PngErrors::InflateError("inflate primitive made no progress"));
                    }
                    continue;
                }
                Err(_) => return Err(PngErrors::InflateError("zlib/deflate stream is corrupt"))
            }
        }
    }
}
