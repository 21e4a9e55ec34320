//! Scanline Reassembler: turns the decompressed byte stream into completed,
//! unfiltered scanlines by tracking two row-sized buffers and undoing each
//! row's filter byte-by-byte against the previous row.
//!
//! `cur` and `prev` are owned fields on the reassembler and are swapped,
//! not copied, on row completion.

use alloc::vec;
use alloc::vec::Vec;

use crate::error::PngErrors;

/// Per-scanline filter type (distinct from [`crate::enums::FilterMethod`],
/// which is the single `IHDR`-level filter *method*).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum FilterType
{
    None,
    Sub,
    Up,
    Average,
    Paeth
}

impl FilterType
{
    const fn from_byte(byte: u8) -> Option<FilterType>
    {
        match byte
        {
            0 => Some(FilterType::None),
            1 => Some(FilterType::Sub),
            2 => Some(FilterType::Up),
            3 => Some(FilterType::Average),
            4 => Some(FilterType::Paeth),
            _ => None
        }
    }
}

/// The canonical PNG Paeth predictor: of the left (`a`), upper (`b`) and
/// upper-left (`c`) neighbors, picks whichever is closest to `a + b - c`,
/// breaking ties in favor of `a`, then `b`, then `c`.
pub(crate) fn paeth_predictor(a: u8, b: u8, c: u8) -> u8
{
    let (a, b, c) = (i32::from(a), i32::from(b), i32::from(c));
    let p = a + b - c;
    let pa = (p - a).abs();
    let pb = (p - b).abs();
    let pc = (p - c).abs();

    if pa <= pb && pa <= pc
    {
        a as u8
    }
    else if pb <= pc
    {
        b as u8
    }
    else
    {
        c as u8
    }
}

/// Reassembles filtered scanlines into raw rows, one stride-sized row at a
/// time, and hands each completed row to a caller-supplied closure.
pub(crate) struct ScanlineReassembler
{
    stride:    usize,
    bpp:       usize,
    cur:       Vec<u8>,
    prev:      Vec<u8>,
    filter:    Option<FilterType>,
    /// 0 = awaiting the filter-type byte; otherwise `sl_pos - 1` raw bytes
    /// of the current scanline have already been reconstructed.
    sl_pos:    usize,
    rows_done: usize,
    height:    usize
}

impl ScanlineReassembler
{
    pub(crate) fn new(stride: usize, bpp: usize, height: usize) -> Self
    {
        ScanlineReassembler {
            stride,
            bpp,
            cur: vec![0u8; stride],
            prev: vec![0u8; stride],
            filter: None,
            sl_pos: 0,
            rows_done: 0,
            height
        }
    }

    pub(crate) fn is_done(&self) -> bool
    {
        self.rows_done >= self.height
    }

    /// Feed freshly inflated bytes through the reassembler, calling
    /// `on_row` with each row it completes. Bytes beyond the last expected
    /// scanline are silently ignored.
    pub(crate) fn feed(
        &mut self, data: &[u8], mut on_row: impl FnMut(&[u8]) -> Result<(), PngErrors>
    ) -> Result<(), PngErrors>
    {
        let mut idx = 0;

        while idx < data.len() && !self.is_done()
        {
            if self.sl_pos == 0
            {
                let byte = data[idx];
                idx += 1;
                self.filter = Some(FilterType::from_byte(byte).ok_or(PngErrors::UnknownFilterType(byte))?);
                self.sl_pos = 1;
                continue;
            }

            let i = self.sl_pos - 1;
            if i >= self.stride
            {
                on_row(&self.cur)?;
                core::mem::swap(&mut self.cur, &mut self.prev);
                self.cur.iter_mut().for_each(|b| *b = 0);
                self.sl_pos = 0;
                self.rows_done += 1;
                continue;
            }

            let raw = data[idx];
            idx += 1;

            let a = if i >= self.bpp { self.cur[i - self.bpp] } else { 0 };
            let b = self.prev[i];
            let c = if i >= self.bpp { self.prev[i - self.bpp] } else { 0 };

            let predicted = match self.filter.expect("filter set before any row byte is read")
            {
                FilterType::None => 0,
                FilterType::Sub => a,
                FilterType::Up => b,
                FilterType::Average => ((u16::from(a) + u16::from(b)) / 2) as u8,
                FilterType::Paeth => paeth_predictor(a, b, c)
            };

            self.cur[i] = raw.wrapping_add(predicted);
            self.sl_pos += 1;
        }

        Ok(())
    }
}
