//! Chunk Scanner: the single pass over the input that validates the
//! signature/`IHDR` and records where `PLTE`, `tRNS` and every `IDAT`
//! payload live.
//!
//! Walks the chunk stream with a cursor and yields zero-copy `IDAT` spans
//! instead of copying payloads into one accumulated buffer: the embedded
//! memory budget this crate targets cannot afford materializing the whole
//! compressed stream twice.

#[cfg(feature = "log")]
use log::warn;

use alloc::vec::Vec;

use crate::constants::{IHDR_LEN, MAX_PALETTE_ENTRIES, PNG_SIGNATURE};
use crate::cursor::ByteCursor;
use crate::enums::{FilterMethod, InterlaceMethod, PngChunkType, PngColor};
use crate::error::PngErrors;
use crate::options::PngOptions;

/// Parsed `IHDR` contents plus the values derived from it that every other
/// stage needs.
#[derive(Copy, Clone, Debug)]
pub(crate) struct PngHeader
{
    pub width:            u32,
    pub height:           u32,
    pub depth:            u8,
    pub color:            PngColor,
    pub filter_method:    FilterMethod,
    pub interlace_method: InterlaceMethod
}

impl PngHeader
{
    /// Bytes per pixel in the raw (undecompressed, pre-unpacking) scanline.
    pub(crate) fn bytes_per_pixel(&self) -> usize
    {
        if self.color == PngColor::Palette
        {
            1
        }
        else
        {
            usize::from(self.color.raw_channels()) * usize::from(self.depth) / 8
        }
    }

    /// Bytes per scanline, excluding the leading filter-type byte.
    pub(crate) fn stride(&self) -> usize
    {
        self.width as usize * self.bytes_per_pixel()
    }
}

/// Span of an `IDAT` chunk's payload within the original input buffer.
#[derive(Copy, Clone)]
pub(crate) struct IdatSpan
{
    pub offset: usize,
    pub length: usize
}

/// Everything the Chunk Scanner collects besides the header itself.
pub(crate) struct ChunkIndex
{
    pub palette:       Vec<[u8; 3]>,
    pub palette_alpha: [u8; MAX_PALETTE_ENTRIES],
    pub idat:          Vec<IdatSpan>
}

fn check_signature(cursor: &mut ByteCursor) -> Result<(), PngErrors>
{
    let signature = cursor.read_u64_be().ok_or(PngErrors::BadSignature)?;
    if signature != u64::from_be_bytes(PNG_SIGNATURE)
    {
        return Err(PngErrors::BadSignature);
    }
    Ok(())
}

/// Confirm the first chunk is `IHDR` with declared length 13 and return its
/// width/height, without validating any of the remaining fields. This is
/// all `info` needs, and deliberately all it checks: an interlaced or
/// otherwise-unsupported image still reports correct dimensions even
/// though `decode` will later refuse it.
fn read_ihdr_prefix(cursor: &mut ByteCursor) -> Result<(u32, u32), PngErrors>
{
    if cursor.peek_slice(4, 4) != Some(b"IHDR")
    {
        return Err(PngErrors::BadIhdr);
    }
    let length = cursor.read_u32_be().ok_or(PngErrors::BadIhdr)? as usize;
    if length != IHDR_LEN
    {
        return Err(PngErrors::BadIhdr);
    }
    cursor.skip(4); // chunk type, already confirmed above

    let width = cursor.read_u32_be().ok_or(PngErrors::BadIhdr)?;
    let height = cursor.read_u32_be().ok_or(PngErrors::BadIhdr)?;
    Ok((width, height))
}

fn parse_ihdr(cursor: &mut ByteCursor) -> Result<PngHeader, PngErrors>
{
    let (width, height) = read_ihdr_prefix(cursor)?;
    let body = cursor.read_slice(5).ok_or(PngErrors::BadIhdr)?;
    let [depth, color_byte, compression, filter, interlace] = <[u8; 5]>::try_from(body).unwrap();
    cursor.skip(4); // CRC, ignored unless the `crc` feature recomputes it at the call site

    if width == 0 || height == 0
    {
        return Err(PngErrors::ZeroDimensions);
    }

    let color = PngColor::from_byte(color_byte)
        .ok_or(PngErrors::UnsupportedColorAndDepth(PngColor::Unknown, depth))?;

    let depth_ok = matches!(depth, 8 | 16) && !(depth == 16 && color == PngColor::Palette);
    if !depth_ok
    {
        return Err(PngErrors::UnsupportedColorAndDepth(color, depth));
    }

    let filter_method =
        FilterMethod::from_byte(filter).ok_or(PngErrors::UnsupportedMethod("filter method", filter))?;
    if compression != 0
    {
        return Err(PngErrors::UnsupportedMethod("compression method", compression));
    }
    let interlace_method = InterlaceMethod::from_byte(interlace)
        .ok_or(PngErrors::UnsupportedMethod("interlace method", interlace))?;
    if interlace_method != InterlaceMethod::Standard
    {
        return Err(PngErrors::UnsupportedInterlace);
    }

    Ok(PngHeader { width, height, depth, color, filter_method, interlace_method })
}

/// `info(bytes)`: validate the signature and `IHDR` prefix and return just
/// the declared dimensions, without walking the rest of the chunk stream.
pub(crate) fn probe_dimensions(data: &[u8]) -> Result<(u32, u32), PngErrors>
{
    let mut cursor = ByteCursor::new(data);
    check_signature(&mut cursor)?;
    read_ihdr_prefix(&mut cursor)
}

/// `index(bytes)`: full chunk walk, collecting the header plus palette,
/// palette alpha and the ordered `IDAT` span list.
pub(crate) fn index(data: &[u8], options: &PngOptions) -> Result<(PngHeader, ChunkIndex), PngErrors>
{
    let mut cursor = ByteCursor::new(data);
    check_signature(&mut cursor)?;
    let header = parse_ihdr(&mut cursor)?;

    let mut chunk_index = ChunkIndex {
        palette:       Vec::new(),
        palette_alpha: [255; MAX_PALETTE_ENTRIES],
        idat:          Vec::new()
    };

    loop
    {
        // a chunk header needs at least length(4) + type(4) bytes to even
        // be inspected; anything short of that is the end of a truncated
        // stream, not a chunk.
        if !cursor.has(8)
        {
            break;
        }

        let length = cursor.read_u32_be().ok_or(PngErrors::BadIhdr)? as usize;
        let type_bytes: [u8; 4] =
            cursor.read_slice(4).ok_or(PngErrors::BadIhdr)?.try_into().unwrap();
        let chunk_type = PngChunkType::from_bytes(&type_bytes);

        let claimed = match length.checked_add(4)
        {
            Some(n) => n,
            None => break
        };
        if !cursor.has(claimed)
        {
            // chunk header claims more than remains in the buffer
            break;
        }

        let payload = cursor.peek_slice(0, length).ok_or(PngErrors::BadIhdr)?;
        let payload_offset = cursor.position();

        #[cfg(feature = "crc")]
        if options.confirm_crc
        {
            let crc_bytes: [u8; 4] =
                cursor.peek_slice(length, 4).ok_or(PngErrors::BadIhdr)?.try_into().unwrap();
            let expected = u32::from_be_bytes(crc_bytes);
            let computed = crate::crc::crc32(&[&type_bytes[..], payload].concat());
            if expected != computed
            {
                return Err(PngErrors::BadCrc { expected, computed });
            }
        }

        match chunk_type
        {
            PngChunkType::PLTE =>
            {
                let n = (payload.len() / 3).min(MAX_PALETTE_ENTRIES);
                chunk_index.palette.reserve(n);
                for rgb in payload[..n * 3].chunks_exact(3)
                {
                    chunk_index.palette.push([rgb[0], rgb[1], rgb[2]]);
                }
            }
            PngChunkType::tRNS if header.color == PngColor::Palette =>
            {
                let n = payload.len().min(MAX_PALETTE_ENTRIES);
                chunk_index.palette_alpha[..n].copy_from_slice(&payload[..n]);
            }
            PngChunkType::IDAT =>
            {
                if chunk_index.idat.len() < options.max_idat_chunks
                {
                    chunk_index.idat.push(IdatSpan { offset: payload_offset, length });
                }
                else
                {
                    #[cfg(feature = "log")]
                    warn!("IDAT index cap ({}) reached, ignoring remaining IDAT chunks", options.max_idat_chunks);
                }
            }
            PngChunkType::IEND => break,
            other => (options.chunk_handler)(other, length)?
        }

        cursor.skip(length + 4); // payload + CRC
    }

    if chunk_index.idat.is_empty()
    {
        return Err(PngErrors::NoIdatChunks);
    }

    Ok((header, chunk_index))
}
