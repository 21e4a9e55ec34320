//! Decoder configuration.

use crate::constants::MAX_IDAT_CHUNKS;
use crate::enums::PngChunkType;
use crate::error::PngErrors;

/// Called once for every chunk the scanner recognizes by name but does not
/// itself interpret (`pHYs`, `tIME`, and anything unrecognized). The
/// default implementation ignores the chunk; it exists purely as an
/// observability hook. Its return value can fail the decode, but nothing
/// about pixel output depends on it.
pub type ChunkHandler = fn(chunk_type: PngChunkType, length: usize) -> Result<(), PngErrors>;

fn default_chunk_handler(_chunk_type: PngChunkType, _length: usize) -> Result<(), PngErrors>
{
    Ok(())
}

/// Tunables for [`crate::decoder::PngDecoder`].
///
/// `PngOptions::default()` matches the crate's documented defaults: CRC
/// checking off, a 64-entry `IDAT` index cap, and an ancillary chunk
/// handler that does nothing.
#[derive(Copy, Clone)]
pub struct PngOptions
{
    /// Verify each chunk's trailing CRC-32. Only meaningful (and only
    /// compiled) with the `crc` feature; ignored otherwise.
    pub confirm_crc:     bool,
    /// Upper bound on the number of `IDAT` chunks the scanner will index.
    /// Additional `IDAT` chunks beyond this are silently skipped.
    pub max_idat_chunks: usize,
    /// Hook invoked for ancillary chunks the scanner recognizes but does
    /// not interpret.
    pub chunk_handler:   ChunkHandler
}

impl Default for PngOptions
{
    fn default() -> Self
    {
        PngOptions {
            confirm_crc:     false,
            max_idat_chunks: MAX_IDAT_CHUNKS,
            chunk_handler:   default_chunk_handler
        }
    }
}
