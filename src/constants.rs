//! Fixed sizes and magic bytes that pin down the memory budget described
//! in the crate's top-level documentation.

/// The 8 magic bytes every PNG stream must begin with.
pub(crate) const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// `IHDR` is always exactly 13 bytes: width(4) + height(4) + depth(1) +
/// color(1) + compression(1) + filter(1) + interlace(1).
pub(crate) const IHDR_LEN: usize = 13;

/// Size of the circular dictionary window fed to the inflate primitive.
///
/// This must stay at 32 KiB: it is both the maximum DEFLATE back-reference
/// distance and the single largest allocation this crate makes.
pub(crate) const DICT_WINDOW_SIZE: usize = 32 * 1024;

/// Default cap on the number of `IDAT` chunks the chunk scanner will index.
///
/// Real-world encoders rarely emit more than a handful of `IDAT` chunks;
/// this bound exists only to keep the index itself out of the memory
/// budget, not to reject legitimate images. See `PngOptions::max_idat_chunks`
/// to raise it.
pub(crate) const MAX_IDAT_CHUNKS: usize = 64;

/// Maximum number of palette entries a PLTE/tRNS chunk may contribute.
pub(crate) const MAX_PALETTE_ENTRIES: usize = 256;
