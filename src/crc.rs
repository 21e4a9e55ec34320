//! CRC-32 chunk validation, gated behind the `crc` feature.
//!
//! Recomputes a CRC-32 over `chunk_type || payload` and compares it
//! against a chunk's trailing 4-byte field. Off by default: the embedded
//! deployment target this crate is built for cannot usefully react to a
//! CRC mismatch (the display will show garbage either way), so paying for
//! the check on every chunk isn't worth it unless a caller opts in.
#![cfg(feature = "crc")]

const fn build_table() -> [u32; 256]
{
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256
    {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8
        {
            c = if c & 1 != 0 { 0xEDB8_8320 ^ (c >> 1) } else { c >> 1 };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

const CRC_TABLE: [u32; 256] = build_table();

/// Standard zlib/PNG CRC-32 over `data`.
pub(crate) fn crc32(data: &[u8]) -> u32
{
    let mut crc = 0xFFFF_FFFFu32;
    for &byte in data
    {
        let idx = ((crc ^ u32::from(byte)) & 0xFF) as usize;
        crc = CRC_TABLE[idx] ^ (crc >> 8);
    }
    !crc
}
