//! Minimal PNG/zlib encoder used only by this crate's own test suite.
//!
//! There is no way to run a real PNG encoder against this decoder without
//! invoking the Rust toolchain, so test fixtures are built by hand: a zlib
//! wrapper around DEFLATE "stored" (uncompressed) blocks is sufficient to
//! exercise every code path here, since the Inflate Driver doesn't care
//! whether the compressor did any work.

pub fn adler32(data: &[u8]) -> u32 {
    const MOD_ADLER: u32 = 65521;
    let mut a: u32 = 1;
    let mut b: u32 = 0;
    for &byte in data {
        a = (a + u32::from(byte)) % MOD_ADLER;
        b = (b + a) % MOD_ADLER;
    }
    (b << 16) | a
}

/// Wrap `raw` in a zlib stream (RFC 1950) made of uncompressed DEFLATE
/// stored blocks (RFC 1951 §3.2.4), splitting at 65535-byte boundaries if
/// `raw` is long enough to require it.
pub fn zlib_stored(raw: &[u8]) -> Vec<u8> {
    let mut out = vec![0x78, 0x01];

    let blocks: Vec<&[u8]> = if raw.is_empty() { vec![&[][..]] } else { raw.chunks(65535).collect() };
    let last = blocks.len() - 1;
    for (i, block) in blocks.into_iter().enumerate() {
        out.push(if i == last { 0x01 } else { 0x00 });
        let len = block.len() as u16;
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&(!len).to_le_bytes());
        out.extend_from_slice(block);
    }

    out.extend_from_slice(&adler32(raw).to_be_bytes());
    out
}

fn write_chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], payload: &[u8]) {
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(payload);
    out.extend_from_slice(&[0, 0, 0, 0]); // CRC, unchecked by default decoder options
}

/// Assemble a complete, signature-prefixed PNG file from already-filtered
/// scanline bytes (one leading filter byte plus `stride` bytes, per row).
///
/// `idat_chunk_count` controls how many `IDAT` chunks the compressed stream
/// is split across (property 9 / scenario S6); `1` is the common case.
pub fn build_png(
    width: u32, height: u32, depth: u8, color_type: u8, palette: Option<&[[u8; 3]]>, scanlines: &[u8],
    idat_chunk_count: usize
) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[depth, color_type, 0, 0, 0]);
    write_chunk(&mut out, b"IHDR", &ihdr);

    if let Some(entries) = palette {
        let mut payload = Vec::with_capacity(entries.len() * 3);
        for [r, g, b] in entries {
            payload.extend_from_slice(&[*r, *g, *b]);
        }
        write_chunk(&mut out, b"PLTE", &payload);
    }

    let compressed = zlib_stored(scanlines);
    let chunk_count = idat_chunk_count.max(1);
    let base = compressed.len() / chunk_count;
    let mut offset = 0;
    for i in 0..chunk_count {
        let end = if i + 1 == chunk_count { compressed.len() } else { offset + base };
        write_chunk(&mut out, b"IDAT", &compressed[offset..end]);
        offset = end;
    }

    write_chunk(&mut out, b"IEND", &[]);
    out
}

/// Build one scanline: a filter-type byte followed by `raw` bytes.
pub fn scanline(filter: u8, raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len() + 1);
    out.push(filter);
    out.extend_from_slice(raw);
    out
}

pub fn concat_scanlines(rows: &[Vec<u8>]) -> Vec<u8> {
    rows.concat()
}
