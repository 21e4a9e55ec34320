//! A bounds-checked cursor over a borrowed byte slice.
//!
//! PNG chunk parsing walks this cursor instead of doing raw pointer
//! arithmetic, so every multi-byte read is bounds-checked exactly once,
//! at the read site.

/// A read-only, bounds-checked walk over a borrowed `&[u8]`.
///
/// Every read either advances `pos` and returns `Some`, or leaves the
/// cursor untouched and returns `None` on short input. Nothing here ever
/// panics or reads out of bounds.
pub(crate) struct ByteCursor<'a>
{
    data: &'a [u8],
    pos:  usize
}

impl<'a> ByteCursor<'a>
{
    pub(crate) const fn new(data: &'a [u8]) -> Self
    {
        ByteCursor { data, pos: 0 }
    }

    pub(crate) const fn position(&self) -> usize
    {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize
    {
        self.data.len() - self.pos
    }

    pub(crate) fn has(&self, n: usize) -> bool
    {
        self.remaining() >= n
    }

    /// Advance by `n` bytes without reading them. Returns `false` (and does
    /// not move the cursor) if that would run past the end of the buffer.
    pub(crate) fn skip(&mut self, n: usize) -> bool
    {
        if !self.has(n)
        {
            return false;
        }
        self.pos += n;
        true
    }

    pub(crate) fn read_u32_be(&mut self) -> Option<u32>
    {
        let bytes: [u8; 4] = self.data.get(self.pos..self.pos + 4)?.try_into().ok()?;
        self.pos += 4;
        Some(u32::from_be_bytes(bytes))
    }

    pub(crate) fn read_u64_be(&mut self) -> Option<u64>
    {
        let bytes: [u8; 8] = self.data.get(self.pos..self.pos + 8)?.try_into().ok()?;
        self.pos += 8;
        Some(u64::from_be_bytes(bytes))
    }

    /// Peek `len` bytes starting `offset` bytes ahead of the cursor, without
    /// advancing it.
    pub(crate) fn peek_slice(&self, offset: usize, len: usize) -> Option<&'a [u8]>
    {
        let start = self.pos.checked_add(offset)?;
        let end = start.checked_add(len)?;
        self.data.get(start..end)
    }

    /// Read `len` bytes and advance the cursor past them, returning a
    /// zero-copy slice into the original buffer.
    pub(crate) fn read_slice(&mut self, len: usize) -> Option<&'a [u8]>
    {
        let slice = self.peek_slice(0, len)?;
        self.pos += len;
        Some(slice)
    }
}
