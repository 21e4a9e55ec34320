//! Row sink: the caller-owned consumer of emitted rows.
//!
//! The core contract is a synchronous call per row, in ascending order,
//! with a row buffer valid only for the duration of the call. This crate
//! models that as a trait so callers can implement it on a type that owns
//! display state, or hand in a closure directly.

/// Consumes decoded RGB565 rows as they are produced.
///
/// `emit_row` is called once per row, strictly in ascending `row_index`
/// order, with `row` borrowed only for the duration of the call. The
/// `bool` return lets a sink cancel the decode early without that being
/// treated as a failure; a sink that never wants to cancel can always
/// return `true`.
pub trait RowSink
{
    fn emit_row(&mut self, row_index: usize, row: &[u16]) -> bool;
}

impl<F> RowSink for F
where
    F: FnMut(usize, &[u16]) -> bool
{
    fn emit_row(&mut self, row_index: usize, row: &[u16]) -> bool
    {
        self(row_index, row)
    }
}

/// Adapts a closure that doesn't care about cancellation into a
/// [`RowSink`] that always continues.
pub struct AlwaysContinue<F>(pub F);

impl<F> RowSink for AlwaysContinue<F>
where
    F: FnMut(usize, &[u16])
{
    fn emit_row(&mut self, row_index: usize, row: &[u16]) -> bool
    {
        (self.0)(row_index, row);
        true
    }
}

#[cfg(any(test, feature = "std"))]
mod collector
{
    use alloc::vec::Vec;

    use super::RowSink;

    /// A [`RowSink`] that simply records every row it is given; handy for
    /// tests and for callers who want the whole image in memory anyway.
    #[derive(Default)]
    pub struct RowCollector
    {
        pub rows: Vec<Vec<u16>>
    }

    impl RowSink for RowCollector
    {
        fn emit_row(&mut self, row_index: usize, row: &[u16]) -> bool
        {
            debug_assert_eq!(row_index, self.rows.len(), "rows must arrive in ascending, contiguous order");
            self.rows.push(row.to_vec());
            true
        }
    }
}

#[cfg(any(test, feature = "std"))]
pub use collector::RowCollector;
