//! Bounds-checked read cursor over a borrowed byte slice.
//!
//! Two flavours of every operation live here. The plain `read*`, `seek` and
//! `skip` calls never fail: an overrun yields zero and leaves the position
//! where it was. The `try_*` calls apply the same bounds rules but report a
//! [`CursorError`] instead.

use std::ops::Range;

use crate::config::{ByteOrder, CursorConfig};
use crate::error::{CursorError, Result};
use crate::extent::Extent;
use crate::primitive::Primitive;

/// Cursor over a byte slice with a declared length and a read offset.
#[derive(Debug, Clone, Copy)]
pub struct BinaryCursor<'a> {
    data: &'a [u8],
    extent: Extent,
    pos: usize,
    overran: bool,
}

impl<'a> BinaryCursor<'a> {
    /// Cursor over the whole slice, starting at offset 0.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_extent(data, Extent::Bounded(data.len()), 0)
    }

    /// Cursor that ignores any declared length. Reads still stop at the end
    /// of `data`.
    pub fn unbounded(data: &'a [u8]) -> Self {
        Self::with_extent(data, Extent::Unbounded, 0)
    }

    /// Store `extent` and `pos` as given.
    ///
    /// No validation: a start position beyond the length is accepted and
    /// simply makes every subsequent read fail.
    pub fn with_extent(data: &'a [u8], extent: Extent, pos: usize) -> Self {
        if !extent.admits_end(pos) {
            trace_event!(
                debug,
                pos,
                extent = %extent,
                "cursor constructed with start position past its length"
            );
        }
        Self {
            data,
            extent,
            pos,
            overran: false,
        }
    }

    pub fn from_config(data: &'a [u8], config: &CursorConfig) -> Self {
        let extent = config.extent.unwrap_or(Extent::Bounded(data.len()));
        Self::with_extent(data, extent, config.start)
    }

    /// Index of the first byte; always 0.
    pub fn begin(&self) -> usize {
        0
    }

    /// One past the last byte, i.e. [`len`](Self::len).
    pub fn end(&self) -> usize {
        self.len()
    }

    /// The unread remainder of the buffer.
    pub fn current(&self) -> &'a [u8] {
        self.data.get(self.pos..self.readable_end()).unwrap_or(&[])
    }

    /// Declared length; the slice length when unbounded.
    pub fn len(&self) -> usize {
        self.extent.limit().unwrap_or(self.data.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move to `target` if `target < len`, otherwise do nothing.
    ///
    /// Note the strict comparison: seeking to exactly `len` is refused even
    /// though reads can leave the cursor there.
    pub fn seek(&mut self, target: usize) {
        if self.extent.admits_position(target) {
            self.pos = target;
        } else {
            self.reject("seek", target);
        }
    }

    /// Advance by `delta` if `pos + delta < len`, otherwise do nothing.
    pub fn skip(&mut self, delta: usize) {
        match self.pos.checked_add(delta) {
            Some(target) if self.extent.admits_position(target) => self.pos = target,
            _ => self.reject("skip", delta),
        }
    }

    /// Decode a `T` in host byte order. Zero and no advance on overrun.
    pub fn read<T: Primitive>(&mut self) -> T {
        self.read_with(ByteOrder::Native)
    }

    /// Like [`read`](Self::read) but decoding in `order`.
    pub fn read_with<T: Primitive>(&mut self, order: ByteOrder) -> T {
        match self.take(order) {
            Some(value) => value,
            None => {
                self.reject("read", T::WIDTH);
                T::default()
            }
        }
    }

    /// Decode a `T` into `out`; `out` is left untouched on overrun.
    pub fn read_into<T: Primitive>(&mut self, out: &mut T) {
        match self.take(ByteOrder::Native) {
            Some(value) => *out = value,
            None => self.reject("read", T::WIDTH),
        }
    }

    pub fn read_i8(&mut self) -> i8 {
        self.read()
    }

    pub fn read_i16(&mut self) -> i16 {
        self.read()
    }

    pub fn read_i32(&mut self) -> i32 {
        self.read()
    }

    pub fn read_i64(&mut self) -> i64 {
        self.read()
    }

    pub fn read_u8(&mut self) -> u8 {
        self.read()
    }

    pub fn read_u16(&mut self) -> u16 {
        self.read()
    }

    pub fn read_u32(&mut self) -> u32 {
        self.read()
    }

    pub fn read_u64(&mut self) -> u64 {
        self.read()
    }

    /// `count` single-byte reads. Entries past the end of the data are 0.
    pub fn read_chars(&mut self, count: usize) -> Vec<i8> {
        (0..count).map(|_| self.read_i8()).collect()
    }

    pub fn read_uchars(&mut self, count: usize) -> Vec<u8> {
        (0..count).map(|_| self.read_u8()).collect()
    }

    /// Fill `out` byte by byte; slots past the end of the data become 0.
    pub fn read_chars_into(&mut self, out: &mut [i8]) {
        for slot in out.iter_mut() {
            *slot = self.read_i8();
        }
    }

    pub fn read_uchars_into(&mut self, out: &mut [u8]) {
        for slot in out.iter_mut() {
            *slot = self.read_u8();
        }
    }

    pub fn read_chars_array<const N: usize>(&mut self) -> [i8; N] {
        let mut out = [0i8; N];
        self.read_chars_into(&mut out);
        out
    }

    pub fn read_uchars_array<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        self.read_uchars_into(&mut out);
        out
    }

    /// Bytes a read could still consume from the current position.
    pub fn remaining(&self) -> usize {
        self.readable_end().saturating_sub(self.pos)
    }

    /// Whether a read of `n` bytes would succeed right now.
    pub fn can_read(&self, n: usize) -> bool {
        self.span(n).is_some()
    }

    /// `true` once any silent read, seek or skip has been refused.
    pub fn overran(&self) -> bool {
        self.overran
    }

    pub fn try_read<T: Primitive>(&mut self) -> Result<T> {
        self.try_read_with(ByteOrder::Native)
    }

    pub fn try_read_with<T: Primitive>(&mut self, order: ByteOrder) -> Result<T> {
        self.take(order).ok_or_else(|| self.eof(T::WIDTH))
    }

    /// Borrow the next `n` bytes, all or nothing.
    pub fn try_read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let range = self.span(n).ok_or_else(|| self.eof(n))?;
        let bytes = &self.data[range.clone()];
        self.pos = range.end;
        Ok(bytes)
    }

    pub fn try_seek(&mut self, target: usize) -> Result<()> {
        if !self.extent.admits_position(target) {
            return Err(CursorError::SeekOutOfRange {
                target,
                len: self.extent,
            });
        }
        self.pos = target;
        Ok(())
    }

    pub fn try_skip(&mut self, delta: usize) -> Result<()> {
        let target = self.pos.checked_add(delta).ok_or(CursorError::Overflow {
            offset: self.pos,
            delta,
        })?;
        self.try_seek(target)
    }

    /// Decode the next `T` and advance, or leave everything as is.
    fn take<T: Primitive>(&mut self, order: ByteOrder) -> Option<T> {
        let range = self.span(T::WIDTH)?;
        let value = T::decode(self.data.get(range.clone())?, order)?;
        self.pos = range.end;
        Some(value)
    }

    /// Range of the next `width` bytes if both the declared length and the
    /// slice itself hold them.
    fn span(&self, width: usize) -> Option<Range<usize>> {
        let end = self.pos.checked_add(width)?;
        if !self.extent.admits_end(end) || end > self.data.len() {
            return None;
        }
        Some(self.pos..end)
    }

    fn readable_end(&self) -> usize {
        match self.extent {
            Extent::Bounded(len) => len.min(self.data.len()),
            Extent::Unbounded => self.data.len(),
        }
    }

    fn eof(&self, needed: usize) -> CursorError {
        CursorError::UnexpectedEof {
            offset: self.pos,
            needed,
            available: self.remaining(),
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn reject(&mut self, op: &'static str, amount: usize) {
        trace_event!(
            trace,
            op,
            amount,
            pos = self.pos,
            extent = %self.extent,
            "cursor operation refused"
        );
        self.overran = true;
    }
}
