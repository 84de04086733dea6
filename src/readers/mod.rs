// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 rhythmcache
// https://github.com/rhythmcache/vdex-ident

use anyhow::Result;

pub mod buffer_reader;
pub mod local_reader;

pub use buffer_reader::SliceSource;
pub use local_reader::FileSource;

/// random access over the bytes being identified
pub trait ByteSource {
    /// total number of bytes, if known without reading
    fn len(&self) -> Option<u64>;

    /// `true` only when the length is known to be zero
    fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// fills `buf` from `offset` with as many bytes as are available and
    /// returns how many were written. a short count means the source ended.
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<usize>;

    /// reads exactly `N` bytes at `offset`, `None` if the source is too short
    fn read_array<const N: usize>(&mut self, offset: u64) -> Result<Option<[u8; N]>> {
        if let Some(len) = self.len()
            && len < offset.saturating_add(N as u64)
        {
            return Ok(None);
        }

        let mut out = [0u8; N];
        let read = self.read_at(offset, &mut out)?;
        Ok((read == N).then_some(out))
    }
}
