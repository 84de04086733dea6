// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 rhythmcache
// https://github.com/rhythmcache/vdex-ident

use crate::constants::{MAGIC_LEN, VDEX_MAGIC};
use crate::readers::{ByteSource, FileSource, SliceSource};
use log::debug;
use std::path::Path;

/// checks the source starts with the VDEX magic
pub fn is_vdex_source<S: ByteSource>(source: &mut S) -> bool {
    match source.read_array::<MAGIC_LEN>(0) {
        Ok(Some(magic)) => &magic == VDEX_MAGIC,
        Ok(None) => false,
        Err(e) => {
            debug!("Failed to read VDEX magic: {:#}", e);
            false
        }
    }
}

/// checks an in-memory buffer for the VDEX magic
pub fn is_vdex(raw: &[u8]) -> bool {
    if raw.len() < MAGIC_LEN {
        return false;
    }
    is_vdex_source(&mut SliceSource::new(raw))
}

/// checks a file for the VDEX magic, unreadable files are not VDEX
pub fn is_vdex_file(path: impl AsRef<Path>) -> bool {
    match FileSource::open(path.as_ref()) {
        Ok(mut source) => is_vdex_source(&mut source),
        Err(e) => {
            debug!("{:#}", e);
            false
        }
    }
}
