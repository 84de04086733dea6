// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 rhythmcache
// https://github.com/rhythmcache/vdex-ident

use super::signature::is_vdex_source;
use crate::constants::{INVALID_VERSION, VERSION_FIELD_LEN, VERSION_OFFSET, VdexVersion};
use crate::readers::{ByteSource, FileSource, SliceSource};
use log::debug;
use std::path::Path;

/// Parses the 4-byte version field.
///
/// The first three bytes must be ASCII digits and the last one a digit or
/// the NUL terminator, so both `"006\0"` and `"0006"` are accepted. Any other
/// byte, including a NUL before the last position, gives `0`.
pub fn parse_version_field(field: &[u8; VERSION_FIELD_LEN]) -> VdexVersion {
    let (head, last) = field.split_at(VERSION_FIELD_LEN - 1);
    if !head.iter().all(u8::is_ascii_digit) {
        return INVALID_VERSION;
    }
    let digits = match last[0] {
        b'0'..=b'9' => field.as_slice(),
        0 => head,
        _ => return INVALID_VERSION,
    };

    std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse::<VdexVersion>().ok())
        .unwrap_or(INVALID_VERSION)
}

/// extracts the version from any source, `0` if it is not a valid VDEX
pub fn version_from_source<S: ByteSource>(source: &mut S) -> VdexVersion {
    if !is_vdex_source(source) {
        return INVALID_VERSION;
    }

    let field = match source.read_array::<VERSION_FIELD_LEN>(VERSION_OFFSET as u64) {
        Ok(Some(field)) => field,
        Ok(None) => {
            debug!("VDEX header truncated before the version field");
            return INVALID_VERSION;
        }
        Err(e) => {
            debug!("Failed to read VDEX version field: {:#}", e);
            return INVALID_VERSION;
        }
    };

    let version = parse_version_field(&field);
    if version == INVALID_VERSION {
        debug!("Invalid VDEX version field: {:02X?}", field);
    }
    version
}

/// extracts the version from an in-memory buffer
pub fn version(raw: &[u8]) -> VdexVersion {
    version_from_source(&mut SliceSource::new(raw))
}

/// extracts the version from a file, unreadable files give `0`
pub fn version_file(path: impl AsRef<Path>) -> VdexVersion {
    match FileSource::open(path.as_ref()) {
        Ok(mut source) => version_from_source(&mut source),
        Err(e) => {
            debug!("{:#}", e);
            INVALID_VERSION
        }
    }
}
