// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 rhythmcache
// https://github.com/rhythmcache/vdex-ident

use crate::android::AndroidVersion;

/// Numeric VDEX format version. `0` is never a real version.
pub type VdexVersion = u32;

// VDEX signature
pub const VDEX_MAGIC: &[u8; 4] = b"vdex";

pub const MAGIC_LEN: usize = VDEX_MAGIC.len();

// Version field, 4 ASCII bytes right after the magic
pub const VERSION_OFFSET: usize = MAGIC_LEN;
pub const VERSION_FIELD_LEN: usize = 4;

/// Number of leading bytes needed for both the signature and the version field.
pub const HEADER_PREFIX_LEN: usize = VERSION_OFFSET + VERSION_FIELD_LEN;

pub const INVALID_VERSION: VdexVersion = 0;

/// VDEX version at which each release's format begins, keys strictly ascending.
pub const RELEASE_TABLE: &[(VdexVersion, AndroidVersion)] = &[
    (6, AndroidVersion::V800),
    (10, AndroidVersion::V810),
];
