// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 rhythmcache
// https://github.com/rhythmcache/vdex-ident

//! VDEX identification: signature check, version extraction and
//! version to Android release mapping.
//!
//! Every entry point comes in a buffer flavour and a file flavour. Both go
//! through the same [`ByteSource`](crate::readers::ByteSource) based logic so
//! they always agree on the same bytes. Nothing here returns an error:
//! unreadable or foreign input yields `false`, `0` or
//! [`AndroidVersion::Unknown`](crate::android::AndroidVersion::Unknown).

mod release;
mod signature;
mod version;

pub use release::android_version;
pub use signature::{is_vdex, is_vdex_file, is_vdex_source};
pub use version::{parse_version_field, version, version_file, version_from_source};
