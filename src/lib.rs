// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 rhythmcache
// https://github.com/rhythmcache/vdex-ident

pub mod android;
pub mod constants;
pub mod readers;
pub mod structs;
pub mod vdex;

pub use android::AndroidVersion;
pub use constants::VdexVersion;
pub use structs::VdexInfo;
pub use vdex::{android_version, is_vdex, is_vdex_file, version, version_file};
