// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 rhythmcache
// https://github.com/rhythmcache/vdex-ident

use crate::android::AndroidVersion;
use crate::constants::{INVALID_VERSION, VdexVersion};
use crate::readers::{ByteSource, FileSource, SliceSource};
use crate::vdex::{android_version, is_vdex_source, version_from_source};
use serde::Serialize;
use std::path::Path;

/// result of running all identification stages over one input
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VdexInfo {
    pub path: String,
    pub is_vdex: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<VdexVersion>,
    pub android_version: AndroidVersion,
}

impl VdexInfo {
    fn from_source<S: ByteSource>(path: String, source: &mut S) -> Self {
        let is_vdex = is_vdex_source(source);
        let version = if is_vdex {
            Some(version_from_source(source)).filter(|&v| v != INVALID_VERSION)
        } else {
            None
        };
        let android_version = version.map_or(AndroidVersion::Unknown, android_version);

        Self {
            path,
            is_vdex,
            version,
            android_version,
        }
    }

    pub fn from_file(path: &Path) -> Self {
        let label = path.display().to_string();
        match FileSource::open(path) {
            Ok(mut source) => Self::from_source(label, &mut source),
            Err(e) => {
                log::debug!("{:#}", e);
                Self::from_source(label, &mut SliceSource::new(&[]))
            }
        }
    }

    pub fn from_bytes(label: impl Into<String>, raw: &[u8]) -> Self {
        Self::from_source(label.into(), &mut SliceSource::new(raw))
    }

    /// VDEX signature present but the version field is unusable
    pub fn has_invalid_version(&self) -> bool {
        self.is_vdex && self.version.is_none()
    }
}
