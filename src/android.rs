// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 rhythmcache
// https://github.com/rhythmcache/vdex-ident

//! Android OS releases known to the ART container parsers.

use serde::{Serialize, Serializer};
use std::fmt;

/// Android release, ordered from oldest to newest. `Unknown` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AndroidVersion {
    #[default]
    Unknown,
    V601,
    V700,
    V710,
    V712,
    V800,
    V810,
    V900,
}

impl AndroidVersion {
    /// Returns the dotted release string, e.g. `"8.1.0"`
    pub fn version_str(&self) -> &'static str {
        match self {
            AndroidVersion::Unknown => "UNKNOWN",
            AndroidVersion::V601 => "6.0.1",
            AndroidVersion::V700 => "7.0.0",
            AndroidVersion::V710 => "7.1.0",
            AndroidVersion::V712 => "7.1.2",
            AndroidVersion::V800 => "8.0.0",
            AndroidVersion::V810 => "8.1.0",
            AndroidVersion::V900 => "9.0.0",
        }
    }

    pub fn code_name(&self) -> &'static str {
        match self {
            AndroidVersion::Unknown => "UNKNOWN",
            AndroidVersion::V601 => "Marshmallow",
            AndroidVersion::V700 | AndroidVersion::V710 | AndroidVersion::V712 => "Nougat",
            AndroidVersion::V800 | AndroidVersion::V810 => "Oreo",
            AndroidVersion::V900 => "Pie",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, AndroidVersion::Unknown)
    }
}

impl fmt::Display for AndroidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "Android {}", self.version_str())
        } else {
            write!(f, "Unknown Android version")
        }
    }
}

impl Serialize for AndroidVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.version_str())
    }
}
