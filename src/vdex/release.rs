// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 rhythmcache
// https://github.com/rhythmcache/vdex-ident

use crate::android::AndroidVersion;
use crate::constants::{RELEASE_TABLE, VdexVersion};

/// Maps a VDEX version to an Android release.
///
/// Picks the entry with the smallest key greater than or equal to `version`;
/// versions above every key are [`AndroidVersion::Unknown`].
pub fn android_version(version: VdexVersion) -> AndroidVersion {
    let idx = RELEASE_TABLE.partition_point(|&(key, _)| key < version);
    RELEASE_TABLE
        .get(idx)
        .map_or(AndroidVersion::Unknown, |&(_, release)| release)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_keys_ascending() {
        assert!(RELEASE_TABLE.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_ceiling_lookup() {
        assert_eq!(android_version(3), AndroidVersion::V800);
        assert_eq!(android_version(6), AndroidVersion::V800);
        assert_eq!(android_version(7), AndroidVersion::V810);
        assert_eq!(android_version(10), AndroidVersion::V810);
    }

    #[test]
    fn test_beyond_table() {
        assert_eq!(android_version(11), AndroidVersion::Unknown);
        assert_eq!(android_version(99), AndroidVersion::Unknown);
        assert_eq!(android_version(VdexVersion::MAX), AndroidVersion::Unknown);
    }

    #[test]
    fn test_sentinel_version_maps_to_first_entry() {
        assert_eq!(android_version(0), AndroidVersion::V800);
    }
}
