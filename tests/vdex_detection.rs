// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 rhythmcache
// https://github.com/rhythmcache/vdex-ident

use anyhow::Result;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use vdex_ident::constants::{HEADER_PREFIX_LEN, VDEX_MAGIC};
use vdex_ident::{
    AndroidVersion, VdexInfo, android_version, is_vdex, is_vdex_file, version, version_file,
};

fn write_temp(data: &[u8]) -> Result<NamedTempFile> {
    let mut tmp = NamedTempFile::new()?;
    tmp.write_all(data)?;
    tmp.flush()?;
    Ok(tmp)
}

fn samples() -> Vec<Vec<u8>> {
    vec![
        b"".to_vec(),
        b"v".to_vec(),
        b"vdex".to_vec(),
        b"vdex00".to_vec(),
        b"vdex006\0".to_vec(),
        b"vdex010\0".to_vec(),
        b"vdex0006".to_vec(),
        b"vdex006X".to_vec(),
        b"vdex06\0\0".to_vec(),
        b"vdex1\0\0\0".to_vec(),
        b"vdex\0\0\0\0".to_vec(),
        b"vdex019\0some dex payload follows".to_vec(),
        b"dex\n035\0".to_vec(),
        b"VDEX006\0".to_vec(),
        vec![0xFF; 64],
    ]
}

#[test]
fn test_file_and_buffer_agree() -> Result<()> {
    for data in samples() {
        let tmp = write_temp(&data)?;
        assert_eq!(is_vdex(&data), is_vdex_file(tmp.path()), "is_vdex for {:?}", data);
        assert_eq!(version(&data), version_file(tmp.path()), "version for {:?}", data);
        assert_eq!(
            VdexInfo::from_bytes(tmp.path().display().to_string(), &data),
            VdexInfo::from_file(tmp.path())
        );
    }
    Ok(())
}

#[test]
fn test_version_requires_signature() {
    for data in samples() {
        if !is_vdex(&data) {
            assert_eq!(version(&data), 0, "version for {:?}", data);
        }
    }
}

#[test]
fn test_short_buffers_are_rejected() {
    for len in 0..VDEX_MAGIC.len() {
        assert!(!is_vdex(&VDEX_MAGIC[..len]));
    }
    for len in VDEX_MAGIC.len()..HEADER_PREFIX_LEN {
        let data = &b"vdex0006"[..len];
        assert!(is_vdex(data));
        assert_eq!(version(data), 0);
    }
}

#[test]
fn test_nul_only_allowed_as_last_field_byte() -> Result<()> {
    for data in [&b"vdex06\0\0"[..], b"vdex1\0\0\0", b"vdex0\x006\0"] {
        let tmp = write_temp(data)?;
        assert_eq!(version(data), 0, "version for {:?}", data);
        assert_eq!(version_file(tmp.path()), 0, "version_file for {:?}", data);
    }
    assert_eq!(version(b"vdex006\0"), 6);
    assert_eq!(version(b"vdex0006"), 6);
    Ok(())
}

#[test]
fn test_magic_followed_by_anything() {
    for tail in [&b""[..], b"\0", b"\xff\xfe\xfd", b"006\0", b"garbage bytes"] {
        let mut data = VDEX_MAGIC.to_vec();
        data.extend_from_slice(tail);
        assert!(is_vdex(&data));
    }
}

#[test]
fn test_end_to_end_mapping() -> Result<()> {
    let oreo = write_temp(b"vdex006\0")?;
    assert_eq!(android_version(version_file(oreo.path())), AndroidVersion::V800);

    let oreo_mr1 = write_temp(b"vdex010\0")?;
    assert_eq!(android_version(version_file(oreo_mr1.path())), AndroidVersion::V810);

    assert_eq!(android_version(3), AndroidVersion::V800);
    assert_eq!(android_version(6), AndroidVersion::V800);
    assert_eq!(android_version(10), AndroidVersion::V810);
    assert_eq!(android_version(99), AndroidVersion::Unknown);
    Ok(())
}

#[test]
fn test_repeated_calls_are_stable() -> Result<()> {
    let tmp = write_temp(b"vdex010\0")?;
    for _ in 0..3 {
        assert!(is_vdex_file(tmp.path()));
        assert_eq!(version_file(tmp.path()), 10);
        assert_eq!(version(b"vdex0006"), 6);
        assert_eq!(android_version(7), AndroidVersion::V810);
    }
    Ok(())
}

#[test]
fn test_unreadable_paths() -> Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("missing.vdex");
    assert!(!is_vdex_file(&missing));
    assert_eq!(version_file(&missing), 0);

    // a directory opens on unix but cannot be read as a file
    assert!(!is_vdex_file(dir.path()));
    assert_eq!(version_file(dir.path()), 0);
    Ok(())
}

#[test]
fn test_concurrent_calls() -> Result<()> {
    let tmp = write_temp(b"vdex006\0")?;
    let path = tmp.path().to_path_buf();

    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                assert_eq!(version_file(&path), 6);
                assert_eq!(version(b"vdex010\0"), 10);
            });
        }
    });
    Ok(())
}
