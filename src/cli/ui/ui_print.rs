// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 rhythmcache
// https://github.com/rhythmcache/vdex-ident

use anyhow::Result;
use std::io::Write;
use vdex_ident::VdexInfo;

/// main UI handler for CLI output
pub struct UiOutput {
    quiet: bool,
    json: bool,
}

impl UiOutput {
    pub fn new(quiet: bool, json: bool) -> Self {
        Self { quiet, json }
    }

    /// one line per input, or a single JSON array
    pub fn report(&self, out: &mut impl Write, results: &[VdexInfo]) -> Result<()> {
        if self.json {
            serde_json::to_writer_pretty(&mut *out, results)?;
            writeln!(out)?;
            return Ok(());
        }

        for info in results {
            if self.quiet && !info.is_vdex {
                continue;
            }
            writeln!(out, "{}", describe(info))?;
        }
        Ok(())
    }
}

pub fn describe(info: &VdexInfo) -> String {
    if info.has_invalid_version() {
        return format!("{}: VDEX file with invalid version field", info.path);
    }
    match (info.is_vdex, info.version) {
        (true, Some(version)) if info.android_version.is_known() => format!(
            "{}: VDEX version {} ({}, {})",
            info.path,
            version,
            info.android_version,
            info.android_version.code_name()
        ),
        (true, Some(version)) => format!(
            "{}: VDEX version {} ({})",
            info.path, version, info.android_version
        ),
        _ => format!("{}: not a VDEX file", info.path),
    }
}
