// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 rhythmcache
// https://github.com/rhythmcache/vdex-ident

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use vdex_ident::VdexInfo;

use crate::cli::args::args_def::Args;
use crate::cli::logger;
use crate::cli::ui::ui_print::UiOutput;

pub fn run() -> Result<()> {
    let args = Args::parse();
    logger::init(args.log_level);

    let results: Vec<VdexInfo> = args
        .paths
        .iter()
        .map(|path| {
            let info = VdexInfo::from_file(path);
            log::info!(
                "{}: is_vdex={} version={:?}",
                info.path,
                info.is_vdex,
                info.version
            );
            info
        })
        .collect();

    let ui = UiOutput::new(args.quiet, args.json);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    ui.report(&mut out, &results)?;
    out.flush()?;
    Ok(())
}
