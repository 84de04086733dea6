// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 rhythmcache
// https://github.com/rhythmcache/vdex-ident

mod cli;

fn main() -> anyhow::Result<()> {
    cli::entry::run()
}
