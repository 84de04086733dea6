// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 rhythmcache
// https://github.com/rhythmcache/vdex-ident

pub mod args {
    pub mod args_def;
}
pub mod entry;
pub mod logger;
pub mod ui {
    pub mod ui_print;
}
