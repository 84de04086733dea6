// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 rhythmcache
// https://github.com/rhythmcache/vdex-ident

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

const VERSION_STRING: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\n\n",
    "Copyright (C) 2025 rhythmcache\n",
    "License Apache-2.0: Apache License 2.0 <https://www.apache.org/licenses/LICENSE-2.0>\n",
    "\n",
    "Build Information:\n",
    "  Git:        ",
    env!("GIT_COMMIT_SHORT"),
    "\n",
    "  Built:      ",
    env!("BUILD_TIMESTAMP"),
    "\n",
    "  Target:     ",
    env!("BUILD_TARGET"),
    "\n",
    "  Profile:    ",
    env!("BUILD_PROFILE"),
    "\n"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version = VERSION_STRING,
    about = "Identify Android VDEX files and report their format version"
)]
#[command(next_line_help = true)]
pub struct Args {
    #[arg(required = true, help = "Files to inspect")]
    pub paths: Vec<PathBuf>,

    #[arg(short = 'j', long, help = "Print results as a JSON array")]
    pub json: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "json",
        help = "Only print files that carry the VDEX signature"
    )]
    pub quiet: bool,

    #[arg(
        long,
        value_enum,
        help = "Log verbosity, RUST_LOG is used when not given"
    )]
    pub log_level: Option<LogLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths_and_flags() {
        let args = Args::try_parse_from(["vdex_info", "--json", "a.vdex", "b.vdex"]).unwrap();
        assert!(args.json);
        assert_eq!(args.paths.len(), 2);
        assert_eq!(args.log_level, None);
    }

    #[test]
    fn test_requires_a_path() {
        assert!(Args::try_parse_from(["vdex_info"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_json() {
        assert!(Args::try_parse_from(["vdex_info", "-q", "-j", "a.vdex"]).is_err());
    }

    #[test]
    fn test_log_level() {
        let args = Args::try_parse_from(["vdex_info", "--log-level", "debug", "a.vdex"]).unwrap();
        assert_eq!(args.log_level, Some(LogLevel::Debug));
        assert_eq!(log::LevelFilter::from(LogLevel::Off), log::LevelFilter::Off);
    }
}
