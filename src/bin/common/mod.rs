// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::path::Path;

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Derive a topic name from its export file path (the file stem).
pub fn topic_name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("N/A")
        .to_string()
}

/// Format a yes/no flag for report output.
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
