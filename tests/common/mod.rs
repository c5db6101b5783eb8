// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write a fixture CSV under the OS temp directory, keyed by process id.
pub fn write_fixture(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("robolog_{}_{}", std::process::id(), name));
    let mut file = File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.sync_all().unwrap();
    path
}

/// Remove a fixture file, ignoring errors.
pub fn remove_fixture(path: &Path) {
    let _ = std::fs::remove_file(path);
}
