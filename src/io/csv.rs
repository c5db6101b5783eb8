// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Line tokenization for CSV topic exports.
//!
//! The export format is plain delimiter-separated text with no quoting or
//! escaping, so tokenization is a straight split. A trailing carriage
//! return (Windows line endings) is stripped before splitting.

/// Split one line into raw field tokens.
///
/// An empty line yields a single empty token, matching the padding rules
/// applied by the ingestion loop.
pub fn tokenize(line: &str, delimiter: char) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.split(delimiter).map(str::to_string).collect()
}
