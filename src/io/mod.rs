// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! I/O helpers for reading topic CSV exports.

pub mod csv;

pub use csv::tokenize;
