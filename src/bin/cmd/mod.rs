// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI subcommands.

mod export;
mod info;
mod print;

pub use export::ExportCmd;
pub use info::InfoCmd;
pub use print::PrintCmd;
