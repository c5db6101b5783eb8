// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Export command - JSON dump of a decoded topic.

use std::path::PathBuf;

use clap::Args;

use crate::common::{topic_name_from_path, Result};
use robolog::Topic;

/// Export decoded messages as JSON.
#[derive(Args, Clone, Debug)]
pub struct ExportCmd {
    /// Input topic CSV file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Topic name (defaults to the file stem)
    #[arg(short = 'n', long)]
    topic_name: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl ExportCmd {
    pub fn run(self) -> Result<()> {
        let name = self
            .topic_name
            .clone()
            .unwrap_or_else(|| topic_name_from_path(&self.input));
        let topic = Topic::from_file(&self.input, name)?;

        println!("{}", topic.to_json(self.pretty)?);

        Ok(())
    }
}
