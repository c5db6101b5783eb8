// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Print command - fixed-width message table.

use std::path::PathBuf;

use clap::Args;

use crate::common::{topic_name_from_path, Result};
use robolog::Topic;

/// Print messages as a fixed-width table.
#[derive(Args, Clone, Debug)]
pub struct PrintCmd {
    /// Input topic CSV file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Topic name (defaults to the file stem)
    #[arg(short = 'n', long)]
    topic_name: Option<String>,

    /// Index of the first message to print
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    start: i64,

    /// Number of messages to print (negative means all remaining)
    #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
    count: i64,

    /// Column separator
    #[arg(long, default_value = " | ")]
    separator: String,
}

impl PrintCmd {
    pub fn run(self) -> Result<()> {
        let name = self
            .topic_name
            .clone()
            .unwrap_or_else(|| topic_name_from_path(&self.input));
        let topic = Topic::from_file(&self.input, name)?;

        let printed = topic.print(self.start, self.count, &self.separator)?;
        println!();
        println!(
            "Printed {printed} of {} messages from '{}'.",
            topic.messages().len(),
            topic.name()
        );

        Ok(())
    }
}
