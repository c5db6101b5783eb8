// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Info command - show topic information.

use std::path::PathBuf;

use clap::Args;

use crate::common::{topic_name_from_path, yes_no, Result};
use robolog::Topic;

/// Show topic information.
#[derive(Args, Clone, Debug)]
pub struct InfoCmd {
    /// Input topic CSV files
    #[arg(value_name = "FILE", required = true)]
    inputs: Vec<PathBuf>,

    /// Override the topic name (single input only; defaults to the file stem)
    #[arg(short = 'n', long)]
    topic_name: Option<String>,
}

impl InfoCmd {
    pub fn run(self) -> Result<()> {
        for input in &self.inputs {
            let name = match (&self.topic_name, self.inputs.len()) {
                (Some(name), 1) => name.clone(),
                _ => topic_name_from_path(input),
            };
            let topic = Topic::from_file(input, name)?;

            println!("=== {} ===", input.display());
            println!("Topic: {}", topic.name());
            println!("Messages: {}", topic.messages().len());
            println!("Fields: {}", topic.field_labels().join(", "));
            println!("Header sub-record: {}", yes_no(topic.has_header()));
            println!("Fault topic: {}", yes_no(topic.is_fault_topic()));
            if let Some(error) = topic.format_error() {
                println!("Truncated: {error}");
            }
            println!();
        }

        Ok(())
    }
}
