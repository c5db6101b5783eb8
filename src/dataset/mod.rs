// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Dataset sequences: sets of topics loaded together.
//!
//! A [`Sequence`] groups the topics of one recording. Each topic owns its
//! own state and file, so loading fans out over rayon with one worker per
//! file and no shared mutable state. Entry order is preserved in the
//! loaded sequence.

use std::path::PathBuf;

use rayon::prelude::*;

use crate::core::Result;
use crate::schema::Conventions;
use crate::topic::Topic;

/// A named set of topics, one per CSV export file.
#[derive(Debug, Default)]
pub struct Sequence {
    name: String,
    topics: Vec<Topic>,
}

impl Sequence {
    /// Create an empty sequence.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            topics: Vec::new(),
        }
    }

    /// Load every `(topic name, file path)` entry in parallel with the
    /// default conventions.
    pub fn load_files(name: impl Into<String>, entries: &[(String, PathBuf)]) -> Result<Self> {
        Self::load_files_with(name, entries, &Conventions::default())
    }

    /// Load every `(topic name, file path)` entry in parallel under the
    /// given conventions. Fails on the first topic whose file or header
    /// cannot be read.
    pub fn load_files_with(
        name: impl Into<String>,
        entries: &[(String, PathBuf)],
        conventions: &Conventions,
    ) -> Result<Self> {
        let topics = entries
            .par_iter()
            .map(|(topic_name, path)| {
                let mut topic = Topic::new(topic_name.clone()).with_conventions(conventions.clone());
                topic.load(path)?;
                Ok(topic)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: name.into(),
            topics,
        })
    }

    /// Sequence name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All topics in entry order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Look up a topic by name.
    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name() == name)
    }

    /// Topics classified as fault topics by their name prefix.
    pub fn fault_topics(&self) -> impl Iterator<Item = &Topic> {
        self.topics.iter().filter(|t| t.is_fault_topic())
    }

    /// Number of topics.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// True if the sequence holds no topics.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Total number of messages across all topics.
    pub fn message_count(&self) -> usize {
        self.topics.iter().map(|t| t.messages().len()).sum()
    }
}
