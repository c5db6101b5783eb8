// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Topic store: one CSV-backed time series of typed messages.
//!
//! A [`Topic`] owns the full schema and message sequence of a single
//! sensor/log channel loaded from a CSV export file. Loading runs as an
//! explicit two-phase pipeline: row ingestion collects decoded messages
//! and folds per-row display widths into a running accumulator; a
//! post-processing phase then applies label floors to the widths and
//! classifies fault topics by name prefix. A malformed row stops
//! ingestion but keeps everything decoded before it.

pub mod widths;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::warn;

use crate::core::{LogError, Result};
use crate::io::csv::tokenize;
use crate::message::Message;
use crate::schema::{Conventions, TopicSchema};
use widths::{ColumnWidths, FRAME_ID_LABEL, SEQ_ID_LABEL, STAMP_LABEL};

/// Display label of the row-index column.
const INDEX_LABEL: &str = "Index";
/// Display label of the datetime column.
const DATETIME_LABEL: &str = "Date/Time Stamp";

/// One topic of a dataset sequence: schema, decoded messages, and the
/// display-width bookkeeping needed to print them as a fixed-width table.
#[derive(Debug, Clone, Default)]
pub struct Topic {
    name: String,
    path: PathBuf,
    conventions: Conventions,
    schema: TopicSchema,
    messages: Vec<Message>,
    widths: ColumnWidths,
    is_initialized: bool,
    is_fault_topic: bool,
    format_error: Option<LogError>,
}

/// Serialization view of a loaded topic for JSON export.
#[derive(Serialize)]
struct TopicExport<'a> {
    name: &'a str,
    path: String,
    field_labels: &'a [String],
    has_header: bool,
    fault_topic: bool,
    messages: &'a [Message],
}

impl Topic {
    /// Create an empty topic with the given name and default conventions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Override the export conventions (delimiter, prefixes).
    pub fn with_conventions(mut self, conventions: Conventions) -> Self {
        self.conventions = conventions;
        self
    }

    /// Load a topic eagerly from a CSV export file.
    pub fn from_file(path: impl AsRef<Path>, name: impl Into<String>) -> Result<Self> {
        let mut topic = Topic::new(name);
        topic.load(path)?;
        Ok(topic)
    }

    /// Load the topic from a CSV export file.
    ///
    /// Resets all previous state, preserving the topic name. Fails with
    /// [`LogError::FileOpen`] / [`LogError::HeaderRead`] when the file or
    /// its header line cannot be read, leaving the topic cleared. A data
    /// row with more tokens than the schema has columns stops ingestion
    /// at that row: earlier rows are kept, the error is recorded (see
    /// [`Topic::format_error`]) and the load still succeeds.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        // Keep the caller-supplied topic name across the reset.
        let name = std::mem::take(&mut self.name);
        self.clear();
        self.name = name;
        self.path = path.to_path_buf();

        let file = File::open(path).map_err(|e| {
            warn!(path = %path.display(), cause = %e, "failed to open topic file");
            LogError::file_open(path, e.to_string())
        })?;
        let mut lines = BufReader::new(file).lines();

        let header_line = match lines.next() {
            Some(Ok(line)) if !line.trim().is_empty() => line,
            Some(Err(e)) => {
                warn!(path = %path.display(), cause = %e, "failed to read topic header line");
                return Err(LogError::header_read(path));
            }
            _ => {
                warn!(path = %path.display(), "failed to read topic header line");
                return Err(LogError::header_read(path));
            }
        };
        let raw_labels = tokenize(&header_line, self.conventions.delimiter);
        let schema = TopicSchema::infer(&raw_labels, &self.conventions);

        // Phase one: ingest data rows until the file ends or a row
        // overflows the schema.
        let (messages, mut widths, format_error) =
            ingest_rows(lines, &schema, self.conventions.delimiter, path);
        if let Some(err) = &format_error {
            warn!(path = %path.display(), error = %err, "stopped ingesting rows early");
        }

        // Phase two: post-process on whatever was ingested.
        widths.resolve(schema.field_labels());

        self.messages = messages;
        self.widths = widths;
        self.format_error = format_error;
        self.schema = schema;
        self.is_fault_topic = self.name.starts_with(&self.conventions.fault_prefix);
        self.is_initialized = true;

        Ok(())
    }

    /// Restore every attribute to its zero/empty value. Idempotent.
    pub fn clear(&mut self) {
        self.name.clear();
        self.path = PathBuf::new();
        self.schema = TopicSchema::default();
        self.messages.clear();
        self.widths = ColumnWidths::default();
        self.is_initialized = false;
        self.is_fault_topic = false;
        self.format_error = None;
    }

    /// Topic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the CSV export the topic was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decoded messages in row (time) order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The inferred schema.
    pub fn schema(&self) -> &TopicSchema {
        &self.schema
    }

    /// Field labels in header order, conventional prefix stripped.
    pub fn field_labels(&self) -> &[String] {
        self.schema.field_labels()
    }

    /// Tracked per-column display widths.
    pub fn widths(&self) -> &ColumnWidths {
        &self.widths
    }

    /// True after a successful load.
    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    /// True if the topic name carries the fault-topic prefix.
    pub fn is_fault_topic(&self) -> bool {
        self.is_fault_topic
    }

    /// True if the topic embeds the conventional header sub-record.
    pub fn has_header(&self) -> bool {
        self.schema.has_header()
    }

    /// The row-format error that truncated ingestion, if any.
    pub fn format_error(&self) -> Option<&LogError> {
        self.format_error.as_ref()
    }

    /// Write the column-label line to `out`.
    ///
    /// Emits nothing and returns 0 if the topic has no messages (there is
    /// no timestamp sample to size the datetime column from). Otherwise
    /// returns the layout length used to size the divider rule under the
    /// header: the sum of all tracked column widths plus
    /// `(6 + field count) * separator length`. The sub-record widths are
    /// always counted even when the sub-record columns are not printed,
    /// so this is a layout quantity rather than the printed byte length.
    pub fn write_header<W: Write>(&self, out: &mut W, separator: &str) -> io::Result<usize> {
        if self.messages.is_empty() {
            return Ok(0);
        }

        let datetime_width = self.messages[0].datetime().len();

        let mut total = INDEX_LABEL.len()
            + datetime_width
            + self.widths.seq_id
            + self.widths.stamp
            + self.widths.frame_id
            + self.widths.fields_total();
        total += (6 + self.schema.field_count()) * separator.len();

        write!(
            out,
            "{separator}{INDEX_LABEL}{separator}{DATETIME_LABEL:>datetime_width$}"
        )?;
        if self.schema.has_header() {
            write!(
                out,
                "{separator}{SEQ_ID_LABEL:>seq_width$}{separator}{STAMP_LABEL:>stamp_width$}{separator}{FRAME_ID_LABEL:>frame_width$}",
                seq_width = self.widths.seq_id,
                stamp_width = self.widths.stamp,
                frame_width = self.widths.frame_id,
            )?;
        }
        for (index, label) in self.schema.field_labels().iter().enumerate() {
            let width = self.widths.field(index);
            write!(out, "{separator}{label:>width$}")?;
        }
        writeln!(out, "{separator}")?;

        Ok(total)
    }

    /// Write the header, a divider rule, and a range of messages to `out`.
    ///
    /// A negative `start` writes nothing at all and returns 0. A negative
    /// `count` means "all remaining messages from `start`". Returns the
    /// number of rows written, which may be less than `count` when the
    /// sequence is shorter.
    pub fn write_range<W: Write>(
        &self,
        out: &mut W,
        start: i64,
        count: i64,
        separator: &str,
    ) -> io::Result<usize> {
        if start < 0 {
            return Ok(0);
        }
        let count = if count < 0 {
            self.messages.len()
        } else {
            count as usize
        };

        let header_length = self.write_header(out, separator)?;
        writeln!(out, "{}", "-".repeat(header_length))?;

        let mut printed = 0;
        for (index, message) in self
            .messages
            .iter()
            .enumerate()
            .skip(start as usize)
            .take(count)
        {
            let rendered = message.render(&self.widths, self.schema.has_header(), separator);
            writeln!(
                out,
                "{separator}{index:>index_width$}{separator}{rendered}{separator}",
                index_width = INDEX_LABEL.len(),
            )?;
            printed += 1;
        }

        Ok(printed)
    }

    /// Print the column-label line to stdout. See [`Topic::write_header`].
    pub fn print_header(&self, separator: &str) -> io::Result<usize> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_header(&mut out, separator)
    }

    /// Print a range of messages to stdout. See [`Topic::write_range`].
    pub fn print(&self, start: i64, count: i64, separator: &str) -> io::Result<usize> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_range(&mut out, start, count, separator)
    }

    /// Serialize the topic (identity, schema flags, all messages) as JSON.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        let export = TopicExport {
            name: &self.name,
            path: self.path.display().to_string(),
            field_labels: self.schema.field_labels(),
            has_header: self.schema.has_header(),
            fault_topic: self.is_fault_topic,
            messages: &self.messages,
        };
        if pretty {
            serde_json::to_string_pretty(&export)
        } else {
            serde_json::to_string(&export)
        }
    }
}

/// Decode data rows until the file ends or a row carries more tokens than
/// the schema has columns. Short rows are padded with empty tokens; rows
/// decoded before a bad row are kept, and the error that stopped ingestion
/// is returned alongside them.
fn ingest_rows(
    lines: impl Iterator<Item = io::Result<String>>,
    schema: &TopicSchema,
    delimiter: char,
    path: &Path,
) -> (Vec<Message>, ColumnWidths, Option<LogError>) {
    let mut messages = Vec::new();
    let mut widths = ColumnWidths::default();

    for (number, line) in lines.enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => return (messages, widths, Some(e.into())),
        };

        let mut tokens = tokenize(&line, delimiter);
        if tokens.len() > schema.width() {
            let error = LogError::row_format(path, number + 1, tokens.len(), schema.width());
            return (messages, widths, Some(error));
        }
        // Tolerate rows with missing trailing fields.
        tokens.resize(schema.width(), String::new());

        let (message, row) = Message::decode(&tokens, schema);
        widths = widths.combine(&row);
        messages.push(message);
    }

    (messages, widths, None)
}
