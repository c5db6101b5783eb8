// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Topic schema inference from CSV header labels.
//!
//! A topic export's header line carries conventional column names:
//! - `%time` backs the per-message timestamp
//! - `<prefix>header.seq`, `<prefix>header.stamp`, `<prefix>header.frame_id`
//!   form the embedded header sub-record
//! - any other `<prefix>`-marked column is a named data field
//!
//! Inference resolves every raw label into a [`ColumnRole`] exactly once;
//! decoding and printing work from the resolved roles instead of
//! re-comparing label strings.

/// Header sub-record column suffix for the sequence id.
pub const HEADER_SEQ_SUFFIX: &str = "header.seq";
/// Header sub-record column suffix for the timestamp.
pub const HEADER_STAMP_SUFFIX: &str = "header.stamp";
/// Header sub-record column suffix for the frame id.
pub const HEADER_FRAME_ID_SUFFIX: &str = "header.frame_id";

/// Naming conventions of a CSV topic export.
///
/// The defaults match the `rostopic echo -p` export used by the ALFA
/// sensor/fault dataset sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct Conventions {
    /// Field delimiter of the export
    pub delimiter: char,
    /// Prefix marking dataset-specific columns (stripped from field labels)
    pub field_prefix: String,
    /// Literal label of the time column
    pub time_label: String,
    /// Topic-name prefix marking fault event streams
    pub fault_prefix: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            field_prefix: "field.".to_string(),
            time_label: "%time".to_string(),
            fault_prefix: "failure_status".to_string(),
        }
    }
}

/// Role of one header column, resolved during schema inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRole {
    /// The time column backing each message's timestamp
    Time,
    /// Header sub-record sequence id
    HeaderSeq,
    /// Header sub-record timestamp
    HeaderStamp,
    /// Header sub-record frame id
    HeaderFrameId,
    /// Named data field (conventional prefix already stripped)
    Field(String),
}

/// Inferred schema of one topic.
///
/// Holds one [`ColumnRole`] per raw header column plus the derived field
/// labels. The number of field labels equals the number of `Field` roles,
/// and every decoded message carries exactly that many field values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TopicSchema {
    columns: Vec<ColumnRole>,
    field_labels: Vec<String>,
    has_header: bool,
}

impl TopicSchema {
    /// Resolve raw header labels into column roles.
    ///
    /// Inference is a pure function of the labels and conventions: running
    /// it twice on the same input yields the same schema.
    pub fn infer(raw_labels: &[String], conventions: &Conventions) -> Self {
        let seq_label = format!("{}{}", conventions.field_prefix, HEADER_SEQ_SUFFIX);
        let stamp_label = format!("{}{}", conventions.field_prefix, HEADER_STAMP_SUFFIX);
        let frame_label = format!("{}{}", conventions.field_prefix, HEADER_FRAME_ID_SUFFIX);

        let mut columns = Vec::with_capacity(raw_labels.len());
        let mut field_labels = Vec::new();
        let mut has_header = false;

        for raw in raw_labels {
            let role = if *raw == conventions.time_label {
                ColumnRole::Time
            } else if *raw == seq_label {
                has_header = true;
                ColumnRole::HeaderSeq
            } else if *raw == stamp_label {
                has_header = true;
                ColumnRole::HeaderStamp
            } else if *raw == frame_label {
                has_header = true;
                ColumnRole::HeaderFrameId
            } else {
                let label = raw
                    .strip_prefix(&conventions.field_prefix)
                    .unwrap_or(raw)
                    .to_string();
                field_labels.push(label.clone());
                ColumnRole::Field(label)
            };
            columns.push(role);
        }

        Self {
            columns,
            field_labels,
            has_header,
        }
    }

    /// Column roles in header order, one per raw column.
    pub fn columns(&self) -> &[ColumnRole] {
        &self.columns
    }

    /// Field labels in header order, conventional prefix stripped.
    pub fn field_labels(&self) -> &[String] {
        &self.field_labels
    }

    /// Number of named data fields.
    pub fn field_count(&self) -> usize {
        self.field_labels.len()
    }

    /// Number of raw columns (schema width for row padding).
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// True if the topic embeds the header sub-record.
    pub fn has_header(&self) -> bool {
        self.has_header
    }
}
