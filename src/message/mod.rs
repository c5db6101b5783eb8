// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Typed message records decoded from CSV rows.
//!
//! A [`Message`] is one decoded data row: the timestamp from the `%time`
//! column, the conventional header sub-record when the topic carries one,
//! and the named field values in schema order. Decoding also reports the
//! rendered width of every sub-field so the owning topic can track
//! per-column display widths incrementally.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::FieldValue;
use crate::schema::{ColumnRole, TopicSchema};
use crate::topic::widths::{ColumnWidths, RowWidths};

/// Conventional per-row header sub-record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessageHeader {
    /// Sequence id of the message
    pub seq: u64,
    /// Timestamp in nanoseconds since the Unix epoch
    pub stamp: i64,
    /// Coordinate frame id
    pub frame_id: String,
}

/// One decoded row of a topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Message {
    /// Timestamp from the `%time` column, nanoseconds since the Unix epoch
    pub time: Option<i64>,
    /// Header sub-record, present when the topic embeds one
    pub header: Option<MessageHeader>,
    /// Named field values in schema order
    pub fields: Vec<FieldValue>,
}

impl Message {
    /// Decode one row of raw tokens against the inferred schema.
    ///
    /// Tokens are matched to columns by position; the caller pads short
    /// rows to schema width beforehand, and any missing trailing token
    /// decodes as an empty value. Returns the message together with the
    /// rendered width of each of its sub-fields.
    pub fn decode(tokens: &[String], schema: &TopicSchema) -> (Self, RowWidths) {
        let mut message = Message::default();
        let mut widths = RowWidths::default();

        for (index, role) in schema.columns().iter().enumerate() {
            let token = tokens.get(index).map(String::as_str).unwrap_or("");
            match role {
                ColumnRole::Time => {
                    message.time = token.parse::<i64>().ok();
                }
                ColumnRole::HeaderSeq => {
                    let header = message.header.get_or_insert_with(MessageHeader::default);
                    header.seq = token.parse().unwrap_or(0);
                }
                ColumnRole::HeaderStamp => {
                    let header = message.header.get_or_insert_with(MessageHeader::default);
                    header.stamp = token.parse().unwrap_or(0);
                }
                ColumnRole::HeaderFrameId => {
                    let header = message.header.get_or_insert_with(MessageHeader::default);
                    header.frame_id = token.to_string();
                }
                ColumnRole::Field(_) => {
                    let value = FieldValue::parse(token);
                    widths.fields.push(value.width());
                    message.fields.push(value);
                }
            }
        }

        if let Some(header) = &message.header {
            widths.seq_id = header.seq.to_string().len();
            widths.stamp = header.stamp.to_string().len();
            widths.frame_id = header.frame_id.len();
        }

        (message, widths)
    }

    /// Render the timestamp as a `YYYY/MM/DD HH:MM:SS.ffffff` UTC string.
    ///
    /// Messages without a time column render as `N/A`.
    pub fn datetime(&self) -> String {
        let datetime = self.time.and_then(|nanos| {
            DateTime::<Utc>::from_timestamp(
                nanos.div_euclid(1_000_000_000),
                nanos.rem_euclid(1_000_000_000) as u32,
            )
        });
        match datetime {
            Some(dt) => dt.format("%Y/%m/%d %H:%M:%S%.6f").to_string(),
            None => "N/A".to_string(),
        }
    }

    /// Render the message as one report row: datetime, header sub-record
    /// fields when `with_header` is set, then every data field, each
    /// right-justified to its tracked width and preceded by `separator`.
    ///
    /// The leading index column and outer separators are the topic's
    /// concern; this renders only the message's own columns.
    pub fn render(&self, widths: &ColumnWidths, with_header: bool, separator: &str) -> String {
        use std::fmt::Write as _;

        let mut out = self.datetime();
        if with_header {
            let default = MessageHeader::default();
            let header = self.header.as_ref().unwrap_or(&default);
            let _ = write!(
                out,
                "{separator}{seq:>seq_width$}{separator}{stamp:>stamp_width$}{separator}{frame:>frame_width$}",
                seq = header.seq,
                seq_width = widths.seq_id,
                stamp = header.stamp,
                stamp_width = widths.stamp,
                frame = header.frame_id,
                frame_width = widths.frame_id,
            );
        }
        for (index, field) in self.fields.iter().enumerate() {
            let width = widths.field(index);
            let rendered = field.render();
            let _ = write!(out, "{separator}{rendered:>width$}");
        }
        out
    }
}
