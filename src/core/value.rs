// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Field value type system.
//!
//! Provides a typed representation for CSV cells decoded from topic
//! exports. All variants are serde-serializable.

use serde::{Deserialize, Serialize};

/// Typed value decoded from one CSV cell.
///
/// Decoding is by narrowing: an empty token becomes [`FieldValue::Empty`],
/// a token parseable as `i64` becomes [`FieldValue::Integer`], a token
/// parseable as `f64` becomes [`FieldValue::Float`], and everything else
/// stays textual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Signed integer value
    Integer(i64),
    /// Floating-point value
    Float(f64),
    /// Textual value (UTF-8)
    Text(String),
    /// Missing value (padded or blank cell)
    Empty,
}

impl FieldValue {
    /// Decode a raw CSV token into a typed value.
    pub fn parse(token: &str) -> Self {
        if token.is_empty() {
            return FieldValue::Empty;
        }
        if let Ok(n) = token.parse::<i64>() {
            return FieldValue::Integer(n);
        }
        if let Ok(x) = token.parse::<f64>() {
            return FieldValue::Float(x);
        }
        FieldValue::Text(token.to_string())
    }

    /// Render the value for display. `Empty` renders as an empty string.
    pub fn render(&self) -> String {
        match self {
            FieldValue::Integer(n) => n.to_string(),
            FieldValue::Float(x) => x.to_string(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Empty => String::new(),
        }
    }

    /// Minimum display width needed for this value.
    pub fn width(&self) -> usize {
        self.render().len()
    }

    /// Check if this value is missing.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }

    /// Check if this value is numeric (integer or float).
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldValue::Integer(_) | FieldValue::Float(_))
    }

    /// Try to convert this value to f64 (for numeric values only).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(n) => Some(*n as f64),
            FieldValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Try to convert this value to i64 (for integer values only).
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to view this value as text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}
