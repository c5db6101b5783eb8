// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Robolog
//!
//! Robotics time-series log library for per-topic CSV exports.
//!
//! This library loads the `rostopic echo -p`-style CSV files exported
//! from robotic sensor/fault dataset sequences and exposes each one as an
//! in-memory, queryable, printable sequence of typed messages:
//! - **Topic** store in the [`topic`](crate::topic) module: file loading,
//!   schema inference, per-row decoding, display-width bookkeeping, and
//!   fixed-width report printing
//! - **Schema** inference in [`schema`](crate::schema): naming
//!   conventions, column roles, header sub-record detection
//! - **Message** decoding in [`message`](crate::message): typed records
//!   with optional header sub-record
//! - **Sequences** in [`dataset`](crate::dataset): parallel loading of a
//!   recording's topics
//!
//! ## Example: Loading and Printing a Topic
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use robolog::Topic;
//!
//! let topic = Topic::from_file("failure_status_motor1.csv", "failure_status_motor1")?;
//! println!("{} messages, fault topic: {}", topic.messages().len(), topic.is_fault_topic());
//! topic.print(0, 10, " | ")?;
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{FieldValue, LogError, Result};

// CSV line tokenization
pub mod io;

// Schema inference and naming conventions
pub mod schema;

// Typed message records
pub mod message;

// Topic store
pub mod topic;

// Dataset sequences
pub mod dataset;

pub use dataset::Sequence;
pub use message::{Message, MessageHeader};
pub use schema::{ColumnRole, Conventions, TopicSchema};
pub use topic::widths::{ColumnWidths, RowWidths};
pub use topic::Topic;
