//! `notetree` - hierarchical rich-text notes
//!
//! A document is a tree of nodes, each holding styled text with embedded
//! images, tables, code boxes and anchors. Content round-trips losslessly
//! through an XML codec and a relational row codec, every node keeps a
//! bounded undo/redo history, and a UAX #29 / UAX #14 segmentation engine
//! drives word navigation and wrapping.

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Offsets fit the target widths
#![allow(clippy::cast_sign_loss)] // Intentional offset conversions
#![allow(clippy::cast_possible_wrap)] // Intentional offset conversions
#![allow(clippy::module_name_repetitions)] // Allow history::HistoryOptions etc
#![allow(clippy::struct_excessive_bools)] // Relational rows mirror boolean columns
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::inherent_to_string)] // to_string methods are convenient
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::too_many_lines)] // Rule tables are long by nature

pub mod codec;
pub mod error;
pub mod event;
pub mod history;
pub mod model;
pub mod unicode;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{
    LogLevel, NODE_CORRUPT, clear_event_callback, clear_log_callback, emit_event, emit_log,
    set_event_callback, set_log_callback,
};

// Re-export model types
pub use model::{
    AttrKey, AttributeSet, ContentBuffer, Document, EmbeddedObject, Justification, Node,
    NodeId, NodeKind, ObjectKind,
};

// Re-export codec entry points
pub use codec::{RelationalStore, XmlOptions, content_from_xml, content_to_xml};

// Re-export history types
pub use history::{HistoryOptions, NodeState, Snapshot, StateMachine, VisitHistory};

// Re-export segmentation entry points
pub use unicode::{BoundaryKind, SegmentOptions, WrapOptions, boundaries, wrap_text};
