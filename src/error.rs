//! Error types for notetree.

use std::fmt;
use std::io;

use crate::model::NodeId;

/// Result type alias for notetree operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for notetree operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from an XML writer.
    Io(io::Error),
    /// XML that does not parse.
    Xml(quick_xml::Error),
    /// Malformed XML attribute (bad quoting, bad escape).
    XmlAttribute(String),
    /// Binary payload that is not valid base64.
    Base64(base64::DecodeError),
    /// Element name outside the expected vocabulary.
    UnexpectedElement { expected: &'static str, found: String },
    /// Offset beyond the end of a content buffer.
    InvalidOffset { offset: usize, len: usize },
    /// Attribute value that does not parse into its typed form.
    InvalidAttribute { key: String, value: String },
    /// Table row whose cell count differs from the header.
    RaggedTable {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Inserted text contains the object placeholder character.
    ReservedCharacter { offset: usize },
    /// Node id not present in the document.
    UnknownNode(NodeId),
    /// Move that would place a node inside its own subtree.
    InvalidMove { node: NodeId, parent: NodeId },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Xml(e) => write!(f, "malformed XML: {e}"),
            Self::XmlAttribute(e) => write!(f, "malformed XML attribute: {e}"),
            Self::Base64(e) => write!(f, "invalid base64 payload: {e}"),
            Self::UnexpectedElement { expected, found } => {
                write!(f, "expected <{expected}> element, found <{found}>")
            }
            Self::InvalidOffset { offset, len } => {
                write!(f, "offset {offset} out of bounds for buffer of length {len}")
            }
            Self::InvalidAttribute { key, value } => {
                write!(f, "invalid value {value:?} for attribute {key}")
            }
            Self::RaggedTable {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "table row {row} has {found} cells, expected {expected}"
                )
            }
            Self::ReservedCharacter { offset } => {
                write!(f, "reserved object placeholder at text offset {offset}")
            }
            Self::UnknownNode(id) => write!(f, "unknown node {id}"),
            Self::InvalidMove { node, parent } => {
                write!(f, "cannot move node {node} under its descendant {parent}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Xml(e) => Some(e),
            Self::Base64(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e)
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        Self::XmlAttribute(e.to_string())
    }
}

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Self::Base64(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidOffset { offset: 12, len: 5 };
        assert!(err.to_string().contains("offset 12"));

        let err = Error::UnexpectedElement {
            expected: "rich_text",
            found: "blob".to_string(),
        };
        assert_eq!(err.to_string(), "expected <rich_text> element, found <blob>");

        let err = Error::RaggedTable {
            row: 1,
            expected: 3,
            found: 2,
        };
        assert!(err.to_string().contains("2 cells"));

        let err = Error::UnknownNode(NodeId(42));
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_base64_error_conversion() {
        use base64::Engine;
        let decoded = base64::engine::general_purpose::STANDARD.decode("!!!");
        let err: Error = decoded.unwrap_err().into();
        assert!(matches!(err, Error::Base64(_)));
    }
}
