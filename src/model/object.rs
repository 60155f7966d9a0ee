//! Embedded objects: images, tables, code boxes and anchors.

use crate::error::{Error, Result};
use crate::model::attrs::Justification;

/// A non-text element occupying one slot of a node's text.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbeddedObject {
    /// Character offset of the object's slot.
    pub offset: usize,
    pub justification: Justification,
    pub kind: ObjectKind,
}

impl EmbeddedObject {
    /// Create an object with left justification.
    #[must_use]
    pub fn new(offset: usize, kind: ObjectKind) -> Self {
        Self {
            offset,
            justification: Justification::Left,
            kind,
        }
    }

    /// Builder-style justification setter.
    #[must_use]
    pub fn with_justification(mut self, justification: Justification) -> Self {
        self.justification = justification;
        self
    }

    /// Text export of the object.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match &self.kind {
            ObjectKind::Table(table) => table.plain_text(),
            ObjectKind::CodeBox(codebox) => codebox.text.clone(),
            ObjectKind::Image(_) | ObjectKind::Anchor(_) => String::new(),
        }
    }
}

/// Kind-specific payload of an [`EmbeddedObject`].
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectKind {
    Image(Image),
    Table(Table),
    CodeBox(CodeBox),
    /// Named jump target.
    Anchor(String),
}

/// Image payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pub source: ImageSource,
    /// Link target opened when the image is activated.
    pub link: Option<String>,
}

impl Image {
    /// A PNG image without link.
    #[must_use]
    pub fn png(data: Vec<u8>) -> Self {
        Self {
            source: ImageSource::Png(data),
            link: None,
        }
    }
}

/// Where the pixels of an [`Image`] come from.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
    /// Raw PNG bytes.
    Png(Vec<u8>),
    /// An embedded file shown as an icon.
    File {
        name: String,
        data: Vec<u8>,
        /// Embedding time, seconds since the epoch.
        time: f64,
    },
}

/// A rectangular matrix of string cells with a header row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub col_min: u32,
    pub col_max: u32,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table, checking that every row matches the header width.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>, col_min: u32, col_max: u32) -> Result<Self> {
        let table = Self {
            col_min,
            col_max,
            header,
            rows,
        };
        table.validate()?;
        Ok(table)
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.header.len()
    }

    /// Check that the matrix is rectangular.
    pub fn validate(&self) -> Result<()> {
        let expected = self.header.len();
        for (row, cells) in self.rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(Error::RaggedTable {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
        }
        Ok(())
    }

    /// Tab-separated text, header first.
    #[must_use]
    pub fn plain_text(&self) -> String {
        std::iter::once(&self.header)
            .chain(&self.rows)
            .map(|cells| cells.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A code box: a framed block of source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeBox {
    pub text: String,
    /// Language tag, `plain-text` when unhighlighted.
    pub syntax: String,
    pub width: u32,
    pub height: u32,
    /// `width` is in pixels rather than percent.
    pub width_in_pixels: bool,
    pub highlight_brackets: bool,
    pub show_line_numbers: bool,
}

impl Default for CodeBox {
    fn default() -> Self {
        Self {
            text: String::new(),
            syntax: "plain-text".to_string(),
            width: 500,
            height: 100,
            width_in_pixels: true,
            highlight_brackets: true,
            show_line_numbers: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_table_rejects_ragged_rows() {
        let err = Table::new(cells(&["a", "b"]), vec![cells(&["1"])], 40, 400).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedTable {
                row: 0,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_table_plain_text() {
        let table = Table::new(
            cells(&["h1", "h2"]),
            vec![cells(&["a", ""]), cells(&["c", "d"])],
            40,
            400,
        )
        .unwrap();
        assert_eq!(table.columns(), 2);
        assert_eq!(table.plain_text(), "h1\th2\na\t\nc\td");
    }

    #[test]
    fn test_object_plain_text() {
        let code = EmbeddedObject::new(
            0,
            ObjectKind::CodeBox(CodeBox {
                text: "fn main() {}".to_string(),
                ..CodeBox::default()
            }),
        );
        assert_eq!(code.plain_text(), "fn main() {}");
        let anchor = EmbeddedObject::new(3, ObjectKind::Anchor("top".to_string()))
            .with_justification(Justification::Center);
        assert_eq!(anchor.plain_text(), "");
        assert_eq!(anchor.justification, Justification::Center);
    }
}
