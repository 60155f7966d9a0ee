//! Rich-text attribute sets.
//!
//! Every styled span carries an [`AttributeSet`]: a fixed slot per
//! [`AttrKey`], each either unset or holding one string value. Values are
//! kept as strings because that is how they travel through both codecs;
//! typed views ([`Justification`], [`Scale`], [`LinkTarget`]) parse on
//! demand.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};

/// Attribute keys, in canonical serialization order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttrKey {
    /// `heavy` for bold.
    Weight,
    /// Foreground color, `#rrggbb` or `#rrrrggggbbbb`.
    Foreground,
    /// Background color.
    Background,
    /// `italic`.
    Style,
    /// `single`, `double`, `error`.
    Underline,
    /// `true`.
    Strikethrough,
    /// See [`Scale`].
    Scale,
    /// `monospace`.
    Family,
    /// See [`Justification`].
    Justification,
    /// See [`LinkTarget`].
    Link,
}

impl AttrKey {
    pub const COUNT: usize = 10;
    pub const ALL: [Self; Self::COUNT] = [
        Self::Weight,
        Self::Foreground,
        Self::Background,
        Self::Style,
        Self::Underline,
        Self::Strikethrough,
        Self::Scale,
        Self::Family,
        Self::Justification,
        Self::Link,
    ];

    /// Attribute name used in the XML format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Foreground => "foreground",
            Self::Background => "background",
            Self::Style => "style",
            Self::Underline => "underline",
            Self::Strikethrough => "strikethrough",
            Self::Scale => "scale",
            Self::Family => "family",
            Self::Justification => "justification",
            Self::Link => "link",
        }
    }

    /// Look up a key by its XML attribute name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

impl fmt::Display for AttrKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The attributes of one styled span.
///
/// An empty string value is the same as unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AttributeSet {
    values: [Option<String>; AttrKey::COUNT],
}

impl AttributeSet {
    /// Create an empty attribute set (plain text).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, key: AttrKey, value: impl Into<String>) -> Self {
        self.set(key, Some(value.into()));
        self
    }

    /// Get the value of `key`.
    #[must_use]
    pub fn get(&self, key: AttrKey) -> Option<&str> {
        self.values[key as usize].as_deref()
    }

    /// Set or clear `key`. `Some("")` clears.
    pub fn set(&mut self, key: AttrKey, value: Option<String>) {
        self.values[key as usize] = value.filter(|v| !v.is_empty());
    }

    /// Clear `key`.
    pub fn remove(&mut self, key: AttrKey) {
        self.values[key as usize] = None;
    }

    /// Check whether no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Iterate set attributes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (AttrKey, &str)> {
        AttrKey::ALL
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key, value)))
    }

    /// Justification of the span, left when unset or unrecognized.
    #[must_use]
    pub fn justification(&self) -> Justification {
        self.get(AttrKey::Justification)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

/// Paragraph or object justification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Justification {
    #[default]
    Left,
    Center,
    Right,
    Fill,
}

impl Justification {
    /// Attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Fill => "fill",
        }
    }
}

impl FromStr for Justification {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            "fill" => Ok(Self::Fill),
            other => Err(Error::InvalidAttribute {
                key: AttrKey::Justification.name().to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text scale values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scale {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Small,
    Sup,
    Sub,
}

impl Scale {
    /// Attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Small => "small",
            Self::Sup => "sup",
            Self::Sub => "sub",
        }
    }
}

impl FromStr for Scale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "h1" => Self::H1,
            "h2" => Self::H2,
            "h3" => Self::H3,
            "h4" => Self::H4,
            "h5" => Self::H5,
            "h6" => Self::H6,
            "small" => Self::Small,
            "sup" => Self::Sup,
            "sub" => Self::Sub,
            other => {
                return Err(Error::InvalidAttribute {
                    key: AttrKey::Scale.name().to_string(),
                    value: other.to_string(),
                });
            }
        })
    }
}

/// Target of a `link` attribute.
///
/// Encoded as `webs <url>`, `file <base64 path>`, `fold <base64 path>` or
/// `node <id>[ <anchor>]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    Web(String),
    File(String),
    Folder(String),
    Node { id: u64, anchor: Option<String> },
}

impl LinkTarget {
    /// Encode as an attribute value.
    #[must_use]
    pub fn to_attribute(&self) -> String {
        match self {
            Self::Web(url) => format!("webs {url}"),
            Self::File(path) => format!("file {}", STANDARD.encode(path)),
            Self::Folder(path) => format!("fold {}", STANDARD.encode(path)),
            Self::Node { id, anchor: None } => format!("node {id}"),
            Self::Node {
                id,
                anchor: Some(anchor),
            } => format!("node {id} {anchor}"),
        }
    }

    fn invalid(value: &str) -> Error {
        Error::InvalidAttribute {
            key: AttrKey::Link.name().to_string(),
            value: value.to_string(),
        }
    }

    fn decode_path(value: &str, encoded: &str) -> Result<String> {
        let bytes = STANDARD.decode(encoded)?;
        String::from_utf8(bytes).map_err(|_| Self::invalid(value))
    }
}

impl FromStr for LinkTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, rest) = s.split_once(' ').ok_or_else(|| Self::invalid(s))?;
        match kind {
            "webs" => Ok(Self::Web(rest.to_string())),
            "file" => Ok(Self::File(Self::decode_path(s, rest)?)),
            "fold" => Ok(Self::Folder(Self::decode_path(s, rest)?)),
            "node" => {
                let (id, anchor) = match rest.split_once(' ') {
                    Some((id, anchor)) => (id, Some(anchor.to_string())),
                    None => (rest, None),
                };
                let id = id.parse().map_err(|_| Self::invalid(s))?;
                Ok(Self::Node { id, anchor })
            }
            _ => Err(Self::invalid(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_round_trip() {
        for key in AttrKey::ALL {
            assert_eq!(AttrKey::from_name(key.name()), Some(key));
        }
        assert_eq!(AttrKey::from_name("colour"), None);
    }

    #[test]
    fn test_empty_value_clears() {
        let mut attrs = AttributeSet::new().with(AttrKey::Weight, "heavy");
        assert_eq!(attrs.get(AttrKey::Weight), Some("heavy"));
        attrs.set(AttrKey::Weight, Some(String::new()));
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_iter_is_canonical_order() {
        let attrs = AttributeSet::new()
            .with(AttrKey::Link, "webs https://example.com")
            .with(AttrKey::Weight, "heavy");
        let keys: Vec<AttrKey> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![AttrKey::Weight, AttrKey::Link]);
    }

    #[test]
    fn test_justification_parse() {
        assert_eq!("center".parse::<Justification>().unwrap(), Justification::Center);
        assert!("middle".parse::<Justification>().is_err());
        let attrs = AttributeSet::new().with(AttrKey::Justification, "bogus");
        assert_eq!(attrs.justification(), Justification::Left);
    }

    #[test]
    fn test_scale_parse() {
        assert_eq!("h3".parse::<Scale>().unwrap(), Scale::H3);
        assert_eq!(Scale::Sup.as_str(), "sup");
        assert!("h7".parse::<Scale>().is_err());
    }

    #[test]
    fn test_link_targets() {
        let web: LinkTarget = "webs https://example.com/a b".parse().unwrap();
        assert_eq!(web, LinkTarget::Web("https://example.com/a b".to_string()));

        let file = LinkTarget::File("/tmp/notes.txt".to_string());
        let encoded = file.to_attribute();
        assert!(encoded.starts_with("file "));
        assert_eq!(encoded.parse::<LinkTarget>().unwrap(), file);

        let node: LinkTarget = "node 12 my anchor".parse().unwrap();
        assert_eq!(
            node,
            LinkTarget::Node {
                id: 12,
                anchor: Some("my anchor".to_string())
            }
        );
        assert_eq!(node.to_attribute(), "node 12 my anchor");
        assert_eq!(
            "node 7".parse::<LinkTarget>().unwrap(),
            LinkTarget::Node { id: 7, anchor: None }
        );
        assert!("node x".parse::<LinkTarget>().is_err());
        assert!("ftp x".parse::<LinkTarget>().is_err());
    }
}
