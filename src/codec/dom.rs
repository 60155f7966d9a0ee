//! Minimal owned XML element tree on top of quick-xml.
//!
//! Both codecs build an [`Element`] tree and then write it, or parse input
//! into one and then walk it. Parsing and walking are plain structural
//! recursion over owned data.

use std::borrow::Cow;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Error, Result};

/// A child of an [`Element`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum XmlNode {
    Element(Element),
    Text(String),
}

/// An XML element with attributes in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl Element {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    /// Builder-style text child.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(XmlNode::Text(text));
        }
        self
    }

    /// Builder-style element child.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    pub fn push(&mut self, child: Self) {
        self.children.push(XmlNode::Element(child));
    }

    /// Value of attribute `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated text children.
    #[must_use]
    pub fn text_content(&self) -> Cow<'_, str> {
        let mut texts = self.children.iter().filter_map(|child| match child {
            XmlNode::Text(text) => Some(text.as_str()),
            XmlNode::Element(_) => None,
        });
        let Some(first) = texts.next() else {
            return Cow::Borrowed("");
        };
        match texts.next() {
            None => Cow::Borrowed(first),
            Some(second) => {
                let mut joined = format!("{first}{second}");
                joined.extend(texts);
                Cow::Owned(joined)
            }
        }
    }

    /// Element children.
    pub fn elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(|child| match child {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// Element children named `name`.
    pub fn elements_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> {
        self.elements().filter(move |element| element.name == name)
    }

    /// Fail unless this element is named `expected`.
    pub fn expect_name(&self, expected: &'static str) -> Result<&Self> {
        if self.name == expected {
            Ok(self)
        } else {
            Err(Error::UnexpectedElement {
                expected,
                found: self.name.clone(),
            })
        }
    }

    fn write_to(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attrs {
            start.push_attribute((key.as_str(), value.as_str()));
        }
        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }
        writer.write_event(Event::Start(start))?;
        for child in &self.children {
            match child {
                XmlNode::Element(element) => element.write_to(writer)?,
                XmlNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            }
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }

    /// Serialize, optionally with an XML declaration.
    pub fn to_xml(&self, declaration: bool) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        if declaration {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }
        self.write_to(&mut writer)?;
        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }
}

fn start_element(start: &BytesStart<'_>) -> Result<Element> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        element.attrs.push((key, value));
    }
    Ok(element)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.push(element);
        Ok(())
    } else if root.is_none() {
        *root = Some(element);
        Ok(())
    } else {
        Err(Error::UnexpectedElement {
            expected: "end of document",
            found: element.name,
        })
    }
}

/// Parse `xml` into its root element.
pub fn parse(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root = None;
    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(start_element(&start)?),
            Event::Empty(start) => {
                let element = start_element(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut root, element)?;
                }
            }
            Event::Text(text) => {
                if let Some(parent) = stack.last_mut() {
                    let text = text.unescape()?;
                    if !text.is_empty() {
                        parent.children.push(XmlNode::Text(text.into_owned()));
                    }
                }
            }
            Event::CData(data) => {
                if let Some(parent) = stack.last_mut() {
                    parent
                        .children
                        .push(XmlNode::Text(String::from_utf8_lossy(&data).into_owned()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    if let Some(open) = stack.pop() {
        return Err(Error::UnexpectedElement {
            expected: "closing tag",
            found: open.name,
        });
    }
    root.ok_or(Error::UnexpectedElement {
        expected: "root element",
        found: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested() {
        let root = parse(r#"<?xml version="1.0"?><a x="1"><b>hi &amp; bye</b><c/></a>"#).unwrap();
        assert_eq!(root.name, "a");
        assert_eq!(root.get("x"), Some("1"));
        let names: Vec<&str> = root.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
        let b = root.elements_named("b").next().unwrap();
        assert_eq!(b.text_content(), "hi & bye");
    }

    #[test]
    fn test_write_escapes() {
        let element = Element::new("rich_text")
            .attr("link", "webs a?b=1&c=\"2\"")
            .text("<tag> & text");
        let xml = element.to_xml(false).unwrap();
        let back = parse(&xml).unwrap();
        assert_eq!(back, element);
    }

    #[test]
    fn test_empty_element_written_self_closing() {
        let xml = Element::new("cell").to_xml(false).unwrap();
        assert_eq!(xml, "<cell/>");
        let xml = Element::new("bookmarks").attr("list", "1,2").to_xml(true).unwrap();
        assert!(xml.starts_with("<?xml"));
    }

    #[test]
    fn test_malformed_input() {
        assert!(parse("<a><b></a>").is_err());
        assert!(parse("").is_err());
        assert!(parse("<a>").is_err());
        assert!(parse("<a/><b/>").is_err());
    }

    #[test]
    fn test_expect_name() {
        let element = Element::new("table");
        assert!(element.expect_name("table").is_ok());
        assert!(matches!(
            element.expect_name("codebox"),
            Err(Error::UnexpectedElement { expected: "codebox", .. })
        ));
    }
}
