//! Fuzz target for node content deserialization.
//!
//! Arbitrary input must yield a buffer or an error, never a panic. Anything
//! that loads must serialize and load again to the same buffer.

#![no_main]

use libfuzzer_sys::fuzz_target;
use notetree::codec::{XmlOptions, content_from_xml, content_to_xml};
use notetree::model::NodeKind;

fuzz_target!(|data: &str| {
    for kind in [NodeKind::RichText, NodeKind::PlainText] {
        let Ok(buffer) = content_from_xml(data, &kind) else {
            continue;
        };
        let xml = content_to_xml(&buffer, &kind, &XmlOptions::default())
            .expect("loaded content serializes");
        let again = content_from_xml(&xml, &kind).expect("own output loads");
        assert_eq!(again, buffer);
    }
});
