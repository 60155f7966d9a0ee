//! Fuzz target for whole-document deserialization.

#![no_main]

use libfuzzer_sys::fuzz_target;
use notetree::codec::{XmlOptions, document_from_xml, document_to_xml};

fuzz_target!(|data: &str| {
    if let Ok(doc) = document_from_xml(data) {
        // Corrupt nodes load empty; the rest must serialize.
        let _ = document_to_xml(&doc, &XmlOptions::default());
    }
});
