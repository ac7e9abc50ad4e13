//! Fuzz target for the special phrase parser.
//!
//! Tests that parsing arbitrary text never panics and that every reported
//! phrase lies inside the buffer and starts with a registered trigger.

#![no_main]

use libfuzzer_sys::fuzz_target;
use richrun::PhraseParser;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut parser = PhraseParser::with_triggers(['#', '@']);
    let Ok(phrases) = parser.parse(text) else {
        return;
    };

    let points: Vec<char> = text.chars().collect();
    for phrase in &phrases {
        let range = phrase.range();
        assert!(range.end <= points.len(), "phrase past end of buffer");
        assert!(parser.is_trigger(points[phrase.position]));
        assert_eq!(&points[phrase.position + 1..range.end], &phrase.content[..]);
    }
});
