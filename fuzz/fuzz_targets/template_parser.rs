//! Fuzz target for template parsing and index resolution.
//!
//! Parsing must never panic, must be lossless, and resolved indices must
//! stay within the supplied value count.

#![no_main]

use arbitrary::Arbitrary;
use intl_format_core::{Token, parse, resolve};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzTemplate {
    template: String,
    available: u8,
}

fuzz_target!(|data: FuzzTemplate| {
    let tokens = parse(&data.template);

    // Rebuilding from tokens yields the input (escapes become "%%").
    let mut rebuilt = String::new();
    for token in &tokens {
        match token {
            Token::Literal(text) => rebuilt.push_str(&text.replace('%', "%%")),
            Token::Placeholder(placeholder) => rebuilt.push_str(&placeholder.raw),
        }
    }
    assert_eq!(parse(&rebuilt), tokens);

    let available = usize::from(data.available);
    if let Ok(resolution) = resolve(&tokens, available) {
        assert!(resolution.indices.iter().all(|i| (1..=available).contains(i)));
        assert!(resolution.max_referenced <= available);
    }
});
